// Webkeys Install Configuration
// Optional webkeys.toml overrides for the asset destinations

use std::path::{Path, PathBuf};

/// Configuration file name looked up at the host project root
pub const CONFIG_FILE: &str = "webkeys.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// Installer configuration
///
/// Loaded from an optional `webkeys.toml` at the project root:
///
/// ```toml
/// [install]
/// controllers_dir = "frontend/controllers"
/// stylesheets_dir = "frontend/styles"
/// ```
///
/// Directories are relative to the project root; unset values fall back
/// to the installer defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    controllers_dir: Option<PathBuf>,
    stylesheets_dir: Option<PathBuf>,
}

/// TOML representation for deserializing configuration
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ConfigToml {
    #[serde(default)]
    install: Option<InstallSection>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct InstallSection {
    #[serde(default)]
    controllers_dir: Option<PathBuf>,

    #[serde(default)]
    stylesheets_dir: Option<PathBuf>,
}

impl Config {
    /// Create a configuration with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        let install = parsed.install.unwrap_or_default();
        Ok(Self {
            controllers_dir: install.controllers_dir,
            stylesheets_dir: install.stylesheets_dir,
        })
    }

    /// Load webkeys.toml from a project root, or defaults when absent
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            log::debug!("loading {}", path.display());
            return Self::from_file(path);
        }
        Ok(Self::new())
    }

    /// Configured controller script directory, if any
    pub fn controllers_dir(&self) -> Option<&Path> {
        self.controllers_dir.as_deref()
    }

    /// Configured stylesheet directory, if any
    pub fn stylesheets_dir(&self) -> Option<&Path> {
        self.stylesheets_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_has_no_overrides() {
        let config = Config::new();
        assert_eq!(config.controllers_dir(), None);
        assert_eq!(config.stylesheets_dir(), None);
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
[install]
controllers_dir = "frontend/controllers"
stylesheets_dir = "frontend/styles"
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(
            config.controllers_dir(),
            Some(Path::new("frontend/controllers"))
        );
        assert_eq!(config.stylesheets_dir(), Some(Path::new("frontend/styles")));
    }

    #[test]
    fn test_config_partial_section() {
        let toml = r#"
[install]
controllers_dir = "frontend/controllers"
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(
            config.controllers_dir(),
            Some(Path::new("frontend/controllers"))
        );
        assert_eq!(config.stylesheets_dir(), None);
    }

    #[test]
    fn test_config_empty_file() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.controllers_dir(), None);
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = Config::from_toml("[install\ncontrollers_dir = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.controllers_dir(), None);
    }

    #[test]
    fn test_load_from_reads_project_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[install]\ncontrollers_dir = \"js/controllers\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.controllers_dir(), Some(Path::new("js/controllers")));
    }
}
