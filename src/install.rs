// Webkeys Asset Installer
// Copies the bundled controller script and stylesheet into a host project

use std::fs;
use std::path::{Path, PathBuf};

// Embedded client-side assets
const CONTROLLER_JS: &str = include_str!("../assets/hotkey_controller.js");
const STYLESHEET_CSS: &str = include_str!("../assets/hotkey.css");

/// File name of the controller script inside the controllers directory
pub const CONTROLLER_FILE: &str = "hotkey_controller.js";
/// File name of the stylesheet inside the stylesheets directory
pub const STYLESHEET_FILE: &str = "hotkey.css";

const DEFAULT_CONTROLLERS_DIR: &str = "app/javascript/controllers";
const DEFAULT_STYLESHEETS_DIR: &str = "app/assets/stylesheets";

/// Errors that can occur while installing or removing assets
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("refusing to overwrite modified file: {}", .0.display())]
    WouldOverwrite(PathBuf),
}

/// Destination layout for the assets, relative to a host project root
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
    controllers_dir: PathBuf,
    stylesheets_dir: PathBuf,
}

impl InstallLayout {
    /// Create a layout with the default asset directories
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            controllers_dir: PathBuf::from(DEFAULT_CONTROLLERS_DIR),
            stylesheets_dir: PathBuf::from(DEFAULT_STYLESHEETS_DIR),
        }
    }

    /// Override the controller script directory (relative to the root)
    pub fn with_controllers_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.controllers_dir = dir.into();
        self
    }

    /// Override the stylesheet directory (relative to the root)
    pub fn with_stylesheets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stylesheets_dir = dir.into();
        self
    }

    /// Full path of the controller script
    pub fn controller_path(&self) -> PathBuf {
        self.root.join(&self.controllers_dir).join(CONTROLLER_FILE)
    }

    /// Full path of the stylesheet
    pub fn stylesheet_path(&self) -> PathBuf {
        self.root.join(&self.stylesheets_dir).join(STYLESHEET_FILE)
    }
}

/// Result of installation
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Files written this run
    pub written: Vec<PathBuf>,
    /// Files left alone because their content already matches
    pub skipped: Vec<PathBuf>,
}

/// Result of uninstallation
#[derive(Debug, Default)]
pub struct UninstallReport {
    /// Files removed
    pub removed: Vec<PathBuf>,
    /// Files kept because their content diverged from the bundled assets
    pub needs_manual: Vec<PathBuf>,
}

/// Install the bundled assets into a host project
///
/// Destination directories are created as needed and each asset is
/// written byte-for-byte. A file whose content already matches counts
/// as skipped; a file with divergent content is an error unless `force`
/// is set.
pub fn install(layout: &InstallLayout, force: bool) -> Result<InstallReport, InstallError> {
    let mut report = InstallReport::default();
    install_file(layout.controller_path(), CONTROLLER_JS, force, &mut report)?;
    install_file(layout.stylesheet_path(), STYLESHEET_CSS, force, &mut report)?;
    Ok(report)
}

fn install_file(
    path: PathBuf,
    content: &str,
    force: bool,
    report: &mut InstallReport,
) -> Result<(), InstallError> {
    if path.exists() {
        let existing = fs::read_to_string(&path)?;
        if existing == content {
            log::debug!("{} already up to date", path.display());
            report.skipped.push(path);
            return Ok(());
        }
        if !force {
            return Err(InstallError::WouldOverwrite(path));
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    log::info!("wrote {}", path.display());
    report.written.push(path);
    Ok(())
}

/// Remove previously installed assets from a host project
///
/// Only files that still match the bundled content are deleted; files
/// the host has edited are reported for manual cleanup instead.
pub fn uninstall(layout: &InstallLayout) -> Result<UninstallReport, InstallError> {
    let mut report = UninstallReport::default();
    remove_file(layout.controller_path(), CONTROLLER_JS, &mut report)?;
    remove_file(layout.stylesheet_path(), STYLESHEET_CSS, &mut report)?;
    Ok(report)
}

fn remove_file(
    path: PathBuf,
    bundled: &str,
    report: &mut UninstallReport,
) -> Result<(), InstallError> {
    if !path.exists() {
        return Ok(());
    }
    let existing = fs::read_to_string(&path)?;
    if existing == bundled {
        fs::remove_file(&path)?;
        log::info!("removed {}", path.display());
        report.removed.push(path);
    } else {
        log::warn!("{} differs from the bundled asset, leaving in place", path.display());
        report.needs_manual.push(path);
    }
    Ok(())
}

/// Check whether both assets are installed and unmodified
pub fn is_installed(layout: &InstallLayout) -> bool {
    matches_bundled(&layout.controller_path(), CONTROLLER_JS)
        && matches_bundled(&layout.stylesheet_path(), STYLESHEET_CSS)
}

fn matches_bundled(path: &Path, bundled: &str) -> bool {
    fs::read_to_string(path)
        .map(|existing| existing == bundled)
        .unwrap_or(false)
}
