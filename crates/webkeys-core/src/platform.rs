// Webkeys Platform Signal
// Resolves the label convention from a client user-agent string

use std::fmt;

/// Substring that marks a Mac client in user-agent strings
///
/// Matched case-sensitively: real user agents spell "Macintosh" or
/// "Mac OS X" with the capital M.
const MAC_UA_PATTERN: &str = "Mac";

/// Label convention selected for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Symbol-based rendering (⌘, ⌥, ⇧)
    Mac,
    /// "+"-joined text rendering (Ctrl+, Alt+, Shift+)
    #[default]
    Other,
}

impl Platform {
    /// Detect the platform from an optional user-agent string
    ///
    /// A missing or empty user agent resolves to `Other`; detection
    /// never fails.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.contains(MAC_UA_PATTERN) => Platform::Mac,
            _ => Platform::Other,
        }
    }

    /// Convert string to Platform
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mac" | "macos" | "apple" => Some(Platform::Mac),
            "other" | "default" => Some(Platform::Other),
            _ => None,
        }
    }

    /// Convert Platform to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mac => "Mac",
            Platform::Other => "Other",
        }
    }

    /// True when the Mac rendering convention applies
    pub fn is_mac(self) -> bool {
        self == Platform::Mac
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
