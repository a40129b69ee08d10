// Webkeys Key Token
// Normalized symbolic key names: modifiers, named keys, literals

use std::fmt;

/// A single key token in its canonical lowercase form
///
/// Tokens come from a small human-chosen vocabulary: the modifiers
/// "ctrl", "meta", "alt" and "shift", named keys like "enter" and "esc",
/// and literal tokens such as "s" or "k". Unknown names are carried
/// verbatim and fall back to generic rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyToken(String);

impl KeyToken {
    /// Create a token from raw input, trimming whitespace and lowering case
    ///
    /// Returns None for blank input and for names with embedded
    /// whitespace: a space separates the encoded expressions, so a token
    /// can never carry one.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || normalized.contains(char::is_whitespace) {
            return None;
        }
        Some(Self(normalized))
    }

    /// The canonical lowercase form of this token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the four recognized modifier tokens
    pub fn is_modifier(&self) -> bool {
        matches!(self.0.as_str(), "ctrl" | "meta" | "alt" | "shift")
    }

    /// True for the "ctrl" token, which also binds its meta counterpart
    pub fn is_ctrl(&self) -> bool {
        self.0 == "ctrl"
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
