// Webkeys Key Combo
// An ordered, non-empty sequence of key tokens

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::token::KeyToken;

/// Errors that can occur when building a key combo
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComboError {
    #[error("key combo must contain at least one token")]
    Empty,

    #[error("key combo contains a blank token")]
    BlankToken,

    #[error("key combo contains a token with embedded whitespace")]
    WhitespaceToken,
}

fn invalid_token(raw: &str) -> ComboError {
    if raw.trim().is_empty() {
        ComboError::BlankToken
    } else {
        ComboError::WhitespaceToken
    }
}

/// An ordered set of key tokens pressed together
///
/// Order is preserved exactly as given so that encoded expressions and
/// labels are reproducible. A combo always holds at least one token;
/// the constructors reject empty input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    tokens: Vec<KeyToken>,
}

impl KeyCombo {
    /// Create a combo from an ordered list of raw token names
    ///
    /// # Arguments
    /// * `tokens` - Iterator of token names, normalized on the way in
    ///
    /// # Examples
    /// ```
    /// use webkeys_core::KeyCombo;
    /// let combo = KeyCombo::new(["Ctrl", "s"]).unwrap();
    /// assert_eq!(combo.to_string(), "ctrl+s");
    /// ```
    pub fn new(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Self, ComboError> {
        let mut normalized = Vec::new();
        for raw in tokens {
            let raw = raw.as_ref();
            let token = KeyToken::new(raw).ok_or_else(|| invalid_token(raw))?;
            normalized.push(token);
        }
        if normalized.is_empty() {
            return Err(ComboError::Empty);
        }
        Ok(Self { tokens: normalized })
    }

    /// Parse a combo string like "ctrl+s" into a combo
    ///
    /// Tokens are separated by `+`; blank segments (as in "ctrl++s")
    /// and segments with embedded whitespace are rejected.
    pub fn parse(input: &str) -> Result<Self, ComboError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ComboError::Empty);
        }
        Self::new(trimmed.split('+'))
    }

    /// The tokens of this combo, in input order
    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    /// Number of tokens in this combo
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; combos cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check whether this combo contains a token by its canonical name
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == name)
    }

    /// Return a new combo with one more token appended
    pub fn with_token(&self, raw: &str) -> Result<Self, ComboError> {
        let token = KeyToken::new(raw).ok_or_else(|| invalid_token(raw))?;
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Ok(Self { tokens })
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.tokens.iter().map(KeyToken::as_str).collect();
        write!(f, "{}", parts.join("+"))
    }
}

// Combos persist in host configuration as their combo-string form,
// e.g. save = "ctrl+s". The form reuses '+' as the token separator, so
// a combo holding a literal "+" token has no string form; serializing
// one fails rather than emitting a string parse would reject.
impl Serialize for KeyCombo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.tokens.iter().any(|t| t.as_str().contains('+')) {
            return Err(serde::ser::Error::custom(
                "key combo with a literal '+' token has no combo-string form",
            ));
        }
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KeyCombo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
