// Webkeys Label Formatter
// Platform-aware display labels for key combos

use crate::combo::KeyCombo;
use crate::platform::Platform;
use crate::token::KeyToken;

/// Mac modifier glyphs that absorb a following "+" separator
const MAC_GLYPHS: [char; 3] = ['⌘', '⌥', '⇧'];

/// Format a combo as a human-readable shortcut label
///
/// Each token renders through a fixed table: Mac platforms use the
/// symbol convention (⌘, ⌥, ⇧, "Return"), everything else uses
/// "+"-suffixed names ("Ctrl+", "Shift+", "Enter"). Tokens outside the
/// table render as their uppercase form. Renderings concatenate in
/// input order with no separator; a trailing "+" after a Mac glyph is
/// then dropped.
///
/// # Examples
/// ```
/// use webkeys_core::{format_label, KeyCombo, Platform};
/// let combo = KeyCombo::new(["ctrl", "enter"]).unwrap();
/// assert_eq!(format_label(&combo, Platform::Mac), "⌘Return");
/// assert_eq!(format_label(&combo, Platform::Other), "Ctrl+Enter");
/// ```
pub fn format_label(combo: &KeyCombo, platform: Platform) -> String {
    let mut label = String::new();
    for token in combo.tokens() {
        label.push_str(&token_label(token, platform.is_mac()));
    }
    strip_glyph_separators(&label)
}

/// Render a single token for one platform
fn token_label(token: &KeyToken, mac: bool) -> String {
    let rendered = match (token.as_str(), mac) {
        ("ctrl", true) => "⌘",
        ("ctrl", false) => "Ctrl+",
        ("meta", true) => "⌘",
        ("meta", false) => "Win+",
        ("alt", true) => "⌥",
        ("alt", false) => "Alt+",
        ("shift", true) => "⇧",
        ("shift", false) => "Shift+",
        ("enter", true) => "Return",
        ("enter", false) => "Enter",
        ("esc", _) => "Esc",
        (other, _) => return other.to_uppercase(),
    };
    rendered.to_string()
}

/// Drop any "+" that immediately follows a Mac modifier glyph
///
/// The glyphs never occur in non-Mac renderings, so the pass is safe to
/// run on every platform.
fn strip_glyph_separators(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut after_glyph = false;
    for c in label.chars() {
        if c == '+' && after_glyph {
            after_glyph = false;
            continue;
        }
        after_glyph = MAC_GLYPHS.contains(&c);
        out.push(c);
    }
    out
}
