// Webkeys Hint Renderer
// <kbd> shortcut hints that hide on touch-only devices

use webkeys_core::{format_label, KeyCombo, Platform};

use crate::escape::html_escape;

/// Class the bundled stylesheet hides when no input can hover
pub const HINT_CLASS: &str = "hide-on-touch";

/// Render a combo as a `<kbd>` hint element
///
/// # Examples
/// ```
/// use webkeys::{hotkey_hint, KeyCombo, Platform};
/// let combo = KeyCombo::new(["ctrl", "s"]).unwrap();
/// assert_eq!(
///     hotkey_hint(&combo, Platform::Mac),
///     "<kbd class=\"hide-on-touch\">⌘S</kbd>"
/// );
/// ```
pub fn hotkey_hint(combo: &KeyCombo, platform: Platform) -> String {
    format!(
        "<kbd class=\"{}\">{}</kbd>",
        HINT_CLASS,
        html_escape(&format_label(combo, platform))
    )
}
