// Webkeys Markup Helpers
// Anchor and button builders that splice hotkey bindings into their markup

use crate::attrs::{apply_hotkey, TagAttrs};
use crate::escape::html_escape;

/// Render an `<a>` element
///
/// A hotkey request on `attrs` resolves into `data-controller` and
/// `data-action` attributes on the anchor; every other attribute passes
/// through untouched.
///
/// # Examples
/// ```
/// use webkeys::{anchor_tag, KeyCombo, TagAttrs};
/// let attrs = TagAttrs::new().with_hotkey(KeyCombo::new(["esc"]).unwrap());
/// let html = anchor_tag("Back", "/", &attrs);
/// assert!(html.contains("data-controller=\"hotkey\""));
/// ```
pub fn anchor_tag(text: &str, href: &str, attrs: &TagAttrs) -> String {
    let applied = apply_hotkey(attrs);
    format!(
        "<a href=\"{}\"{}>{}</a>",
        html_escape(href),
        applied.to_html(),
        html_escape(text)
    )
}

/// Render a standalone `<button>` element
///
/// The type attribute defaults to "button" unless `attrs` sets one.
pub fn button_tag(text: &str, attrs: &TagAttrs) -> String {
    let mut applied = apply_hotkey(attrs);
    if applied.attr("type").is_none() {
        applied = applied.with_attr("type", "button");
    }
    format!("<button{}>{}</button>", applied.to_html(), html_escape(text))
}

/// Render a form-wrapped submit button posting to `url`
///
/// The hotkey attributes land on the button itself, not the form
/// wrapper, so the client controller clicks the submit button.
pub fn button_to(text: &str, url: &str, attrs: &TagAttrs) -> String {
    let mut applied = apply_hotkey(attrs);
    if applied.attr("type").is_none() {
        applied = applied.with_attr("type", "submit");
    }
    format!(
        "<form class=\"button_to\" method=\"post\" action=\"{}\"><button{}>{}</button></form>",
        html_escape(url),
        applied.to_html(),
        html_escape(text)
    )
}
