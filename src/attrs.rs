// Webkeys Tag Attributes
// Ordered HTML attribute sets carrying an optional hotkey request

use indexmap::IndexMap;

use webkeys_core::{encode, HandlerAction, KeyCombo};

use crate::escape::html_escape;

/// A pending hotkey request attached to an attribute set
#[derive(Debug, Clone, PartialEq, Eq)]
struct HotkeyRequest {
    combo: KeyCombo,
    action: HandlerAction,
}

/// An ordered set of HTML attributes plus the nested data-* namespace
///
/// Both maps keep insertion order so the rendered markup is
/// deterministic. A hotkey request rides along untouched until
/// [`apply_hotkey`] resolves it into data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAttrs {
    attrs: IndexMap<String, String>,
    data: IndexMap<String, String>,
    hotkey: Option<HotkeyRequest>,
}

impl TagAttrs {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the class attribute
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Set the id attribute
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Set an entry in the data namespace
    ///
    /// Keys render with underscores dashed, so `turbo_frame` becomes
    /// `data-turbo-frame`.
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Attach a hotkey request firing the default click action
    pub fn with_hotkey(self, combo: KeyCombo) -> Self {
        self.with_hotkey_action(combo, HandlerAction::default())
    }

    /// Attach a hotkey request firing a specific controller action
    pub fn with_hotkey_action(mut self, combo: KeyCombo, action: HandlerAction) -> Self {
        self.hotkey = Some(HotkeyRequest { combo, action });
        self
    }

    /// Look up a plain attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Look up an entry in the data namespace
    pub fn data(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    /// The pending hotkey request, if any
    pub fn hotkey_request(&self) -> Option<(&KeyCombo, HandlerAction)> {
        self.hotkey.as_ref().map(|r| (&r.combo, r.action))
    }

    /// Render the attributes as ` name="value"` pairs
    ///
    /// Plain attributes come first in insertion order, then the data
    /// namespace as `data-*` entries. Values are HTML-escaped. An
    /// unresolved hotkey request does not render; route the set through
    /// [`apply_hotkey`] first.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.attrs {
            push_attr(&mut out, name, value);
        }
        for (name, value) in &self.data {
            let dashed = format!("data-{}", name.replace('_', "-"));
            push_attr(&mut out, &dashed, value);
        }
        out
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape(value));
    out.push('"');
}

/// Resolve the hotkey request of an attribute set into data attributes
///
/// Returns a new set in which the request is cleared and the encoded
/// controller/action pair is merged into the data namespace. Existing
/// unrelated keys keep their values and positions; on a key collision
/// the encoded value wins. The input is never modified. Sets without a
/// request come back as an equivalent copy.
pub fn apply_hotkey(attrs: &TagAttrs) -> TagAttrs {
    let Some(request) = attrs.hotkey.as_ref() else {
        return attrs.clone();
    };

    let descriptor = encode(&request.combo, request.action);
    let mut applied = TagAttrs {
        attrs: attrs.attrs.clone(),
        data: attrs.data.clone(),
        hotkey: None,
    };
    for (name, value) in descriptor.data_pairs() {
        applied.data.insert(name.to_string(), value.to_string());
    }
    applied
}
