// Webkeys Binding Encoder
// Encodes key combos into declarative event-binding descriptors

use std::fmt;

use smallvec::SmallVec;

use crate::combo::KeyCombo;
use crate::token::KeyToken;

/// Identifier of the client-side controller every binding targets
pub const CONTROLLER: &str = "hotkey";

/// Controller method invoked when a binding fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandlerAction {
    /// Click the bound element (buttons, links)
    #[default]
    Click,
    /// Focus the bound element (search fields)
    Focus,
}

impl HandlerAction {
    /// Convert string to HandlerAction
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "click" => Some(HandlerAction::Click),
            "focus" => Some(HandlerAction::Focus),
            _ => None,
        }
    }

    /// Convert HandlerAction to the method name used in expressions
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerAction::Click => "click",
            HandlerAction::Focus => "focus",
        }
    }
}

impl fmt::Display for HandlerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encoded binding: the controller identifier plus its event expression
///
/// The expression string holds one `keydown.<chord>@document-><controller>#<method>`
/// instance, or two space-separated instances when the combo contains
/// "ctrl" (the second with every "ctrl" replaced by "meta").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDescriptor {
    action: String,
}

impl BindingDescriptor {
    /// The controller identifier bindings are routed to
    pub fn controller(&self) -> &'static str {
        CONTROLLER
    }

    /// The full event-expression string
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Individual event expressions, in emission order
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.action.split(' ')
    }

    /// Attribute pairs for the data namespace, in render order
    pub fn data_pairs(&self) -> [(&'static str, &str); 2] {
        [("controller", CONTROLLER), ("action", self.action())]
    }
}

/// Encode a combo into a binding descriptor
///
/// The chord is the combo's tokens joined with `+` in input order. A
/// combo containing "ctrl" registers twice, so the shortcut works with
/// both the Ctrl and Cmd keys: the ctrl chord comes first, followed by
/// the same chord with every "ctrl" replaced by "meta".
///
/// # Examples
/// ```
/// use webkeys_core::{encode, HandlerAction, KeyCombo};
/// let combo = KeyCombo::new(["ctrl", "s"]).unwrap();
/// let descriptor = encode(&combo, HandlerAction::Click);
/// assert_eq!(
///     descriptor.action(),
///     "keydown.ctrl+s@document->hotkey#click keydown.meta+s@document->hotkey#click"
/// );
/// ```
pub fn encode(combo: &KeyCombo, action: HandlerAction) -> BindingDescriptor {
    let mut expressions: SmallVec<[String; 2]> = SmallVec::new();
    expressions.push(event_expression(&chord(combo.tokens()), action));

    if combo.tokens().iter().any(KeyToken::is_ctrl) {
        let meta_chord: Vec<&str> = combo
            .tokens()
            .iter()
            .map(|t| if t.is_ctrl() { "meta" } else { t.as_str() })
            .collect();
        expressions.push(event_expression(&meta_chord.join("+"), action));
    }

    BindingDescriptor {
        action: expressions.join(" "),
    }
}

/// Join tokens into a chord string
fn chord(tokens: &[KeyToken]) -> String {
    let parts: Vec<&str> = tokens.iter().map(KeyToken::as_str).collect();
    parts.join("+")
}

/// Build one event expression for a chord
fn event_expression(chord: &str, action: HandlerAction) -> String {
    format!(
        "keydown.{}@document->{}#{}",
        chord,
        CONTROLLER,
        action.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_key() {
        let combo = KeyCombo::new(["esc"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        assert_eq!(descriptor.controller(), "hotkey");
        assert_eq!(descriptor.action(), "keydown.esc@document->hotkey#click");
    }

    #[test]
    fn test_encode_literal_key() {
        let combo = KeyCombo::new(["k"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        assert_eq!(descriptor.action(), "keydown.k@document->hotkey#click");
    }

    #[test]
    fn test_encode_modifier_combo() {
        let combo = KeyCombo::new(["shift", "g"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        assert_eq!(
            descriptor.action(),
            "keydown.shift+g@document->hotkey#click"
        );
    }

    #[test]
    fn test_encode_ctrl_binds_both_ctrl_and_meta() {
        let combo = KeyCombo::new(["ctrl", "enter"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        assert_eq!(
            descriptor.action(),
            "keydown.ctrl+enter@document->hotkey#click keydown.meta+enter@document->hotkey#click"
        );
    }

    #[test]
    fn test_encode_ctrl_variant_comes_first() {
        let combo = KeyCombo::new(["ctrl", "s"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        let expressions: Vec<&str> = descriptor.expressions().collect();
        assert_eq!(expressions.len(), 2);
        assert_eq!(expressions[0], "keydown.ctrl+s@document->hotkey#click");
        assert_eq!(expressions[1], "keydown.meta+s@document->hotkey#click");
    }

    #[test]
    fn test_encode_ctrl_in_any_position() {
        let combo = KeyCombo::new(["shift", "ctrl", "p"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        assert_eq!(
            descriptor.action(),
            "keydown.shift+ctrl+p@document->hotkey#click keydown.shift+meta+p@document->hotkey#click"
        );
    }

    #[test]
    fn test_encode_replaces_every_ctrl_occurrence() {
        let combo = KeyCombo::new(["ctrl", "ctrl", "x"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        let expressions: Vec<&str> = descriptor.expressions().collect();
        assert_eq!(expressions[1], "keydown.meta+meta+x@document->hotkey#click");
    }

    #[test]
    fn test_encode_meta_alone_does_not_duplicate() {
        let combo = KeyCombo::new(["meta", "k"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        assert_eq!(descriptor.expressions().count(), 1);
    }

    #[test]
    fn test_encode_focus_action() {
        let combo = KeyCombo::new(["f"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Focus);
        assert_eq!(descriptor.action(), "keydown.f@document->hotkey#focus");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let combo = KeyCombo::new(["ctrl", "shift", "p"]).unwrap();
        let first = encode(&combo, HandlerAction::Click);
        let second = encode(&combo, HandlerAction::Click);
        assert_eq!(first, second);
    }

    #[test]
    fn test_data_pairs_order() {
        let combo = KeyCombo::new(["esc"]).unwrap();
        let descriptor = encode(&combo, HandlerAction::Click);
        let pairs = descriptor.data_pairs();
        assert_eq!(pairs[0], ("controller", "hotkey"));
        assert_eq!(pairs[1].0, "action");
        assert_eq!(pairs[1].1, "keydown.esc@document->hotkey#click");
    }

    #[test]
    fn test_handler_action_from_str() {
        assert_eq!(HandlerAction::from_str("click"), Some(HandlerAction::Click));
        assert_eq!(HandlerAction::from_str("Focus"), Some(HandlerAction::Focus));
        assert_eq!(HandlerAction::from_str("hover"), None);
    }

    #[test]
    fn test_handler_action_as_str() {
        assert_eq!(HandlerAction::Click.as_str(), "click");
        assert_eq!(HandlerAction::Focus.as_str(), "focus");
    }

    #[test]
    fn test_handler_action_default_is_click() {
        assert_eq!(HandlerAction::default(), HandlerAction::Click);
    }

    #[test]
    fn test_handler_action_display() {
        assert_eq!(format!("{}", HandlerAction::Focus), "focus");
    }
}
