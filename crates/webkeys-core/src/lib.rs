// Webkeys Core Library
// Key-combo encoding, labels and platform detection for declarative hotkey bindings

pub mod binding;
pub mod combo;
pub mod label;
pub mod platform;
pub mod token;

pub use binding::{encode, BindingDescriptor, HandlerAction, CONTROLLER};
pub use combo::{ComboError, KeyCombo};
pub use label::format_label;
pub use platform::Platform;
pub use token::KeyToken;
