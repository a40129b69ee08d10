// Webkeys Library
// Declarative hotkey bindings, labels and hints for server-rendered HTML

pub mod attrs;
pub mod config;
pub mod escape;
pub mod helpers;
pub mod hint;
pub mod install;

pub use attrs::{apply_hotkey, TagAttrs};
pub use config::{Config, ConfigError};
pub use escape::html_escape;
pub use helpers::{anchor_tag, button_tag, button_to};
pub use hint::{hotkey_hint, HINT_CLASS};
pub use install::{
    install, is_installed, uninstall, InstallError, InstallLayout, InstallReport, UninstallReport,
};

pub use webkeys_core::{
    encode, format_label, BindingDescriptor, ComboError, HandlerAction, KeyCombo, KeyToken,
    Platform, CONTROLLER,
};
