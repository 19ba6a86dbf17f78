//! UI Components
//!
//! Presentational primitives and the secret configs widget.

mod collapsible_panel;
mod flash_message;
mod header_icon;
mod icons;
mod key_value_pair;
mod secret_configs_widget;

pub use collapsible_panel::CollapsiblePanel;
pub use flash_message::FlashMessage;
pub use header_icon::HeaderIcon;
pub use icons::{IconButton, IconGroup};
pub use key_value_pair::KeyValuePair;
pub use secret_configs_widget::SecretConfigsWidget;
