//! Shared UI components.

mod chat_panel;
mod error_alert;
mod form_inputs;
mod layout;
mod nav;

pub use chat_panel::ChatPanel;
pub use error_alert::ErrorAlert;
pub use form_inputs::{CheckboxField, SelectField, TextField};
pub use layout::Layout;
pub use nav::Sidebar;
