//! Reusable widgets for the TUI
//!
//! Contains the form primitives: a text input with optional masking and a
//! cycle-select field for fixed option lists.

pub mod input;
pub mod select;

// Re-export commonly used widgets
pub use input::TextInput;
pub use select::SelectField;
