//! Launcher form model.
//!
//! Holds the working copy of the settings a front end edits, addresses
//! fields by their persisted key, and derives which controls are enabled
//! from a declarative binding table.

mod bindings;
mod fields;
mod model;

pub use bindings::{dependents_of, is_enabled, Binding, Condition, BINDINGS};
pub use fields::{FieldKind, SettingField};
pub use model::{ControlState, FormModel, ADVANCED_FIELDS};

use thiserror::Error;

/// Errors from editing form fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown setting: {0}")]
    UnknownField(String),

    #[error("Invalid value '{value}' for {field} (expected {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}
