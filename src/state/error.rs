//! Typed errors for wizard preconditions

use thiserror::Error;

/// Recoverable wizard errors, reported to the user without corrupting
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Tried to leave field selection with nothing selected
    #[error("select at least one field before continuing")]
    EmptySelection,

    /// A field edit addressed an index outside the current field list
    #[error("field index {index} is out of range (form has {len} fields)")]
    FieldIndexOutOfRange { index: usize, len: usize },

    /// A selected id has no catalog entry. This is a catalog/selection
    /// desynchronization and must surface loudly, never as a silent skip.
    #[error("selected field '{id}' has no catalog entry")]
    UnknownArchetype { id: String },
}
