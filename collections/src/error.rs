//! Collection error taxonomy.
//!
//! Key-shape and precision messages are part of the public contract; tests
//! assert on their exact text.

use crate::key::Key;
use lodestone_types::NumericError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectionError {
    #[error("Collection is empty.")]
    Empty,
    #[error("Key `{0}` not found in collection.")]
    KeyNotFound(Key),
    #[error("Static collections cannot be modified.")]
    ReadOnly,
    #[error("Adding element to collection (list) using string key is not supported.")]
    ListStringKey,
    #[error("Adding element to collection (map) using numeric key is not supported.")]
    MapNumericKey,
    #[error("{message}")]
    InvalidElement { message: String },
    #[error("Precisions must be the same.")]
    PrecisionMismatch,
    #[error("All elements must have the same precision as the collection.")]
    MixedPrecision,
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl CollectionError {
    /// Element-level rule violation with a caller-supplied message.
    #[must_use]
    pub fn invalid_element(message: impl Into<String>) -> Self {
        Self::InvalidElement {
            message: message.into(),
        }
    }
}
