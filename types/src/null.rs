//! Null-object support.
//!
//! Instead of `Option`, nullable domain types carry an explicit "as-null"
//! instance whose state is queried through [`NullEnum`]. The [`Nullable`]
//! trait is the explicit two-phase rendition of the pattern: a type opts in by
//! providing its null instance and exposing its state flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Answers the question "is this the null object?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullEnum {
    Yes,
    No,
}

impl NullEnum {
    #[must_use]
    pub const fn from_bool(is_null: bool) -> Self {
        if is_null { Self::Yes } else { Self::No }
    }

    #[must_use]
    pub const fn yes() -> Self {
        Self::Yes
    }

    #[must_use]
    pub const fn no() -> Self {
        Self::No
    }

    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Yes)
    }

    #[must_use]
    pub const fn is_not_null(self) -> bool {
        matches!(self, Self::No)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        if self.is_null() { "yes" } else { "no" }
    }
}

impl fmt::Display for NullEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Null-object pattern for domain types.
///
/// `or_throw` is the library's substitute for null-coalescing: it converts the
/// null instance into a caller-supplied error and passes real values through
/// unchanged, so absence stays explicit and chainable.
pub trait Nullable: Sized {
    /// The distinguished null instance of this type.
    fn as_null() -> Self;

    /// The null-state flag of this instance.
    fn null_state(&self) -> NullEnum;

    fn is_null(&self) -> bool {
        self.null_state().is_null()
    }

    fn is_not_null(&self) -> bool {
        self.null_state().is_not_null()
    }

    /// Collapse any null instance onto the canonical one.
    #[must_use]
    fn or_null(self) -> Self {
        if self.is_null() { Self::as_null() } else { self }
    }

    /// Convert the null instance into `make_err()`; pass real values through.
    fn or_throw<E>(self, make_err: impl FnOnce() -> E) -> Result<Self, E> {
        if self.is_null() {
            return Err(make_err());
        }
        Ok(self)
    }
}
