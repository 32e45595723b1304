//! Explicit boolean value object.
//!
//! Predicates across the library return [`BoolEnum`] instead of `bool` so that
//! call sites unwrap the answer explicitly (`is_true()` / `is_false()`) rather
//! than relying on implicit truthiness.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error produced by the [`BoolEnum`] guard methods, carrying the caller's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GuardError {
    message: String,
}

impl GuardError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A two-state boolean value object, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolEnum {
    True,
    False,
}

impl BoolEnum {
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    #[must_use]
    pub const fn truthy() -> Self {
        Self::True
    }

    #[must_use]
    pub const fn falsy() -> Self {
        Self::False
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Alias for [`Self::is_true`], reads better on yes/no questions.
    #[must_use]
    pub const fn yes(self) -> bool {
        self.is_true()
    }

    /// Alias for [`Self::is_false`].
    #[must_use]
    pub const fn no(self) -> bool {
        self.is_false()
    }

    #[must_use]
    pub const fn as_bool(self) -> bool {
        self.is_true()
    }

    #[must_use]
    pub const fn as_int(self) -> i64 {
        if self.is_true() { 1 } else { 0 }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        if self.is_true() { "true" } else { "false" }
    }

    #[must_use]
    pub const fn not(self) -> Self {
        Self::from_bool(self.is_false())
    }

    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Self::from_bool(self.is_true() && other.is_true())
    }

    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self::from_bool(self.is_true() || other.is_true())
    }

    /// Fail with `message` when the value is `True`; pass through otherwise.
    pub fn throw_if_true(self, message: impl Into<String>) -> Result<(), GuardError> {
        if self.is_true() {
            return Err(GuardError::new(message));
        }
        Ok(())
    }

    /// Fail with `message` when the value is `False`; pass through otherwise.
    pub fn throw_if_false(self, message: impl Into<String>) -> Result<(), GuardError> {
        if self.is_false() {
            return Err(GuardError::new(message));
        }
        Ok(())
    }
}

impl From<bool> for BoolEnum {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<BoolEnum> for bool {
    fn from(value: BoolEnum) -> Self {
        value.as_bool()
    }
}

impl fmt::Display for BoolEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{BoolEnum, GuardError};

    #[test]
    fn from_bool_truth_table() {
        assert!(BoolEnum::from_bool(true).is_true());
        assert!(BoolEnum::from_bool(false).is_false());
        assert!(!BoolEnum::from_bool(false).is_true());
    }

    #[test]
    fn yes_and_no_mirror_is_true_and_is_false() {
        assert!(BoolEnum::truthy().yes());
        assert!(BoolEnum::falsy().no());
    }

    #[test]
    fn conversions() {
        assert_eq!(BoolEnum::truthy().as_int(), 1);
        assert_eq!(BoolEnum::falsy().as_int(), 0);
        assert_eq!(BoolEnum::truthy().as_str(), "true");
        assert!(bool::from(BoolEnum::truthy()));
        assert_eq!(BoolEnum::from(false), BoolEnum::False);
    }

    #[test]
    fn logical_combinators() {
        assert!(BoolEnum::truthy().and(BoolEnum::truthy()).is_true());
        assert!(BoolEnum::truthy().and(BoolEnum::falsy()).is_false());
        assert!(BoolEnum::falsy().or(BoolEnum::truthy()).is_true());
        assert!(BoolEnum::truthy().not().is_false());
    }

    #[test]
    fn throw_if_false_carries_message() {
        let err = BoolEnum::falsy()
            .throw_if_false("value must be positive")
            .unwrap_err();
        assert_eq!(err.message(), "value must be positive");
        assert_eq!(err, GuardError::new("value must be positive"));
        assert!(BoolEnum::truthy().throw_if_false("unused").is_ok());
    }

    #[test]
    fn throw_if_true_passes_when_false() {
        assert!(BoolEnum::falsy().throw_if_true("unused").is_ok());
        assert!(BoolEnum::truthy().throw_if_true("boom").is_err());
    }

    #[test]
    fn compared_by_value_not_identity() {
        assert_eq!(BoolEnum::from_bool(true), BoolEnum::truthy());
    }
}
