//! UUID value object over the `uuid` crate.

use crate::bool_enum::BoolEnum;
use crate::string_type::StringType;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UuidError {
    #[error("The provided string is not a valid UUID.")]
    Parse(#[from] uuid::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid {
    inner: uuid::Uuid,
}

impl Uuid {
    pub fn of(value: &str) -> Result<Self, UuidError> {
        let inner = uuid::Uuid::parse_str(value)?;
        Ok(Self { inner })
    }

    #[must_use]
    pub fn v4() -> Self {
        Self {
            inner: uuid::Uuid::new_v4(),
        }
    }

    /// Canonical hyphenated lowercase rendering.
    #[must_use]
    pub fn to_rfc4122(self) -> StringType {
        StringType::of(self.inner.hyphenated().to_string())
    }

    #[must_use]
    pub fn equals_to(self, other: Self) -> BoolEnum {
        BoolEnum::from_bool(self.inner == other.inner)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.hyphenated())
    }
}
