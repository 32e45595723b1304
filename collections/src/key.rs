//! Collection keys: integers (list mode) or strings (map mode).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A collection key. List-mode collections only ever hold `Int` keys,
/// map-mode collections only `Str` keys; the shape is enforced by the
/// collection, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(value) => Some(value),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn kind_checks() {
        assert!(Key::from(3).is_int());
        assert!(Key::from("name").is_str());
        assert_eq!(Key::from(3).as_int(), Some(3));
        assert_eq!(Key::from("name").as_str(), Some("name"));
        assert_eq!(Key::from("name").as_int(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Key::from(42).to_string(), "42");
        assert_eq!(Key::from("id").to_string(), "id");
    }
}
