//! Date-time value object with explicit null-object support.
//!
//! Wraps a UTC [`chrono::DateTime`] and answers calendar questions through
//! [`BoolEnum`]. The null instance (epoch + null flag) is the canonical
//! example of the [`Nullable`] pattern in this crate.

use crate::bool_enum::BoolEnum;
use crate::null::{NullEnum, Nullable};
use chrono::{DateTime as ChronoDateTime, Datelike, Timelike, Utc, Weekday};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateTimeError {
    #[error("Failed to parse date-time string.")]
    Parse(#[from] chrono::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    inner: ChronoDateTime<Utc>,
    null: NullEnum,
}

impl DateTime {
    /// Parse an RFC 3339 timestamp (e.g. `2024-05-01T12:30:00Z`).
    pub fn of(value: &str) -> Result<Self, DateTimeError> {
        let parsed = ChronoDateTime::parse_from_rfc3339(value)?;
        Ok(Self::from_chrono(parsed.with_timezone(&Utc)))
    }

    #[must_use]
    pub fn from_chrono(inner: ChronoDateTime<Utc>) -> Self {
        Self {
            inner,
            null: NullEnum::no(),
        }
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from_chrono(Utc::now())
    }

    #[must_use]
    pub fn to_chrono(self) -> ChronoDateTime<Utc> {
        self.inner
    }

    #[must_use]
    pub fn is_am(self) -> BoolEnum {
        BoolEnum::from_bool(self.inner.hour() < 12)
    }

    #[must_use]
    pub fn is_pm(self) -> BoolEnum {
        self.is_am().not()
    }

    #[must_use]
    pub fn is_weekday(self) -> BoolEnum {
        self.is_weekend().not()
    }

    #[must_use]
    pub fn is_weekend(self) -> BoolEnum {
        let day = self.inner.weekday();
        BoolEnum::from_bool(day == Weekday::Sat || day == Weekday::Sun)
    }

    #[must_use]
    pub fn is_before(self, other: Self) -> BoolEnum {
        BoolEnum::from_bool(self.inner < other.inner)
    }

    #[must_use]
    pub fn is_before_or_equal(self, other: Self) -> BoolEnum {
        BoolEnum::from_bool(self.inner <= other.inner)
    }

    #[must_use]
    pub fn is_after(self, other: Self) -> BoolEnum {
        BoolEnum::from_bool(self.inner > other.inner)
    }

    #[must_use]
    pub fn is_after_or_equal(self, other: Self) -> BoolEnum {
        BoolEnum::from_bool(self.inner >= other.inner)
    }

    #[must_use]
    pub fn is_same(self, other: Self) -> BoolEnum {
        BoolEnum::from_bool(self.inner == other.inner)
    }

    /// Strict `start < self < end`.
    #[must_use]
    pub fn is_between(self, start: Self, end: Self) -> BoolEnum {
        self.is_after(start).and(self.is_before(end))
    }

    /// Inclusive `start <= self <= end`.
    #[must_use]
    pub fn is_between_or_equal(self, start: Self, end: Self) -> BoolEnum {
        self.is_after_or_equal(start).and(self.is_before_or_equal(end))
    }

    #[must_use]
    pub fn is_not_between(self, start: Self, end: Self) -> BoolEnum {
        self.is_between(start, end).not()
    }
}

impl Nullable for DateTime {
    fn as_null() -> Self {
        Self {
            inner: ChronoDateTime::<Utc>::UNIX_EPOCH,
            null: NullEnum::yes(),
        }
    }

    fn null_state(&self) -> NullEnum {
        self.null
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::{DateTime, DateTimeError};
    use crate::null::Nullable;

    fn at(value: &str) -> DateTime {
        DateTime::of(value).unwrap()
    }

    #[test]
    fn parses_rfc3339() {
        let dt = at("2024-05-01T12:30:00Z");
        assert_eq!(dt.to_string(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            DateTime::of("not a date"),
            Err(DateTimeError::Parse(_))
        ));
    }

    #[test]
    fn am_and_pm() {
        assert!(at("2024-05-01T08:00:00Z").is_am().is_true());
        assert!(at("2024-05-01T12:00:00Z").is_pm().is_true());
    }

    #[test]
    fn weekday_and_weekend() {
        // 2024-05-04 is a Saturday
        assert!(at("2024-05-04T10:00:00Z").is_weekend().is_true());
        assert!(at("2024-05-01T10:00:00Z").is_weekday().is_true());
    }

    #[test]
    fn ordering_predicates() {
        let earlier = at("2024-01-01T00:00:00Z");
        let later = at("2024-06-01T00:00:00Z");
        assert!(earlier.is_before(later).is_true());
        assert!(later.is_after(earlier).is_true());
        assert!(earlier.is_same(earlier).is_true());
        assert!(earlier.is_before_or_equal(earlier).is_true());
    }

    #[test]
    fn between_is_strict_and_or_equal_is_inclusive() {
        let start = at("2024-01-01T00:00:00Z");
        let mid = at("2024-03-01T00:00:00Z");
        let end = at("2024-06-01T00:00:00Z");
        assert!(mid.is_between(start, end).is_true());
        assert!(start.is_between(start, end).is_false());
        assert!(start.is_between_or_equal(start, end).is_true());
        assert!(mid.is_not_between(start, end).is_false());
    }

    #[test]
    fn null_object_round_trip() {
        let null = DateTime::as_null();
        assert!(null.is_null());
        assert!(at("2024-05-01T00:00:00Z").is_not_null());

        let err = DateTime::as_null()
            .or_throw(|| "date is required")
            .unwrap_err();
        assert_eq!(err, "date is required");
    }
}
