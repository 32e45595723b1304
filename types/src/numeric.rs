//! Fixed-precision decimal value stored as a scaled integer.
//!
//! `Numeric` keeps `value × 10^precision` in an `i64`, so equality, comparison
//! and aggregation are exact. Precision is a `u32`, which makes the original
//! "precision cannot be negative" argument error unrepresentable.

use crate::bool_enum::BoolEnum;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest supported precision; `10^18` still fits an `i64` multiplier.
pub const MAX_PRECISION: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("The provided string value must be numeric.")]
    NonNumericString,
    #[error("The value must be a finite number.")]
    NotFinite,
    #[error("The value exceeds the allowed limits.")]
    Overflow,
    #[error("Precision cannot exceed {MAX_PRECISION}.")]
    PrecisionTooLarge,
    #[error("Precisions must be the same.")]
    PrecisionMismatch,
    #[error("The minimum value must be less than the maximum value.")]
    InvertedBounds,
    #[error("Failed to format the number.")]
    Format,
}

/// Tie-break strategy used when a value is rescaled to fewer decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties round away from zero.
    #[default]
    HalfUp,
    /// Ties round toward zero.
    HalfDown,
    /// Ties round to the nearest even digit.
    HalfEven,
    /// Ties round to the nearest odd digit.
    HalfOdd,
}

/// Raw input accepted by [`Numeric::of`]: an integer, a float, or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Conversion into [`Numeric`] at a caller-chosen precision.
///
/// Collections use this to aggregate over any numeric-coercible element type.
pub trait ToNumeric {
    fn to_numeric(&self, precision: u32) -> Result<Numeric, NumericError>;
}

impl ToNumeric for Numeric {
    fn to_numeric(&self, precision: u32) -> Result<Numeric, NumericError> {
        self.rescale(precision, RoundingMode::HalfUp)
    }
}

impl ToNumeric for i64 {
    fn to_numeric(&self, precision: u32) -> Result<Numeric, NumericError> {
        Numeric::of(*self, precision)
    }
}

impl ToNumeric for i32 {
    fn to_numeric(&self, precision: u32) -> Result<Numeric, NumericError> {
        Numeric::of(*self, precision)
    }
}

impl ToNumeric for f64 {
    fn to_numeric(&self, precision: u32) -> Result<Numeric, NumericError> {
        Numeric::of(*self, precision)
    }
}

/// Immutable fixed-precision decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Numeric {
    raw: i64,
    precision: u32,
}

impl Numeric {
    /// Build a value from an integer, float or numeric string at `precision`
    /// decimal places. Construction rounds half away from zero.
    pub fn of(value: impl Into<NumericInput>, precision: u32) -> Result<Self, NumericError> {
        let multiplier = Self::multiplier(precision)?;
        let raw = match value.into() {
            NumericInput::Int(int) => int.checked_mul(multiplier).ok_or(NumericError::Overflow)?,
            NumericInput::Float(float) => Self::scale_float(float, multiplier)?,
            NumericInput::Text(text) => {
                let trimmed = text.trim();
                if let Ok(int) = trimmed.parse::<i64>() {
                    int.checked_mul(multiplier).ok_or(NumericError::Overflow)?
                } else {
                    let float: f64 = trimmed
                        .parse()
                        .map_err(|_| NumericError::NonNumericString)?;
                    Self::scale_float(float, multiplier)?
                }
            }
        };

        Ok(Self { raw, precision })
    }

    /// Build a value directly from its scaled representation.
    pub fn from_scaled(raw: i64, precision: u32) -> Result<Self, NumericError> {
        Self::multiplier(precision)?;
        Ok(Self { raw, precision })
    }

    fn multiplier(precision: u32) -> Result<i64, NumericError> {
        if precision > MAX_PRECISION {
            return Err(NumericError::PrecisionTooLarge);
        }
        Ok(10_i64.pow(precision))
    }

    fn scale_float(value: f64, multiplier: i64) -> Result<i64, NumericError> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        let scaled = (value * multiplier as f64).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(NumericError::Overflow);
        }
        Ok(scaled as i64)
    }

    /// The scaled integer, `value × 10^precision`.
    #[must_use]
    pub const fn int_value(self) -> i64 {
        self.raw
    }

    /// The decoded floating point value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.raw as f64 / 10_f64.powi(self.precision as i32)
    }

    #[must_use]
    pub const fn precision(self) -> u32 {
        self.precision
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Re-apply rounding at the value's own precision.
    ///
    /// The stored representation is already exact at its precision, so this is
    /// the identity for every mode; the real work happens in [`Self::rescale`].
    #[must_use]
    pub fn round(self, _mode: RoundingMode) -> Self {
        self
    }

    /// Convert to another precision, rounding with `mode` when digits are dropped.
    pub fn rescale(self, precision: u32, mode: RoundingMode) -> Result<Self, NumericError> {
        if precision == self.precision {
            return Ok(self);
        }
        if precision > self.precision {
            let factor = Self::multiplier(precision - self.precision)?;
            let raw = self
                .raw
                .checked_mul(factor)
                .ok_or(NumericError::Overflow)?;
            return Ok(Self { raw, precision });
        }

        let factor = Self::multiplier(self.precision - precision)?;
        let quotient = self.raw / factor;
        let remainder = self.raw % factor;
        let doubled = remainder.abs().checked_mul(2).ok_or(NumericError::Overflow)?;
        let bump = match doubled.cmp(&factor) {
            std::cmp::Ordering::Less => 0,
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Equal => match mode {
                RoundingMode::HalfUp => 1,
                RoundingMode::HalfDown => 0,
                RoundingMode::HalfEven => i64::from(quotient % 2 != 0),
                RoundingMode::HalfOdd => i64::from(quotient % 2 == 0),
            },
        };
        let raw = if self.raw >= 0 {
            quotient + bump
        } else {
            quotient - bump
        };
        Ok(Self { raw, precision })
    }

    /// Exact comparison across precisions on the scaled integers.
    fn cmp_decimal(self, other: Self) -> std::cmp::Ordering {
        let lhs = i128::from(self.raw) * 10_i128.pow(other.precision);
        let rhs = i128::from(other.raw) * 10_i128.pow(self.precision);
        lhs.cmp(&rhs)
    }

    pub fn greater_than(self, other: impl Into<Numeric>) -> BoolEnum {
        BoolEnum::from_bool(self.cmp_decimal(other.into()).is_gt())
    }

    pub fn greater_than_or_equal(self, other: impl Into<Numeric>) -> BoolEnum {
        BoolEnum::from_bool(self.cmp_decimal(other.into()).is_ge())
    }

    pub fn less_than(self, other: impl Into<Numeric>) -> BoolEnum {
        BoolEnum::from_bool(self.cmp_decimal(other.into()).is_lt())
    }

    pub fn less_than_or_equal(self, other: impl Into<Numeric>) -> BoolEnum {
        BoolEnum::from_bool(self.cmp_decimal(other.into()).is_le())
    }

    pub fn equal_to(self, other: impl Into<Numeric>) -> BoolEnum {
        BoolEnum::from_bool(self.cmp_decimal(other.into()).is_eq())
    }

    pub fn not_equal_to(self, other: impl Into<Numeric>) -> BoolEnum {
        BoolEnum::from_bool(self.cmp_decimal(other.into()).is_ne())
    }

    /// Strict `min < self < max`. Fails when `min > max`.
    pub fn between(
        self,
        min: impl Into<Numeric>,
        max: impl Into<Numeric>,
    ) -> Result<BoolEnum, NumericError> {
        let (min, max) = Self::ordered_bounds(min.into(), max.into())?;
        Ok(self.greater_than(min).and(self.less_than(max)))
    }

    /// Inclusive `min <= self <= max`. Fails when `min > max`.
    pub fn between_or_equal(
        self,
        min: impl Into<Numeric>,
        max: impl Into<Numeric>,
    ) -> Result<BoolEnum, NumericError> {
        let (min, max) = Self::ordered_bounds(min.into(), max.into())?;
        Ok(self
            .greater_than_or_equal(min)
            .and(self.less_than_or_equal(max)))
    }

    fn ordered_bounds(min: Numeric, max: Numeric) -> Result<(Numeric, Numeric), NumericError> {
        if min.cmp_decimal(max).is_gt() {
            return Err(NumericError::InvertedBounds);
        }
        Ok((min, max))
    }

    /// Add another value at the same precision.
    pub fn checked_add(self, other: Self) -> Result<Self, NumericError> {
        if other.precision != self.precision {
            return Err(NumericError::PrecisionMismatch);
        }
        let raw = self
            .raw
            .checked_add(other.raw)
            .ok_or(NumericError::Overflow)?;
        Ok(Self { raw, ..self })
    }

    /// Subtract another value at the same precision.
    pub fn checked_sub(self, other: Self) -> Result<Self, NumericError> {
        if other.precision != self.precision {
            return Err(NumericError::PrecisionMismatch);
        }
        let raw = self
            .raw
            .checked_sub(other.raw)
            .ok_or(NumericError::Overflow)?;
        Ok(Self { raw, ..self })
    }

    /// Render with locale-aware thousands and decimal separators.
    #[must_use]
    pub fn format(self, locale: Locale) -> String {
        let (integer, fraction) = self.split_parts();
        let negative = self.raw < 0;

        let digits: Vec<char> = integer.chars().collect();
        let mut grouped = String::new();
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(locale.thousands_separator());
            }
            grouped.push(*digit);
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&grouped);
        if let Some(fraction) = fraction {
            out.push(locale.decimal_separator());
            out.push_str(&fraction);
        }
        out
    }

    /// Integer digits (no sign) and, at precision > 0, the fraction digits.
    fn split_parts(self) -> (String, Option<String>) {
        let magnitude = self.raw.unsigned_abs();
        if self.precision == 0 {
            return (magnitude.to_string(), None);
        }
        let divisor = 10_u64.pow(self.precision);
        let integer = magnitude / divisor;
        let fraction = magnitude % divisor;
        (
            integer.to_string(),
            Some(format!(
                "{fraction:0width$}",
                width = self.precision as usize
            )),
        )
    }
}

impl From<i64> for Numeric {
    /// A raw integer compares as a whole number (precision 0).
    fn from(value: i64) -> Self {
        Self {
            raw: value,
            precision: 0,
        }
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl fmt::Display for Numeric {
    /// Plain rendering with `.` as the decimal separator and no grouping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (integer, fraction) = self.split_parts();
        if self.raw < 0 {
            f.write_str("-")?;
        }
        f.write_str(&integer)?;
        if let Some(fraction) = fraction {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
