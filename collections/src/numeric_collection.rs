//! Homogeneous-precision collection of [`Numeric`] values.
//!
//! Aggregation over fixed-precision decimals is only exact when every element
//! shares the collection's precision, so the precision is validated at
//! construction and on every insertion.

use crate::error::CollectionError;
use lodestone_types::{BoolEnum, Numeric};

#[derive(Debug, Clone, PartialEq)]
pub struct NumericCollection {
    items: Vec<Numeric>,
    precision: u32,
}

impl NumericCollection {
    #[must_use]
    pub fn new_empty(precision: u32) -> Self {
        Self {
            items: Vec::new(),
            precision,
        }
    }

    /// Build from values that must all carry `precision`.
    pub fn as_list(
        values: impl IntoIterator<Item = Numeric>,
        precision: u32,
    ) -> Result<Self, CollectionError> {
        let items: Vec<Numeric> = values.into_iter().collect();
        if items.iter().any(|item| item.precision() != precision) {
            return Err(CollectionError::MixedPrecision);
        }
        Ok(Self { items, precision })
    }

    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_no_element(&self) -> BoolEnum {
        BoolEnum::from_bool(self.is_empty())
    }

    pub fn first(&self) -> Result<Numeric, CollectionError> {
        self.items.first().copied().ok_or(CollectionError::Empty)
    }

    pub fn last(&self) -> Result<Numeric, CollectionError> {
        self.items.last().copied().ok_or(CollectionError::Empty)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Numeric> {
        self.items.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Numeric> {
        self.items.clone()
    }

    /// Append a value carrying the collection precision.
    pub fn add(mut self, value: Numeric) -> Result<Self, CollectionError> {
        if value.precision() != self.precision {
            return Err(CollectionError::PrecisionMismatch);
        }
        self.items.push(value);
        Ok(self)
    }

    /// Exact sum at the collection precision; zero when empty.
    pub fn sum(&self) -> Result<Numeric, CollectionError> {
        let mut total = Numeric::of(0, self.precision)?;
        for item in &self.items {
            total = total.checked_add(*item)?;
        }
        Ok(total)
    }

    /// Mean at the collection precision, ties rounded half up; zero when empty.
    pub fn avg(&self) -> Result<Numeric, CollectionError> {
        if self.is_empty() {
            return Ok(Numeric::of(0, self.precision)?);
        }
        let total = i128::from(self.sum()?.int_value());
        let count = self.items.len() as i128;
        // integer division with half-up tie-break, sign-aware
        let doubled = total * 2 + total.signum() * count;
        let raw = i64::try_from(doubled / (count * 2))
            .map_err(|_| CollectionError::Numeric(lodestone_types::NumericError::Overflow))?;
        Ok(Numeric::from_scaled(raw, self.precision)?)
    }

    pub fn min(&self) -> Result<Numeric, CollectionError> {
        self.items
            .iter()
            .copied()
            .min_by_key(|item| item.int_value())
            .ok_or(CollectionError::Empty)
    }

    pub fn max(&self) -> Result<Numeric, CollectionError> {
        self.items
            .iter()
            .copied()
            .max_by_key(|item| item.int_value())
            .ok_or(CollectionError::Empty)
    }
}

impl<'a> IntoIterator for &'a NumericCollection {
    type Item = &'a Numeric;
    type IntoIter = std::slice::Iter<'a, Numeric>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
