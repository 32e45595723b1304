//! Typed list of [`DateTime`] values with range queries.

use crate::error::CollectionError;
use crate::typed::{Shape, TypedCollection};
use lodestone_types::DateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeCollection {
    items: TypedCollection<DateTime>,
}

impl DateTimeCollection {
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            items: TypedCollection::new_empty(Shape::List),
        }
    }

    pub fn as_list(values: impl IntoIterator<Item = DateTime>) -> Result<Self, CollectionError> {
        Ok(Self {
            items: TypedCollection::as_list(values)?,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(mut self, value: DateTime) -> Result<Self, CollectionError> {
        self.items = self.items.add(value)?;
        Ok(self)
    }

    pub fn earliest(&self) -> Result<DateTime, CollectionError> {
        self.items
            .values()
            .into_iter()
            .copied()
            .min_by_key(|value| value.to_chrono())
            .ok_or(CollectionError::Empty)
    }

    pub fn latest(&self) -> Result<DateTime, CollectionError> {
        self.items
            .values()
            .into_iter()
            .copied()
            .max_by_key(|value| value.to_chrono())
            .ok_or(CollectionError::Empty)
    }

    /// Keep the instants within `[start, end]`, preserving the original order.
    #[must_use]
    pub fn between(&self, start: DateTime, end: DateTime) -> Self {
        let kept = self
            .items
            .values()
            .into_iter()
            .filter(|value| value.is_between_or_equal(start, end).is_true())
            .copied();
        Self {
            // values already passed validation, rebuilding cannot fail
            items: TypedCollection::as_list(kept)
                .unwrap_or_else(|_| TypedCollection::new_empty(Shape::List)),
        }
    }

    /// Chronologically sorted copy.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut values: Vec<DateTime> = self.items.values().into_iter().copied().collect();
        values.sort_by_key(|value| value.to_chrono());
        Self {
            items: TypedCollection::as_list(values)
                .unwrap_or_else(|_| TypedCollection::new_empty(Shape::List)),
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<DateTime> {
        self.items.to_vec()
    }
}
