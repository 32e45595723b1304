//! Typed list of non-empty [`StringType`] values.

use crate::error::CollectionError;
use crate::guard::Guard;
use crate::key::Key;
use crate::typed::{CollectionRules, Shape, TypedCollection};
use lodestone_types::StringType;

/// Elements must be non-empty once trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyElements;

impl CollectionRules<StringType> for NonEmptyElements {
    fn validate_element(value: &StringType) -> Result<(), CollectionError> {
        if value.trim().is_empty().is_true() {
            return Err(CollectionError::invalid_element(
                "All elements must be non-empty strings.",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringTypeCollection {
    items: TypedCollection<StringType, NonEmptyElements>,
}

impl StringTypeCollection {
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            items: TypedCollection::new_empty(Shape::List),
        }
    }

    pub fn as_list(
        values: impl IntoIterator<Item = StringType>,
    ) -> Result<Self, CollectionError> {
        Ok(Self {
            items: TypedCollection::as_list(values)?,
        })
    }

    /// Convenience over [`Self::as_list`] for plain string slices.
    pub fn of_strs(values: &[&str]) -> Result<Self, CollectionError> {
        Self::as_list(values.iter().map(|value| StringType::of(*value)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(mut self, value: StringType) -> Result<Self, CollectionError> {
        self.items = self.items.add(value)?;
        Ok(self)
    }

    pub fn add_if<M>(
        mut self,
        value: StringType,
        guard: impl Guard<StringType, M>,
    ) -> Result<Self, CollectionError> {
        self.items = self.items.add_if(value, guard)?;
        Ok(self)
    }

    pub fn first(&self) -> Result<&StringType, CollectionError> {
        self.items.first()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, StringType> {
        self.items.iter()
    }

    /// Concatenate all elements with `glue`.
    #[must_use]
    pub fn join(&self, glue: &str) -> StringType {
        let joined = self
            .items
            .values()
            .iter()
            .map(|value| value.as_str())
            .collect::<Vec<_>>()
            .join(glue);
        StringType::of(joined)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<StringType> {
        self.items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::StringTypeCollection;
    use lodestone_types::StringType;

    #[test]
    fn join_concatenates_in_order() {
        let c = StringTypeCollection::of_strs(&["alpha", "beta", "gamma"]).unwrap();
        assert_eq!(c.join(", ").as_str(), "alpha, beta, gamma");
    }

    #[test]
    fn empty_elements_are_rejected() {
        let err = StringTypeCollection::of_strs(&["ok", "   "]).unwrap_err();
        assert_eq!(err.to_string(), "All elements must be non-empty strings.");
    }

    #[test]
    fn add_validates_the_new_element() {
        let c = StringTypeCollection::of_strs(&["ok"]).unwrap();
        assert!(c.clone().add(StringType::of("")).is_err());
        let c = c.add(StringType::of("fine")).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn guarded_add() {
        let c = StringTypeCollection::new_empty()
            .add_if(StringType::of("kept"), true)
            .unwrap()
            .add_if(StringType::of("dropped"), false)
            .unwrap();
        assert_eq!(c.to_vec(), vec![StringType::of("kept")]);
    }
}
