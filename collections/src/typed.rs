//! Typed collections with a fixed key shape.
//!
//! Element typing is carried by the generic parameter; what remains from the
//! runtime validation layer is the key discipline (a collection is a **list**
//! with integer keys or a **map** with string keys, fixed at construction)
//! and the two-tier [`CollectionRules`] hooks.

use crate::error::CollectionError;
use crate::guard::Guard;
use crate::key::Key;
use crate::map::Collection;
use lodestone_types::BoolEnum;
use std::marker::PhantomData;

/// Key discipline of a typed collection, fixed for the life of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Auto-incrementing integer keys from zero.
    List,
    /// Arbitrary string keys.
    Map,
}

/// Two-tier validation hooks.
///
/// `validate_element` runs for every element at construction and again on
/// every insertion; `validate` runs once per construction over the whole
/// entry set, never on mutation.
pub trait CollectionRules<V> {
    fn validate_element(_value: &V) -> Result<(), CollectionError> {
        Ok(())
    }

    fn validate(_entries: &[(&Key, &V)]) -> Result<(), CollectionError> {
        Ok(())
    }
}

/// The no-op rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl<V> CollectionRules<V> for NoRules {}

pub struct TypedCollection<V, R: CollectionRules<V> = NoRules> {
    entries: Collection<V>,
    shape: Shape,
    rules: PhantomData<R>,
}

impl<V: std::fmt::Debug, R: CollectionRules<V>> std::fmt::Debug for TypedCollection<V, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedCollection")
            .field("entries", &self.entries)
            .field("shape", &self.shape)
            .finish()
    }
}

impl<V: Clone, R: CollectionRules<V>> Clone for TypedCollection<V, R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            shape: self.shape,
            rules: PhantomData,
        }
    }
}

impl<V: PartialEq, R: CollectionRules<V>> PartialEq for TypedCollection<V, R> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.entries == other.entries
    }
}

impl<V, R: CollectionRules<V>> TypedCollection<V, R> {
    /// An empty collection of the given shape.
    #[must_use]
    pub fn new_empty(shape: Shape) -> Self {
        Self {
            entries: Collection::new_empty(),
            shape,
            rules: PhantomData,
        }
    }

    fn checked(entries: Collection<V>, shape: Shape) -> Result<Self, CollectionError> {
        for value in entries.values() {
            R::validate_element(value).inspect_err(
                |error| tracing::debug!(%error, "element rejected by collection rules"),
            )?;
        }
        let snapshot: Vec<(&Key, &V)> = entries.iter().collect();
        R::validate(&snapshot)?;
        Ok(Self {
            entries,
            shape,
            rules: PhantomData,
        })
    }

    /// Build a list; every element is validated against the rules.
    pub fn as_list(values: impl IntoIterator<Item = V>) -> Result<Self, CollectionError> {
        Self::checked(Collection::of(values), Shape::List)
    }

    /// Build a map from string keys; every element is validated against the rules.
    pub fn as_map(
        pairs: impl IntoIterator<Item = (String, V)>,
    ) -> Result<Self, CollectionError> {
        let entries =
            Collection::of_entries(pairs.into_iter().map(|(key, value)| (Key::Str(key), value)));
        Self::checked(entries, Shape::Map)
    }

    /// Build from raw entries; the first key decides the shape (an empty
    /// input yields a list) and every key must then respect it.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Key, V)>,
    ) -> Result<Self, CollectionError> {
        let entries = Collection::of_entries(entries);
        let shape = match entries.first_key() {
            Some(Key::Str(_)) => Shape::Map,
            _ => Shape::List,
        };
        for key in entries.keys() {
            Self::check_key(shape, key)?;
        }
        Self::checked(entries, shape)
    }

    fn check_key(shape: Shape, key: &Key) -> Result<(), CollectionError> {
        match shape {
            Shape::List if key.is_str() => Err(CollectionError::ListStringKey),
            Shape::Map if key.is_int() => Err(CollectionError::MapNumericKey),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn is_list(&self) -> BoolEnum {
        BoolEnum::from_bool(self.shape == Shape::List)
    }

    #[must_use]
    pub fn is_map(&self) -> BoolEnum {
        BoolEnum::from_bool(self.shape == Shape::Map)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn first(&self) -> Result<&V, CollectionError> {
        self.entries.first()
    }

    pub fn last(&self) -> Result<&V, CollectionError> {
        self.entries.last()
    }

    #[must_use]
    pub fn first_key(&self) -> Option<&Key> {
        self.entries.first_key()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&Key> {
        self.entries.keys()
    }

    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.entries.iter()
    }

    /// Append under the next integer key. Fails on a map: appending without a
    /// key would introduce a numeric key.
    pub fn add(mut self, value: V) -> Result<Self, CollectionError> {
        if self.shape == Shape::Map {
            return Err(CollectionError::MapNumericKey);
        }
        R::validate_element(&value)?;
        self.entries = self.entries.add(value)?;
        Ok(self)
    }

    /// Append only when the guard holds; a false guard returns the receiver unchanged.
    pub fn add_if<M>(self, value: V, guard: impl Guard<V, M>) -> Result<Self, CollectionError> {
        if !guard.evaluate(&value) {
            tracing::debug!("guard rejected insertion, collection unchanged");
            return Ok(self);
        }
        self.add(value)
    }

    /// Insert or overwrite under `key`, re-validating the value and the key discipline.
    pub fn set(mut self, key: impl Into<Key>, value: V) -> Result<Self, CollectionError> {
        let key = key.into();
        Self::check_key(self.shape, &key)?;
        R::validate_element(&value)?;
        self.entries = self.entries.set(key, value)?;
        Ok(self)
    }

    /// Insert only when the guard holds; a false guard returns the receiver unchanged.
    pub fn set_if<M>(
        self,
        key: impl Into<Key>,
        value: V,
        guard: impl Guard<V, M>,
    ) -> Result<Self, CollectionError> {
        if !guard.evaluate(&value) {
            tracing::debug!("guard rejected insertion, collection unchanged");
            return Ok(self);
        }
        self.set(key, value)
    }

    pub fn remove(mut self, key: impl Into<Key>) -> Result<Self, CollectionError> {
        self.entries = self.entries.remove(key)?;
        Ok(self)
    }

    /// Freeze the underlying collection; every subsequent mutation fails.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.entries = self.entries.read_only();
        self
    }

    #[must_use]
    pub fn is_read_only(&self) -> BoolEnum {
        self.entries.is_read_only()
    }
}

impl<V: Clone, R: CollectionRules<V>> TypedCollection<V, R> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<V> {
        self.entries.to_vec()
    }

    #[must_use]
    pub fn to_entries(&self) -> Vec<(Key, V)> {
        self.entries.to_entries()
    }
}

impl<'a, V, R: CollectionRules<V>> IntoIterator for &'a TypedCollection<V, R> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectionRules, NoRules, Shape, TypedCollection};
    use crate::error::CollectionError;
    use crate::key::Key;
    use lodestone_types::BoolEnum;

    /// Rules used across the tests: elements must be non-empty, and the
    /// collection may not hold more than three entries.
    struct ShortNames;

    impl CollectionRules<String> for ShortNames {
        fn validate_element(value: &String) -> Result<(), CollectionError> {
            if value.is_empty() {
                return Err(CollectionError::invalid_element(
                    "All elements must be non-empty strings.",
                ));
            }
            Ok(())
        }

        fn validate(entries: &[(&Key, &String)]) -> Result<(), CollectionError> {
            if entries.len() > 3 {
                return Err(CollectionError::invalid_element(
                    "Collection cannot hold more than 3 elements.",
                ));
            }
            Ok(())
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn as_list_fixes_the_shape() {
        let list: TypedCollection<String> =
            TypedCollection::as_list(strings(&["a", "b"])).unwrap();
        assert!(list.is_list().is_true());
        assert!(list.is_map().is_false());
        assert_eq!(list.len(), 2);
        assert_eq!(list.first_key(), Some(&Key::Int(0)));
    }

    #[test]
    fn as_map_fixes_the_shape() {
        let map: TypedCollection<i64> =
            TypedCollection::as_map([("one".to_string(), 1), ("two".to_string(), 2)]).unwrap();
        assert!(map.is_map().is_true());
        assert_eq!(map.get("two"), Some(&2));
    }

    #[test]
    fn from_entries_infers_shape_from_first_key() {
        let list: TypedCollection<i64> =
            TypedCollection::from_entries([(Key::Int(0), 10), (Key::Int(1), 20)]).unwrap();
        assert_eq!(list.shape(), Shape::List);

        let map: TypedCollection<i64> =
            TypedCollection::from_entries([(Key::from("a"), 1)]).unwrap();
        assert_eq!(map.shape(), Shape::Map);

        let empty: TypedCollection<i64> = TypedCollection::from_entries([]).unwrap();
        assert_eq!(empty.shape(), Shape::List);
    }

    #[test]
    fn from_entries_rejects_mixed_key_shapes() {
        let err = TypedCollection::<i64>::from_entries([
            (Key::Int(0), 1),
            (Key::from("oops"), 2),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Adding element to collection (list) using string key is not supported."
        );
    }

    #[test]
    fn string_key_into_a_list_is_rejected_verbatim() {
        let list: TypedCollection<i64> = TypedCollection::as_list([1, 2]).unwrap();
        let err = list.set("name", 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Adding element to collection (list) using string key is not supported."
        );
    }

    #[test]
    fn numeric_key_into_a_map_is_rejected_verbatim() {
        let map: TypedCollection<i64> =
            TypedCollection::as_map([("a".to_string(), 1)]).unwrap();
        let err = map.clone().set(5, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Adding element to collection (map) using numeric key is not supported."
        );
        // `add` has no key to give, which would also introduce a numeric key
        let err = map.add(3).unwrap_err();
        assert_eq!(err, CollectionError::MapNumericKey);
    }

    #[test]
    fn element_rule_runs_at_construction() {
        let err = TypedCollection::<String, ShortNames>::as_list(strings(&["ok", ""]))
            .unwrap_err();
        assert_eq!(err.to_string(), "All elements must be non-empty strings.");
    }

    #[test]
    fn element_rule_runs_on_every_insertion() {
        let list = TypedCollection::<String, ShortNames>::as_list(strings(&["ok"])).unwrap();
        let err = list.clone().add(String::new()).unwrap_err();
        assert_eq!(err.to_string(), "All elements must be non-empty strings.");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn whole_collection_rule_runs_only_at_construction() {
        let err =
            TypedCollection::<String, ShortNames>::as_list(strings(&["a", "b", "c", "d"]))
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Collection cannot hold more than 3 elements."
        );

        // growing past the construction-time limit via add is allowed: the
        // whole-collection hook does not run per mutation
        let list = TypedCollection::<String, ShortNames>::as_list(strings(&["a", "b", "c"]))
            .unwrap()
            .add("d".to_string())
            .unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn guard_forms_on_typed_collections() {
        let list = TypedCollection::<String, ShortNames>::as_list(strings(&["a"]))
            .unwrap()
            .add_if("b".to_string(), true)
            .unwrap()
            .add_if("c".to_string(), false)
            .unwrap()
            .add_if("d".to_string(), BoolEnum::falsy())
            .unwrap()
            .add_if("e".to_string(), |v: &String| v == "e")
            .unwrap();
        assert_eq!(list.to_vec(), strings(&["a", "b", "e"]));
    }

    #[test]
    fn rejected_guard_does_not_validate_the_element() {
        // the empty string violates ShortNames, but a false guard suppresses
        // the mutation before validation
        let list = TypedCollection::<String, ShortNames>::as_list(strings(&["a"]))
            .unwrap()
            .add_if(String::new(), false)
            .unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn read_only_typed_collection_rejects_mutation() {
        let frozen: TypedCollection<i64, NoRules> =
            TypedCollection::as_list([1]).unwrap().read_only();
        assert!(frozen.is_read_only().is_true());
        let err = frozen.add(2).unwrap_err();
        assert_eq!(err.to_string(), "Static collections cannot be modified.");
    }
}
