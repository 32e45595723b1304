//! Generic ordered-map collection wrapper.
//!
//! Keys are unique and insertion-ordered (backed by [`IndexMap`]). The API
//! surface is logically immutable: `add`/`set`/`remove` consume the receiver
//! and return a new instance, so holding on to an earlier value requires an
//! explicit `clone()`. A read-only collection rejects every mutation.

use crate::error::CollectionError;
use crate::guard::Guard;
use crate::key::Key;
use indexmap::IndexMap;
use lodestone_types::{BoolEnum, Numeric, ToNumeric};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<V> {
    entries: IndexMap<Key, V>,
    read_only: bool,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<V> Collection<V> {
    /// An empty, mutable collection.
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            entries: IndexMap::new(),
            read_only: false,
        }
    }

    /// Build from values with auto-incrementing integer keys from zero.
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (Key::from(index), value))
                .collect(),
            read_only: false,
        }
    }

    /// Build from explicit key/value pairs; a repeated key keeps the last value.
    #[must_use]
    pub fn of_entries(entries: impl IntoIterator<Item = (Key, V)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            read_only: false,
        }
    }

    /// Freeze the collection; every subsequent mutation fails.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn is_read_only(&self) -> BoolEnum {
        BoolEnum::from_bool(self.read_only)
    }

    fn ensure_mutable(&self) -> Result<(), CollectionError> {
        if self.read_only {
            return Err(CollectionError::ReadOnly);
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> Numeric {
        Numeric::from(self.len() as i64)
    }

    #[must_use]
    pub fn at_least_one_element(&self) -> BoolEnum {
        BoolEnum::from_bool(self.len() > 0)
    }

    #[must_use]
    pub fn has_no_element(&self) -> BoolEnum {
        BoolEnum::from_bool(self.is_empty())
    }

    #[must_use]
    pub fn has_one_element(&self) -> BoolEnum {
        BoolEnum::from_bool(self.len() == 1)
    }

    #[must_use]
    pub fn has_several_elements(&self) -> BoolEnum {
        BoolEnum::from_bool(self.len() > 1)
    }

    #[must_use]
    pub fn has_x_elements(&self, count: usize) -> BoolEnum {
        BoolEnum::from_bool(self.len() == count)
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.entries.get(&key.into())
    }

    /// Like [`Self::get`], but a missing key is an error rather than `None`.
    pub fn get_required(&self, key: impl Into<Key>) -> Result<&V, CollectionError> {
        let key = key.into();
        self.entries
            .get(&key)
            .ok_or(CollectionError::KeyNotFound(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> BoolEnum {
        BoolEnum::from_bool(self.entries.contains_key(&key.into()))
    }

    /// First element, or `CollectionError::Empty` with no default supplied.
    pub fn first(&self) -> Result<&V, CollectionError> {
        self.entries
            .first()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty)
    }

    /// Last element, or `CollectionError::Empty` with no default supplied.
    pub fn last(&self) -> Result<&V, CollectionError> {
        self.entries
            .last()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty)
    }

    #[must_use]
    pub fn first_key(&self) -> Option<&Key> {
        self.entries.first().map(|(key, _)| key)
    }

    #[must_use]
    pub fn last_key(&self) -> Option<&Key> {
        self.entries.last().map(|(key, _)| key)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&Key> {
        self.entries.keys().collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.entries.values().collect()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.entries.iter()
    }

    /// Walk every entry in order.
    pub fn each(&self, mut visit: impl FnMut(&Key, &V)) {
        for (key, value) in &self.entries {
            visit(key, value);
        }
    }

    pub fn reduce<A>(&self, init: A, mut fold: impl FnMut(A, &V) -> A) -> A {
        self.entries.values().fold(init, |acc, value| fold(acc, value))
    }

    /// Transform values, preserving keys and order.
    #[must_use]
    pub fn map<U>(&self, mut transform: impl FnMut(&V) -> U) -> Collection<U> {
        Collection {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), transform(value)))
                .collect(),
            read_only: false,
        }
    }

    /// Keep entries whose value satisfies the predicate.
    #[must_use]
    pub fn filter(mut self, mut keep: impl FnMut(&V) -> bool) -> Self {
        self.entries.retain(|_, value| keep(value));
        self
    }

    /// Linear search for the first entry satisfying the predicate.
    pub fn search(&self, mut matches: impl FnMut(&V) -> bool) -> Option<(&Key, &V)> {
        self.entries.iter().find(|(_, value)| matches(value))
    }

    /// Sort values in place.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&V, &V) -> Ordering) {
        self.entries.sort_by(|_, a, _, b| compare(a, b));
    }

    /// Sorted copy-on-write variant of [`Self::sort_by`].
    #[must_use]
    pub fn sorted_by(mut self, compare: impl FnMut(&V, &V) -> Ordering) -> Self {
        let mut compare = compare;
        self.entries.sort_by(|_, a, _, b| compare(a, b));
        self
    }

    fn next_int_key(&self) -> Key {
        let next = self
            .entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |max| max + 1);
        Key::Int(next)
    }

    /// Append under the next integer key.
    pub fn add(self, value: V) -> Result<Self, CollectionError> {
        let key = self.next_int_key();
        self.set(key, value)
    }

    /// Append only when the guard holds; otherwise return the receiver unchanged.
    pub fn add_if<M>(self, value: V, guard: impl Guard<V, M>) -> Result<Self, CollectionError> {
        if !guard.evaluate(&value) {
            tracing::debug!("guard rejected insertion, collection unchanged");
            return Ok(self);
        }
        self.add(value)
    }

    /// Insert or overwrite under `key`.
    pub fn set(mut self, key: impl Into<Key>, value: V) -> Result<Self, CollectionError> {
        self.ensure_mutable()?;
        self.entries.insert(key.into(), value);
        Ok(self)
    }

    /// Insert only when the guard holds; otherwise return the receiver unchanged.
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

    /// Remove `key` if present, preserving the order of the remaining entries.
    pub fn remove(mut self, key: impl Into<Key>) -> Result<Self, CollectionError> {
        self.ensure_mutable()?;
        self.entries.shift_remove(&key.into());
        Ok(self)
    }
}

impl<V: Clone> Collection<V> {
    pub fn get_or(&self, key: impl Into<Key>, default: V) -> V {
        self.get(key).cloned().unwrap_or(default)
    }

    pub fn first_or(&self, default: V) -> V {
        self.first().cloned().unwrap_or(default)
    }

    pub fn last_or(&self, default: V) -> V {
        self.last().cloned().unwrap_or(default)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    #[must_use]
    pub fn to_entries(&self) -> Vec<(Key, V)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<V: PartialEq> Collection<V> {
    #[must_use]
    pub fn contains_value(&self, value: &V) -> BoolEnum {
        BoolEnum::from_bool(self.entries.values().any(|candidate| candidate == value))
    }
}

/// Aggregation over numeric-coercible elements. Every element is converted to
/// [`Numeric`] at the requested precision before folding, so the result is
/// exact at that precision.
impl<V: ToNumeric> Collection<V> {
    pub fn sum(&self, precision: u32) -> Result<Numeric, CollectionError> {
        let mut total = Numeric::of(0, precision)?;
        for value in self.entries.values() {
            total = total.checked_add(value.to_numeric(precision)?)?;
        }
        Ok(total)
    }

    pub fn avg(&self, precision: u32) -> Result<Numeric, CollectionError> {
        if self.is_empty() {
            return Ok(Numeric::of(0, precision)?);
        }
        let sum = self.sum(precision)?;
        Ok(Numeric::of(sum.value() / self.len() as f64, precision)?)
    }

    pub fn min(&self, precision: u32) -> Result<Numeric, CollectionError> {
        self.fold_extremum(precision, |candidate, best| {
            candidate.less_than(best).is_true()
        })
    }

    pub fn max(&self, precision: u32) -> Result<Numeric, CollectionError> {
        self.fold_extremum(precision, |candidate, best| {
            candidate.greater_than(best).is_true()
        })
    }

    fn fold_extremum(
        &self,
        precision: u32,
        better: impl Fn(Numeric, Numeric) -> bool,
    ) -> Result<Numeric, CollectionError> {
        let mut best: Option<Numeric> = None;
        for value in self.entries.values() {
            let candidate = value.to_numeric(precision)?;
            best = Some(match best {
                Some(current) if !better(candidate, current) => current,
                _ => candidate,
            });
        }
        best.ok_or(CollectionError::Empty)
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::error::CollectionError;
    use crate::key::Key;
    use lodestone_types::BoolEnum;

    #[test]
    fn of_assigns_sequential_integer_keys() {
        let c = Collection::of(["a", "b", "c"]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.keys(), vec![&Key::Int(0), &Key::Int(1), &Key::Int(2)]);
        assert_eq!(c.get(1), Some(&"b"));
    }

    #[test]
    fn entries_round_trip() {
        let entries = vec![
            (Key::from("b"), 2),
            (Key::from("a"), 1),
            (Key::from("z"), 26),
        ];
        let c = Collection::of_entries(entries.clone());
        assert_eq!(c.to_entries(), entries);
    }

    #[test]
    fn list_round_trip_preserves_order() {
        let c = Collection::of([10, 20, 30]);
        assert_eq!(c.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn first_and_last_error_when_empty_without_default() {
        let empty: Collection<i64> = Collection::new_empty();
        assert_eq!(empty.first().unwrap_err(), CollectionError::Empty);
        assert_eq!(empty.last().unwrap_err(), CollectionError::Empty);
        assert_eq!(empty.first_or(7), 7);
        assert_eq!(empty.last_or(9), 9);

        let c = Collection::of([1, 2, 3]);
        assert_eq!(*c.first().unwrap(), 1);
        assert_eq!(*c.last().unwrap(), 3);
    }

    #[test]
    fn add_appends_under_the_next_integer_key() {
        let c = Collection::of([1, 2]).add(3).unwrap();
        assert_eq!(c.to_vec(), vec![1, 2, 3]);
        assert_eq!(c.last_key(), Some(&Key::Int(2)));

        let resumed = c.remove(0).unwrap().add(4).unwrap();
        assert_eq!(resumed.last_key(), Some(&Key::Int(3)));
    }

    #[test]
    fn guard_closure_false_suppresses_the_mutation() {
        let c = Collection::of([1, 2])
            .add_if(3, |v: &i64| *v > 10)
            .unwrap();
        assert_eq!(c.len(), 2);

        let c = c.add_if(30, |v: &i64| *v > 10).unwrap();
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn guard_accepts_bool_and_bool_enum_too() {
        let c = Collection::of(["keep"])
            .add_if("skipped", false)
            .unwrap()
            .add_if("skipped too", BoolEnum::falsy())
            .unwrap()
            .add_if("kept", BoolEnum::truthy())
            .unwrap();
        assert_eq!(c.to_vec(), vec!["keep", "kept"]);
    }

    #[test]
    fn count_reflects_only_successful_insertions() {
        let c = Collection::new_empty()
            .add(1)
            .unwrap()
            .add_if(2, false)
            .unwrap()
            .add_if(3, true)
            .unwrap();
        assert_eq!(c.count().int_value(), 2);
    }

    #[test]
    fn read_only_collections_cannot_be_modified() {
        let frozen = Collection::of([1, 2]).read_only();
        assert!(frozen.is_read_only().is_true());
        let err = frozen.clone().add(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Static collections cannot be modified."
        );
        assert_eq!(frozen.clone().set("k", 1).unwrap_err(), CollectionError::ReadOnly);
        assert_eq!(frozen.remove(0).unwrap_err(), CollectionError::ReadOnly);
    }

    #[test]
    fn get_required_names_the_missing_key() {
        let c = Collection::of_entries([(Key::from("present"), 1)]);
        assert_eq!(c.get_required("present").unwrap(), &1);
        assert_eq!(
            c.get_required("absent").unwrap_err().to_string(),
            "Key `absent` not found in collection."
        );
    }

    #[test]
    fn map_preserves_keys_and_order() {
        let c = Collection::of_entries([(Key::from("a"), 1), (Key::from("b"), 2)]);
        let doubled = c.map(|v| v * 2);
        assert_eq!(doubled.get("b"), Some(&4));
        assert_eq!(doubled.keys(), vec![&Key::from("a"), &Key::from("b")]);
    }

    #[test]
    fn filter_and_search() {
        let c = Collection::of([1, 2, 3, 4]).filter(|v| v % 2 == 0);
        assert_eq!(c.to_vec(), vec![2, 4]);

        let c = Collection::of(["ant", "bee", "cat"]);
        let found = c.search(|v| v.starts_with('b'));
        assert_eq!(found, Some((&Key::Int(1), &"bee")));
        assert_eq!(c.search(|v| v.starts_with('z')), None);
    }

    #[test]
    fn sort_in_place_and_sorted_copy() {
        let mut c = Collection::of([3, 1, 2]);
        c.sort_by(|a, b| a.cmp(b));
        assert_eq!(c.to_vec(), vec![1, 2, 3]);

        let sorted = Collection::of([3, 1, 2]).sorted_by(|a, b| b.cmp(a));
        assert_eq!(sorted.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn aggregation_over_numeric_coercible_elements() {
        let c = Collection::of([1_i64, 2, 3]);
        assert_eq!(c.sum(2).unwrap().int_value(), 600);
        assert_eq!(c.avg(2).unwrap().int_value(), 200);
        assert_eq!(c.min(0).unwrap().int_value(), 1);
        assert_eq!(c.max(0).unwrap().int_value(), 3);

        let empty: Collection<i64> = Collection::new_empty();
        assert_eq!(empty.min(0).unwrap_err(), CollectionError::Empty);
        assert!(empty.sum(0).unwrap().is_zero());
    }

    #[test]
    fn cardinality_predicates() {
        let c = Collection::of([1]);
        assert!(c.at_least_one_element().is_true());
        assert!(c.has_one_element().is_true());
        assert!(c.has_several_elements().is_false());
        assert!(c.has_x_elements(1).is_true());
        assert!(Collection::<i64>::new_empty().has_no_element().is_true());
    }

    #[test]
    fn contains_value_and_each() {
        let c = Collection::of(["x", "y"]);
        assert!(c.contains_value(&"x").is_true());
        assert!(c.contains_value(&"z").is_false());

        let mut seen = Vec::new();
        c.each(|key, value| seen.push((key.clone(), *value)));
        assert_eq!(seen, vec![(Key::Int(0), "x"), (Key::Int(1), "y")]);
    }

    #[test]
    fn reduce_folds_in_order() {
        let c = Collection::of([1, 2, 3]);
        assert_eq!(c.reduce(0, |acc, v| acc * 10 + v), 123);
    }
}
