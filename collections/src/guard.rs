//! Guard conditions for conditional insertion.
//!
//! `add_if`/`set_if` accept a closure over the candidate value, a [`BoolEnum`],
//! or a plain `bool`; all three normalize to a boolean before the mutation is
//! attempted. A false guard makes the mutation a no-op.
//!
//! The `Marker` parameter only exists to keep the closure impl coherent with
//! the plain-value impls; inference always resolves it.

use lodestone_types::BoolEnum;

pub trait Guard<V, Marker = ()> {
    fn evaluate(self, value: &V) -> bool;
}

impl<V> Guard<V> for bool {
    fn evaluate(self, _value: &V) -> bool {
        self
    }
}

impl<V> Guard<V> for BoolEnum {
    fn evaluate(self, _value: &V) -> bool {
        self.is_true()
    }
}

/// Marker for the closure form of a guard.
pub struct Predicate;

impl<V, F> Guard<V, Predicate> for F
where
    F: FnOnce(&V) -> bool,
{
    fn evaluate(self, value: &V) -> bool {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Guard, Predicate};
    use lodestone_types::BoolEnum;

    #[test]
    fn all_three_guard_forms_normalize_to_bool() {
        assert!(Guard::<i64>::evaluate(true, &1));
        assert!(!Guard::<i64>::evaluate(false, &1));
        assert!(Guard::<i64>::evaluate(BoolEnum::truthy(), &1));
        assert!(!Guard::<i64>::evaluate(BoolEnum::falsy(), &1));
        assert!(Guard::<i64, Predicate>::evaluate(|v: &i64| *v > 0, &1));
        assert!(!Guard::<i64, Predicate>::evaluate(|v: &i64| *v > 0, &-1));
    }
}
