//! Operator-based matching against an associative sub-key.
//!
//! Works on collections of JSON objects: `find_where("price", Gt, 100)` scans
//! for the first element whose `price` field compares greater than 100.

use crate::key::Key;
use crate::map::Collection;
use lodestone_types::BoolEnum;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    /// String containment, or array membership for array fields.
    Contains,
}

impl SearchOperator {
    fn matches(self, field: &Value, target: &Value) -> bool {
        match self {
            Self::Eq => field == target,
            Self::Ne => field != target,
            Self::Gt | Self::Gte | Self::Lt | Self::Lte => {
                let (Some(a), Some(b)) = (field.as_f64(), target.as_f64()) else {
                    return false;
                };
                let Some(ordering) = a.partial_cmp(&b) else {
                    return false;
                };
                match self {
                    Self::Gt => ordering.is_gt(),
                    Self::Gte => ordering.is_ge(),
                    Self::Lt => ordering.is_lt(),
                    Self::Lte | Self::Eq | Self::Ne | Self::Contains => ordering.is_le(),
                }
            }
            Self::Contains => match (field, target) {
                (Value::String(haystack), Value::String(needle)) => haystack.contains(needle),
                (Value::Array(items), needle) => items.contains(needle),
                _ => false,
            },
        }
    }
}

impl Collection<Value> {
    /// First element whose `field` satisfies `operator` against `target`.
    pub fn find_where(
        &self,
        field: &str,
        operator: SearchOperator,
        target: impl Into<Value>,
    ) -> Option<(&Key, &Value)> {
        let target = target.into();
        self.search(|element| {
            element
                .get(field)
                .is_some_and(|value| operator.matches(value, &target))
        })
    }

    /// Whether any element's `field` satisfies `operator` against `target`.
    #[must_use]
    pub fn contains_where(
        &self,
        field: &str,
        operator: SearchOperator,
        target: impl Into<Value>,
    ) -> BoolEnum {
        BoolEnum::from_bool(self.find_where(field, operator, target).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchOperator;
    use crate::key::Key;
    use crate::map::Collection;
    use serde_json::json;

    fn inventory() -> Collection<serde_json::Value> {
        Collection::of([
            json!({"name": "bolt", "price": 3, "tags": ["metal"]}),
            json!({"name": "plank", "price": 12, "tags": ["wood", "bulk"]}),
            json!({"name": "hinge", "price": 7}),
        ])
    }

    #[test]
    fn find_where_with_comparison_operators() {
        let c = inventory();
        let (key, value) = c.find_where("price", SearchOperator::Gt, 5).unwrap();
        assert_eq!(key, &Key::Int(1));
        assert_eq!(value["name"], "plank");

        assert!(c.find_where("price", SearchOperator::Gt, 100).is_none());
        assert!(c.contains_where("price", SearchOperator::Lte, 3).is_true());
        assert!(c.contains_where("price", SearchOperator::Ne, 3).is_true());
    }

    #[test]
    fn contains_operator_handles_strings_and_arrays() {
        let c = inventory();
        assert!(c.contains_where("name", SearchOperator::Contains, "ol").is_true());
        assert!(c.contains_where("tags", SearchOperator::Contains, "wood").is_true());
        assert!(c.contains_where("tags", SearchOperator::Contains, "glass").is_false());
    }

    #[test]
    fn missing_field_never_matches() {
        let c = inventory();
        assert!(c.contains_where("weight", SearchOperator::Eq, 1).is_false());
    }
}
