//! Ordered-map collection wrapper and typed collections for Lodestone.
//!
//! [`Collection`] is an insertion-ordered map with unique keys and a logically
//! immutable API: mutations consume the receiver and return a new instance,
//! and a read-only collection rejects them outright. [`TypedCollection`] adds
//! the list/map key discipline and per-element validation hooks on top;
//! [`NumericCollection`] specializes aggregation over fixed-precision
//! decimals.

mod date_time_collection;
mod error;
mod guard;
mod key;
mod map;
mod numeric_collection;
mod search;
mod string_type_collection;
mod typed;

pub use date_time_collection::DateTimeCollection;
pub use error::CollectionError;
pub use guard::{Guard, Predicate};
pub use key::Key;
pub use map::Collection;
pub use numeric_collection::NumericCollection;
pub use search::SearchOperator;
pub use string_type_collection::{NonEmptyElements, StringTypeCollection};
pub use typed::{CollectionRules, NoRules, Shape, TypedCollection};
