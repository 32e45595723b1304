//! Core value objects for Lodestone.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything is an immutable value object created through a
//! named constructor (`of`, `from_bytes`, `v4`, ...); transformations return
//! new instances, and predicates answer with [`BoolEnum`] instead of raw
//! booleans so boolean intent stays explicit at call sites.

mod bool_enum;
mod date_time;
mod duration;
mod locale;
mod memory;
mod null;
mod numeric;
mod string_type;
mod uuid_type;

pub use bool_enum::{BoolEnum, GuardError};
pub use date_time::{DateTime, DateTimeError};
pub use duration::Duration;
pub use locale::Locale;
pub use memory::Memory;
pub use null::{NullEnum, Nullable};
pub use numeric::{
    MAX_PRECISION, Numeric, NumericError, NumericInput, RoundingMode, ToNumeric,
};
pub use string_type::StringType;
pub use uuid_type::{Uuid, UuidError};
