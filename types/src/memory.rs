//! Byte-size value object (1024-based units).

use crate::numeric::{Numeric, NumericError};
use serde::{Deserialize, Serialize};
use std::fmt;

const KB: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory {
    bytes: u64,
}

impl Memory {
    #[must_use]
    pub const fn from_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.bytes
    }

    #[must_use]
    pub fn in_kilobytes(self) -> f64 {
        self.bytes as f64 / KB as f64
    }

    #[must_use]
    pub fn in_megabytes(self) -> f64 {
        self.in_kilobytes() / KB as f64
    }

    #[must_use]
    pub fn in_gigabytes(self) -> f64 {
        self.in_megabytes() / KB as f64
    }

    #[must_use]
    pub fn in_terabytes(self) -> f64 {
        self.in_gigabytes() / KB as f64
    }

    /// Render with the largest unit the size fills, two decimal places
    /// (e.g. "1.50 MB"); plain bytes render without decimals.
    pub fn human_readable(self) -> Result<String, NumericError> {
        let (amount, unit) = if self.bytes >= KB.pow(4) {
            (self.in_terabytes(), "TB")
        } else if self.bytes >= KB.pow(3) {
            (self.in_gigabytes(), "GB")
        } else if self.bytes >= KB.pow(2) {
            (self.in_megabytes(), "MB")
        } else if self.bytes >= KB {
            (self.in_kilobytes(), "KB")
        } else {
            return Ok(format!("{} B", self.bytes));
        };
        let amount = Numeric::of(amount, 2)?;
        Ok(format!("{amount} {unit}"))
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} B", self.bytes)
    }
}
