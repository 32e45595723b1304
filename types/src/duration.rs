//! Millisecond-based duration value object.

use serde::{Deserialize, Serialize};
use std::fmt;

const MILLISECONDS_IN_SECOND: u64 = 1000;
const SECONDS_IN_MINUTE: u64 = 60;
const MINUTES_IN_HOUR: u64 = 60;
const HOURS_IN_DAY: u64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    #[must_use]
    pub const fn of(milliseconds: u64) -> Self {
        Self { milliseconds }
    }

    #[must_use]
    pub const fn milliseconds(self) -> u64 {
        self.milliseconds
    }

    #[must_use]
    pub fn in_seconds(self) -> f64 {
        self.milliseconds as f64 / MILLISECONDS_IN_SECOND as f64
    }

    #[must_use]
    pub fn in_minutes(self) -> f64 {
        self.in_seconds() / SECONDS_IN_MINUTE as f64
    }

    #[must_use]
    pub fn in_hours(self) -> f64 {
        self.in_minutes() / MINUTES_IN_HOUR as f64
    }

    #[must_use]
    pub fn in_days(self) -> f64 {
        self.in_hours() / HOURS_IN_DAY as f64
    }

    /// Render as "1 day 2 hours 3 minutes 4 seconds 5 ms", skipping zero
    /// units, joined with `glue`. A zero duration renders as "0 ms".
    #[must_use]
    pub fn human_readable(self, glue: &str) -> String {
        let mut rest = self.milliseconds;
        let ms = rest % MILLISECONDS_IN_SECOND;
        rest /= MILLISECONDS_IN_SECOND;
        let seconds = rest % SECONDS_IN_MINUTE;
        rest /= SECONDS_IN_MINUTE;
        let minutes = rest % MINUTES_IN_HOUR;
        rest /= MINUTES_IN_HOUR;
        let hours = rest % HOURS_IN_DAY;
        let days = rest / HOURS_IN_DAY;

        let mut parts = Vec::new();
        for (amount, singular, plural) in [
            (days, "day", "days"),
            (hours, "hour", "hours"),
            (minutes, "minute", "minutes"),
            (seconds, "second", "seconds"),
        ] {
            if amount > 0 {
                let unit = if amount == 1 { singular } else { plural };
                parts.push(format!("{amount} {unit}"));
            }
        }
        if ms > 0 || parts.is_empty() {
            parts.push(format!("{ms} ms"));
        }
        parts.join(glue)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.milliseconds)
    }
}
