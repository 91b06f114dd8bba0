//! Semantic elapsed-time value used for break cadences and the active hours
//! window.
//!
//! A `WallClock` is an hours/minutes/seconds triple, convertible to and from
//! total seconds. It deliberately stays below one day: `from_seconds` caps at
//! 23:59:59 so the component ranges always hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound in total seconds: 23:59:59.
const MAX_TOTAL_SECONDS: i64 = 24 * 3600 - 1;

/// An elapsed-time value with hour/minute/second components.
///
/// Negative constructor inputs are replaced by the component default (zero)
/// rather than rejected. Callers that need validation do it at the
/// configuration boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallClock {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Default for WallClock {
    fn default() -> Self {
        WallClock { hours: 0, minutes: 0, seconds: 0 }
    }
}

impl WallClock {
    /// Creates a value from raw components, clamping negatives to the
    /// component default.
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        WallClock {
            hours: if hours < 0 { 0 } else { hours as u32 },
            minutes: if minutes < 0 { 0 } else { minutes as u32 },
            seconds: if seconds < 0 { 0 } else { seconds as u32 },
        }
    }

    /// Shorthand for a whole number of minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        Self::new(0, minutes, 0)
    }

    /// Converts the value to total seconds.
    pub fn total_seconds(&self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }

    /// Builds a value from total seconds, capped at 23:59:59.
    pub fn from_seconds(total: i64) -> Self {
        let total = total.clamp(0, MAX_TOTAL_SECONDS);
        WallClock {
            hours: (total / 3600) as u32,
            minutes: (total % 3600 / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    /// Subtracts `seconds` in place.
    ///
    /// Returns `false` and leaves the value unchanged when the result would
    /// go negative; the total never drops below zero.
    pub fn subtract_seconds(&mut self, seconds: i64) -> bool {
        let remaining = self.total_seconds() - seconds;
        if remaining < 0 {
            return false;
        }
        *self = Self::from_seconds(remaining);
        true
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Renders the value as an `HH:MM` time of day, for the active hours
    /// window where the components mean a clock position, not an elapsed
    /// span.
    pub fn to_time_string(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }
}

impl fmt::Display for WallClock {
    /// Renders the value omitting zero components, e.g. `1h 30m` or `45s`.
    /// A zero value renders as `0s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0s");
        }
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if self.hours > 0 {
            parts.push(format!("{}h", self.hours));
        }
        if self.minutes > 0 {
            parts.push(format!("{}m", self.minutes));
        }
        if self.seconds > 0 {
            parts.push(format!("{}s", self.seconds));
        }
        write!(f, "{}", parts.join(" "))
    }
}
