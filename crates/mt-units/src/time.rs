//! Time units (base: second).

use std::fmt;

use mt_core::{Measurement, Real, Unit};

use crate::ext::measure_ext;

/// Seconds in a Julian year (365.25 days).
pub const SECONDS_PER_YEAR: Real = 31_557_600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    /// Julian year, see [`SECONDS_PER_YEAR`]
    Years,
}

pub type Time = Measurement<TimeUnit>;

impl Unit for TimeUnit {
    const BASE: Self = Self::Seconds;
    const ALL: &'static [Self] = &[
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
        Self::Nanoseconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Years,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "μs",
            Self::Nanoseconds => "ns",
            Self::Minutes => "min",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Weeks => "wk",
            Self::Years => "yr",
        }
    }

    fn to_base(&self, value: Real) -> Real {
        match self {
            Self::Seconds => value,
            Self::Milliseconds => value / 1000.0,
            Self::Microseconds => value / 1_000_000.0,
            Self::Nanoseconds => value / 1_000_000_000.0,
            Self::Minutes => value * 60.0,
            Self::Hours => value * 3600.0,
            Self::Days => value * 86_400.0,
            Self::Weeks => value * 604_800.0,
            Self::Years => value * SECONDS_PER_YEAR,
        }
    }

    fn from_base(&self, value: Real) -> Real {
        match self {
            Self::Seconds => value,
            Self::Milliseconds => value * 1000.0,
            Self::Microseconds => value * 1_000_000.0,
            Self::Nanoseconds => value * 1_000_000_000.0,
            Self::Minutes => value / 60.0,
            Self::Hours => value / 3600.0,
            Self::Days => value / 86_400.0,
            Self::Weeks => value / 604_800.0,
            Self::Years => value / SECONDS_PER_YEAR,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Seconds-valued measurement of a std duration.
pub fn from_duration(d: std::time::Duration) -> Time {
    Time::new(d.as_secs_f64(), TimeUnit::Seconds)
}

measure_ext! {
    TimeExt for Time {
        seconds => TimeUnit::Seconds,
        milliseconds => TimeUnit::Milliseconds,
        microseconds => TimeUnit::Microseconds,
        nanoseconds => TimeUnit::Nanoseconds,
        minutes => TimeUnit::Minutes,
        hours => TimeUnit::Hours,
        days => TimeUnit::Days,
        weeks => TimeUnit::Weeks,
        years => TimeUnit::Years,
    }
}
