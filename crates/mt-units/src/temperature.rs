//! Temperature units (base: kelvin).
//!
//! Unlike the other families these scales are affine: Celsius and Fahrenheit
//! have their own zero points. Each variant therefore carries two
//! independent formulas, `to_base` and `from_base`, instead of a single
//! scale factor. Arithmetic on [`Temperature`] treats values as points on
//! the stored scale: `25 °C - 20 °C` is `5.0 °C`, not a kelvin interval.

use std::fmt;

use mt_core::{Measurement, Real, Unit};

use crate::ext::measure_ext;

/// Kelvin value of 0 °C.
pub const CELSIUS_OFFSET: Real = 273.15;

/// Fahrenheit value of 0 °C.
const FAHRENHEIT_FREEZING: Real = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureUnit {
    /// Absolute scale, SI base
    Kelvin,
    Celsius,
    Fahrenheit,
    /// Absolute scale with Fahrenheit-sized degrees
    Rankine,
}

pub type Temperature = Measurement<TemperatureUnit>;

impl Unit for TemperatureUnit {
    const BASE: Self = Self::Kelvin;
    const ALL: &'static [Self] = &[Self::Kelvin, Self::Celsius, Self::Fahrenheit, Self::Rankine];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Rankine => "°R",
        }
    }

    fn to_base(&self, value: Real) -> Real {
        match self {
            Self::Kelvin => value,
            Self::Celsius => value + CELSIUS_OFFSET,
            Self::Fahrenheit => (value - FAHRENHEIT_FREEZING) * 5.0 / 9.0 + CELSIUS_OFFSET,
            Self::Rankine => value * 5.0 / 9.0,
        }
    }

    fn from_base(&self, value: Real) -> Real {
        match self {
            Self::Kelvin => value,
            Self::Celsius => value - CELSIUS_OFFSET,
            Self::Fahrenheit => (value - CELSIUS_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_FREEZING,
            Self::Rankine => value * 9.0 / 5.0,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

measure_ext! {
    TemperatureExt for Temperature {
        kelvin => TemperatureUnit::Kelvin,
        celsius => TemperatureUnit::Celsius,
        fahrenheit => TemperatureUnit::Fahrenheit,
        rankine => TemperatureUnit::Rankine,
    }
}
