//! Length units (base: meter).

use std::fmt;

use mt_core::{Measurement, Real, Unit};

use crate::ext::measure_ext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Feet,
    Miles,
    Inches,
    Yards,
    NauticalMiles,
}

pub type Length = Measurement<LengthUnit>;

impl Unit for LengthUnit {
    const BASE: Self = Self::Meters;
    const ALL: &'static [Self] = &[
        Self::Meters,
        Self::Kilometers,
        Self::Centimeters,
        Self::Millimeters,
        Self::Feet,
        Self::Miles,
        Self::Inches,
        Self::Yards,
        Self::NauticalMiles,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Feet => "ft",
            Self::Miles => "mi",
            Self::Inches => "in",
            Self::Yards => "yd",
            Self::NauticalMiles => "nmi",
        }
    }

    fn to_base(&self, value: Real) -> Real {
        match self {
            Self::Meters => value,
            Self::Kilometers => value * 1000.0,
            Self::Centimeters => value / 100.0,
            Self::Millimeters => value / 1000.0,
            Self::Feet => value * 0.3048,
            Self::Miles => value * 1609.344,
            Self::Inches => value * 0.0254,
            Self::Yards => value * 0.9144,
            Self::NauticalMiles => value * 1852.0,
        }
    }

    fn from_base(&self, value: Real) -> Real {
        match self {
            Self::Meters => value,
            Self::Kilometers => value / 1000.0,
            Self::Centimeters => value * 100.0,
            Self::Millimeters => value * 1000.0,
            Self::Feet => value / 0.3048,
            Self::Miles => value / 1609.344,
            Self::Inches => value / 0.0254,
            Self::Yards => value / 0.9144,
            Self::NauticalMiles => value / 1852.0,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

measure_ext! {
    /// `2.0_f64.miles()` and friends.
    LengthExt for Length {
        meters => LengthUnit::Meters,
        kilometers => LengthUnit::Kilometers,
        centimeters => LengthUnit::Centimeters,
        millimeters => LengthUnit::Millimeters,
        feet => LengthUnit::Feet,
        miles => LengthUnit::Miles,
        inches => LengthUnit::Inches,
        yards => LengthUnit::Yards,
        nautical_miles => LengthUnit::NauticalMiles,
    }
}
