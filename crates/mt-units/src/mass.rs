//! Mass units (base: kilogram).

use std::fmt;

use mt_core::{Measurement, Real, Unit};

use crate::ext::measure_ext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MassUnit {
    Kilograms,
    Grams,
    Milligrams,
    /// 1000 kg
    MetricTons,
    /// International avoirdupois pound
    Pounds,
    Ounces,
    /// US short ton (2000 lb)
    Tons,
    /// 14 lb
    Stones,
}

pub type Mass = Measurement<MassUnit>;

impl Unit for MassUnit {
    const BASE: Self = Self::Kilograms;
    const ALL: &'static [Self] = &[
        Self::Kilograms,
        Self::Grams,
        Self::Milligrams,
        Self::MetricTons,
        Self::Pounds,
        Self::Ounces,
        Self::Tons,
        Self::Stones,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Grams => "g",
            Self::Milligrams => "mg",
            Self::MetricTons => "t",
            Self::Pounds => "lb",
            Self::Ounces => "oz",
            Self::Tons => "ton",
            Self::Stones => "st",
        }
    }

    fn to_base(&self, value: Real) -> Real {
        match self {
            Self::Kilograms => value,
            Self::Grams => value / 1000.0,
            Self::Milligrams => value / 1_000_000.0,
            Self::MetricTons => value * 1000.0,
            Self::Pounds => value * 0.453_592_37,
            Self::Ounces => value * 0.028_349_523_125,
            Self::Tons => value * 907.184_74,
            Self::Stones => value * 6.350_293_18,
        }
    }

    fn from_base(&self, value: Real) -> Real {
        match self {
            Self::Kilograms => value,
            Self::Grams => value * 1000.0,
            Self::Milligrams => value * 1_000_000.0,
            Self::MetricTons => value / 1000.0,
            Self::Pounds => value / 0.453_592_37,
            Self::Ounces => value / 0.028_349_523_125,
            Self::Tons => value / 907.184_74,
            Self::Stones => value / 6.350_293_18,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

measure_ext! {
    MassExt for Mass {
        kilograms => MassUnit::Kilograms,
        grams => MassUnit::Grams,
        milligrams => MassUnit::Milligrams,
        metric_tons => MassUnit::MetricTons,
        pounds => MassUnit::Pounds,
        ounces => MassUnit::Ounces,
        tons => MassUnit::Tons,
        stones => MassUnit::Stones,
    }
}
