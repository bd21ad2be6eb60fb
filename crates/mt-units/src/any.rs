//! Runtime-tagged unit, for boundaries where the family is only known as data
//! (batch files, command-line arguments).
//!
//! Inside Rust code prefer the typed [`mt_core::Measurement`]; mixing families
//! there is a compile error. `AnyUnit` moves that check to runtime and
//! reports it as [`UnitsError::InvalidConversion`].

use std::fmt;

use mt_core::{Dimension, Real, Unit, UnitsError, UnitsResult, convert, format_value};

use crate::{DataUnit, LengthUnit, MassUnit, TemperatureUnit, TimeUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "dimension", content = "unit", rename_all = "snake_case")
)]
pub enum AnyUnit {
    Length(LengthUnit),
    Mass(MassUnit),
    Time(TimeUnit),
    Temperature(TemperatureUnit),
    Data(DataUnit),
}

impl AnyUnit {
    /// Dimensions that have a unit family in this crate.
    pub const DIMENSIONS: [Dimension; 5] = [
        Dimension::Length,
        Dimension::Mass,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::Information,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            Self::Length(_) => Dimension::Length,
            Self::Mass(_) => Dimension::Mass,
            Self::Time(_) => Dimension::Time,
            Self::Temperature(_) => Dimension::Temperature,
            Self::Data(_) => Dimension::Information,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Length(u) => u.symbol(),
            Self::Mass(u) => u.symbol(),
            Self::Time(u) => u.symbol(),
            Self::Temperature(u) => u.symbol(),
            Self::Data(u) => u.symbol(),
        }
    }

    pub fn is_base(self) -> bool {
        match self {
            Self::Length(u) => u.is_base(),
            Self::Mass(u) => u.is_base(),
            Self::Time(u) => u.is_base(),
            Self::Temperature(u) => u.is_base(),
            Self::Data(u) => u.is_base(),
        }
    }

    pub fn to_base(self, value: Real) -> Real {
        match self {
            Self::Length(u) => u.to_base(value),
            Self::Mass(u) => u.to_base(value),
            Self::Time(u) => u.to_base(value),
            Self::Temperature(u) => u.to_base(value),
            Self::Data(u) => u.to_base(value),
        }
    }

    /// Every unit of `dimension`, base first. Empty for dimensions without a family.
    pub fn units_of(dimension: Dimension) -> Vec<AnyUnit> {
        match dimension {
            Dimension::Length => wrap(LengthUnit::ALL, Self::Length),
            Dimension::Mass => wrap(MassUnit::ALL, Self::Mass),
            Dimension::Time => wrap(TimeUnit::ALL, Self::Time),
            Dimension::Temperature => wrap(TemperatureUnit::ALL, Self::Temperature),
            Dimension::Information => wrap(DataUnit::ALL, Self::Data),
            Dimension::Amount | Dimension::Current | Dimension::Luminosity => Vec::new(),
        }
    }

    /// Convert `value` from `self` to `target`.
    ///
    /// Fails with [`UnitsError::InvalidConversion`] when the two units belong
    /// to different dimensions.
    pub fn convert(self, value: Real, target: AnyUnit) -> UnitsResult<Real> {
        let out = match (self, target) {
            (Self::Length(a), Self::Length(b)) => convert(value, a, b),
            (Self::Mass(a), Self::Mass(b)) => convert(value, a, b),
            (Self::Time(a), Self::Time(b)) => convert(value, a, b),
            (Self::Temperature(a), Self::Temperature(b)) => convert(value, a, b),
            (Self::Data(a), Self::Data(b)) => convert(value, a, b),
            _ => {
                tracing::debug!(
                    from = self.symbol(),
                    to = target.symbol(),
                    "cross-dimension conversion rejected"
                );
                return Err(UnitsError::InvalidConversion {
                    from: self.symbol(),
                    to: target.symbol(),
                });
            }
        };
        Ok(out)
    }

    /// `"{value} {symbol}"`, rendered like a typed measurement.
    pub fn describe(self, value: Real) -> String {
        format!("{} {}", format_value(value), self.symbol())
    }
}

fn wrap<U: Unit>(units: &[U], tag: fn(U) -> AnyUnit) -> Vec<AnyUnit> {
    units.iter().copied().map(tag).collect()
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<LengthUnit> for AnyUnit {
    fn from(u: LengthUnit) -> Self {
        Self::Length(u)
    }
}

impl From<MassUnit> for AnyUnit {
    fn from(u: MassUnit) -> Self {
        Self::Mass(u)
    }
}

impl From<TimeUnit> for AnyUnit {
    fn from(u: TimeUnit) -> Self {
        Self::Time(u)
    }
}

impl From<TemperatureUnit> for AnyUnit {
    fn from(u: TemperatureUnit) -> Self {
        Self::Temperature(u)
    }
}

impl From<DataUnit> for AnyUnit {
    fn from(u: DataUnit) -> Self {
        Self::Data(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_dimension_converts() {
        let km = AnyUnit::from(LengthUnit::Kilometers);
        let m = AnyUnit::from(LengthUnit::Meters);
        assert_eq!(km.convert(2.0, m).unwrap(), 2000.0);

        let c = AnyUnit::from(TemperatureUnit::Celsius);
        let f = AnyUnit::from(TemperatureUnit::Fahrenheit);
        assert!((c.convert(100.0, f).unwrap() - 212.0).abs() < 1e-9);
    }

    #[test]
    fn cross_dimension_is_rejected() {
        let km = AnyUnit::from(LengthUnit::Kilometers);
        let kg = AnyUnit::from(MassUnit::Kilograms);
        assert_eq!(
            km.convert(1.0, kg),
            Err(UnitsError::InvalidConversion { from: "km", to: "kg" })
        );
        assert_eq!(
            km.convert(1.0, kg).unwrap_err().to_string(),
            "Cannot convert from km to kg"
        );
    }

    #[test]
    fn dimension_tags() {
        assert_eq!(AnyUnit::from(DataUnit::Bits).dimension(), Dimension::Information);
        assert_eq!(AnyUnit::from(TimeUnit::Days).dimension(), Dimension::Time);
        for dim in AnyUnit::DIMENSIONS {
            let units = AnyUnit::units_of(dim);
            assert!(!units.is_empty());
            assert!(units[0].is_base());
            assert!(units.iter().all(|u| u.dimension() == dim));
            assert_eq!(units[0].symbol(), dim.base_symbol());
        }
        assert!(AnyUnit::units_of(Dimension::Current).is_empty());
    }

    #[test]
    fn describe_matches_typed_display() {
        let typed = crate::DataSize::new(512.0, DataUnit::Megabytes).to_string();
        assert_eq!(AnyUnit::from(DataUnit::Megabytes).describe(512.0), typed);
    }
}
