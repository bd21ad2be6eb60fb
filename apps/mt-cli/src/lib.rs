//! mt-cli: command-line front end for metrum.
//!
//! Contains:
//! - batch (YAML conversion batches)
//! - demo (guided walkthrough)
//! - listing (unit and constant tables)
//! - error (CLI error type)

pub mod batch;
pub mod demo;
pub mod error;
pub mod listing;

pub use error::{CliError, CliResult};

use mt_core::Dimension;
use mt_units::AnyUnit;

/// Find a unit of `dimension` by its snake_case name (`nautical_miles`) or
/// its symbol (`nmi`).
pub fn resolve_unit(dimension: Dimension, name: &str) -> CliResult<AnyUnit> {
    for unit in AnyUnit::units_of(dimension) {
        if unit.symbol() == name || unit_name(unit)?.as_deref() == Some(name) {
            return Ok(unit);
        }
    }
    Err(CliError::UnknownUnit {
        name: name.to_string(),
        dimension: dimension.name(),
    })
}

/// Serialized identifier of a unit, as used in batch files.
pub fn unit_name(unit: AnyUnit) -> CliResult<Option<String>> {
    let value = serde_yaml::to_value(unit)?;
    Ok(value
        .get("unit")
        .and_then(|v| v.as_str())
        .map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_units::{DataUnit, LengthUnit, TemperatureUnit};

    #[test]
    fn resolves_names_and_symbols() {
        assert_eq!(
            resolve_unit(Dimension::Length, "nautical_miles").unwrap(),
            AnyUnit::Length(LengthUnit::NauticalMiles)
        );
        assert_eq!(
            resolve_unit(Dimension::Length, "nmi").unwrap(),
            AnyUnit::Length(LengthUnit::NauticalMiles)
        );
        assert_eq!(
            resolve_unit(Dimension::Temperature, "°F").unwrap(),
            AnyUnit::Temperature(TemperatureUnit::Fahrenheit)
        );
        assert_eq!(
            resolve_unit(Dimension::Information, "gibibytes").unwrap(),
            AnyUnit::Data(DataUnit::Gibibytes)
        );
    }

    #[test]
    fn unknown_unit_names_the_dimension() {
        let err = resolve_unit(Dimension::Mass, "meters").unwrap_err();
        assert_eq!(err.to_string(), "Unknown unit 'meters' for mass");
    }

    #[test]
    fn unit_names_are_snake_case() {
        let name = unit_name(AnyUnit::Length(LengthUnit::NauticalMiles)).unwrap();
        assert_eq!(name.as_deref(), Some("nautical_miles"));
    }
}
