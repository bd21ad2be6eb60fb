//! Tables printed by `mt-cli units` and `mt-cli constants`.

use std::io::{self, Write};

use mt_core::{Dimension, format_value};
use mt_units::AnyUnit;
use mt_units::constants::GROUPS;

/// One line per unit: `1 {symbol} = {factor} {base symbol}`.
///
/// Affine units are shown by where their 1 lands on the base scale.
pub fn write_units(out: &mut dyn Write, dimension: Dimension) -> io::Result<()> {
    let units = AnyUnit::units_of(dimension);
    if units.is_empty() {
        writeln!(out, "No units defined for {dimension}")?;
        return Ok(());
    }
    writeln!(out, "{dimension} (base: {})", dimension.base_symbol())?;
    for unit in units {
        writeln!(
            out,
            "  {:<4} 1 {} = {} {}",
            unit.symbol(),
            unit.symbol(),
            format_value(unit.to_base(1.0)),
            dimension.base_symbol()
        )?;
    }
    Ok(())
}

pub fn write_all_units(out: &mut dyn Write) -> io::Result<()> {
    for (i, dim) in AnyUnit::DIMENSIONS.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_units(out, dim)?;
    }
    Ok(())
}

pub fn write_constants(out: &mut dyn Write) -> io::Result<()> {
    for (i, (group, table)) in GROUPS.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{group}")?;
        for (name, value) in table.iter() {
            writeln!(out, "  {name:<24} {value:e}")?;
        }
    }
    Ok(())
}
