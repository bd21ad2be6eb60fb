//! Descriptive tags for the SI base dimensions.
//!
//! Purely informational: conversions never consult a `Dimension`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Length (canonical: m)
    Length,
    /// Mass (canonical: kg)
    Mass,
    /// Time (canonical: s)
    Time,
    /// Thermodynamic temperature (canonical: K)
    Temperature,
    /// Amount of substance (canonical: mol)
    Amount,
    /// Electric current (canonical: A)
    Current,
    /// Luminous intensity (canonical: cd)
    Luminosity,
    /// Information (canonical: B)
    Information,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::Temperature,
        Self::Amount,
        Self::Current,
        Self::Luminosity,
        Self::Information,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Temperature => "temperature",
            Self::Amount => "amount",
            Self::Current => "current",
            Self::Luminosity => "luminosity",
            Self::Information => "information",
        }
    }

    /// Symbol of the SI (or customary, for information) base unit.
    pub fn base_symbol(self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Mass => "kg",
            Self::Time => "s",
            Self::Temperature => "K",
            Self::Amount => "mol",
            Self::Current => "A",
            Self::Luminosity => "cd",
            Self::Information => "B",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
