//! Data size units (base: byte).
//!
//! Decimal (SI) prefixes step by 1000, binary (IEC) prefixes by 1024. The two
//! families are distinct: `1 KB` is 1000 bytes, `1 KiB` is 1024 bytes.

use std::fmt;

use mt_core::{Measurement, Real, Unit};

use crate::ext::measure_ext;

const KB: Real = 1e3;
const MB: Real = 1e6;
const GB: Real = 1e9;
const TB: Real = 1e12;
const PB: Real = 1e15;

const KIB: Real = 1024.0;
const MIB: Real = 1_048_576.0;
const GIB: Real = 1_073_741_824.0;
const TIB: Real = 1_099_511_627_776.0;
const PIB: Real = 1_125_899_906_842_624.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DataUnit {
    Bytes,
    Bits,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
    Kibibytes,
    Mebibytes,
    Gibibytes,
    Tebibytes,
    Pebibytes,
}

pub type DataSize = Measurement<DataUnit>;

impl DataUnit {
    /// Bytes per unit, `None` for bits (which divide instead).
    fn bytes_per_unit(self) -> Option<Real> {
        match self {
            Self::Bytes => Some(1.0),
            Self::Bits => None,
            Self::Kilobytes => Some(KB),
            Self::Megabytes => Some(MB),
            Self::Gigabytes => Some(GB),
            Self::Terabytes => Some(TB),
            Self::Petabytes => Some(PB),
            Self::Kibibytes => Some(KIB),
            Self::Mebibytes => Some(MIB),
            Self::Gibibytes => Some(GIB),
            Self::Tebibytes => Some(TIB),
            Self::Pebibytes => Some(PIB),
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Kibibytes | Self::Mebibytes | Self::Gibibytes | Self::Tebibytes | Self::Pebibytes
        )
    }
}

impl Unit for DataUnit {
    const BASE: Self = Self::Bytes;
    const ALL: &'static [Self] = &[
        Self::Bytes,
        Self::Bits,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
        Self::Petabytes,
        Self::Kibibytes,
        Self::Mebibytes,
        Self::Gibibytes,
        Self::Tebibytes,
        Self::Pebibytes,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Bits => "b",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
            Self::Petabytes => "PB",
            Self::Kibibytes => "KiB",
            Self::Mebibytes => "MiB",
            Self::Gibibytes => "GiB",
            Self::Tebibytes => "TiB",
            Self::Pebibytes => "PiB",
        }
    }

    fn to_base(&self, value: Real) -> Real {
        match self.bytes_per_unit() {
            Some(factor) => value * factor,
            None => value / 8.0,
        }
    }

    fn from_base(&self, value: Real) -> Real {
        match self.bytes_per_unit() {
            Some(factor) => value / factor,
            None => value * 8.0,
        }
    }
}

impl fmt::Display for DataUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

measure_ext! {
    /// `16_u64.gibibytes()`, `150_i32.megabytes()`.
    DataExt for DataSize {
        bytes => DataUnit::Bytes,
        bits => DataUnit::Bits,
        kilobytes => DataUnit::Kilobytes,
        megabytes => DataUnit::Megabytes,
        gigabytes => DataUnit::Gigabytes,
        terabytes => DataUnit::Terabytes,
        petabytes => DataUnit::Petabytes,
        kibibytes => DataUnit::Kibibytes,
        mebibytes => DataUnit::Mebibytes,
        gibibytes => DataUnit::Gibibytes,
        tebibytes => DataUnit::Tebibytes,
        pebibytes => DataUnit::Pebibytes,
    }
}
