//! Physical and mathematical constants, SI units throughout.
//!
//! Plain `f64` data; nothing here is tied to a unit family.

use mt_core::Real;

// Mathematical
pub const PI: Real = std::f64::consts::PI;
pub const E: Real = std::f64::consts::E;
/// (1 + √5) / 2
pub const GOLDEN_RATIO: Real = 1.618_033_988_749_895;

// Speed (m/s)
pub const SPEED_OF_LIGHT: Real = 299_792_458.0;
/// Dry air at 20 °C
pub const SPEED_OF_SOUND: Real = 343.0;

// Gravitation
/// m³/(kg·s²)
pub const GRAVITATIONAL_CONSTANT: Real = 6.674_30e-11;
/// m/s²
pub const STANDARD_GRAVITY: Real = 9.806_65;

// Planck (J·s, m, s, kg, K)
pub const PLANCK_CONSTANT: Real = 6.626_070_15e-34;
pub const REDUCED_PLANCK_CONSTANT: Real = 1.054_571_817e-34;
pub const PLANCK_LENGTH: Real = 1.616_255e-35;
pub const PLANCK_TIME: Real = 5.391_247e-44;
pub const PLANCK_MASS: Real = 2.176_434e-8;
pub const PLANCK_TEMPERATURE: Real = 1.416_784e32;

// Quantum and atomic
/// C
pub const ELEMENTARY_CHARGE: Real = 1.602_176_634e-19;
/// kg
pub const ELECTRON_MASS: Real = 9.109_383_701_5e-31;
/// kg
pub const PROTON_MASS: Real = 1.672_621_923_69e-27;
/// kg
pub const NEUTRON_MASS: Real = 1.674_927_498_04e-27;
/// Dimensionless
pub const FINE_STRUCTURE_CONSTANT: Real = 7.297_352_569_3e-3;
/// m⁻¹
pub const RYDBERG_CONSTANT: Real = 10_973_731.568_160;

// Thermodynamic
/// mol⁻¹
pub const AVOGADRO_CONSTANT: Real = 6.022_140_76e23;
/// J/K
pub const BOLTZMANN_CONSTANT: Real = 1.380_649e-23;
/// J/(mol·K)
pub const GAS_CONSTANT: Real = 8.314_462_618;
/// W/(m²·K⁴)
pub const STEFAN_BOLTZMANN_CONSTANT: Real = 5.670_374_419e-8;

// Electromagnetic
/// F/m
pub const VACUUM_PERMITTIVITY: Real = 8.854_187_812_8e-12;
/// H/m
pub const VACUUM_PERMEABILITY: Real = 1.256_637_062_12e-6;
/// Wb
pub const MAGNETIC_FLUX_QUANTUM: Real = 2.067_833_848e-15;

// Atomic units
/// m
pub const BOHR_RADIUS: Real = 5.291_772_109_03e-11;
/// kg
pub const ATOMIC_MASS_UNIT: Real = 1.660_539_066_60e-27;

// Energy (J)
pub const ELECTRON_VOLT: Real = 1.602_176_634e-19;
pub const CALORIE: Real = 4.184;

// Astronomical (m, kg)
pub const ASTRONOMICAL_UNIT: Real = 1.495_978_707e11;
pub const LIGHT_YEAR: Real = 9.460_730_472_580_8e15;
pub const PARSEC: Real = 3.085_677_581_491_367_3e16;
pub const SOLAR_MASS: Real = 1.988_47e30;
pub const EARTH_MASS: Real = 5.972_37e24;
/// Mean radius
pub const EARTH_RADIUS: Real = 6.371e6;

pub type ConstantTable = &'static [(&'static str, Real)];

pub const MATHEMATICAL: ConstantTable = &[("pi", PI), ("e", E), ("golden_ratio", GOLDEN_RATIO)];

pub const SPEED: ConstantTable = &[
    ("speed_of_light", SPEED_OF_LIGHT),
    ("speed_of_sound", SPEED_OF_SOUND),
];

pub const GRAVITATIONAL: ConstantTable = &[
    ("gravitational_constant", GRAVITATIONAL_CONSTANT),
    ("standard_gravity", STANDARD_GRAVITY),
];

/// Named groups, in display order.
pub const GROUPS: &[(&str, ConstantTable)] = &[
    ("mathematical", MATHEMATICAL),
    ("speed", SPEED),
    ("gravitational", GRAVITATIONAL),
];

/// Find a grouped constant by name.
pub fn lookup(name: &str) -> Option<Real> {
    GROUPS
        .iter()
        .flat_map(|(_, table)| table.iter())
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
}
