//! The contract every unit family implements.

use core::fmt;
use core::hash::Hash;

use crate::Real;

/// A closed family of units sharing one physical dimension.
///
/// Each family designates a base unit. Every conversion goes through it:
/// `to_base` maps a value expressed in `self` to the base unit and
/// `from_base` maps it back. The two must be inverses up to rounding, and
/// both must be the identity for [`Unit::BASE`].
///
/// Implementations are plain `Copy` enums; dispatch is static, one
/// [`crate::Measurement`] instantiation per family.
pub trait Unit:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Canonical unit of the family.
    const BASE: Self;

    /// Every variant of the family, base unit first.
    const ALL: &'static [Self];

    /// Display abbreviation (`"km"`, `"°C"`, `"KiB"`).
    fn symbol(&self) -> &'static str;

    fn to_base(&self, value: Real) -> Real;

    fn from_base(&self, value: Real) -> Real;

    fn is_base(&self) -> bool {
        *self == Self::BASE
    }

    /// Convert `value` from `self` into `target`, via the base unit.
    #[inline]
    fn convert(&self, value: Real, target: Self) -> Real {
        convert(value, *self, target)
    }
}

/// `to.from_base(from.to_base(value))`.
#[inline]
pub fn convert<U: Unit>(value: Real, from: U, to: U) -> Real {
    to.from_base(from.to_base(value))
}
