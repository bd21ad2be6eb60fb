//! Value + unit pairs and their arithmetic.
//!
//! Everything cross-unit goes through [`Unit::to_base`] / [`Unit::from_base`]:
//! equality, ordering and hashing look only at the base value, so
//! `1000 m == 1 km` and both hash alike.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::numeric::{BASE_EPSILON, Tolerances, format_value, nearly_equal};
use crate::{Real, Unit, UnitsError, UnitsResult};

/// A numeric value tagged with a unit of family `U`.
///
/// Immutable: every operation returns a new measurement. Measurements of
/// different families are different types and cannot be mixed.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement<U> {
    value: Real,
    unit: U,
}

impl<U: Unit> Measurement<U> {
    #[inline]
    pub const fn new(value: Real, unit: U) -> Self {
        Self { value, unit }
    }

    /// Same as [`Measurement::new`] but rejects NaN and infinities.
    pub fn try_new(value: Real, unit: U) -> UnitsResult<Self> {
        if !value.is_finite() {
            tracing::debug!(value, unit = unit.symbol(), "rejected non-finite measurement");
            return Err(UnitsError::InvalidValue(value));
        }
        Ok(Self::new(value, unit))
    }

    /// Validating constructor for quantities that cannot be negative.
    ///
    /// The sign test runs on the base value, so `-10 °C` is accepted while
    /// `-10 K` is not.
    pub fn try_new_non_negative(value: Real, unit: U) -> UnitsResult<Self> {
        let m = Self::try_new(value, unit)?;
        if m.base_value() < 0.0 {
            tracing::debug!(value, unit = unit.symbol(), "rejected negative measurement");
            return Err(UnitsError::NegativeValue(value));
        }
        Ok(m)
    }

    /// Value expressed in the base unit of the family.
    #[inline]
    pub fn base(value: Real) -> Self {
        Self::new(value, U::BASE)
    }

    #[inline]
    pub fn value(&self) -> Real {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    #[inline]
    pub fn base_value(&self) -> Real {
        self.unit.to_base(self.value)
    }

    pub fn converted(&self, target: U) -> Self {
        Self::new(self.unit.convert(self.value, target), target)
    }

    pub fn in_base(&self) -> Self {
        self.converted(U::BASE)
    }

    /// Fails with [`UnitsError::Overflow`] when the converted value is not finite.
    pub fn try_converted(&self, target: U) -> UnitsResult<Self> {
        let out = self.converted(target);
        if self.value.is_finite() && !out.value.is_finite() {
            tracing::debug!(
                value = self.value,
                from = self.unit.symbol(),
                to = target.symbol(),
                "conversion overflowed"
            );
            return Err(UnitsError::Overflow);
        }
        Ok(out)
    }

    /// Absolute value in the stored unit.
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// Relative/absolute comparison on base values.
    pub fn approx_eq(&self, other: &Self, tol: Tolerances) -> bool {
        nearly_equal(self.base_value(), other.base_value(), tol)
    }

    /// The smaller of the two; `self` on ties or when unordered.
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of the two; `self` on ties or when unordered.
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    pub fn checked_add(self, rhs: Self) -> UnitsResult<Self> {
        self.ensure_operands(rhs.value)?;
        Self::ensure_result(self + rhs)
    }

    pub fn checked_sub(self, rhs: Self) -> UnitsResult<Self> {
        self.ensure_operands(rhs.value)?;
        Self::ensure_result(self - rhs)
    }

    pub fn checked_mul(self, scalar: Real) -> UnitsResult<Self> {
        self.ensure_operands(scalar)?;
        let out = Self::ensure_result(self * scalar)?;
        if out.value == 0.0 && self.value != 0.0 && scalar != 0.0 {
            tracing::debug!(value = self.value, scalar, "multiplication underflowed");
            return Err(UnitsError::Underflow);
        }
        Ok(out)
    }

    pub fn checked_div(self, divisor: Real) -> UnitsResult<Self> {
        if divisor == 0.0 {
            tracing::debug!(value = self.value, "division by zero");
            return Err(UnitsError::DivisionByZero);
        }
        self.ensure_operands(divisor)?;
        let out = Self::ensure_result(self / divisor)?;
        if out.value == 0.0 && self.value != 0.0 {
            tracing::debug!(value = self.value, divisor, "division underflowed");
            return Err(UnitsError::Underflow);
        }
        Ok(out)
    }

    fn ensure_operands(&self, other: Real) -> UnitsResult<()> {
        for v in [self.value, other] {
            if !v.is_finite() {
                return Err(UnitsError::InvalidValue(v));
            }
        }
        Ok(())
    }

    fn ensure_result(out: Self) -> UnitsResult<Self> {
        if out.value.is_finite() {
            Ok(out)
        } else {
            tracing::debug!(unit = out.unit.symbol(), "arithmetic overflowed");
            Err(UnitsError::Overflow)
        }
    }
}

impl<U: Unit> PartialEq for Measurement<U> {
    fn eq(&self, other: &Self) -> bool {
        (self.base_value() - other.base_value()).abs() < BASE_EPSILON
    }
}

/// Base values within [`BASE_EPSILON`] compare `Equal`, so `<` is false for
/// them even when the raw base values differ. This keeps `<`, `<=` and `==`
/// in agreement.
impl<U: Unit> PartialOrd for Measurement<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.base_value().partial_cmp(&other.base_value())
    }
}

/// Hashes the exact bits of the base value. Measurements that are `==` only
/// through the epsilon (`12 in` and `1 ft` after rounding) can hash apart, so
/// hashed collections may keep both.
impl<U: Unit> Hash for Measurement<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let base = self.base_value();
        // -0.0 and 0.0 are equal, keep their hashes equal too
        let base = if base == 0.0 { 0.0 } else { base };
        base.to_bits().hash(state);
    }
}

impl<U: Unit> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_value(self.value), self.unit.symbol())
    }
}

impl<U: Unit> Add for Measurement<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let rhs = rhs.converted(self.unit);
        Self::new(self.value + rhs.value, self.unit)
    }
}

impl<U: Unit> Sub for Measurement<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let rhs = rhs.converted(self.unit);
        Self::new(self.value - rhs.value, self.unit)
    }
}

impl<U: Unit> Mul<Real> for Measurement<U> {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Measurement<U>> for Real {
    type Output = Measurement<U>;

    fn mul(self, rhs: Measurement<U>) -> Measurement<U> {
        Measurement::new(self * rhs.value, rhs.unit)
    }
}

/// Unguarded: dividing by zero yields infinity or NaN.
impl<U: Unit> Div<Real> for Measurement<U> {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl<U: Unit> Neg for Measurement<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::testing::Span;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn accessors() {
        let m = Measurement::new(2.0, Span::Dozen);
        assert_eq!(m.value(), 2.0);
        assert_eq!(m.unit(), Span::Dozen);
        assert_eq!(m.base_value(), 24.0);
        assert_eq!(m.symbol(), "dz");
    }

    #[test]
    fn equality_uses_base_value() {
        let a = Measurement::new(24.0, Span::Unit);
        let b = Measurement::new(2.0, Span::Dozen);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Measurement::new(25.0, Span::Unit));
    }

    #[test]
    fn equality_epsilon_is_absolute() {
        let a = Measurement::new(1.0, Span::Unit);
        assert_eq!(a, Measurement::new(1.0 + 5e-11, Span::Unit));
        assert_ne!(a, Measurement::new(1.0 + 5e-10, Span::Unit));
    }

    #[test]
    fn signed_zero_hashes_alike() {
        let a = Measurement::new(0.0, Span::Unit);
        let b = Measurement::new(-0.0, Span::Unit);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn ordering_is_consistent_with_equality() {
        let a = Measurement::new(1.0, Span::Unit);
        let near = Measurement::new(1.0 + 1e-12, Span::Unit);
        assert!(a.base_value() < near.base_value());
        assert!(!(a < near));
        assert!(a <= near);
        assert!(a >= near);
        assert!(Measurement::new(1.0, Span::Dozen) > Measurement::new(11.0, Span::Unit));
    }

    #[test]
    fn nan_is_unordered() {
        let a = Measurement::new(Real::NAN, Span::Unit);
        assert_ne!(a, a);
        assert_eq!(a.partial_cmp(&a), None);
    }

    #[test]
    fn add_adopts_left_unit() {
        let sum = Measurement::new(1.0, Span::Dozen) + Measurement::new(6.0, Span::Unit);
        assert_eq!(sum.unit(), Span::Dozen);
        assert_eq!(sum.value(), 1.5);

        let rev = Measurement::new(6.0, Span::Unit) + Measurement::new(1.0, Span::Dozen);
        assert_eq!(rev.unit(), Span::Unit);
        assert_eq!(rev.value(), 18.0);
        assert_eq!(sum, rev);
    }

    #[test]
    fn affine_sub_converts_rhs_first() {
        // 5 su is 15 u; 20 u - 15 u = 5 u
        let diff = Measurement::new(20.0, Span::Unit) - Measurement::new(5.0, Span::Shifted);
        assert_eq!(diff.value(), 5.0);
        assert_eq!(diff.unit(), Span::Unit);
    }

    #[test]
    fn scalar_ops() {
        let m = Measurement::new(10.0, Span::Dozen);
        assert_eq!((m * 3.0).value(), 30.0);
        assert_eq!((3.0 * m).value(), 30.0);
        assert_eq!((m / 4.0).value(), 2.5);
        assert_eq!((-m).value(), -10.0);
        assert_eq!((m / 4.0).unit(), Span::Dozen);
    }

    #[test]
    fn division_by_zero_propagates_ieee() {
        let m = Measurement::new(1.0, Span::Unit);
        assert_eq!((m / 0.0).value(), Real::INFINITY);
        assert!((Measurement::new(0.0, Span::Unit) / 0.0).value().is_nan());
    }

    #[test]
    fn display_uses_stored_unit() {
        assert_eq!(Measurement::new(3.0, Span::Dozen).to_string(), "3.0 dz");
        assert_eq!(Measurement::new(0.5, Span::Shifted).to_string(), "0.5 su");
    }

    #[test]
    fn min_max() {
        let a = Measurement::new(1.0, Span::Dozen);
        let b = Measurement::new(13.0, Span::Unit);
        assert_eq!(a.min(b).unit(), Span::Dozen);
        assert_eq!(a.max(b).unit(), Span::Unit);
    }

    #[test]
    fn in_base_and_abs() {
        let m = Measurement::new(-2.0, Span::Dozen);
        assert_eq!(m.in_base().value(), -24.0);
        assert_eq!(m.in_base().unit(), Span::Unit);
        assert_eq!(m.abs().value(), 2.0);
    }

    #[test]
    fn approx_eq_scales() {
        let a = Measurement::new(1.0e12, Span::Unit);
        let b = Measurement::new(1.0e12 + 1.0, Span::Unit);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, Tolerances::default()));
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Measurement::try_new(1.0, Span::Unit).is_ok());
        assert!(matches!(
            Measurement::try_new(Real::INFINITY, Span::Unit),
            Err(UnitsError::InvalidValue(_))
        ));
    }

    #[test]
    fn non_negative_checks_base_value() {
        // -5 su is 5 u in base: allowed
        assert!(Measurement::try_new_non_negative(-5.0, Span::Shifted).is_ok());
        assert_eq!(
            Measurement::try_new_non_negative(-1.0, Span::Dozen),
            Err(UnitsError::NegativeValue(-1.0))
        );
    }

    #[test]
    fn checked_div_guards_zero() {
        let m = Measurement::new(1.0, Span::Unit);
        assert_eq!(m.checked_div(0.0), Err(UnitsError::DivisionByZero));
        assert_eq!(m.checked_div(-0.0), Err(UnitsError::DivisionByZero));
        assert_eq!(m.checked_div(4.0).unwrap().value(), 0.25);
    }

    #[test]
    fn checked_overflow_and_underflow() {
        let big = Measurement::new(Real::MAX, Span::Unit);
        assert_eq!(big.checked_mul(2.0), Err(UnitsError::Overflow));
        assert_eq!(big.checked_add(big), Err(UnitsError::Overflow));

        let tiny = Measurement::new(Real::MIN_POSITIVE, Span::Unit);
        assert_eq!(tiny.checked_mul(1e-300), Err(UnitsError::Underflow));
        assert_eq!(tiny.checked_div(1e300), Err(UnitsError::Underflow));

        assert_eq!(
            Measurement::new(0.0, Span::Unit).checked_mul(5.0).unwrap().value(),
            0.0
        );
    }

    #[test]
    fn checked_rejects_non_finite_operands() {
        let m = Measurement::new(1.0, Span::Unit);
        assert!(matches!(
            m.checked_mul(Real::NAN),
            Err(UnitsError::InvalidValue(_))
        ));
        assert!(matches!(
            m.checked_sub(Measurement::new(Real::INFINITY, Span::Unit)),
            Err(UnitsError::InvalidValue(_))
        ));
        assert_eq!(
            m.checked_sub(Measurement::new(1.0, Span::Dozen)).unwrap().value(),
            -11.0
        );
    }

    #[test]
    fn try_converted_flags_overflow() {
        let m = Measurement::new(Real::MAX, Span::Dozen);
        assert_eq!(m.try_converted(Span::Unit), Err(UnitsError::Overflow));
        assert_eq!(
            Measurement::new(1.0, Span::Dozen)
                .try_converted(Span::Unit)
                .unwrap()
                .value(),
            12.0
        );
    }
}
