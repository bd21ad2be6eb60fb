use crate::UnitsError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute tolerance used by `Measurement` equality, in base units.
///
/// Fixed and not scale invariant: measurements whose base values are far
/// above 1e10 (light years, petabytes) compare with an effectively exact
/// test, tiny ones (nanoseconds) compare equal too eagerly.
pub const BASE_EPSILON: Real = 1e-10;

/// Combined absolute/relative tolerance for approximate comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real) -> Result<Real, UnitsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(UnitsError::InvalidValue(v))
    }
}

/// Largest magnitude still written out in positional notation (2^54).
const POSITIONAL_LIMIT: Real = 18_014_398_509_481_984.0;

/// Render a value the way measurement descriptions expect it.
///
/// Whole numbers keep a trailing `.0` (`512.0`). Magnitudes up to 2^54 stay
/// positional (`10000000000000000.0`); beyond that, and below `1e-4`,
/// exponents carry an explicit sign and at least two digits (`2e+16`,
/// `1.5e-07`). NaN renders as `nan`.
pub fn format_value(v: Real) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    // every float in this band is an even integer, so one decimal is exact
    if (1e16..=POSITIONAL_LIMIT).contains(&v.abs()) {
        return format!("{v:.1}");
    }
    let raw = format!("{v:?}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}
