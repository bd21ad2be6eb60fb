use thiserror::Error;

use crate::numeric::format_value;

pub type UnitsResult<T> = Result<T, UnitsError>;

/// Failures reported by the checked measurement API.
///
/// The arithmetic operators on [`crate::Measurement`] never produce these;
/// they follow IEEE-754 semantics instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum UnitsError {
    #[error("Cannot convert from {from} to {to}")]
    InvalidConversion {
        from: &'static str,
        to: &'static str,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid value: {}", format_value(*.0))]
    InvalidValue(f64),

    #[error("Negative value not allowed: {}", format_value(*.0))]
    NegativeValue(f64),

    #[error("Overflow occurred during calculation")]
    Overflow,

    #[error("Underflow occurred during calculation")]
    Underflow,
}
