//! mt-core: stable foundation for metrum.
//!
//! Contains:
//! - unit (the `Unit` family contract + base-routed conversion)
//! - measurement (generic value + unit type, arithmetic, comparison)
//! - dimension (descriptive SI dimension tags)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod dimension;
pub mod error;
pub mod measurement;
pub mod numeric;
pub mod unit;

// Re-exports: nice ergonomics for downstream crates
pub use dimension::Dimension;
pub use error::{UnitsError, UnitsResult};
pub use measurement::Measurement;
pub use numeric::*;
pub use unit::{Unit, convert};
