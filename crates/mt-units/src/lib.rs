//! mt-units: concrete unit families for metrum.
//!
//! Provides:
//! - Length, mass, time, temperature and data-size unit families
//! - Type aliases (`Length`, `Mass`, ...) over `mt_core::Measurement`
//! - Numeric extension traits (`2.0_f64.miles()`)
//! - `AnyUnit`, a runtime tag for data-driven conversions
//! - A physical constants catalogue
//! - `uom` interop
//!
//! # Example
//!
//! ```
//! use mt_units::{LengthExt, LengthUnit, TemperatureExt, TemperatureUnit};
//!
//! let marathon = 42.195_f64.kilometers();
//! assert!((marathon.converted(LengthUnit::Miles).value() - 26.219).abs() < 1e-3);
//!
//! let boiling = 100.0_f64.celsius().converted(TemperatureUnit::Fahrenheit);
//! assert_eq!(boiling.to_string(), "212.0 °F");
//! ```
//!
//! Families never mix:
//!
//! ```compile_fail
//! use mt_units::{LengthExt, MassExt};
//!
//! let _ = 1.0_f64.meters() + 1.0_f64.kilograms();
//! ```
//!
//! ```compile_fail
//! use mt_units::{LengthExt, MassExt};
//!
//! let _ = 1.0_f64.meters() < 1.0_f64.kilograms();
//! ```

pub mod any;
pub mod constants;
pub mod data;
pub mod ext;
pub mod length;
pub mod mass;
pub mod si;
pub mod temperature;
pub mod time;

// Re-exports for ergonomics
pub use any::AnyUnit;
pub use data::{DataExt, DataSize, DataUnit};
pub use ext::AsReal;
pub use length::{Length, LengthExt, LengthUnit};
pub use mass::{Mass, MassExt, MassUnit};
pub use mt_core::{Dimension, Measurement, Real, Tolerances, Unit, UnitsError, UnitsResult};
pub use si::ToSi;
pub use temperature::{Temperature, TemperatureExt, TemperatureUnit};
pub use time::{Time, TimeExt, TimeUnit};

// Measurements are plain values, shareable across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Length>();
    assert_send_sync::<Mass>();
    assert_send_sync::<Time>();
    assert_send_sync::<Temperature>();
    assert_send_sync::<DataSize>();
    assert_send_sync::<AnyUnit>();
};
