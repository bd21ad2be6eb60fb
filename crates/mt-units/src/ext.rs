//! Numeric literal sugar: `1.5_f64.kilometers()`, `100_i32.celsius()`.
//!
//! Bare float literals (`1.5.kilometers()`) do not resolve; the numeric type
//! has to be known, through a suffix or a typed binding.

use mt_core::Real;

/// Lossless-enough widening into [`Real`] for the extension traits.
pub trait AsReal: Copy {
    fn as_real(self) -> Real;
}

macro_rules! as_real {
    ($($t:ty),+) => {
        $(
            impl AsReal for $t {
                #[inline]
                fn as_real(self) -> Real {
                    self as Real
                }
            }
        )+
    };
}

as_real!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Declares a per-family extension trait and its blanket impl over [`AsReal`].
macro_rules! measure_ext {
    ($(#[$meta:meta])* $name:ident for $alias:ident { $($method:ident => $unit:expr),+ $(,)? }) => {
        $(#[$meta])*
        pub trait $name: $crate::ext::AsReal {
            $(
                fn $method(self) -> $alias;
            )+
        }

        impl<T: $crate::ext::AsReal> $name for T {
            $(
                #[inline]
                fn $method(self) -> $alias {
                    $alias::new(self.as_real(), $unit)
                }
            )+
        }
    };
}

pub(crate) use measure_ext;
