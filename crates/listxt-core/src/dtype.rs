//! Element capabilities used by the numeric operations.
//!
//! The hierarchy is:
//! ```text
//! AsNumber        runtime check, `Option<f64>`
//!   └── Numeric   compile-time guarantee, infallible `to_f64`
//! ```
//!
//! Natural ordering needs no trait of its own: it is `PartialOrd`, and a
//! pair for which `partial_cmp` yields `None` is the runtime failure.
//!
//! Generic operations that can meet non-numeric elements (for example a
//! sequence of [`Value`](crate::Value)s) bound on [`AsNumber`] and report a
//! [`CoreError::TypeMismatch`](crate::CoreError::TypeMismatch) on the first
//! element that does not convert. Vector operations bound on [`Numeric`] and
//! cannot fail that way.

use core::fmt;

use num_traits::AsPrimitive;

// ---------------------------------------------------------------------------
// AsNumber: the runtime capability
// ---------------------------------------------------------------------------

/// An element that may be viewed as a 64-bit float.
pub trait AsNumber {
    /// The element as an `f64`, or `None` if it is not numeric.
    fn as_number(&self) -> Option<f64>;
}

// ---------------------------------------------------------------------------
// Numeric: the compile-time capability
// ---------------------------------------------------------------------------

/// Element types that always convert to `f64`.
///
/// Integer types wider than 53 bits convert with rounding, the same as an
/// `as f64` cast.
pub trait Numeric: AsNumber + Copy + PartialOrd + fmt::Debug + 'static {
    /// Convert to `f64`.
    fn to_f64(self) -> f64;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    <$ty as AsPrimitive<f64>>::as_(self)
                }
            }

            impl AsNumber for $ty {
                #[inline]
                fn as_number(&self) -> Option<f64> {
                    Some(self.to_f64())
                }
            }
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

macro_rules! impl_not_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsNumber for $ty {
                #[inline]
                fn as_number(&self) -> Option<f64> {
                    None
                }
            }
        )*
    };
}

impl_not_numeric!(bool, char, String, str);

impl<T: AsNumber + ?Sized> AsNumber for &T {
    #[inline]
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }
}

impl<T: AsNumber> AsNumber for Option<T> {
    #[inline]
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(AsNumber::as_number)
    }
}
