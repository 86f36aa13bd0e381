//! Integer types usable as fraction components.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

mod private {
    pub trait Sealed {}
}

/// A fixed-width signed integer type.
///
/// The trait is sealed and implemented only for `i8`, `i16`, `i32`, `i64`,
/// `i128` and `isize`. Unsigned types and `bool` cannot be used as fraction
/// components.
pub trait Integer:
    private::Sealed
    + Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Zero.
    const ZERO: Self;

    /// One.
    const ONE: Self;

    /// The smallest representable value.
    const MIN: Self;

    /// The largest representable value.
    const MAX: Self;

    /// Remainder that does not panic for `MIN % -1`.
    fn wrapping_rem(self, rhs: Self) -> Self;

    /// Absolute value, `MIN` maps to itself.
    fn wrapping_abs(self) -> Self;

    /// Convert to the closest `f64`.
    fn as_f64(self) -> f64;

    /// Convert to the closest `f32`.
    fn as_f32(self) -> f32;

    /// Greatest common divisor of the absolute values.
    ///
    /// `gcd(0, x)` is `|x|`. The result wraps to `MIN` when the true gcd is
    /// `|MIN|` (i.e. both arguments are `0` or `MIN`).
    fn gcd(self, other: Self) -> Self {
        let mut a = self;
        let mut b = other;

        while b != Self::ZERO {
            let r = a.wrapping_rem(b);

            a = b;
            b = r;
        }

        a.wrapping_abs()
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    <$t>::wrapping_rem(self, rhs)
                }

                #[inline]
                fn wrapping_abs(self) -> Self {
                    <$t>::wrapping_abs(self)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn as_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);
