//! Rational number type.

mod cmp;
mod ops;

use std::fmt::{self, Debug, Display, Formatter};

use crate::{integer::Integer, Error, ErrorKind};

/// A rational number with 32-bit components.
pub type Rational32 = Rational<i32>;

/// A rational number with 64-bit components.
pub type Rational64 = Rational<i64>;

/// A rational number represented as a fraction.
///
/// The fraction is always kept reduced (the numerator and denominator are
/// coprime) and the denominator is always positive. The only exception are
/// values that had to be clamped while normalizing the sign of `T::MIN`
/// components because `-T::MIN` is not representable. Such components are
/// replaced with `T::MAX - 1` and the resulting value is only an
/// approximation.
///
/// Arithmetic operates directly on `T`. It never promotes to a wider type, so
/// an overflowing intermediate product panics in debug builds and wraps in
/// release builds exactly like the integer arithmetic itself.
#[derive(Copy, Clone)]
pub struct Rational<T> {
    num: T,
    den: T,
}

impl<T> Rational<T>
where
    T: Integer,
{
    /// Create a new rational number. The fraction will be reduced.
    ///
    /// An error is returned if the denominator is zero.
    pub fn new(num: T, den: T) -> Result<Self, Error> {
        if den == T::ZERO {
            return Err(Error::from(ErrorKind::InvalidDenominator));
        }

        Ok(Self::reduced(num, den))
    }

    /// Create a new rational number representing a given integer.
    #[inline]
    pub fn from_integer(value: T) -> Self {
        Self {
            num: value,
            den: T::ONE,
        }
    }

    /// Get the numerator.
    #[inline]
    pub fn num(&self) -> T {
        self.num
    }

    /// Get the denominator.
    #[inline]
    pub fn den(&self) -> T {
        self.den
    }

    /// Get the value as a floating point number with 64-bit precision.
    ///
    /// The result is an approximation.
    pub fn as_f64(&self) -> f64 {
        self.num.as_f64() / self.den.as_f64()
    }

    /// Get the value as a floating point number with 32-bit precision.
    ///
    /// The result is an approximation.
    pub fn as_f32(&self) -> f32 {
        self.num.as_f32() / self.den.as_f32()
    }

    /// Add one and return the new value.
    pub fn increment(&mut self) -> Self {
        *self += T::ONE;
        *self
    }

    /// Subtract one and return the new value.
    pub fn decrement(&mut self) -> Self {
        *self -= T::ONE;
        *self
    }

    /// Add one and return the previous value.
    pub fn post_increment(&mut self) -> Self {
        let prev = *self;

        self.increment();

        prev
    }

    /// Subtract one and return the previous value.
    pub fn post_decrement(&mut self) -> Self {
        let prev = *self;

        self.decrement();

        prev
    }

    /// Reduce a given fraction and move its sign into the numerator.
    ///
    /// The denominator must not be zero.
    pub(crate) fn reduced(num: T, den: T) -> Self {
        // the gcd is T::MIN only if both components are either 0 or T::MIN,
        // the division yields 0 or 1 in such case
        let gcd = num.gcd(den);

        let (num, den) = normalize_sign(num / gcd, den / gcd);

        Self { num, den }
    }

    /// Run the reduction again on an existing value.
    #[cfg(test)]
    fn reduce(self) -> Self {
        Self::reduced(self.num, self.den)
    }
}

/// Make the denominator positive.
///
/// `T::MIN` cannot be negated, so it gets replaced with `T::MAX - 1`.
fn normalize_sign<T>(num: T, den: T) -> (T, T)
where
    T: Integer,
{
    if den > T::ZERO {
        return (num, den);
    }

    let clamped = T::MAX - T::ONE;

    if num == T::MIN && den == T::MIN {
        crate::log(|| {
            format!(
                "fraction {}/{} cannot be negated, clamped to {}/{}",
                num, den, clamped, clamped
            )
        });

        (clamped, clamped)
    } else if num == T::MIN {
        crate::log(|| {
            format!(
                "numerator {} cannot be negated, clamped to {}",
                num, clamped
            )
        });

        (clamped, -den)
    } else if den == T::MIN {
        crate::log(|| {
            format!(
                "denominator {} cannot be negated, clamped to {}",
                den, clamped
            )
        });

        (-num, clamped)
    } else {
        (-num, -den)
    }
}

impl<T> Default for Rational<T>
where
    T: Integer,
{
    fn default() -> Self {
        Self::from_integer(T::ZERO)
    }
}

impl<T> From<T> for Rational<T>
where
    T: Integer,
{
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T> Display for Rational<T>
where
    T: Integer,
{
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl<T> Debug for Rational<T>
where
    T: Integer,
{
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}/{}", self.num, self.den)
    }
}
