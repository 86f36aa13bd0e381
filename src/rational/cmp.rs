//! Comparison operators.
//!
//! Fractions are compared by cross-multiplication, which relies on both
//! denominators being positive.

use std::cmp::Ordering;

use super::Rational;

use crate::integer::Integer;

impl<T> PartialEq for Rational<T>
where
    T: Integer,
{
    fn eq(&self, other: &Self) -> bool {
        self.num * other.den == self.den * other.num
    }
}

impl<T> Eq for Rational<T> where T: Integer {}

impl<T> PartialOrd for Rational<T>
where
    T: Integer,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Rational<T>
where
    T: Integer,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num * other.den).cmp(&(self.den * other.num))
    }
}

impl<T> PartialEq<T> for Rational<T>
where
    T: Integer,
{
    fn eq(&self, other: &T) -> bool {
        *self == Self::from_integer(*other)
    }
}

impl<T> PartialOrd<T> for Rational<T>
where
    T: Integer,
{
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.cmp(&Self::from_integer(*other)))
    }
}

macro_rules! scalar_lhs_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<Rational<$t>> for $t {
                #[inline]
                fn eq(&self, other: &Rational<$t>) -> bool {
                    Rational::from_integer(*self) == *other
                }
            }

            impl PartialOrd<Rational<$t>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Rational<$t>) -> Option<Ordering> {
                    Some(Rational::from_integer(*self).cmp(other))
                }
            }
        )*
    };
}

scalar_lhs_cmp!(i8, i16, i32, i64, i128, isize);
