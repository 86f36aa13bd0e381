//! Arithmetic operators.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::Rational;

use crate::{integer::Integer, Error, ErrorKind};

impl<T> Rational<T>
where
    T: Integer,
{
    /// Divide by a given fraction or integer.
    ///
    /// An error is returned if the divisor is zero.
    pub fn try_div<R>(self, rhs: R) -> Result<Self, Error>
    where
        R: Into<Self>,
    {
        let rhs = rhs.into();

        if rhs.num == T::ZERO {
            return Err(Error::from(ErrorKind::DivisionByZero));
        }

        Ok(Self::reduced(self.num * rhs.den, self.den * rhs.num))
    }

    /// Divide this fraction in place.
    ///
    /// An error is returned if the divisor is zero. The fraction is left
    /// untouched in such case.
    pub fn try_div_assign<R>(&mut self, rhs: R) -> Result<(), Error>
    where
        R: Into<Self>,
    {
        *self = self.try_div(rhs)?;

        Ok(())
    }
}

impl<T> Add for Rational<T>
where
    T: Integer,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::reduced(self.num * rhs.den + self.den * rhs.num, self.den * rhs.den)
    }
}

impl<T> Sub for Rational<T>
where
    T: Integer,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::reduced(self.num * rhs.den - self.den * rhs.num, self.den * rhs.den)
    }
}

impl<T> Mul for Rational<T>
where
    T: Integer,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduced(self.num * rhs.num, self.den * rhs.den)
    }
}

impl<T> Div for Rational<T>
where
    T: Integer,
{
    type Output = Self;

    /// # Panics
    ///
    /// The method panics if the divisor is zero. Use `try_div` to get an
    /// error instead.
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(rhs) {
            Ok(res) => res,
            Err(err) => panic!("{}", err),
        }
    }
}

// Integer operands are promoted to `n/1` and the compound assignments
// replace the whole value at once.
macro_rules! forward_ops {
    ($($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident;)+) => {
        $(
            impl<T> $Op<T> for Rational<T>
            where
                T: Integer,
            {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output {
                    $Op::$op(self, Self::from_integer(rhs))
                }
            }

            impl<T> $OpAssign for Rational<T>
            where
                T: Integer,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: Self) {
                    *self = $Op::$op(*self, rhs);
                }
            }

            impl<T> $OpAssign<T> for Rational<T>
            where
                T: Integer,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    *self = $Op::$op(*self, Self::from_integer(rhs));
                }
            }
        )+
    };
}

forward_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
}

// Foreign integer types on the left hand side need an impl per type.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Add<Rational<$t>> for $t {
                type Output = Rational<$t>;

                #[inline]
                fn add(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) + rhs
                }
            }

            impl Sub<Rational<$t>> for $t {
                type Output = Rational<$t>;

                #[inline]
                fn sub(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) - rhs
                }
            }

            impl Mul<Rational<$t>> for $t {
                type Output = Rational<$t>;

                #[inline]
                fn mul(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) * rhs
                }
            }

            impl Div<Rational<$t>> for $t {
                type Output = Rational<$t>;

                #[inline]
                fn div(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) / rhs
                }
            }
        )*
    };
}

scalar_lhs_ops!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::Rational;

    use crate::{ErrorKind, Rational32, Rational64};

    fn r(num: i32, den: i32) -> Rational32 {
        Rational::new(num, den).unwrap()
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!((r(1, 2) + r(1, 3)).to_string(), "5/6");
        assert_eq!((r(1, 2) + r(2, -3)).to_string(), "-1/6");
        assert_eq!((r(1, 2) - r(1, 3)).to_string(), "1/6");
        assert_eq!((r(1, 2) * r(1, 3)).to_string(), "1/6");
        assert_eq!((r(1, 2) / r(1, 3)).to_string(), "3/2");
        assert_eq!((r(1, 2) / r(-1, 3)).to_string(), "-3/2");
        assert_eq!((r(2, 3) * r(3, 2)).to_string(), "1/1");
        assert_eq!((r(1, 3) - r(1, 3)).to_string(), "0/1");
    }

    #[test]
    fn test_scalar_arithmetic() {
        let a = r(1, 2);

        assert_eq!((a + 1i32).to_string(), "3/2");
        assert_eq!((a - 1i32).to_string(), "-1/2");
        assert_eq!((a * 4i32).to_string(), "2/1");
        assert_eq!((a / 2i32).to_string(), "1/4");

        assert_eq!((1i32 + a).to_string(), "3/2");
        assert_eq!((1i32 - a).to_string(), "1/2");
        assert_eq!((4i32 * a).to_string(), "2/1");
        assert_eq!((2i32 / a).to_string(), "4/1");
    }

    #[test]
    fn test_scalar_promotion_equivalence() {
        let values = [r(1, 2), r(-7, 3), r(0, 1), r(5, 1), r(-1, 11)];

        for &a in values.iter() {
            for k in -5..=5 {
                let b = Rational::from_integer(k);

                assert_eq!((a + k).to_string(), (a + b).to_string());
                assert_eq!((a - k).to_string(), (a - b).to_string());
                assert_eq!((a * k).to_string(), (a * b).to_string());

                assert_eq!((k + a).to_string(), (b + a).to_string());
                assert_eq!((k - a).to_string(), (b - a).to_string());
                assert_eq!((k * a).to_string(), (b * a).to_string());

                if k != 0 {
                    assert_eq!((a / k).to_string(), (a / b).to_string());
                }

                if a.num() != 0 {
                    assert_eq!((k / a).to_string(), (b / a).to_string());
                }
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        let err = r(1, 2).try_div(r(0, 5)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DivisionByZero);

        let err = r(1, 2).try_div(0i32).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DivisionByZero);

        assert_eq!(r(1, 2).try_div(r(1, 3)).unwrap().to_string(), "3/2");
        assert_eq!(r(1, 2).try_div(3i32).unwrap().to_string(), "1/6");
    }

    #[test]
    #[should_panic(expected = "cannot divide by a fraction with a zero numerator")]
    fn test_division_by_zero_panics() {
        let _ = r(1, 2) / r(0, 5);
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = r(1, 2);

        a += r(1, 3);

        assert_eq!(a.to_string(), "5/6");

        a -= 1i32;

        assert_eq!(a.to_string(), "-1/6");

        a *= r(-3, 2);

        assert_eq!(a.to_string(), "1/4");

        a /= r(1, 2);

        assert_eq!(a.to_string(), "1/2");

        a += 2i32;
        a *= 2i32;

        assert_eq!(a.to_string(), "5/1");

        a /= 10i32;

        assert_eq!(a.to_string(), "1/2");

        a -= r(1, 2);

        assert_eq!(a.to_string(), "0/1");
    }

    #[test]
    fn test_failed_division_keeps_value() {
        let mut a = r(7, 9);

        let err = a.try_div_assign(r(0, 3)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(a.to_string(), "7/9");

        a.try_div_assign(7i32).unwrap();

        assert_eq!(a.to_string(), "1/9");
    }

    #[test]
    fn test_other_widths() {
        let a = Rational::new(1i8, 2).unwrap();
        let b = Rational::new(1i8, 3).unwrap();

        assert_eq!((a + b).to_string(), "5/6");

        let a = Rational64::new(1, 4_000_000_000).unwrap();
        let b = Rational64::new(3, 4).unwrap();

        assert_eq!((a + b).to_string(), "3000000001/4000000000");

        let a = Rational::new(3i128, -9).unwrap();

        assert_eq!((a * 3i128).to_string(), "-1/1");
        assert_eq!((2isize * Rational::new(1isize, 4).unwrap()).to_string(), "1/2");
    }
}
