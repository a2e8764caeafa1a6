//! Exact rational numbers backed by GMP.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

use rug::Rational as MultiPrecisionRational;

use super::{Arithmetic, Numeric};

/// An arbitrary-precision rational number. Division is exact, so row reduction
/// over this type yields exact solutions.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(MultiPrecisionRational);

impl Rational {
    /// Create the rational `num / den`. Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Rational {
        if den == 0 {
            panic!("Denominator of a rational cannot be zero");
        }

        Rational(MultiPrecisionRational::from((num, den)))
    }

    pub fn numerator(&self) -> i64 {
        self.0.numer().to_i64_wrapping()
    }

    pub fn denominator(&self) -> i64 {
        self.0.denom().to_i64_wrapping()
    }

    /// Get the closest `f64` to this rational.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn is_integer(&self) -> bool {
        *self.0.denom() == 1
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational(MultiPrecisionRational::from(value))
    }
}

impl From<(i64, i64)> for Rational {
    fn from((num, den): (i64, i64)) -> Self {
        Rational::new(num, den)
    }
}

impl From<MultiPrecisionRational> for Rational {
    fn from(value: MultiPrecisionRational) -> Self {
        Rational(value)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $f:ident, $op_assign:ident, $f_assign:ident) => {
        impl $op<Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $f(self, rhs: Rational) -> Self::Output {
                Rational(self.0.$f(rhs.0))
            }
        }

        impl $op<&Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $f(self, rhs: &Rational) -> Self::Output {
                Rational(self.0.$f(&rhs.0))
            }
        }

        impl $op_assign<Rational> for Rational {
            #[inline]
            fn $f_assign(&mut self, rhs: Rational) {
                self.0.$f_assign(rhs.0);
            }
        }

        impl $op_assign<&Rational> for Rational {
            #[inline]
            fn $f_assign(&mut self, rhs: &Rational) {
                self.0.$f_assign(&rhs.0);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl Rem<Rational> for Rational {
    type Output = Rational;

    /// The remainder of truncating division, so that `a = trunc(a / b) * b + a % b`
    /// and the result has the sign of `a`.
    fn rem(self, rhs: Rational) -> Self::Output {
        if rhs.0 == 0 {
            panic!("Division by zero");
        }

        let q = MultiPrecisionRational::from(&self.0 / &rhs.0).trunc();
        Rational(self.0 - q * rhs.0)
    }
}

impl RemAssign<Rational> for Rational {
    fn rem_assign(&mut self, rhs: Rational) {
        *self = std::mem::take(self) % rhs;
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-self.0)
    }
}

impl Arithmetic for Rational {
    #[inline]
    fn zero() -> Self {
        Rational(MultiPrecisionRational::new())
    }

    #[inline]
    fn one() -> Self {
        Rational(MultiPrecisionRational::from(1))
    }
}

impl Numeric for Rational {
    #[inline]
    fn abs(&self) -> Self {
        Rational(self.0.clone().abs())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
