//! Defines the element traits that matrices and vectors are generic over.
//!
//! The core trait is [Arithmetic], which bundles the closed binary operators
//! `+ - * / %` (and their assigning forms) with an additive and a multiplicative identity.
//! Every [Vector](crate::tensors::matrix::Vector) and [Matrix](crate::tensors::matrix::Matrix)
//! operation only needs [Arithmetic].
//!
//! An extension is the [Numeric] trait, which adds an ordering and an absolute value.
//! Only [Numeric] elements can be row reduced by an [AugmentedMatrix](crate::tensors::augmented::AugmentedMatrix),
//! since partial pivoting compares magnitudes.
//!
//! Conformances are provided for all primitive integers and floats. An exact rational type
//! is available in [rational] when the `rational` feature is enabled. Functions of a vector
//! can be used as elements through [function::ArithmeticFunction], which is [Arithmetic] but not [Numeric].
pub mod function;
#[cfg(feature = "rational")]
pub mod rational;

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};

/// A type whose values can be added, subtracted, multiplied, divided and reduced modulo
/// each other, with a zero and a one.
///
/// Division by [Arithmetic::zero] is not handled: it behaves as the type itself defines,
/// for example yielding infinity for floats and panicking for integers.
pub trait Arithmetic:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
{
    /// The additive identity, also used as the default value of new matrices.
    fn zero() -> Self;
    /// The multiplicative identity.
    fn one() -> Self;
}

/// An [Arithmetic] type with an ordering and an absolute value.
pub trait Numeric: Arithmetic + PartialOrd {
    /// Return the absolute value. For unsigned types this is the identity.
    ///
    /// For signed integers the absolute value of the minimum, such as `i32::MIN`,
    /// is not representable and overflows like [i32::abs].
    fn abs(&self) -> Self;

    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Return true iff `self / divisor` is exact. This is always the case
    /// for floats and rationals. For integers the remainder must be zero.
    #[inline(always)]
    fn is_divisible_by(&self, _divisor: &Self) -> bool {
        true
    }
}

macro_rules! impl_arithmetic {
    ($zero:literal, $one:literal, $($t:ty),*) => {
        $(
            impl Arithmetic for $t {
                #[inline(always)]
                fn zero() -> Self {
                    $zero
                }

                #[inline(always)]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_arithmetic!(0, 1, i8, i16, i32, i64, i128, isize);
impl_arithmetic!(0, 1, u8, u16, u32, u64, u128, usize);
impl_arithmetic!(0., 1., f32, f64);

macro_rules! impl_numeric_signed {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn abs(&self) -> Self {
                    <$t>::abs(*self)
                }

                #[inline(always)]
                fn is_divisible_by(&self, divisor: &Self) -> bool {
                    self.checked_rem(*divisor) == Some(0)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_unsigned {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn abs(&self) -> Self {
                    *self
                }

                #[inline(always)]
                fn is_divisible_by(&self, divisor: &Self) -> bool {
                    self.checked_rem(*divisor) == Some(0)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn abs(&self) -> Self {
                    <$t>::abs(*self)
                }
            }
        )*
    };
}

impl_numeric_signed!(i8, i16, i32, i64, i128, isize);
impl_numeric_unsigned!(u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

#[cfg(test)]
mod test {
    use super::{Arithmetic, Numeric};

    #[test]
    fn identities() {
        assert_eq!(i32::zero(), 0);
        assert_eq!(u8::one(), 1);
        assert_eq!(f64::zero(), 0.);
        assert_eq!(f32::one(), 1.);
    }

    #[test]
    fn abs() {
        assert_eq!(Numeric::abs(&-5i64), 5);
        assert_eq!(Numeric::abs(&7i8), 7);
        assert_eq!(Numeric::abs(&3u16), 3);
        assert_eq!(Numeric::abs(&-2.5f64), 2.5);
        assert_eq!(Numeric::abs(&-0.0f32), 0.);
    }

    #[test]
    fn is_zero() {
        assert!(0u64.is_zero());
        assert!(!(-1isize).is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!f64::NAN.is_zero());
    }

    #[test]
    fn divisibility() {
        assert!(6i32.is_divisible_by(&-3));
        assert!(!7i64.is_divisible_by(&2));
        assert!(!5u8.is_divisible_by(&0));
        assert!(!i8::MIN.is_divisible_by(&-1));
        assert!(1f64.is_divisible_by(&3.));
    }
}
