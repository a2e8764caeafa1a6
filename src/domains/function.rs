//! Functions of a vector used as matrix elements.
//!
//! An [ArithmeticFunction] is [Arithmetic]: adding, multiplying, ... two functions
//! composes them pointwise, so that `(f + g)(v) = f(v) + g(v)`. A matrix of functions
//! can then be multiplied and added like any other matrix and finally evaluated
//! at a single vector with [Matrix::evaluate].
//!
//! Functions cannot be compared. [PartialEq] is implemented but always returns `false`,
//! and [PartialOrd] is not implemented at all, so that a matrix of functions can never
//! be passed to the pivoting code of [AugmentedMatrix](crate::tensors::augmented::AugmentedMatrix).
use std::{
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign},
    rc::Rc,
};

use crate::tensors::matrix::{Matrix, Vector};

use super::Arithmetic;

/// A function that maps a [Vector] to a scalar of the same element type.
pub struct ArithmeticFunction<T> {
    function: Rc<dyn Fn(&Vector<T>) -> T>,
}

impl<T> ArithmeticFunction<T> {
    /// Wrap a closure.
    pub fn new(function: impl Fn(&Vector<T>) -> T + 'static) -> ArithmeticFunction<T> {
        ArithmeticFunction {
            function: Rc::new(function),
        }
    }

    /// Evaluate the function at `input`.
    #[inline]
    pub fn call(&self, input: &Vector<T>) -> T {
        (self.function)(input)
    }
}

impl<T: Arithmetic + 'static> ArithmeticFunction<T> {
    /// The function that ignores its input and always returns `value`.
    pub fn constant(value: T) -> ArithmeticFunction<T> {
        ArithmeticFunction::new(move |_| value.clone())
    }

    /// The function that projects out the `index`th entry of its input.
    pub fn component(index: u32) -> ArithmeticFunction<T> {
        ArithmeticFunction::new(move |v: &Vector<T>| v[index].clone())
    }
}

impl<T> Clone for ArithmeticFunction<T> {
    fn clone(&self) -> Self {
        ArithmeticFunction {
            function: self.function.clone(),
        }
    }
}

impl<T> Debug for ArithmeticFunction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("ArithmeticFunction")
    }
}

impl<T> PartialEq for ArithmeticFunction<T> {
    /// Functions are not comparable: this is never `true`, not even for a function and itself.
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

macro_rules! impl_composition {
    ($op:ident, $f:ident, $op_assign:ident, $f_assign:ident) => {
        impl<T: Arithmetic + 'static> $op for ArithmeticFunction<T> {
            type Output = ArithmeticFunction<T>;

            fn $f(self, rhs: Self) -> Self::Output {
                ArithmeticFunction::new(move |v| self.call(v).$f(rhs.call(v)))
            }
        }

        impl<T: Arithmetic + 'static> $op_assign for ArithmeticFunction<T> {
            fn $f_assign(&mut self, rhs: Self) {
                let lhs = self.clone();
                *self = lhs.$f(rhs);
            }
        }
    };
}

impl_composition!(Add, add, AddAssign, add_assign);
impl_composition!(Sub, sub, SubAssign, sub_assign);
impl_composition!(Mul, mul, MulAssign, mul_assign);
impl_composition!(Div, div, DivAssign, div_assign);
impl_composition!(Rem, rem, RemAssign, rem_assign);

impl<T: Arithmetic + 'static> Arithmetic for ArithmeticFunction<T> {
    fn zero() -> Self {
        ArithmeticFunction::new(|_| T::zero())
    }

    fn one() -> Self {
        ArithmeticFunction::new(|_| T::one())
    }
}

impl<T: Arithmetic> Matrix<ArithmeticFunction<T>> {
    /// Evaluate every entry at `input`, yielding a matrix of the same shape
    /// with entries `self[(i, j)](input)`.
    pub fn evaluate(&self, input: &Vector<T>) -> Matrix<T> {
        self.map(|f| f.call(input))
    }
}
