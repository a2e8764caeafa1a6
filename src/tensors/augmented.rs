//! Systems of linear equations stored as augmented matrices, solved
//! with Gauss-Jordan elimination.

use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use tracing::{debug, instrument, trace};

use crate::{
    domains::{Arithmetic, Numeric},
    printer::AugmentedMatrixPrinter,
};

use super::matrix::{Matrix, MatrixError, MatrixSide, Vector};

/// The shape an [AugmentedMatrix] is known to be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowForm {
    /// No guarantees: freshly constructed or modified by hand.
    Unreduced,
    /// Forward elimination is in progress.
    PartiallyPivoted,
    /// Every entry below the main diagonal is zero.
    EchelonForm,
    /// The coefficients form the identity matrix and the last column holds the solution.
    ReducedEchelonForm,
}

/// A system of `n` linear equations in `n` unknowns, stored as an `n x (n+1)` matrix
/// whose last column holds the right-hand side.
///
/// For example, the system `2x + y = 5, x - y = -2` is
/// ```
/// use abmatrix::tensors::augmented::AugmentedMatrix;
///
/// let mut m = AugmentedMatrix::from([[2f64, 1., 5.], [1., -1., -2.]]);
/// m.to_rref().unwrap();
/// let x = m.values();
/// assert!((x[0] - 1.).abs() < 1e-12 && (x[1] - 3.).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AugmentedMatrix<T> {
    matrix: Matrix<T>,
    size: u32,
    form: RowForm,
}

impl<T> AugmentedMatrix<T> {
    /// Wrap a matrix with dimensions `(n, n+1)`.
    pub fn from_matrix(matrix: Matrix<T>) -> Result<AugmentedMatrix<T>, MatrixError> {
        if matrix.ncols != matrix.nrows + 1 {
            return Err(MatrixError::NotAugmented {
                nrows: matrix.nrows,
                ncols: matrix.ncols,
            });
        }

        Ok(AugmentedMatrix {
            size: matrix.nrows,
            matrix,
            form: RowForm::Unreduced,
        })
    }

    /// Create an augmented matrix from `n` rows of `n+1` scalars.
    pub fn from_nested_vec(rows: Vec<Vec<T>>) -> Result<AugmentedMatrix<T>, MatrixError> {
        AugmentedMatrix::from_matrix(Matrix::from_nested_vec(rows)?)
    }

    /// Return the number of equations, which equals the number of unknowns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn form(&self) -> RowForm {
        self.form
    }

    /// Return the full `n x (n+1)` matrix.
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }
}

impl<T: Clone> AugmentedMatrix<T> {
    /// Create the system `coefficients * x = values`, where `values` is a column vector.
    pub fn from_parts(
        coefficients: &Matrix<T>,
        values: &Matrix<T>,
    ) -> Result<AugmentedMatrix<T>, MatrixError> {
        if !coefficients.is_square() {
            return Err(MatrixError::NotSquare);
        }
        if coefficients.nrows != values.nrows {
            return Err(MatrixError::ShapeMismatch);
        }
        if values.ncols != 1 {
            return Err(MatrixError::RightHandSideIsNotVector);
        }

        AugmentedMatrix::from_matrix(coefficients.merge(values, MatrixSide::Right))
    }

    /// Create the system `coefficients * x = values`.
    pub fn from_system(
        coefficients: &Matrix<T>,
        values: &Vector<T>,
    ) -> Result<AugmentedMatrix<T>, MatrixError> {
        AugmentedMatrix::from_parts(coefficients, &values.clone().into_column_matrix())
    }

    /// Get a copy of the `n x n` coefficient matrix.
    pub fn coefficients(&self) -> Matrix<T> {
        let mut m = self.matrix.clone();
        m.remove_column(self.size);
        m
    }

    /// Get a copy of the right-hand side. After [AugmentedMatrix::to_rref]
    /// has succeeded, this is the solution of the system.
    pub fn values(&self) -> Vector<T> {
        self.matrix.column(self.size)
    }

    /// Swap rows `i` and `j`.
    pub fn row_swap(&mut self, i: u32, j: u32) {
        self.swap_rows(i, j);
        self.form = RowForm::Unreduced;
    }

    fn swap_rows(&mut self, i: u32, j: u32) {
        let (a, b) = (self.matrix.index_of(i, 0), self.matrix.index_of(j, 0));
        if a == b {
            return;
        }

        for c in 0..self.matrix.ncols as usize {
            self.matrix.data.swap(a + c, b + c);
        }
    }
}

impl<T: Arithmetic> AugmentedMatrix<T> {
    /// Create a system of `size` equations with all coefficients and values set to zero.
    pub fn new(size: u32) -> AugmentedMatrix<T> {
        if size == 0 {
            panic!("An augmented matrix must have at least one equation");
        }

        AugmentedMatrix {
            matrix: Matrix::zeros(size, size + 1),
            size,
            form: RowForm::Unreduced,
        }
    }

    /// Multiply every entry of row `i` by `factor`.
    pub fn multiply_row(&mut self, i: u32, factor: &T) {
        let start = self.matrix.index_of(i, 0);
        for e in &mut self.matrix.data[start..start + self.matrix.ncols as usize] {
            *e *= factor.clone();
        }
        self.form = RowForm::Unreduced;
    }

    /// Compute `row[dst] += row[src] * factor`.
    pub fn add_row(&mut self, src: u32, dst: u32, factor: &T) {
        let (s, d) = (self.matrix.index_of(src, 0), self.matrix.index_of(dst, 0));
        for c in 0..self.matrix.ncols as usize {
            let e = self.matrix.data[s + c].clone() * factor.clone();
            self.matrix.data[d + c] += e;
        }
        self.form = RowForm::Unreduced;
    }

    /// Compute `row[dst] -= row[src] * factor`.
    pub fn subtract_row(&mut self, src: u32, dst: u32, factor: &T) {
        self.sub_mul_row(src, dst, factor);
        self.form = RowForm::Unreduced;
    }

    fn sub_mul_row(&mut self, src: u32, dst: u32, factor: &T) {
        let (s, d) = (self.matrix.index_of(src, 0), self.matrix.index_of(dst, 0));
        for c in 0..self.matrix.ncols as usize {
            let e = self.matrix.data[s + c].clone() * factor.clone();
            self.matrix.data[d + c] -= e;
        }
    }

    fn div_row(&mut self, i: u32, divisor: &T) {
        let start = self.matrix.index_of(i, 0);
        for e in &mut self.matrix.data[start..start + self.matrix.ncols as usize] {
            *e /= divisor.clone();
        }
    }
}

impl<T: Numeric> AugmentedMatrix<T> {
    /// Divide every entry of row `i` by `divisor`.
    /// Will panic if `divisor` is zero.
    pub fn divide_row(&mut self, i: u32, divisor: &T) {
        if divisor.is_zero() {
            panic!("Cannot divide row {} by zero", i);
        }

        self.div_row(i, divisor);
        self.form = RowForm::Unreduced;
    }

    /// Bring the matrix in reduced row echelon form using Gauss-Jordan elimination
    /// with partial pivoting. Afterwards, [AugmentedMatrix::values] yields the solution.
    ///
    /// If the system does not have a unique solution, [MatrixError::Singular] is returned
    /// and the matrix is left partially reduced.
    pub fn to_rref(&mut self) -> Result<(), MatrixError> {
        self.to_rref_with_tolerance(&T::zero())
    }

    /// Bring the matrix in reduced row echelon form, treating every pivot candidate
    /// with an absolute value of at most `tolerance` as zero. For floating point
    /// systems this detects matrices that are singular up to rounding errors.
    /// A zero pivot is always rejected, even for a negative `tolerance`.
    ///
    /// For element types without exact division, such as the primitive integers,
    /// [MatrixError::InexactDivision] is returned as soon as a quotient would be truncated.
    #[instrument(level = "debug", skip_all, fields(size = self.size))]
    pub fn to_rref_with_tolerance(&mut self, tolerance: &T) -> Result<(), MatrixError> {
        self.forward_elimination(tolerance)?;
        self.back_substitution()?;
        debug!("Reduced system of size {}", self.size);
        Ok(())
    }

    /// Compute the entry at `(row, column)` divided by `pivot`, if the quotient is exact.
    fn quotient(&self, row: u32, column: u32, pivot: &T) -> Result<T, MatrixError> {
        let e = &self.matrix[(row, column)];
        if !e.is_divisible_by(pivot) {
            debug!("Entry ({},{}) is not divisible by its pivot", row, column);
            return Err(MatrixError::InexactDivision { row, column });
        }

        Ok(e.clone() / pivot.clone())
    }

    /// Write the matrix in echelon form, choosing the largest pivot in every column.
    fn forward_elimination(&mut self, tolerance: &T) -> Result<(), MatrixError> {
        for p in 0..self.size {
            // the first row with the strictly largest magnitude wins
            let mut max_row = p;
            let mut max = T::zero();
            for i in p..self.size {
                let a = self.matrix[(i, p)].abs();
                if a > max {
                    max = a;
                    max_row = i;
                }
            }

            if max.is_zero() || max <= *tolerance {
                debug!("No pivot in column {}", p);
                return Err(MatrixError::Singular { column: p });
            }

            if max_row != p {
                trace!("Swapping rows {} and {}", p, max_row);
                self.swap_rows(p, max_row);
            }
            self.form = RowForm::PartiallyPivoted;

            let pivot = self.matrix[(p, p)].clone();
            for i in p + 1..self.size {
                if self.matrix[(i, p)].is_zero() {
                    continue;
                }

                let s = self.quotient(i, p, &pivot)?;
                self.sub_mul_row(p, i, &s);
                self.matrix[(i, p)] = T::zero();
            }
        }

        self.form = RowForm::EchelonForm;
        Ok(())
    }

    /// Create a reduced matrix from a matrix in echelon form with non-zero pivots.
    /// On failure the matrix is still in echelon form.
    fn back_substitution(&mut self) -> Result<(), MatrixError> {
        for p in (0..self.size).rev() {
            let pivot = self.matrix[(p, p)].clone();
            for i in 0..p {
                if self.matrix[(i, p)].is_zero() {
                    continue;
                }

                let s = self.quotient(i, p, &pivot)?;
                self.sub_mul_row(p, i, &s);
                self.matrix[(i, p)] = T::zero();
            }
        }

        for i in 0..self.size {
            let pivot = self.matrix[(i, i)].clone();
            for c in 0..=self.size {
                if !self.matrix[(i, c)].is_divisible_by(&pivot) {
                    debug!("Row {} is not divisible by its pivot", i);
                    return Err(MatrixError::InexactDivision { row: i, column: c });
                }
            }

            self.div_row(i, &pivot);
            self.matrix[(i, i)] = T::one();
        }

        self.form = RowForm::ReducedEchelonForm;
        Ok(())
    }

    /// Solve the system without modifying it.
    pub fn solution(&self) -> Result<Vector<T>, MatrixError> {
        if self.form == RowForm::ReducedEchelonForm {
            return Ok(self.values());
        }

        let mut m = self.clone();
        m.to_rref()?;
        Ok(m.values())
    }
}

impl<T: Numeric> Matrix<T> {
    /// Solve `A * x = b` for `x`, where `A` is `self` and `b` a column vector.
    #[instrument(level = "debug", skip_all, fields(nrows = self.nrows, ncols = self.ncols))]
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let mut m = AugmentedMatrix::from_parts(self, b)?;
        m.to_rref()?;
        Ok(m.values().into_column_matrix())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for AugmentedMatrix<T> {
    /// Create an augmented matrix from a row-major literal of `n` rows with `n+1` entries.
    fn from(rows: [[T; C]; R]) -> Self {
        if C != R + 1 {
            panic!(
                "An augmented matrix must have dimensions (n,n+1) instead of ({},{})",
                R, C
            );
        }

        AugmentedMatrix {
            matrix: Matrix::from(rows),
            size: R as u32,
            form: RowForm::Unreduced,
        }
    }
}

impl<T> Index<(u32, u32)> for AugmentedMatrix<T> {
    type Output = T;

    /// Get the `i`th row and `j`th column, where `index=(i,j)`.
    /// Column `n` holds the right-hand side.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.matrix[index]
    }
}

impl<T> IndexMut<(u32, u32)> for AugmentedMatrix<T> {
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut T {
        self.form = RowForm::Unreduced;
        &mut self.matrix[index]
    }
}

impl<T: Display> Display for AugmentedMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        AugmentedMatrixPrinter::new(self).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::{AugmentedMatrix, RowForm};
    use crate::tensors::matrix::{Matrix, MatrixError, Vector};

    fn assert_close(a: &Vector<f64>, b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-12, "{} vs {}", a, y);
        }
    }

    #[test]
    fn two_equations() {
        let mut m = AugmentedMatrix::from([[2., 1., 5.], [1., -1., -2.]]);
        m.to_rref().unwrap();
        assert_eq!(m.form(), RowForm::ReducedEchelonForm);
        assert_close(&m.values(), &[1., 3.]);

        let mut m = AugmentedMatrix::from([[2., 1., 5.], [1., -1., -1.]]);
        m.to_rref().unwrap();
        assert_close(&m.values(), &[4. / 3., 7. / 3.]);
    }

    #[test]
    fn three_equations() {
        let mut m = AugmentedMatrix::from([
            [2., 1., -1., 8.],
            [-3., -1., 2., -11.],
            [-2., 1., 2., -3.],
        ]);
        m.to_rref().unwrap();
        assert_close(&m.values(), &[2., 3., -1.]);

        let c = m.coefficients();
        assert_eq!(c, Matrix::identity(3));
    }

    #[test]
    fn pivot_selection() {
        let mut m = AugmentedMatrix::from([[1., 2., 5.], [3., 4., 11.]]);
        m.forward_elimination(&0.).unwrap();
        assert_eq!(m.form(), RowForm::EchelonForm);
        // the row with the largest entry in the first column is moved up
        assert_eq!(m.as_matrix().row(0), Vector::from([3., 4., 11.]));
        assert_eq!(m[(1, 0)], 0.);

        // ties keep the first row
        let mut m = AugmentedMatrix::from([[-2., 1., 0.], [2., 1., 4.]]);
        m.forward_elimination(&0.).unwrap();
        assert_eq!(m.as_matrix().row(0), Vector::from([-2., 1., 0.]));
        assert_eq!(m.as_matrix().row(1), Vector::from([0., 2., 4.]));
    }

    #[test]
    fn idempotent() {
        let mut m = AugmentedMatrix::from([[1., 2., 5.], [3., 4., 11.]]);
        m.to_rref().unwrap();
        let reduced = m.clone();
        m.to_rref().unwrap();
        assert_eq!(m, reduced);
    }

    #[test]
    fn singular() {
        let mut m = AugmentedMatrix::from([[1., 1., 2.], [1., 1., 3.]]);
        assert_eq!(m.to_rref(), Err(MatrixError::Singular { column: 1 }));
        assert_eq!(m.form(), RowForm::PartiallyPivoted);

        let mut m = AugmentedMatrix::from([[0, 1, 2], [0, 3, 4]]);
        assert_eq!(m.to_rref(), Err(MatrixError::Singular { column: 0 }));
    }

    #[test]
    fn tolerance() {
        let mut m = AugmentedMatrix::from([[1., 1., 2.], [1., 1. + 1e-14, 3.]]);
        assert!(m.clone().to_rref().is_ok());
        assert_eq!(
            m.to_rref_with_tolerance(&1e-10),
            Err(MatrixError::Singular { column: 1 })
        );
    }

    #[test]
    fn negative_tolerance() {
        let mut m = AugmentedMatrix::from([[1f64, 1., 2.], [1., 1., 3.]]);
        assert_eq!(
            m.to_rref_with_tolerance(&-1.),
            Err(MatrixError::Singular { column: 1 })
        );
    }

    #[test]
    fn exact_integer_system() {
        let mut m = AugmentedMatrix::from([[2i64, 0, 4], [0, 3, 9]]);
        m.to_rref().unwrap();
        assert_eq!(m.values(), Vector::from([2, 3]));
        assert_eq!(m.as_matrix(), &Matrix::from([[1, 0, 2], [0, 1, 3]]));

        let mut m = AugmentedMatrix::from([[2i64, 4, 10], [-2, 0, -2]]);
        m.to_rref().unwrap();
        assert_eq!(m.as_matrix(), &Matrix::from([[1, 0, 1], [0, 1, 2]]));
    }

    #[test]
    fn inexact_integer_system() {
        // the solution is [1, 3], but 1 / 2 truncates during elimination
        let mut m = AugmentedMatrix::from([[2i64, 1, 5], [1, -1, -2]]);
        assert_eq!(
            m.to_rref(),
            Err(MatrixError::InexactDivision { row: 1, column: 0 })
        );
        assert_eq!(m.form(), RowForm::PartiallyPivoted);

        let mut m = AugmentedMatrix::from([[2i64, 1, 5], [-2, 1, -1]]);
        assert_eq!(
            m.to_rref(),
            Err(MatrixError::InexactDivision { row: 0, column: 1 })
        );
        assert_eq!(m.form(), RowForm::EchelonForm);

        let mut m = AugmentedMatrix::from([[2i64, 0, 3], [0, 1, 1]]);
        assert_eq!(
            m.to_rref(),
            Err(MatrixError::InexactDivision { row: 0, column: 2 })
        );
        assert_ne!(m.form(), RowForm::ReducedEchelonForm);
    }

    #[test]
    fn row_primitives() {
        let mut m = AugmentedMatrix::from([[1, 2, 3], [4, 5, 6]]);

        m.row_swap(0, 1);
        assert_eq!(m.as_matrix(), &Matrix::from([[4, 5, 6], [1, 2, 3]]));

        m.multiply_row(1, &2);
        assert_eq!(m.as_matrix().row(1), Vector::from([2, 4, 6]));

        m.divide_row(1, &2);
        assert_eq!(m.as_matrix().row(1), Vector::from([1, 2, 3]));

        m.add_row(1, 0, &3);
        assert_eq!(m.as_matrix().row(0), Vector::from([7, 11, 15]));

        m.subtract_row(1, 0, &7);
        assert_eq!(m.as_matrix().row(0), Vector::from([0, -3, -6]));

        assert_eq!(m.form(), RowForm::Unreduced);
    }

    #[test]
    #[should_panic]
    fn divide_row_by_zero() {
        let mut m = AugmentedMatrix::from([[1., 2., 3.], [4., 5., 6.]]);
        m.divide_row(0, &0.);
    }

    #[test]
    fn mutation_resets_form() {
        let mut m = AugmentedMatrix::from([[1., 0., 2.], [0., 1., 3.]]);
        m.to_rref().unwrap();
        assert_eq!(m.solution(), Ok(Vector::from([2., 3.])));

        m[(1, 2)] = 5.;
        assert_eq!(m.form(), RowForm::Unreduced);
        assert_eq!(m.solution(), Ok(Vector::from([2., 5.])));
        assert_eq!(m.form(), RowForm::Unreduced);
    }

    #[test]
    fn construction() {
        let m = AugmentedMatrix::<f32>::new(3);
        assert_eq!(m.size(), 3);
        assert_eq!(m.as_matrix().ncols(), 4);
        assert_eq!(m.values(), Vector::from([0., 0., 0.]));

        let a = Matrix::from([[2, 1], [1, -1]]);
        let b = Matrix::from([[5], [-2]]);
        let m = AugmentedMatrix::from_parts(&a, &b).unwrap();
        assert_eq!(m, AugmentedMatrix::from([[2, 1, 5], [1, -1, -2]]));
        assert_eq!(m.coefficients(), a);
        assert_eq!(
            AugmentedMatrix::from_system(&a, &Vector::from([5, -2])),
            Ok(m)
        );

        assert_eq!(
            AugmentedMatrix::from_parts(&Matrix::from([[1, 2, 3], [4, 5, 6]]), &b),
            Err(MatrixError::NotSquare)
        );
        assert_eq!(
            AugmentedMatrix::from_parts(&a, &Matrix::from([[1], [2], [3]])),
            Err(MatrixError::ShapeMismatch)
        );
        assert_eq!(
            AugmentedMatrix::from_parts(&a, &Matrix::from([[1, 2], [3, 4]])),
            Err(MatrixError::RightHandSideIsNotVector)
        );
        assert_eq!(
            AugmentedMatrix::from_nested_vec(vec![vec![1, 2], vec![3, 4]]),
            Err(MatrixError::NotAugmented { nrows: 2, ncols: 2 })
        );
    }

    #[test]
    #[should_panic]
    fn bad_literal() {
        let _ = AugmentedMatrix::from([[1, 2], [3, 4]]);
    }

    #[test]
    fn solve() {
        let a = Matrix::from([[1f64, 2.], [3., 4.]]);
        let b = Matrix::new_vec(vec![5f64, 11.]);
        let x = a.solve(&b).unwrap();
        assert_eq!((x.nrows(), x.ncols()), (2, 1));
        assert!((&(&a * &x) - &b).as_slice().iter().all(|e| e.abs() < 1e-12));

        assert_eq!(
            Matrix::from([[1., 2.], [2., 4.]]).solve(&b),
            Err(MatrixError::Singular { column: 1 })
        );
    }

    #[cfg(feature = "rational")]
    #[test]
    fn exact_rational() {
        use crate::domains::rational::Rational;

        let q = |n: i64| Rational::from(n);
        let mut m = AugmentedMatrix::from([[q(2), q(1), q(5)], [q(1), q(-1), q(-1)]]);
        m.to_rref().unwrap();
        assert_eq!(
            m.values(),
            Vector::from([Rational::new(4, 3), Rational::new(7, 3)])
        );
    }
}
