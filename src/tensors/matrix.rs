use std::{
    fmt::Display,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::Chunks,
};

use smallvec::SmallVec;

use crate::{
    domains::Arithmetic,
    printer::{MatrixPrinter, VectorPrinter},
};

/// An n-dimensional vector.
///
/// Vectors have value semantics: cloning copies every entry, and the rows and columns
/// extracted from a [Matrix] are independent copies rather than views.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<T> {
    pub(crate) data: SmallVec<[T; 4]>,
}

impl<T> Vector<T> {
    /// Create a new vector from a list of scalars.
    /// Will panic if the list is empty.
    pub fn new(data: Vec<T>) -> Vector<T> {
        if data.is_empty() {
            panic!("A vector must have at least one entry");
        }

        Vector {
            data: SmallVec::from_vec(data),
        }
    }

    /// Create a vector of length `len` with every entry set to `value`.
    pub fn filled(len: u32, value: T) -> Vector<T>
    where
        T: Clone,
    {
        if len == 0 {
            panic!("A vector must have at least one entry");
        }

        Vector {
            data: SmallVec::from_elem(value, len as usize),
        }
    }

    /// Return the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true iff every entry has been removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Append `value` at the end of the vector.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Remove and return the entry at `index`, shifting all later entries down.
    pub fn remove(&mut self, index: u32) -> T {
        if index as usize >= self.data.len() {
            panic!(
                "Cannot remove entry {} from a vector of length {}",
                index,
                self.data.len()
            );
        }

        self.data.remove(index as usize)
    }

    /// Apply a function `f` to each entry of the vector.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Vector<U> {
        Vector {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Create a matrix with a single row. This operation is very cheap.
    /// Will panic if every entry has been removed.
    pub fn into_row_matrix(self) -> Matrix<T> {
        if self.data.is_empty() {
            panic!("Cannot create a (1,0) matrix from an empty vector");
        }

        Matrix {
            nrows: 1,
            ncols: self.data.len() as u32,
            data: self.data.into_vec(),
        }
    }

    /// Create a matrix with a single column. This operation is very cheap.
    /// Will panic if every entry has been removed.
    pub fn into_column_matrix(self) -> Matrix<T> {
        if self.data.is_empty() {
            panic!("Cannot create a (0,1) matrix from an empty vector");
        }

        Matrix {
            nrows: self.data.len() as u32,
            ncols: 1,
            data: self.data.into_vec(),
        }
    }
}

impl<T: Arithmetic> Vector<T> {
    /// Create a new zero vector of length `len`.
    pub fn zeros(len: u32) -> Vector<T> {
        Vector::filled(len, T::zero())
    }

    /// Take the Euclidean scalar product of two vectors.
    ///
    /// The products are accumulated in index order starting from zero, so that
    /// the result is reproducible for non-associative types such as floats.
    pub fn dot(&self, rhs: &Self) -> T {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vectors do not have equal dimension: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        let mut res = T::zero();
        for (e1, e2) in self.data.iter().zip(&rhs.data) {
            res += e1.clone() * e2.clone();
        }

        res
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Vector::new(data)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Self {
        Vector::new(data.into_iter().collect())
    }
}

impl<T> Index<u32> for Vector<T> {
    type Output = T;

    /// Get the `i`th entry of the vector.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        &self.data[index as usize]
    }
}

impl<T> IndexMut<u32> for Vector<T> {
    /// Get the `i`th entry of the vector.
    #[inline]
    fn index_mut(&mut self, index: u32) -> &mut T {
        &mut self.data[index as usize]
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        VectorPrinter::new(self).fmt(f)
    }
}

impl<T: Arithmetic> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Arithmetic> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.clone() * rhs
    }
}

impl<T: Arithmetic> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in &mut self.data {
            *x *= rhs.clone();
        }
    }
}

impl<T: Arithmetic> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    /// Add two vectors.
    fn add(self, rhs: &Vector<T>) -> Self::Output {
        let mut m = self.clone();
        m += rhs;
        m
    }
}

impl<T: Arithmetic> AddAssign<&Vector<T>> for Vector<T> {
    ///Add two vectors in place.
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot add vectors of different dimensions: {}  vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b.clone();
        }
    }
}

impl<T: Arithmetic> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    /// Subtract two vectors.
    fn sub(self, rhs: &Vector<T>) -> Self::Output {
        let mut m = self.clone();
        m -= rhs;
        m
    }
}

impl<T: Arithmetic> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot subtract vectors of different dimensions: {}  vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b.clone();
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    /// Negate each entry of the vector.
    fn neg(self) -> Self::Output {
        Vector {
            data: self.data.into_iter().map(|e| -e).collect(),
        }
    }
}

/// The edge of a matrix along which another matrix is attached by [Matrix::merge].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatrixSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// A dense matrix, stored as a flat row-major list of entries.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
}

impl<T> Matrix<T> {
    /// Create a new matrix with `nrows` rows and `ncols` columns, with every entry set to `value`.
    pub fn new(nrows: u32, ncols: u32, value: T) -> Matrix<T>
    where
        T: Clone,
    {
        if nrows == 0 || ncols == 0 {
            panic!(
                "A matrix must have at least one row and one column: ({},{})",
                nrows, ncols
            );
        }

        Matrix {
            data: vec![value; nrows as usize * ncols as usize],
            nrows,
            ncols,
        }
    }

    /// Create a new column vector from a list of scalars.
    pub fn new_vec(data: Vec<T>) -> Matrix<T> {
        Vector::new(data).into_column_matrix()
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<T>, nrows: u32, ncols: u32) -> Result<Matrix<T>, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::Empty);
        }

        if data.len() != nrows as usize * ncols as usize {
            return Err(MatrixError::DataLengthMismatch {
                len: data.len(),
                nrows,
                ncols,
            });
        }

        Ok(Matrix { data, nrows, ncols })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(matrix: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixError> {
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(MatrixError::Empty);
        }

        let nrows = matrix.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (i, d) in matrix.into_iter().enumerate() {
            if d.len() != cols {
                return Err(MatrixError::NotRectangular {
                    row: i,
                    expected: cols,
                    found: d.len(),
                });
            }

            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows: nrows as u32,
            ncols: cols as u32,
        })
    }

    /// Return the number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return the entries in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, T> {
        self.data.chunks(self.ncols as usize)
    }

    #[inline]
    pub(crate) fn index_of(&self, row: u32, column: u32) -> usize {
        if row >= self.nrows || column >= self.ncols {
            panic!(
                "Index ({},{}) out of range for a matrix of dimensions ({},{})",
                row, column, self.nrows, self.ncols
            );
        }

        row as usize * self.ncols as usize + column as usize
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Convert a matrix that is a row or column vector into a [Vector].
    /// Will panic if the input is not vector-like.
    pub fn into_vector(self) -> Vector<T> {
        if self.nrows != 1 && self.ncols != 1 {
            panic!("The matrix is not a vector");
        }

        Vector {
            data: SmallVec::from_vec(self.data),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Get a copy of the `i`th row. Changing the returned vector does not change the matrix.
    pub fn row(&self, i: u32) -> Vector<T> {
        let start = self.index_of(i, 0);
        Vector {
            data: SmallVec::from(&self.data[start..start + self.ncols as usize]),
        }
    }

    /// Get a copy of the `j`th column. Changing the returned vector does not change the matrix.
    pub fn column(&self, j: u32) -> Vector<T> {
        self.index_of(0, j);
        Vector {
            data: self
                .data
                .iter()
                .skip(j as usize)
                .step_by(self.ncols as usize)
                .cloned()
                .collect(),
        }
    }

    /// Overwrite the `i`th row with the entries of `row`.
    pub fn set_row(&mut self, i: u32, row: &Vector<T>) {
        if row.len() != self.ncols as usize {
            panic!(
                "Cannot set a row of length {} in a matrix with {} columns",
                row.len(),
                self.ncols
            );
        }

        let start = self.index_of(i, 0);
        self.data[start..start + self.ncols as usize].clone_from_slice(&row.data);
    }

    /// Overwrite the `j`th column with the entries of `column`.
    pub fn set_column(&mut self, j: u32, column: &Vector<T>) {
        if column.len() != self.nrows as usize {
            panic!(
                "Cannot set a column of length {} in a matrix with {} rows",
                column.len(),
                self.nrows
            );
        }

        for (i, e) in column.iter().enumerate() {
            let index = self.index_of(i as u32, j);
            self.data[index] = e.clone();
        }
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols as usize {
            for i in 0..self.nrows as usize {
                data.push(self.data[i * self.ncols as usize + j].clone());
            }
        }

        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// Insert `row` before row `index`, so that it becomes the `index`th row.
    /// An `index` equal to the number of rows appends the row.
    pub fn insert_row(&mut self, index: u32, row: &Vector<T>) {
        if row.len() != self.ncols as usize {
            panic!(
                "Row of length {} is incompatible with a matrix with {} columns",
                row.len(),
                self.ncols
            );
        }
        if index > self.nrows {
            panic!(
                "Cannot insert row {} in a matrix with {} rows",
                index, self.nrows
            );
        }

        let start = index as usize * self.ncols as usize;
        self.data.splice(start..start, row.iter().cloned());
        self.nrows += 1;
    }

    /// Append `row` below the last row.
    pub fn push_row(&mut self, row: &Vector<T>) {
        self.insert_row(self.nrows, row);
    }

    /// Insert `column` before column `index`, so that it becomes the `index`th column.
    /// An `index` equal to the number of columns appends the column.
    pub fn insert_column(&mut self, index: u32, column: &Vector<T>) {
        if column.len() != self.nrows as usize {
            panic!(
                "Column of length {} is incompatible with a matrix with {} rows",
                column.len(),
                self.nrows
            );
        }
        if index > self.ncols {
            panic!(
                "Cannot insert column {} in a matrix with {} columns",
                index, self.ncols
            );
        }

        // insert from the bottom up so that the offsets of earlier rows stay valid
        for i in (0..self.nrows as usize).rev() {
            self.data.insert(
                i * self.ncols as usize + index as usize,
                column.data[i].clone(),
            );
        }
        self.ncols += 1;
    }

    /// Append `column` to the right of the last column.
    pub fn push_column(&mut self, column: &Vector<T>) {
        self.insert_column(self.ncols, column);
    }

    /// Attach `other` to the given `side` of this matrix and return the result.
    /// Merging on the left or top is the same as merging `self` on the right or bottom of `other`.
    pub fn merge(&self, other: &Matrix<T>, side: MatrixSide) -> Matrix<T> {
        match side {
            MatrixSide::Right => self.merge_right(other),
            MatrixSide::Left => other.merge_right(self),
            MatrixSide::Bottom => self.merge_bottom(other),
            MatrixSide::Top => other.merge_bottom(self),
        }
    }

    fn merge_right(&self, other: &Matrix<T>) -> Matrix<T> {
        if self.nrows != other.nrows {
            panic!(
                "Cannot merge matrices side by side with different row counts: ({},{}) vs ({},{})",
                self.nrows, self.ncols, other.nrows, other.ncols
            );
        }

        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        for (a, b) in self.row_iter().zip(other.row_iter()) {
            data.extend_from_slice(a);
            data.extend_from_slice(b);
        }

        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + other.ncols,
        }
    }

    fn merge_bottom(&self, other: &Matrix<T>) -> Matrix<T> {
        if self.ncols != other.ncols {
            panic!(
                "Cannot stack matrices with different column counts: ({},{}) vs ({},{})",
                self.nrows, self.ncols, other.nrows, other.ncols
            );
        }

        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);

        Matrix {
            data,
            nrows: self.nrows + other.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T> Matrix<T> {
    /// Remove the `i`th row and return it.
    /// Will panic when removing the only row, as a matrix needs at least one row.
    pub fn remove_row(&mut self, i: u32) -> Vector<T> {
        let start = self.index_of(i, 0);
        if self.nrows == 1 {
            panic!("Cannot remove the only row of a matrix");
        }

        let removed = self
            .data
            .drain(start..start + self.ncols as usize)
            .collect();
        self.nrows -= 1;
        Vector { data: removed }
    }

    /// Remove the `j`th column and return it.
    /// Will panic when removing the only column, as a matrix needs at least one column.
    pub fn remove_column(&mut self, j: u32) -> Vector<T> {
        self.index_of(0, j);
        if self.ncols == 1 {
            panic!("Cannot remove the only column of a matrix");
        }

        let mut removed: SmallVec<[T; 4]> = (0..self.nrows as usize)
            .rev()
            .map(|i| self.data.remove(i * self.ncols as usize + j as usize))
            .collect();
        removed.reverse();

        self.ncols -= 1;
        Vector { data: removed }
    }
}

impl<T: Arithmetic> Matrix<T> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn zeros(nrows: u32, ncols: u32) -> Matrix<T> {
        Matrix::new(nrows, ncols, T::zero())
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: u32) -> Matrix<T> {
        let mut m = Matrix::zeros(nrows, nrows);
        for i in 0..nrows {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &T) -> Matrix<T> {
        self.map(|ee| ee.clone() * e.clone())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    /// Create a matrix from a row-major literal such as `[[1, 2], [3, 4]]`.
    fn from(rows: [[T; C]; R]) -> Self {
        if R == 0 || C == 0 {
            panic!(
                "A matrix must have at least one row and one column: ({},{})",
                R, C
            );
        }

        Matrix {
            data: rows.into_iter().flatten().collect(),
            nrows: R as u32,
            ncols: C as u32,
        }
    }
}

impl<T> Index<u32> for Matrix<T> {
    type Output = [T];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        let start = self.index_of(index, 0);
        &self.data[start..start + self.ncols as usize]
    }
}

impl<T> IndexMut<u32> for Matrix<T> {
    /// Get the `index`th row of the matrix.
    #[inline]
    fn index_mut(&mut self, index: u32) -> &mut Self::Output {
        let start = self.index_of(index, 0);
        let end = start + self.ncols as usize;
        &mut self.data[start..end]
    }
}

impl<T> Index<(u32, u32)> for Matrix<T> {
    type Output = T;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[self.index_of(index.0, index.1)]
    }
}

impl<T> IndexMut<(u32, u32)> for Matrix<T> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut T {
        let i = self.index_of(index.0, index.1);
        &mut self.data[i]
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new(self).fmt(f)
    }
}

impl<T: Arithmetic> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Add two matrices.
    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        let mut m = self.clone();
        m += rhs;
        m
    }
}

impl<T: Arithmetic> AddAssign<&Matrix<T>> for Matrix<T> {
    ///Add two matrices in place.
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b.clone();
        }
    }
}

impl<T: Arithmetic> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Subtract two matrices.
    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        let mut m = self.clone();
        m -= rhs;
        m
    }
}

impl<T: Arithmetic> SubAssign<&Matrix<T>> for Matrix<T> {
    ///Subtract two matrices in place.
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b.clone();
        }
    }
}

impl<T: Arithmetic> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Multiply two matrices. Entry `(i,j)` of the result is the dot product
    /// of row `i` of `self` and column `j` of `rhs`.
    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        if self.ncols != rhs.nrows {
            panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let (n, m, p) = (self.nrows as usize, self.ncols as usize, rhs.ncols as usize);
        let mut data = Vec::with_capacity(n * p);
        for i in 0..n {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..m {
                    sum += self.data[i * m + k].clone() * rhs.data[k * p + j].clone();
                }
                data.push(sum);
            }
        }

        Matrix {
            data,
            nrows: self.nrows,
            ncols: rhs.ncols,
        }
    }
}

impl<T: Arithmetic> MulAssign<&Matrix<T>> for Matrix<T> {
    ///Multiply two matrices in place.
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Arithmetic> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    /// Multiply every entry by the scalar `rhs`.
    fn mul(mut self, rhs: T) -> Self::Output {
        for e in &mut self.data {
            *e *= rhs.clone();
        }
        self
    }
}

impl<T: Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    /// Negate each entry of the matrix.
    fn neg(self) -> Self::Output {
        Matrix {
            data: self.data.into_iter().map(|e| -e).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// Scalar multiplication is commutative, but a generic `T * Matrix<T>` cannot be
// written because of the orphan rules, so it is provided per primitive type.
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(&rhs)
                }
            }

            impl MulAssign<$t> for Matrix<$t> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    for e in &mut self.data {
                        *e *= rhs;
                    }
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                #[inline]
                fn mul(self, rhs: Matrix<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                #[inline]
                fn mul(self, rhs: &Matrix<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                #[inline]
                fn mul(self, rhs: Vector<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                #[inline]
                fn mul(self, rhs: &Vector<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Errors that can occur when constructing matrices or solving linear systems.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatrixError {
    /// The input has no rows or no columns.
    Empty,
    /// Row `row` has `found` entries instead of `expected`.
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    DataLengthMismatch {
        len: usize,
        nrows: u32,
        ncols: u32,
    },
    NotSquare,
    /// An augmented matrix must have one column more than it has rows.
    NotAugmented {
        nrows: u32,
        ncols: u32,
    },
    ShapeMismatch,
    RightHandSideIsNotVector,
    /// No usable pivot was found in `column`: the system has no unique solution.
    Singular {
        column: u32,
    },
    /// The entry at `(row, column)` is not divisible by its pivot in the element type.
    InexactDivision {
        row: u32,
        column: u32,
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::Empty => write!(f, "The matrix has no rows or no columns"),
            MatrixError::NotRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "Matrix is not rectangular: row {} has {} entries instead of {}",
                row, found, expected
            ),
            MatrixError::DataLengthMismatch { len, nrows, ncols } => write!(
                f,
                "Data length does not match matrix dimensions: {} vs ({},{})",
                len, nrows, ncols
            ),
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::NotAugmented { nrows, ncols } => write!(
                f,
                "An augmented matrix must have dimensions (n,n+1) instead of ({},{})",
                nrows, ncols
            ),
            MatrixError::ShapeMismatch => write!(f, "The shape of the matrix is not compatible"),
            MatrixError::RightHandSideIsNotVector => {
                write!(f, "The right-hand side is not a vector")
            }
            MatrixError::Singular { column } => {
                write!(f, "The matrix is singular: no pivot in column {}", column)
            }
            MatrixError::InexactDivision { row, column } => write!(
                f,
                "Entry ({},{}) cannot be divided exactly by its pivot",
                row, column
            ),
        }
    }
}

impl std::error::Error for MatrixError {}
