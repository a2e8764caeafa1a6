//! Human-readable rendering of vectors, matrices and augmented matrices.
//!
//! Every printer takes a [PrintOptions] that controls the separators and the
//! number of digits printed for floating point entries. The [Display](fmt::Display)
//! implementations of the tensor types use the default options.

use std::fmt::{self, Write};

use crate::tensors::{
    augmented::AugmentedMatrix,
    matrix::{Matrix, Vector},
};

/// Options that control how tensors are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrintOptions {
    /// The number of digits after the decimal point. Ignored for integer entries.
    pub precision: Option<usize>,
    /// Written after every entry, except before the augmented column.
    pub column_separator: char,
    /// Written between the coefficients and the values of an augmented matrix.
    pub augmented_separator: char,
}

impl PrintOptions {
    pub const fn new() -> PrintOptions {
        PrintOptions {
            precision: None,
            column_separator: ' ',
            augmented_separator: '|',
        }
    }

    /// Print floating point entries with `precision` digits after the decimal point.
    pub const fn with_precision(self, precision: usize) -> PrintOptions {
        PrintOptions {
            precision: Some(precision),
            ..self
        }
    }

    pub const fn with_column_separator(self, column_separator: char) -> PrintOptions {
        PrintOptions {
            column_separator,
            ..self
        }
    }

    pub const fn with_augmented_separator(self, augmented_separator: char) -> PrintOptions {
        PrintOptions {
            augmented_separator,
            ..self
        }
    }

    fn fmt_entry<T: fmt::Display>(&self, e: &T, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(p) = self.precision {
            f.write_fmt(format_args!("{:.*}", p, e))
        } else {
            f.write_fmt(format_args!("{}", e))
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions::new()
    }
}

/// Prints a [Vector] as its entries, each followed by the column separator.
pub struct VectorPrinter<'a, T> {
    pub vector: &'a Vector<T>,
    pub opts: PrintOptions,
}

impl<'a, T: fmt::Display> VectorPrinter<'a, T> {
    pub fn new(vector: &'a Vector<T>) -> VectorPrinter<'a, T> {
        VectorPrinter {
            vector,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(vector: &'a Vector<T>, opts: PrintOptions) -> VectorPrinter<'a, T> {
        VectorPrinter { vector, opts }
    }
}

impl<'a, T: fmt::Display> fmt::Display for VectorPrinter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for e in self.vector.iter() {
            self.opts.fmt_entry(e, f)?;
            f.write_char(self.opts.column_separator)?;
        }
        Ok(())
    }
}

/// Prints a [Matrix] with one row per line.
pub struct MatrixPrinter<'a, T> {
    pub matrix: &'a Matrix<T>,
    pub opts: PrintOptions,
}

impl<'a, T: fmt::Display> MatrixPrinter<'a, T> {
    pub fn new(matrix: &'a Matrix<T>) -> MatrixPrinter<'a, T> {
        MatrixPrinter {
            matrix,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(matrix: &'a Matrix<T>, opts: PrintOptions) -> MatrixPrinter<'a, T> {
        MatrixPrinter { matrix, opts }
    }
}

impl<'a, T: fmt::Display> fmt::Display for MatrixPrinter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in self.matrix.row_iter() {
            for e in r {
                self.opts.fmt_entry(e, f)?;
                f.write_char(self.opts.column_separator)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Prints an [AugmentedMatrix] with one equation per line, separating
/// the coefficients from the value, for example `2 1|5 `.
pub struct AugmentedMatrixPrinter<'a, T> {
    pub matrix: &'a AugmentedMatrix<T>,
    pub opts: PrintOptions,
}

impl<'a, T: fmt::Display> AugmentedMatrixPrinter<'a, T> {
    pub fn new(matrix: &'a AugmentedMatrix<T>) -> AugmentedMatrixPrinter<'a, T> {
        AugmentedMatrixPrinter {
            matrix,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(
        matrix: &'a AugmentedMatrix<T>,
        opts: PrintOptions,
    ) -> AugmentedMatrixPrinter<'a, T> {
        AugmentedMatrixPrinter { matrix, opts }
    }
}

impl<'a, T: fmt::Display> fmt::Display for AugmentedMatrixPrinter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.matrix.size();
        for r in self.matrix.as_matrix().row_iter() {
            for (c, e) in r.iter().enumerate() {
                self.opts.fmt_entry(e, f)?;
                if c + 1 == size {
                    f.write_char(self.opts.augmented_separator)?;
                } else {
                    f.write_char(self.opts.column_separator)?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{AugmentedMatrixPrinter, MatrixPrinter, PrintOptions, VectorPrinter};
    use crate::tensors::{
        augmented::AugmentedMatrix,
        matrix::{Matrix, Vector},
    };

    #[test]
    fn precision() {
        let opts = PrintOptions::new().with_precision(2);
        let v = Vector::from([1., 2.5]);
        assert_eq!(
            VectorPrinter::new_with_options(&v, opts).to_string(),
            "1.00 2.50 "
        );

        // precision does not apply to integers
        let m = Matrix::from([[1, 2]]);
        assert_eq!(MatrixPrinter::new_with_options(&m, opts).to_string(), "1 2 \n");
    }

    #[test]
    fn separators() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        let opts = PrintOptions::new().with_column_separator(',');
        assert_eq!(
            MatrixPrinter::new_with_options(&m, opts).to_string(),
            "1,2,\n3,4,\n"
        );

        let a = AugmentedMatrix::from([[2, 1, 5], [1, -1, -1]]);
        assert_eq!(
            AugmentedMatrixPrinter::new(&a).to_string(),
            "2 1|5 \n1 -1|-1 \n"
        );
        assert_eq!(
            AugmentedMatrixPrinter::new_with_options(
                &a,
                PrintOptions::new()
                    .with_column_separator('\t')
                    .with_augmented_separator(':')
            )
            .to_string(),
            "2\t1:5\t\n1\t-1:-1\t\n"
        );
    }
}
