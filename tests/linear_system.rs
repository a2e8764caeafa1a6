use abmatrix::{
    domains::Arithmetic,
    tensors::{
        augmented::{AugmentedMatrix, RowForm},
        matrix::{Matrix, MatrixError, MatrixSide, Vector},
    },
};
use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = i64> + Clone {
    -100i64..=100
}

fn matrix(nrows: u32, ncols: u32) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(small_int(), (nrows * ncols) as usize)
        .prop_map(move |data| Matrix::from_linear(data, nrows, ncols).unwrap())
}

fn dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..6, 1u32..6)
}

/// A random system that is strictly diagonally dominant, and hence has a unique solution,
/// together with that solution.
fn dominant_system() -> impl Strategy<Value = (Matrix<f64>, Vector<f64>)> {
    (1u32..7).prop_flat_map(|n| {
        (
            prop::collection::vec(-1f64..1., (n * n) as usize),
            prop::collection::vec(-10f64..10., n as usize),
        )
            .prop_map(move |(data, x)| {
                let mut a = Matrix::from_linear(data, n, n).unwrap();
                for i in 0..n {
                    let off: f64 = a.row(i).iter().map(|e| e.abs()).sum();
                    a[(i, i)] = off + 1.;
                }
                (a, Vector::new(x))
            })
    })
}

proptest! {
    #[test]
    fn addition_laws(((r, c), seed) in dims().prop_flat_map(|(r, c)| ((Just(r), Just(c)), (matrix(r, c), matrix(r, c))))) {
        let (a, b) = seed;
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((a.nrows(), a.ncols()), (r as usize, c as usize));
    }

    #[test]
    fn scalar_associativity(a in dims().prop_flat_map(|(r, c)| matrix(r, c)), s in -10i64..10, t in -10i64..10) {
        prop_assert_eq!(&a * s * t, &a * (s * t));
        prop_assert_eq!(s * &a, &a * s);
    }

    #[test]
    fn transpose_twice(a in dims().prop_flat_map(|(r, c)| matrix(r, c))) {
        let t = a.transpose();
        prop_assert_eq!((t.nrows(), t.ncols()), (a.ncols(), a.nrows()));
        prop_assert_eq!(t.transpose(), a);
    }

    #[test]
    fn multiplicative_identity(a in dims().prop_flat_map(|(r, c)| matrix(r, c))) {
        let i = Matrix::identity(a.ncols() as u32);
        prop_assert_eq!(&a * &i, a.clone());
        let i = Matrix::identity(a.nrows() as u32);
        prop_assert_eq!(&i * &a, a);
    }

    #[test]
    fn product_entries_are_dot_products(
        (a, b) in (1u32..5, 1u32..5, 1u32..5).prop_flat_map(|(n, k, m)| (matrix(n, k), matrix(k, m)))
    ) {
        let p = &a * &b;
        prop_assert_eq!((p.nrows(), p.ncols()), (a.nrows(), b.ncols()));
        for i in 0..a.nrows() as u32 {
            for j in 0..b.ncols() as u32 {
                prop_assert_eq!(a.row(i).dot(&b.column(j)), p[(i, j)]);
            }
        }
    }

    #[test]
    fn push_then_remove_row(
        (a, row) in (1u32..5, 1u32..5).prop_flat_map(|(r, c)| (matrix(r, c), prop::collection::vec(small_int(), c as usize)))
    ) {
        let mut m = a.clone();
        let row = Vector::new(row);
        m.push_row(&row);
        prop_assert_eq!(m.nrows(), a.nrows() + 1);
        prop_assert_eq!(m.remove_row(a.nrows() as u32), row);
        prop_assert_eq!(m, a);
    }

    #[test]
    fn merge_right_keeps_columns(
        (a, b) in (1u32..5, 1u32..5, 1u32..5).prop_flat_map(|(r, c1, c2)| (matrix(r, c1), matrix(r, c2)))
    ) {
        let m = a.merge(&b, MatrixSide::Right);
        prop_assert_eq!(m.ncols(), a.ncols() + b.ncols());
        for j in 0..a.ncols() as u32 {
            prop_assert_eq!(m.column(j), a.column(j));
        }
        for j in 0..b.ncols() as u32 {
            prop_assert_eq!(m.column(a.ncols() as u32 + j), b.column(j));
        }
    }

    #[test]
    fn rref_recovers_solution((a, x) in dominant_system()) {
        let b = (&a * &x.clone().into_column_matrix()).into_vector();
        let mut m = AugmentedMatrix::from_system(&a, &b).unwrap();
        m.to_rref().unwrap();
        prop_assert_eq!(m.form(), RowForm::ReducedEchelonForm);
        prop_assert_eq!(m.coefficients(), Matrix::identity(a.nrows() as u32));

        let y = m.values();
        for (l, r) in x.iter().zip(y.iter()) {
            prop_assert!((l - r).abs() < 1e-8, "{} vs {}", x, y);
        }
    }
}

#[test]
fn identity_preserves_vector() {
    let i = Matrix::<f64>::identity(2);
    let v = Matrix::new_vec(vec![3., -4.]);
    assert_eq!(&i * &v, v);
}

#[test]
fn two_by_two_system() {
    let a = Matrix::from([[2f64, 1.], [1., -1.]]);
    let x = a.solve(&Matrix::new_vec(vec![5f64, -2.])).unwrap().into_vector();
    assert!((x[0] - 1.).abs() < 1e-12);
    assert!((x[1] - 3.).abs() < 1e-12);
}

#[test]
fn singular_system() {
    let mut m = AugmentedMatrix::from([[1., 1., 2.], [1., 1., 3.]]);
    let err = m.to_rref().unwrap_err();
    assert_eq!(err, MatrixError::Singular { column: 1 });
    assert_eq!(
        err.to_string(),
        "The matrix is singular: no pivot in column 1"
    );
}

#[test]
fn augmented_display() {
    let m = AugmentedMatrix::from([[2, 1, 5], [1, -1, -1]]);
    assert_eq!(m.to_string(), "2 1|5 \n1 -1|-1 \n");
}

#[test]
fn generic_zero_filled() {
    let m: Matrix<u16> = Matrix::zeros(2, 3);
    assert!(m.as_slice().iter().all(|e| *e == u16::zero()));
}

#[cfg(feature = "rational")]
mod rational {
    use abmatrix::{
        domains::rational::Rational,
        tensors::{
            augmented::AugmentedMatrix,
            matrix::{Matrix, Vector},
        },
    };
    use proptest::prelude::*;

    /// A nonsingular integer system in rational form with its integer solution.
    fn dominant_system() -> impl Strategy<Value = (Matrix<Rational>, Vector<Rational>)> {
        (1u32..6).prop_flat_map(|n| {
            (
                prop::collection::vec(-5i64..=5, (n * n) as usize),
                prop::collection::vec(-10i64..=10, n as usize),
            )
                .prop_map(move |(mut data, x)| {
                    for i in 0..n as usize {
                        let row = &data[i * n as usize..(i + 1) * n as usize];
                        let off: i64 = row.iter().map(|e| e.abs()).sum();
                        data[i * n as usize + i] = off + 1;
                    }

                    let a = Matrix::from_linear(data.into_iter().map(Rational::from).collect(), n, n)
                        .unwrap();
                    (a, Vector::new(x.into_iter().map(Rational::from).collect()))
                })
        })
    }

    proptest! {
        #[test]
        fn rref_recovers_exact_solution((a, x) in dominant_system()) {
            let b = (&a * &x.clone().into_column_matrix()).into_vector();
            let mut m = AugmentedMatrix::from_system(&a, &b).unwrap();
            m.to_rref().unwrap();
            prop_assert_eq!(m.values(), x);
        }
    }
}
