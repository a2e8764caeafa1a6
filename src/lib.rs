//! Abmatrix is a small library for dense linear algebra over generic scalars.
//!
//! It provides [Vector](tensors::matrix::Vector) and [Matrix](tensors::matrix::Matrix)
//! types with value semantics, and an [AugmentedMatrix](tensors::augmented::AugmentedMatrix)
//! that solves square systems of linear equations with Gauss-Jordan elimination.
//!
//! For example:
//!
//! ```
//! use abmatrix::tensors::augmented::AugmentedMatrix;
//!
//! let mut system = AugmentedMatrix::from([[2f64, 1., 5.], [1., -1., -2.]]);
//! system.to_rref().unwrap();
//! println!("{}", system);
//! let x = system.values();
//! assert!((x[0] - 1.).abs() < 1e-12 && (x[1] - 3.).abs() < 1e-12);
//! ```
//!
//! Entries can be any type that implements [Arithmetic](domains::Arithmetic). Solving
//! requires a [Numeric](domains::Numeric) type, which adds an ordering and an absolute
//! value used for pivoting. All primitive integers and floats qualify. Exact rational
//! solutions are available with the `rational` feature.
//!
//! The elimination emits `tracing` events at the `debug` and `trace` levels.

pub mod domains;
pub mod printer;
pub mod tensors;
