//! Dense matrices, vectors and systems of linear equations.

pub mod augmented;
pub mod matrix;
