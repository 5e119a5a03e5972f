//! Core storage primitive (SquareMatrix).

mod matrix;

pub use matrix::SquareMatrix;
