use thiserror::Error;

pub mod field {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("field modulus must be greater than 2")]
        ModulusTooSmall,
    }
}

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("matrix cannot be empty during {operation}")]
        Empty { operation: &'static str },
        #[error("matrix is ragged: row {row} has {found} columns but expected {expected}")]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error(
            "matrix shape mismatch during {operation}: ({}, {}) vs ({}, {})",
            left.0, left.1, right.0, right.1
        )]
        ShapeMismatch {
            operation: &'static str,
            left: (usize, usize),
            right: (usize, usize),
        },
        #[error("matrix must be square, got {rows}x{cols}")]
        NotSquare { rows: usize, cols: usize },
        #[error("matrix is not invertible")]
        NotInvertible,
    }
}

pub use field::Error as FieldError;
pub use matrix::Error as MatrixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type Error = MathError;
