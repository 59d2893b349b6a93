//! Prime-field and matrix primitives backing Birkhoff interpolation.
//!
//! Arithmetic is exposed through the [`PrimeField`] capability trait so that
//! callers can run against the arbitrary-precision [`BigPrimeField`] or the
//! lightweight [`SmallPrimeField`] without changing their code.

pub mod error;
pub mod field;
pub mod matrix;
pub mod prelude;
pub mod traits;

pub use error::{FieldError, MathError, MatrixError, Result};
pub use field::{BigPrimeField, SmallPrimeField};
pub use matrix::Matrix;
pub use traits::PrimeField;
