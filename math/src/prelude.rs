pub use crate::error::{FieldError, MathError, MatrixError};
pub use crate::field::{BigPrimeField, SmallPrimeField};
pub use crate::matrix::Matrix;
pub use crate::traits::PrimeField;
pub use num_bigint::BigUint;
