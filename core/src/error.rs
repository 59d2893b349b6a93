use math::{FieldError, MathError, MatrixError};
use thiserror::Error;

/// Result type specialized for participant set validation.
pub type ValidationResult<T = ()> = std::result::Result<T, ValidationError>;

/// Result type specialized for coefficient recovery.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors returned by [`ParticipantSet::check_valid`](crate::ParticipantSet::check_valid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("invalid participant configuration")]
    InvalidConfiguration,
    #[error("no combination of participants can recover the secret")]
    NoValidCombination,
    #[error("field modulus must be greater than 2")]
    ModulusTooSmall,
}

/// Errors returned by the coefficient solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RecoveryError {
    #[error("invalid participant configuration")]
    InvalidConfiguration,
    #[error("no combination of participants can recover the secret")]
    NoValidCombination,
    #[error("threshold is equal to or larger than the number of participants")]
    ThresholdTooLarge,
    #[error("field modulus must be greater than 2")]
    ModulusTooSmall,
    #[error("coefficient matrix is not invertible")]
    NotInvertible,
    #[error("participant is not a member of the set")]
    ParticipantNotFound,
}

impl From<ValidationError> for RecoveryError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidConfiguration => Self::InvalidConfiguration,
            ValidationError::NoValidCombination => Self::NoValidCombination,
            ValidationError::ModulusTooSmall => Self::ModulusTooSmall,
        }
    }
}

// The field collaborator only fails on the modulus.
impl From<FieldError> for ValidationError {
    fn from(_: FieldError) -> Self {
        Self::ModulusTooSmall
    }
}

impl From<FieldError> for RecoveryError {
    fn from(_: FieldError) -> Self {
        Self::ModulusTooSmall
    }
}

impl From<MathError> for ValidationError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Field(e) => e.into(),
            _ => Self::InvalidConfiguration,
        }
    }
}

impl From<MathError> for RecoveryError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Field(e) => e.into(),
            MathError::Matrix(MatrixError::NotInvertible) => Self::NotInvertible,
            _ => Self::InvalidConfiguration,
        }
    }
}
