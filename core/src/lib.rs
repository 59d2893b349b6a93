//! Birkhoff (hierarchical) threshold secret sharing: validation of a
//! participant set and computation of secret-recovery coefficients.
//!
//! Each participant holds a position `x` and a `rank`; its share is the
//! `rank`-th derivative of the dealer polynomial evaluated at `x`. With all
//! ranks equal to zero this reduces to classical Shamir sharing.

pub mod error;
pub mod matrix;
pub mod params;
pub mod participant;
pub mod solver;
pub mod validity;

pub use error::{RecoveryError, RecoveryResult, ValidationError, ValidationResult};
pub use participant::{BkParameter, BkParameters, Participant, ParticipantSet};
