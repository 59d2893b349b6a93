//! Recovery coefficients for Birkhoff shares.
//!
//! With `M` the `n × k` coefficient matrix, honest shares satisfy `s = M·a`
//! where `a` are the dealer polynomial's coefficients. The left pseudoinverse
//! `P = (MᵀM)⁻¹Mᵀ` gives `a = P·s`, so row 0 of `P` recovers the secret `a₀`.

use log::debug;
use math::{Matrix, PrimeField};

use crate::{
    error::{RecoveryError, RecoveryResult},
    matrix::{coefficient_matrix, coefficient_row},
    params::validate_threshold_config,
    participant::{Participant, ParticipantSet},
};

/// Coefficients `c` with `a₀ = Σ cᵢ · sᵢ`, one per participant in input order.
///
/// Does not run the validity checker: repeated participants show up here as
/// [`RecoveryError::NotInvertible`]. Participants sharing a position with
/// different ranks are Hermite data and solve normally when the system is
/// determined.
pub fn compute_coefficients<F: PrimeField>(
    participants: &[Participant],
    threshold: u32,
    field: &F,
) -> RecoveryResult<Vec<F::Element>> {
    ensure_recoverable(participants, threshold)?;
    let pseudoinverse = recovery_matrix(participants, threshold, field)?;
    pseudoinverse
        .row(0)
        .map(<[F::Element]>::to_vec)
        .ok_or(RecoveryError::InvalidConfiguration)
}

/// Multiplier that `own` applies to its share when contributing to the share
/// of `new`, such that `s_new = Σ cᵢ · sᵢ` over the members of the set.
pub fn add_share_coefficient<F: PrimeField>(
    participants: &ParticipantSet,
    own: &Participant,
    new: &Participant,
    threshold: u32,
    field: &F,
) -> RecoveryResult<F::Element> {
    ensure_recoverable(participants, threshold)?;
    let index = participants
        .index_of(own)
        .ok_or(RecoveryError::ParticipantNotFound)?;

    let pseudoinverse = recovery_matrix(participants, threshold, field)?;
    let new_row = coefficient_row(new, threshold, field);
    Ok(new_row
        .iter()
        .zip(pseudoinverse.iter())
        .fold(field.zero(), |acc, (weight, row)| {
            field.add(&acc, &field.mul(weight, &row[index]))
        }))
}

fn ensure_recoverable(participants: &[Participant], threshold: u32) -> RecoveryResult<()> {
    if threshold == 0 {
        return Err(RecoveryError::InvalidConfiguration);
    }
    if !validate_threshold_config(threshold, participants.len()) {
        return Err(RecoveryError::ThresholdTooLarge);
    }
    Ok(())
}

fn recovery_matrix<F: PrimeField>(
    participants: &[Participant],
    threshold: u32,
    field: &F,
) -> RecoveryResult<Matrix<F>> {
    let matrix = coefficient_matrix(participants, threshold, field)?;
    debug!(
        "computing pseudoinverse of {}x{} birkhoff matrix",
        matrix.rows(),
        matrix.cols()
    );
    Ok(matrix.pseudoinverse()?)
}
