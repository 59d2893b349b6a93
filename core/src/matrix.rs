//! Generalized derivative-Vandermonde matrix of a participant set.
//!
//! Row `i` is the `rᵢ`-th derivative, evaluated at `xᵢ`, of the monomial basis
//! `1, t, t², …, t^(k-1)`:
//!
//! ```text
//! M[i][j] = 0                                   if j < rᵢ
//! M[i][j] = j·(j-1)···(j-rᵢ+1) · xᵢ^(j-rᵢ)       otherwise
//! ```
//!
//! A participant with `rank >= k` yields an all-zero row.

use math::{Matrix, PrimeField};

use crate::participant::Participant;

/// Build the `n × threshold` coefficient matrix over `field`.
pub fn coefficient_matrix<F: PrimeField>(
    participants: &[Participant],
    threshold: u32,
    field: &F,
) -> math::Result<Matrix<F>> {
    let rows = participants
        .iter()
        .map(|p| coefficient_row(p, threshold, field))
        .collect();
    Matrix::try_new(field.clone(), rows)
}

/// The single row contributed by `participant`.
pub fn coefficient_row<F: PrimeField>(
    participant: &Participant,
    threshold: u32,
    field: &F,
) -> Vec<F::Element> {
    let x = field.reduce(participant.x());
    let rank = participant.rank();
    (0..threshold)
        .map(|j| {
            if j < rank {
                field.zero()
            } else {
                let power = field.pow(&x, u64::from(j - rank));
                field.mul(&falling_factorial(j, rank, field), &power)
            }
        })
        .collect()
}

/// `n·(n-1)···(n-r+1)` reduced into `field`; 1 for `r = 0`, 0 for `r > n`.
pub(crate) fn falling_factorial<F: PrimeField>(n: u32, r: u32, field: &F) -> F::Element {
    if r > n {
        return field.zero();
    }
    ((n - r + 1)..=n).fold(field.one(), |acc, v| {
        field.mul(&acc, &field.from_u64(u64::from(v)))
    })
}
