//! Structural checks on a participant set.
//!
//! A `k`-subset of participants can determine a polynomial of degree `< k`
//! only if its ranks satisfy the Pólya condition: sorted ascending, the
//! `m`-th rank is at most `m`. Equivalently, for every `m < k` at least
//! `m + 1` selected participants have rank `<= m`.

use std::collections::HashSet;

use itertools::Itertools;
use log::{debug, trace};
use math::PrimeField;

use crate::{
    error::{ValidationError, ValidationResult},
    matrix::coefficient_matrix,
    participant::Participant,
};

/// Validate `participants` for reconstruction at `threshold` over `field`.
///
/// The checks, in order:
///
/// 1. `threshold` must be positive, otherwise
///    [`ValidationError::InvalidConfiguration`].
/// 2. No two participants may share both position (mod `p`) and rank,
///    otherwise [`ValidationError::InvalidConfiguration`].
/// 3. Some `threshold`-subset must satisfy the Pólya condition, otherwise
///    [`ValidationError::NoValidCombination`].
/// 4. Every `threshold`-subset that satisfies the Pólya condition must have
///    an invertible coefficient matrix at its actual positions, otherwise
///    [`ValidationError::InvalidConfiguration`]. This rejects sets such as
///    `(1,0), (2,1), (3,0)` whose ranks look fine but whose positions make
///    the Birkhoff system singular. Subsets made only of rank-0 participants
///    are interpolation at distinct points and are not enumerated.
pub fn check_valid<F: PrimeField>(
    participants: &[Participant],
    threshold: u32,
    field: &F,
) -> ValidationResult {
    if threshold == 0 {
        return Err(ValidationError::InvalidConfiguration);
    }

    if has_duplicates(participants, field) {
        debug!("participant set contains a repeated (x, rank) pair");
        return Err(ValidationError::InvalidConfiguration);
    }

    let k = threshold as usize;
    if !polya_satisfiable(participants.iter().map(Participant::rank), k) {
        debug!("no {k}-subset of the available ranks satisfies the Pólya condition");
        return Err(ValidationError::NoValidCombination);
    }

    // Rank-0 rows at distinct positions form a Vandermonde matrix, which is
    // never singular. Only subsets holding a derivative share need checking.
    let (derived, plain): (Vec<usize>, Vec<usize>) =
        (0..participants.len()).partition(|&i| participants[i].rank() > 0);
    if derived.is_empty() {
        trace!("all ranks are zero, skipping subset enumeration");
        return Ok(());
    }

    let matrix = coefficient_matrix(participants, threshold, field)?;
    let mut admissible = 0usize;
    for taken in 1..=k.min(derived.len()) {
        if k - taken > plain.len() {
            continue;
        }
        for from_derived in derived.iter().copied().combinations(taken) {
            for from_plain in plain.iter().copied().combinations(k - taken) {
                let subset: Vec<usize> =
                    from_derived.iter().chain(&from_plain).copied().collect();
                if !satisfies_polya(subset.iter().map(|&i| participants[i].rank())) {
                    continue;
                }
                admissible += 1;
                if !matrix.select_rows(&subset).is_invertible() {
                    debug!(
                        "admissible subset {} has a singular coefficient matrix",
                        subset.iter().map(|&i| &participants[i]).join(", ")
                    );
                    return Err(ValidationError::InvalidConfiguration);
                }
            }
        }
    }

    trace!("checked {admissible} admissible {k}-subsets");
    Ok(())
}

/// `true` iff the given ranks, sorted ascending, satisfy `r₍ₘ₎ <= m`.
pub fn satisfies_polya(ranks: impl IntoIterator<Item = u32>) -> bool {
    let mut ranks: Vec<u32> = ranks.into_iter().collect();
    ranks.sort_unstable();
    ranks
        .iter()
        .enumerate()
        .all(|(m, &rank)| rank as usize <= m)
}

/// `true` iff some `k` of the available ranks satisfy the Pólya condition.
///
/// The `k` smallest ranks are the best candidates, so only they are checked.
pub fn polya_satisfiable(ranks: impl IntoIterator<Item = u32>, k: usize) -> bool {
    let mut ranks: Vec<u32> = ranks.into_iter().collect();
    if ranks.len() < k {
        return false;
    }
    ranks.sort_unstable();
    satisfies_polya(ranks[..k].iter().copied())
}

fn has_duplicates<F: PrimeField>(participants: &[Participant], field: &F) -> bool {
    let mut seen = HashSet::with_capacity(participants.len());
    !participants
        .iter()
        .all(|p| seen.insert((field.reduce(p.x()), p.rank())))
}
