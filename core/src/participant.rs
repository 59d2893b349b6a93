use std::fmt;
use std::ops::Deref;

use math::{BigPrimeField, PrimeField};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{
    error::{RecoveryResult, ValidationResult},
    solver, validity,
};

/// A share holder's interpolation parameters: position `x` and derivative
/// order `rank`.
///
/// The share of this participant is `f⁽ʳᵃⁿᵏ⁾(x)` for the dealer polynomial `f`.
/// The field modulus is never stored here; it is supplied per operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    x: BigUint,
    rank: u32,
}

/// Name used by the surrounding threshold protocols.
pub type BkParameter = Participant;

impl Participant {
    pub fn new(x: impl Into<BigUint>, rank: u32) -> Self {
        Self { x: x.into(), rank }
    }

    #[inline]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    #[inline]
    pub fn rank(&self) -> u32 {
        self.rank
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x, rank) = ({}, {})", self.x, self.rank)
    }
}

/// An ordered set of participants taking part in one reconstruction attempt.
///
/// Order matters only for reading results back: coefficient `i` returned by
/// the solver belongs to `self[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantSet(Vec<Participant>);

/// Name used by the surrounding threshold protocols.
pub type BkParameters = ParticipantSet;

impl ParticipantSet {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self(participants)
    }

    /// Index of `participant` in the set, if present.
    pub fn index_of(&self, participant: &Participant) -> Option<usize> {
        self.0.iter().position(|p| p == participant)
    }

    /// Check that the set can support reconstruction at `threshold` over `ℤ/primeℤ`.
    ///
    /// The field is built first, so a modulus `<= 2` is reported as
    /// [`ValidationError::ModulusTooSmall`](crate::ValidationError::ModulusTooSmall)
    /// before any other check. See [`validity::check_valid`] for the rest.
    pub fn check_valid(&self, threshold: u32, prime: &BigUint) -> ValidationResult {
        let field = BigPrimeField::new(prime.clone())?;
        self.check_valid_in(threshold, &field)
    }

    /// [`check_valid`](Self::check_valid) over an arbitrary field backend.
    pub fn check_valid_in<F: PrimeField>(
        &self,
        threshold: u32,
        field: &F,
    ) -> ValidationResult {
        validity::check_valid(&self.0, threshold, field)
    }

    /// Coefficients `c` such that `secret = Σ cᵢ · shareᵢ mod prime`.
    pub fn compute_coefficients(
        &self,
        threshold: u32,
        prime: &BigUint,
    ) -> RecoveryResult<Vec<BigUint>> {
        let field = BigPrimeField::new(prime.clone())?;
        self.compute_coefficients_in(threshold, &field)
    }

    /// [`compute_coefficients`](Self::compute_coefficients) over an arbitrary
    /// field backend.
    pub fn compute_coefficients_in<F: PrimeField>(
        &self,
        threshold: u32,
        field: &F,
    ) -> RecoveryResult<Vec<F::Element>> {
        solver::compute_coefficients(&self.0, threshold, field)
    }

    /// Multiplier `own` applies to its share when contributing to the share
    /// of the newly admitted participant `new`.
    pub fn add_share_coefficient(
        &self,
        own: &Participant,
        new: &Participant,
        threshold: u32,
        prime: &BigUint,
    ) -> RecoveryResult<BigUint> {
        let field = BigPrimeField::new(prime.clone())?;
        self.add_share_coefficient_in(own, new, threshold, &field)
    }

    pub fn add_share_coefficient_in<F: PrimeField>(
        &self,
        own: &Participant,
        new: &Participant,
        threshold: u32,
        field: &F,
    ) -> RecoveryResult<F::Element> {
        solver::add_share_coefficient(self, own, new, threshold, field)
    }
}

impl Deref for ParticipantSet {
    type Target = [Participant];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Participant>> for ParticipantSet {
    fn from(participants: Vec<Participant>) -> Self {
        Self(participants)
    }
}

impl FromIterator<Participant> for ParticipantSet {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParticipantSet {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ParticipantSet {
    type Item = Participant;
    type IntoIter = std::vec::IntoIter<Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
