use std::str::FromStr;

use birkhoff_core::{
    matrix::coefficient_matrix,
    params::{ed25519_order, secp256k1_order},
    Participant, ParticipantSet, RecoveryError, ValidationError,
};
use math::prelude::*;
use proptest::prelude::*;
use test_strategy::proptest;

const THRESHOLD: u32 = 3;

fn set(pairs: &[(u32, u32)]) -> ParticipantSet {
    pairs
        .iter()
        .map(|&(x, rank)| Participant::new(x, rank))
        .collect()
}

fn big(s: &str) -> BigUint {
    BigUint::from_str(s).unwrap()
}

/// Share of `participant` for the polynomial with `coeffs` (lowest degree first).
fn share<F: PrimeField>(coeffs: &[F::Element], participant: &Participant, field: &F) -> F::Element {
    let row = birkhoff_core::matrix::coefficient_row(participant, coeffs.len() as u32, field);
    row.iter()
        .zip(coeffs)
        .fold(field.zero(), |acc, (m, c)| field.add(&acc, &field.mul(m, c)))
}

fn combine<F: PrimeField>(
    set: &ParticipantSet,
    coeffs: &[F::Element],
    poly: &[F::Element],
    field: &F,
) -> F::Element {
    set.iter().zip(coeffs).fold(field.zero(), |acc, (p, c)| {
        field.add(&acc, &field.mul(c, &share(poly, p, field)))
    })
}

// --------------------------
// coefficient matrix
// --------------------------

#[test]
fn coefficient_matrix_for_increasing_ranks() {
    let prime = secp256k1_order();
    let field = BigPrimeField::new(prime).unwrap();
    let ps = set(&[(1, 0), (2, 1), (3, 2), (4, 3), (5, 4)]);

    let got = coefficient_matrix(&ps, 4, &field).unwrap();

    let rows: Vec<Vec<BigUint>> = [
        [1u32, 1, 1, 1],
        [0, 1, 4, 12],
        [0, 0, 2, 18],
        [0, 0, 0, 6],
        [0, 0, 0, 0],
    ]
    .iter()
    .map(|r| r.iter().map(|&v| BigUint::from(v)).collect())
    .collect();
    let expected = Matrix::from_biguint_rows(field, &rows).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn getter_func() {
    let bk = Participant::new(1u32, 0);
    assert_eq!(bk.x(), &BigUint::from(1u32));
    assert_eq!(bk.rank(), 0);
    assert_eq!(bk.to_string(), "(x, rank) = (1, 0)");
}

// --------------------------
// check_valid
// --------------------------

#[test]
fn enough_rank_can_recover_secret() {
    let prime = secp256k1_order();
    let cases: [&[(u32, u32)]; 5] = [
        &[(1, 0), (2, 1), (3, 2), (5, 4), (4, 3)],
        &[(1, 0), (2, 3), (3, 0), (5, 0), (4, 0)],
        &[(1, 0), (2, 0), (3, 0), (5, 0), (4, 0)],
        &[(1, 1), (2, 1), (3, 1), (5, 0), (4, 0)],
        &[(1, 1), (2, 1), (3, 1), (5, 1), (4, 0)],
    ];
    for case in cases {
        let ps = set(case);
        assert_eq!(ps.check_valid(THRESHOLD, &prime), Ok(()), "set {ps:?}");
    }
}

#[test]
fn duplicate_bk_is_invalid() {
    let ps = set(&[(1, 0), (2, 1), (3, 2), (1, 0), (5, 4)]);
    assert_eq!(
        ps.check_valid(THRESHOLD, &secp256k1_order()),
        Err(ValidationError::InvalidConfiguration)
    );
}

#[test]
fn all_ranks_too_high_has_no_valid_combination() {
    let ps = set(&[(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
    assert_eq!(
        ps.check_valid(THRESHOLD, &secp256k1_order()),
        Err(ValidationError::NoValidCombination)
    );
}

#[test]
fn enough_rank_but_singular_positions_is_invalid() {
    // (1,0), (2,1), (3,0) cannot recover the secret
    let ps = set(&[(1, 0), (2, 1), (3, 0), (4, 0), (5, 0)]);
    assert_eq!(
        ps.check_valid(THRESHOLD, &secp256k1_order()),
        Err(ValidationError::InvalidConfiguration)
    );
}

#[test]
fn check_valid_rejects_small_modulus() {
    let ps = set(&[(1, 0), (2, 0), (3, 0), (4, 0)]);
    assert_eq!(
        ps.check_valid(THRESHOLD, &BigUint::from(2u8)),
        Err(ValidationError::ModulusTooSmall)
    );
}

// --------------------------
// compute_coefficients
// --------------------------

#[test]
fn compute_coefficients_should_be_ok() {
    let prime = secp256k1_order();
    let ps = set(&[(1, 0), (2, 1), (3, 2), (4, 3)]);

    let got = ps.compute_coefficients(THRESHOLD, &prime).unwrap();

    let expected = vec![
        big("1"),
        big("115792089237316195423570985008687907852837564279074904382605163141518161494336"),
        big("57896044618658097711785492504343953926418782139537452191302581570759080747170"),
        big("0"),
    ];
    assert_eq!(got, expected);
    assert_eq!(got[1], &prime - 1u32);
}

#[test]
fn invalid_field_order() {
    let ps = set(&[(1, 0), (2, 1), (3, 2), (4, 3)]);
    assert_eq!(
        ps.compute_coefficients(THRESHOLD, &BigUint::from(2u8)),
        Err(RecoveryError::ModulusTooSmall)
    );
}

#[test]
fn larger_threshold() {
    let ps = set(&[(1, 0), (2, 1)]);
    assert_eq!(
        ps.compute_coefficients(THRESHOLD, &secp256k1_order()),
        Err(RecoveryError::ThresholdTooLarge)
    );
}

#[test]
fn not_invertible_matrices() {
    let prime = secp256k1_order();
    let cases: [&[(u32, u32)]; 3] = [
        // duplicated ranks with mismatched coverage
        &[(1, 2), (2, 2), (3, 3), (4, 0)],
        &[(1, 2), (2, 2), (3, 3), (4, 1), (5, 4)],
        // two participants at the same x
        &[(1, 1), (2, 3), (3, 3), (1, 1), (5, 3)],
    ];
    for case in cases {
        let ps = set(case);
        assert_eq!(
            ps.compute_coefficients(THRESHOLD, &prime),
            Err(RecoveryError::NotInvertible),
            "set {ps:?}"
        );
    }
}

#[test]
fn results_are_deterministic() {
    let prime = secp256k1_order();
    let ok = set(&[(1, 0), (2, 1), (3, 2), (4, 3)]);
    let singular = set(&[(1, 2), (2, 2), (3, 3), (4, 0)]);
    assert_eq!(
        ok.compute_coefficients(THRESHOLD, &prime),
        ok.compute_coefficients(THRESHOLD, &prime)
    );
    assert_eq!(
        singular.compute_coefficients(THRESHOLD, &prime),
        singular.compute_coefficients(THRESHOLD, &prime)
    );
    assert_eq!(
        ok.check_valid(THRESHOLD, &prime),
        ok.check_valid(THRESHOLD, &prime)
    );
}

#[test]
fn backends_agree_on_coefficients() {
    let modulus = 1_000_003u64;
    let small = SmallPrimeField::new(modulus).unwrap();
    let ps = set(&[(1, 0), (2, 1), (4, 0), (5, 2), (6, 0)]);

    let via_small: Vec<BigUint> = ps
        .compute_coefficients_in(THRESHOLD, &small)
        .unwrap()
        .iter()
        .map(|c| small.lift(c))
        .collect();
    let via_big = ps
        .compute_coefficients(THRESHOLD, &BigUint::from(modulus))
        .unwrap();
    assert_eq!(via_small, via_big);
}

#[test]
fn add_share_over_ed25519_order() {
    let prime = ed25519_order();
    let field = BigPrimeField::new(prime.clone()).unwrap();
    let ps = set(&[(1, 0), (2, 1), (3, 0), (7, 0)]);
    let new = Participant::new(11u32, 2);
    let poly: Vec<BigUint> = [5u32, 8, 13].iter().map(|&v| BigUint::from(v)).collect();

    let rebuilt = ps.iter().fold(BigUint::from(0u8), |acc, own| {
        let c = ps.add_share_coefficient(own, &new, THRESHOLD, &prime).unwrap();
        field.add(&acc, &field.mul(&c, &share(&poly, own, &field)))
    });
    assert_eq!(rebuilt, share(&poly, &new, &field));
}

// --------------------------
// properties
// --------------------------

#[proptest]
fn coefficients_recover_secret_over_secp256k1(
    a0: u64,
    a1: u64,
    a2: u64,
    #[strategy(0usize..3)] shape: usize,
) {
    let prime = secp256k1_order();
    let field = BigPrimeField::new(prime.clone()).unwrap();
    let shapes: [&[(u32, u32)]; 3] = [
        &[(1, 0), (2, 1), (3, 2), (4, 3)],
        &[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)],
        &[(1, 1), (2, 1), (3, 1), (5, 0), (4, 0)],
    ];
    let ps = set(shapes[shape]);
    prop_assert_eq!(ps.check_valid(THRESHOLD, &prime), Ok(()));

    let poly = [BigUint::from(a0), BigUint::from(a1), BigUint::from(a2)];
    let coeffs = ps.compute_coefficients(THRESHOLD, &prime).unwrap();
    prop_assert_eq!(combine(&ps, &coeffs, &poly, &field), BigUint::from(a0));
}

#[proptest]
fn shamir_sets_recover_secret_in_small_field(
    #[strategy(0u64..1_000_003)] secret: u64,
    #[strategy(0u64..1_000_003)] slope: u64,
    #[strategy(3u32..8)] participants: u32,
) {
    let field = SmallPrimeField::new(1_000_003).unwrap();
    let ps: ParticipantSet = (1..=participants).map(|x| Participant::new(x, 0)).collect();
    let coeffs = ps.compute_coefficients_in(2, &field).unwrap();
    prop_assert_eq!(combine(&ps, &coeffs, &[secret, slope], &field), secret);
}
