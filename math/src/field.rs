//! Prime-field backends.

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::{error::FieldError, traits::PrimeField};

/// Smallest modulus rejected by both backends.
const MIN_MODULUS: u64 = 2;

/// Arbitrary-precision prime field backed by [`BigUint`].
///
/// The modulus is assumed to be prime; only moduli `<= 2` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct BigPrimeField {
    modulus: BigUint,
}

impl BigPrimeField {
    pub fn new(modulus: BigUint) -> Result<Self, FieldError> {
        if modulus <= BigUint::from(MIN_MODULUS) {
            return Err(FieldError::ModulusTooSmall);
        }
        Ok(Self { modulus })
    }
}

impl TryFrom<BigUint> for BigPrimeField {
    type Error = FieldError;

    fn try_from(modulus: BigUint) -> Result<Self, Self::Error> {
        Self::new(modulus)
    }
}

impl From<BigPrimeField> for BigUint {
    fn from(field: BigPrimeField) -> Self {
        field.modulus
    }
}

impl PrimeField for BigPrimeField {
    type Element = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one()
    }

    fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    fn lift(&self, element: &BigUint) -> BigUint {
        element.clone()
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // b is reduced first so the intermediate never goes negative
        (a + &self.modulus - (b % &self.modulus)) % &self.modulus
    }

    fn neg(&self, a: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    fn inverse(&self, a: &BigUint) -> Option<BigUint> {
        let a = a % &self.modulus;
        if a.is_zero() {
            return None;
        }
        // Fermat's little theorem: a^(p-2) = a^(-1) mod p
        let exp = &self.modulus - BigUint::from(2u8);
        Some(a.modpow(&exp, &self.modulus))
    }

    fn is_zero(&self, a: &BigUint) -> bool {
        (a % &self.modulus).is_zero()
    }

    fn pow(&self, base: &BigUint, exp: u64) -> BigUint {
        base.modpow(&BigUint::from(exp), &self.modulus)
    }
}

/// Prime field with a modulus that fits in a `u64`.
///
/// Products are computed in `u128`, so any `u64` modulus is safe. Mostly useful
/// as a cheap stand-in for [`BigPrimeField`] in tests and small deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SmallPrimeField {
    modulus: u64,
}

impl SmallPrimeField {
    pub fn new(modulus: u64) -> Result<Self, FieldError> {
        if modulus <= MIN_MODULUS {
            return Err(FieldError::ModulusTooSmall);
        }
        Ok(Self { modulus })
    }

    #[inline]
    fn wide(&self) -> u128 {
        self.modulus as u128
    }
}

impl TryFrom<u64> for SmallPrimeField {
    type Error = FieldError;

    fn try_from(modulus: u64) -> Result<Self, Self::Error> {
        Self::new(modulus)
    }
}

impl From<SmallPrimeField> for u64 {
    fn from(field: SmallPrimeField) -> Self {
        field.modulus
    }
}

impl PrimeField for SmallPrimeField {
    type Element = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn reduce(&self, value: &BigUint) -> u64 {
        let reduced = value % self.modulus;
        reduced.iter_u64_digits().next().unwrap_or(0)
    }

    fn lift(&self, element: &u64) -> BigUint {
        BigUint::from(*element)
    }

    fn from_u64(&self, value: u64) -> u64 {
        value % self.modulus
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 + *b as u128) % self.wide()) as u64
    }

    fn sub(&self, a: &u64, b: &u64) -> u64 {
        let b = *b as u128 % self.wide();
        ((*a as u128 + self.wide() - b) % self.wide()) as u64
    }

    fn neg(&self, a: &u64) -> u64 {
        let a = *a % self.modulus;
        if a == 0 {
            0
        } else {
            self.modulus - a
        }
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 * *b as u128) % self.wide()) as u64
    }

    fn inverse(&self, a: &u64) -> Option<u64> {
        let a = *a % self.modulus;
        if a == 0 {
            return None;
        }
        Some(self.pow(&a, self.modulus - 2))
    }

    fn is_zero(&self, a: &u64) -> bool {
        *a % self.modulus == 0
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    /// 2^61 - 1, a Mersenne prime.
    const M61: u64 = 2_305_843_009_213_693_951;

    fn small() -> SmallPrimeField {
        SmallPrimeField::new(M61).unwrap()
    }

    fn big() -> BigPrimeField {
        BigPrimeField::new(BigUint::from(M61)).unwrap()
    }

    #[test]
    fn modulus_of_two_or_less_is_rejected() {
        for modulus in 0..=2u64 {
            assert_eq!(
                SmallPrimeField::new(modulus),
                Err(FieldError::ModulusTooSmall)
            );
            assert_eq!(
                BigPrimeField::new(BigUint::from(modulus)),
                Err(FieldError::ModulusTooSmall)
            );
        }
        assert!(SmallPrimeField::new(3).is_ok());
        assert!(BigPrimeField::new(BigUint::from(3u8)).is_ok());
    }

    #[test]
    fn inverse_of_zero_is_none() {
        assert_eq!(small().inverse(&0), None);
        assert_eq!(small().inverse(&M61), None);
        assert_eq!(big().inverse(&BigUint::zero()), None);
    }

    #[test]
    fn negative_results_are_normalized() {
        let f = SmallPrimeField::new(7).unwrap();
        assert_eq!(f.sub(&2, &5), 4);
        assert_eq!(f.neg(&1), 6);
        assert_eq!(f.neg(&0), 0);

        let g = BigPrimeField::new(BigUint::from(7u8)).unwrap();
        assert_eq!(g.sub(&BigUint::from(2u8), &BigUint::from(5u8)), BigUint::from(4u8));
        assert_eq!(g.neg(&BigUint::one()), BigUint::from(6u8));
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let f = SmallPrimeField::new(101).unwrap();
        let mut acc = 1;
        for exp in 0..20u64 {
            assert_eq!(f.pow(&3, exp), acc);
            acc = f.mul(&acc, &3);
        }
    }

    #[test]
    fn serde_rejects_small_modulus() {
        let json = serde_json::to_string(&small()).unwrap();
        assert_eq!(json, M61.to_string());
        let back: SmallPrimeField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, small());
        assert!(serde_json::from_str::<SmallPrimeField>("2").is_err());

        let back: BigPrimeField =
            serde_json::from_str(&serde_json::to_string(&big()).unwrap()).unwrap();
        assert_eq!(back, big());
    }

    #[quickcheck]
    fn addition_is_commutative(a: u64, b: u64) -> bool {
        let f = small();
        let (a, b) = (f.from_u64(a), f.from_u64(b));
        f.add(&a, &b) == f.add(&b, &a)
    }

    #[quickcheck]
    fn subtraction_undoes_addition(a: u64, b: u64) -> bool {
        let f = small();
        let (a, b) = (f.from_u64(a), f.from_u64(b));
        f.sub(&f.add(&a, &b), &b) == a
    }

    #[quickcheck]
    fn multiplication_distributes_over_addition(a: u64, b: u64, c: u64) -> bool {
        let f = small();
        let (a, b, c) = (f.from_u64(a), f.from_u64(b), f.from_u64(c));
        f.mul(&a, &f.add(&b, &c)) == f.add(&f.mul(&a, &b), &f.mul(&a, &c))
    }

    #[quickcheck]
    fn multiplication_with_inverse_gives_identity(a: u64) -> bool {
        let f = small();
        let a = f.from_u64(a);
        match f.inverse(&a) {
            Some(inv) => f.mul(&a, &inv) == 1,
            None => a == 0,
        }
    }

    #[quickcheck]
    fn backends_agree(a: u64, b: u64, exp: u8) -> bool {
        let (s, g) = (small(), big());
        let (sa, sb) = (s.from_u64(a), s.from_u64(b));
        let (ga, gb) = (g.from_u64(a), g.from_u64(b));
        s.lift(&s.mul(&sa, &sb)) == g.mul(&ga, &gb)
            && s.lift(&s.sub(&sa, &sb)) == g.sub(&ga, &gb)
            && s.lift(&s.pow(&sa, exp as u64)) == g.pow(&ga, exp as u64)
            && s.inverse(&sa).map(|e| s.lift(&e)) == g.inverse(&ga)
    }
}
