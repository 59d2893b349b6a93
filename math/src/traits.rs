use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use num_bigint::BigUint;

/// Arithmetic over `ℤ/pℤ` for a prime `p` fixed at construction time.
///
/// The modulus lives on the field value rather than on its elements, so
/// elements are plain data and every operation goes through `&self`.
/// Implementors keep elements in canonical form, i.e. in `[0, p)`.
pub trait PrimeField: Clone + Debug + PartialEq + Send + Sync {
    type Element: Clone + Debug + Display + Eq + Hash + Send + Sync;

    fn zero(&self) -> Self::Element;

    fn one(&self) -> Self::Element;

    /// Map an arbitrary non-negative integer into the field.
    fn reduce(&self, value: &BigUint) -> Self::Element;

    /// Canonical integer representative of `element`.
    fn lift(&self, element: &Self::Element) -> BigUint;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Multiplicative inverse, `None` for zero.
    fn inverse(&self, a: &Self::Element) -> Option<Self::Element>;

    fn is_zero(&self, a: &Self::Element) -> bool {
        *a == self.zero()
    }

    fn from_u64(&self, value: u64) -> Self::Element {
        self.reduce(&BigUint::from(value))
    }

    /// Square-and-multiply exponentiation.
    #[must_use]
    fn pow(&self, base: &Self::Element, exp: u64) -> Self::Element {
        let mut acc = self.one();
        let bit_length = u64::BITS - exp.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = self.mul(&acc, &acc);
            if exp & (1 << i) != 0 {
                acc = self.mul(&acc, base);
            }
        }
        acc
    }
}
