//! Well-known share fields and threshold bounds.

use num_bigint::BigUint;

// Little-endian u32 digits.
const SECP256K1_ORDER_DIGITS: [u32; 8] = [
    0xd0364141, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff,
    0xffffffff, 0xffffffff,
];
const ED25519_ORDER_DIGITS: [u32; 8] = [
    0x5cf5d3ed, 0x5812631a, 0xa2f79cd6, 0x14def9de, 0x00000000, 0x00000000,
    0x00000000, 0x10000000,
];

/// Order `n` of the secp256k1 group.
#[inline]
pub fn secp256k1_order() -> BigUint {
    BigUint::from_slice(&SECP256K1_ORDER_DIGITS)
}

/// Order `ℓ = 2^252 + 27742317777372353535851937790883648493` of the
/// ed25519 prime-order subgroup.
#[inline]
pub fn ed25519_order() -> BigUint {
    BigUint::from_slice(&ED25519_ORDER_DIGITS)
}

/// A threshold is usable for recovery when it is positive and strictly below
/// the participant count.
#[inline]
pub const fn validate_threshold_config(threshold: u32, participants: usize) -> bool {
    threshold >= 1 && participants > threshold as usize
}
