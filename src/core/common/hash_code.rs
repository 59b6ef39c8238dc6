//! 32-bit hash codes compatible with the JVM's `hashCode` contracts.
//!
//! Rows hash as `31 * hash(key) + hash(fields)`, so every piece that feeds into
//! that sum has to reproduce the exact JVM algorithm: UTF-16 polynomial string
//! hashes, list hashes seeded with `1`, and the high/low fold used for 64-bit
//! numbers. All arithmetic wraps on overflow.

/// Multiplier used by every polynomial hash in this module.
pub const MULTIPLIER: i32 = 31;

/// Canonical bit pattern every NaN collapses to.
pub const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// `31 * acc + next`, wrapping.
#[inline]
#[must_use]
pub const fn combine(acc: i32, next: i32) -> i32 {
    MULTIPLIER.wrapping_mul(acc).wrapping_add(next)
}

/// Polynomial hash over the UTF-16 code units of `s`.
#[must_use]
pub fn string_hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0, |h, unit| combine(h, i32::from(unit)))
}

/// Ordered list hash: starts at `1` and folds each element hash in.
#[must_use]
pub fn list_hash_code<I>(element_hashes: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    element_hashes.into_iter().fold(1, combine)
}

/// Folds the high half of a 64-bit pattern into the low half.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
const fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as u32 as i32
}

#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn long_hash_code(value: i64) -> i32 {
    fold_u64(value as u64)
}

/// Hash of an integer cell: boxed 32-bit integers hash to themselves, wider
/// values fall back to the 64-bit fold.
#[inline]
#[must_use]
pub fn integer_hash_code(value: i64) -> i32 {
    i32::try_from(value).unwrap_or_else(|_| long_hash_code(value))
}

/// Bit pattern used for both equality and hashing of floats.
#[inline]
#[must_use]
pub fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        value.to_bits()
    }
}

#[inline]
#[must_use]
pub fn double_hash_code(value: f64) -> i32 {
    fold_u64(canonical_bits(value))
}

#[inline]
#[must_use]
pub const fn bool_hash_code(value: bool) -> i32 {
    if value {
        1231
    } else {
        1237
    }
}

/// Array hash over signed bytes.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn bytes_hash_code(bytes: &[u8]) -> i32 {
    list_hash_code(bytes.iter().map(|&b| i32::from(b as i8)))
}
