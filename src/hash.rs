use core::hash::BuildHasher;
use core::hash::Hash;

/// Turns a raw 32-bit hash into the hash used for bucket indexing.
///
/// The high half is shifted down and combined with the original value using
/// a bitwise AND. Bits 16 and above of the result are therefore always zero,
/// and each low bit is set only if both contributing bits are set. This is a
/// weaker mix than the usual XOR fold and concentrates keys in low-numbered
/// buckets; it is kept as-is so bucket placement stays bit-for-bit
/// reproducible.
///
/// # Examples
///
/// ```rust
/// use chain_hash::hash::spread;
///
/// assert_eq!(spread(0), 0);
/// assert_eq!(spread(0xFFFF_FFFF), 0xFFFF);
/// assert_eq!(spread(0x0012_AB70), 0x10);
/// ```
#[inline(always)]
pub const fn spread(raw: u32) -> u32 {
    (raw >> 16) & raw
}

/// Computes the raw 32-bit hash of `value` with `hash_builder`.
///
/// The builder's 64-bit output is truncated to its low 32 bits.
#[inline]
pub fn raw_hash<S, T>(hash_builder: &S, value: &T) -> u32
where
    S: BuildHasher,
    T: Hash + ?Sized,
{
    hash_builder.hash_one(value) as u32
}

/// Computes the spread hash of `key` with `hash_builder`.
///
/// Absent keys are expressed as `Option::None` and hash through
/// `hash_builder` like any other key. No key is pinned to bucket zero.
#[inline]
pub fn key_hash<S, K>(hash_builder: &S, key: &K) -> u32
where
    S: BuildHasher,
    K: Hash + ?Sized,
{
    spread(raw_hash(hash_builder, key))
}
