//! Bucket-count and threshold arithmetic.
//!
//! Bucket arrays are always a power of two in length so that a spread hash can
//! be reduced to an index with a mask, and so that doubling moves every entry
//! either nowhere or exactly `old_capacity` slots up.

/// Bucket count used when a table is materialized without a requested
/// capacity.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Largest bucket count a table will ever grow to.
pub const MAXIMUM_CAPACITY: usize = 1 << 30;

/// Load factor used when none is configured.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Threshold value meaning "never grow again".
pub const MAXIMUM_THRESHOLD: usize = i32::MAX as usize;

/// Rounds `requested` up to the next power of two, clamped to
/// [`MAXIMUM_CAPACITY`].
///
/// Requests of zero or one yield one.
///
/// # Examples
///
/// ```rust
/// use chain_hash::capacity::table_size_for;
///
/// assert_eq!(table_size_for(0), 1);
/// assert_eq!(table_size_for(14), 16);
/// assert_eq!(table_size_for(16), 16);
/// assert_eq!(table_size_for(usize::MAX), 1 << 30);
/// ```
#[inline]
pub fn table_size_for(requested: usize) -> usize {
    if requested <= 1 {
        return 1;
    }
    requested.min(MAXIMUM_CAPACITY).next_power_of_two()
}

/// Computes `floor(capacity * load_factor)`.
///
/// Returns [`MAXIMUM_THRESHOLD`] once either the capacity or the product
/// reaches [`MAXIMUM_CAPACITY`].
///
/// # Examples
///
/// ```rust
/// use chain_hash::capacity::threshold_for;
///
/// assert_eq!(threshold_for(16, 0.75), 12);
/// assert_eq!(threshold_for(1, 0.75), 0);
/// assert_eq!(threshold_for(1 << 30, 0.75), i32::MAX as usize);
/// ```
#[inline]
pub fn threshold_for(capacity: usize, load_factor: f32) -> usize {
    let product = capacity as f32 * load_factor;
    if capacity < MAXIMUM_CAPACITY && product < MAXIMUM_CAPACITY as f32 {
        product as usize
    } else {
        MAXIMUM_THRESHOLD
    }
}

/// Computes the staged threshold for a table that must hold `len` entries
/// before it has been materialized.
///
/// This is the bucket count that keeps `len` entries at or below the load
/// factor, rounded up to a power of two.
#[inline]
pub fn presize_threshold(len: usize, load_factor: f32) -> usize {
    let wanted = ceil(len as f64 / load_factor as f64);
    let wanted = if wanted < MAXIMUM_CAPACITY as f64 {
        wanted as usize
    } else {
        MAXIMUM_CAPACITY
    };
    table_size_for(wanted)
}

// `f64::ceil` lives in `std`.
#[inline]
fn ceil(value: f64) -> f64 {
    let truncated = value as u64 as f64;
    if truncated < value {
        truncated + 1.0
    } else {
        truncated
    }
}
