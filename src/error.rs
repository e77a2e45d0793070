use thiserror::Error;

/// Errors raised while constructing a table from a [`Config`].
///
/// Nothing past construction can fail: lookups and removals of missing keys
/// report `None`, and growth at the maximum capacity is absorbed by pinning
/// the threshold.
///
/// [`Config`]: crate::config::Config
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The requested initial capacity was negative.
    #[error("illegal initial capacity: {0}")]
    InvalidCapacity(isize),
    /// The load factor was zero, negative, or NaN.
    #[error("illegal load factor: {0}")]
    InvalidLoadFactor(f32),
}

/// Result alias for fallible constructors in this crate.
pub type Result<T> = core::result::Result<T, Error>;
