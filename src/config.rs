use crate::capacity::DEFAULT_LOAD_FACTOR;
use crate::capacity::MAXIMUM_CAPACITY;
use crate::capacity::table_size_for;
use crate::error::Error;
use crate::error::Result;

/// Construction parameters for a [`HashTable`] or [`HashMap`].
///
/// The initial capacity is signed so that callers forwarding untrusted sizes
/// get an [`Error::InvalidCapacity`] instead of a wrapped-around request.
///
/// # Examples
///
/// ```rust
/// use chain_hash::Config;
///
/// let config = Config::new().initial_capacity(14).load_factor(0.5);
/// assert!(config.validate().is_ok());
///
/// assert!(Config::new().initial_capacity(-1).validate().is_err());
/// assert!(Config::new().load_factor(f32::NAN).validate().is_err());
/// ```
///
/// [`HashTable`]: crate::HashTable
/// [`HashMap`]: crate::HashMap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_capacity: Option<isize>,
    load_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: None,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl Config {
    /// Creates a configuration with no requested capacity and the default
    /// load factor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a starting bucket count. The table rounds it up to a power of
    /// two when it is first materialized.
    pub fn initial_capacity(mut self, capacity: isize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Sets the ratio of entries to buckets at which the table grows.
    pub fn load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks the configuration and returns the values a table starts from:
    /// the staged threshold and the load factor.
    ///
    /// A staged threshold of zero means no capacity was requested and the
    /// defaults apply at materialization.
    pub(crate) fn resolve(&self) -> Result<(usize, f32)> {
        self.validate()?;
        let staged = match self.initial_capacity {
            Some(capacity) => table_size_for((capacity as usize).min(MAXIMUM_CAPACITY)),
            None => 0,
        };
        Ok((staged, self.load_factor))
    }

    /// Validates the requested capacity and load factor.
    ///
    /// Capacities above [`MAXIMUM_CAPACITY`] are accepted and clamped later.
    pub fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.initial_capacity
            && capacity < 0
        {
            return Err(Error::InvalidCapacity(capacity));
        }
        if self.load_factor.is_nan() || self.load_factor <= 0.0 {
            return Err(Error::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}
