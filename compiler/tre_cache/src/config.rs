//! Cache configuration.

use std::num::NonZeroUsize;

use tracing::warn;

/// Default number of matchers a cache holds.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(n) => n,
    None => unreachable!(),
};

/// Environment variable read by [`CacheConfig::from_env`].
pub const CAPACITY_ENV: &str = "TRE_CACHE_CAPACITY";

/// Configuration for a [`MatcherCache`](crate::MatcherCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of resident matchers.
    pub capacity: NonZeroUsize,
}

impl CacheConfig {
    /// Create a configuration with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Read the capacity from `TRE_CACHE_CAPACITY`.
    ///
    /// Unset means the default. A value that is not a positive integer is
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(CAPACITY_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::new();
        };

        match raw.trim().parse::<NonZeroUsize>() {
            Ok(capacity) => Self::new().with_capacity(capacity),
            Err(err) => {
                warn!(
                    value = raw,
                    error = %err,
                    "ignoring invalid {CAPACITY_ENV}, using default capacity {DEFAULT_CAPACITY}"
                );
                Self::new()
            }
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}
