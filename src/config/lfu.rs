//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Examples
//!
//! ```
//! use freq_cache::config::LfuCacheConfig;
//! use freq_cache::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 100 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config);
//!
//! // A zero-capacity cache is legal and never stores anything.
//! let config = LfuCacheConfig { capacity: 0 };
//! let cache: LfuCache<String, Vec<u8>> = LfuCache::init(config);
//! assert!(cache.is_empty());
//! ```

use crate::error::ConfigError;
use core::fmt;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Zero disables
///   storage entirely.
///
/// # Examples
///
/// ```
/// use freq_cache::config::LfuCacheConfig;
/// use freq_cache::error::ConfigError;
///
/// let config = LfuCacheConfig::try_from(16i64).unwrap();
/// assert_eq!(config.capacity, 16);
///
/// let err = LfuCacheConfig::try_from(-1i64).unwrap_err();
/// assert_eq!(err, ConfigError::NegativeCapacity(-1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold
    pub capacity: usize,
}

impl LfuCacheConfig {
    /// Creates a configuration with the given capacity.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl TryFrom<i64> for LfuCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: i64) -> Result<Self, Self::Error> {
        usize::try_from(capacity)
            .map(Self::new)
            .map_err(|_| ConfigError::NegativeCapacity(capacity))
    }
}

impl TryFrom<isize> for LfuCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: isize) -> Result<Self, Self::Error> {
        usize::try_from(capacity)
            .map(Self::new)
            .map_err(|_| ConfigError::NegativeCapacity(capacity as i64))
    }
}

impl TryFrom<i32> for LfuCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(capacity))
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfu_config_creation() {
        let config = LfuCacheConfig { capacity: 100 };
        assert_eq!(config.capacity, 100);
        assert_eq!(config, LfuCacheConfig::new(100));
    }

    #[test]
    fn test_lfu_config_zero_capacity_is_legal() {
        assert_eq!(LfuCacheConfig::try_from(0i64), Ok(LfuCacheConfig::new(0)));
    }

    #[test]
    fn test_lfu_config_rejects_negative() {
        assert_eq!(
            LfuCacheConfig::try_from(-7i64),
            Err(ConfigError::NegativeCapacity(-7))
        );
        assert_eq!(
            LfuCacheConfig::try_from(-1isize),
            Err(ConfigError::NegativeCapacity(-1))
        );
        assert_eq!(
            LfuCacheConfig::try_from(i32::MIN),
            Err(ConfigError::NegativeCapacity(i64::from(i32::MIN)))
        );
    }

    #[test]
    fn test_lfu_config_from_signed() {
        assert_eq!(LfuCacheConfig::try_from(3i32).map(|c| c.capacity), Ok(3));
        assert_eq!(LfuCacheConfig::try_from(3isize).map(|c| c.capacity), Ok(3));
    }
}
