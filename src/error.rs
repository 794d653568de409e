//! Error types.
//!
//! The cache has exactly one failure mode: invalid configuration at
//! construction time. A lookup miss is not an error; `get` reports it as
//! `None`.
//!
//! ```
//! use freq_cache::error::ConfigError;
//! use freq_cache::LfuCache;
//!
//! let err = LfuCache::<u32, u32>::try_new(-1).unwrap_err();
//! assert_eq!(err, ConfigError::NegativeCapacity(-1));
//! assert!(err.to_string().contains("capacity"));
//! ```

use thiserror::Error;

/// Returned when cache configuration parameters are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A capacity below zero was requested.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// A concurrent cache was configured with no shards.
    #[error("segment count must be greater than zero")]
    ZeroSegments,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::NegativeCapacity(-5).to_string(),
            "capacity must be non-negative, got -5"
        );
        assert_eq!(
            ConfigError::ZeroSegments.to_string(),
            "segment count must be greater than zero"
        );
    }

    #[test]
    fn test_implements_error() {
        fn assert_error<T: core::error::Error>() {}
        assert_error::<ConfigError>();
    }
}
