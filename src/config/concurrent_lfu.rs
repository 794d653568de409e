//! Configuration for the concurrent (sharded) Least Frequently Used cache.

extern crate std;

use super::LfuCacheConfig;
use crate::error::ConfigError;
use core::fmt;

/// Returns the default number of segments based on available parallelism.
pub(crate) fn default_segment_count() -> usize {
    std::thread::available_parallelism()
        .map(|p: std::num::NonZeroUsize| p.get())
        .unwrap_or(16)
        .clamp(4, 64)
}

/// Configuration for a concurrent LFU cache with segmented storage.
///
/// # Required Parameters
///
/// - `capacity`: Total maximum number of entries across all segments (set in constructor)
///
/// # Optional Parameters (Builder Methods)
///
/// - `segments`: Number of independent segments (default: based on CPU count,
///   never more than the capacity)
///
/// # Examples
///
/// ```
/// use freq_cache::config::ConcurrentLfuCacheConfig;
///
/// let config = ConcurrentLfuCacheConfig::new(1000).with_segments(8).unwrap();
/// assert_eq!(config.capacity(), 1000);
/// assert_eq!(config.segments(), 8);
/// assert_eq!(config.segment_capacities().iter().sum::<usize>(), 1000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentLfuCacheConfig {
    /// Base configuration (total capacity)
    base: LfuCacheConfig,
    /// Number of segments for sharding
    segments: usize,
}

impl ConcurrentLfuCacheConfig {
    /// Creates a new concurrent LFU cache configuration with the specified capacity.
    /// The segment count is clamped to not exceed capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let segments = default_segment_count().min(capacity).max(1);
        Self {
            base: LfuCacheConfig::new(capacity),
            segments,
        }
    }

    /// Builds a configuration from a signed capacity.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        let base = LfuCacheConfig::try_from(capacity)?;
        Ok(Self::new(base.capacity))
    }

    /// Sets the number of segments for concurrent access.
    ///
    /// The count is clamped to the capacity so that every segment can hold at
    /// least one entry. A zero-capacity cache keeps a single segment.
    pub fn with_segments(mut self, segments: usize) -> Result<Self, ConfigError> {
        if segments == 0 {
            return Err(ConfigError::ZeroSegments);
        }
        self.segments = segments.min(self.base.capacity).max(1);
        Ok(self)
    }

    /// Returns the total capacity across all segments.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.base.capacity
    }

    /// Returns the number of segments.
    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Returns the base configuration.
    #[inline]
    pub fn base_config(&self) -> &LfuCacheConfig {
        &self.base
    }

    /// Splits the total capacity across segments. The first
    /// `capacity % segments` segments get one extra slot, so the parts always
    /// add up to the configured capacity.
    pub fn segment_capacities(&self) -> std::vec::Vec<usize> {
        let per_segment = self.base.capacity / self.segments;
        let remainder = self.base.capacity % self.segments;
        (0..self.segments)
            .map(|i| per_segment + usize::from(i < remainder))
            .collect()
    }
}

impl fmt::Debug for ConcurrentLfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentLfuCacheConfig")
            .field("capacity", &self.base.capacity)
            .field("segments", &self.segments)
            .finish()
    }
}
