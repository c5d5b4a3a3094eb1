//! Configuration for sharded aggregation.

use crate::error::AggregateError;

/// Configuration for [`aggregate`](crate::aggregate).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use rainstat_aggregate::AggregateConfig;
///
/// let config = AggregateConfig::new()
///     .with_shard_size(256)
///     .with_max_malformed(Some(10));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig {
    shard_size: usize,
    max_malformed: Option<usize>,
}

impl AggregateConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `shard_size = 4096`, `max_malformed = None` (unlimited).
    pub fn new() -> Self {
        Self {
            shard_size: 4096,
            max_malformed: None,
        }
    }

    /// Sets the number of records per worker shard.
    pub fn with_shard_size(mut self, n: usize) -> Self {
        self.shard_size = n;
        self
    }

    /// Sets the maximum number of malformed records tolerated before the
    /// run fails. `None` tolerates any number.
    pub fn with_max_malformed(mut self, limit: Option<usize>) -> Self {
        self.max_malformed = limit;
        self
    }

    /// Returns the number of records per shard.
    pub fn shard_size(&self) -> usize {
        self.shard_size
    }

    /// Returns the malformed-record limit.
    pub fn max_malformed(&self) -> Option<usize> {
        self.max_malformed
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), AggregateError> {
        if self.shard_size == 0 {
            return Err(AggregateError::InvalidConfig {
                reason: "shard_size must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AggregateConfig::new();
        assert_eq!(cfg.shard_size(), 4096);
        assert_eq!(cfg.max_malformed(), None);
    }

    #[test]
    fn builder_chaining() {
        let cfg = AggregateConfig::new()
            .with_shard_size(8)
            .with_max_malformed(Some(0));
        assert_eq!(cfg.shard_size(), 8);
        assert_eq!(cfg.max_malformed(), Some(0));
    }

    #[test]
    fn validate_ok() {
        assert!(AggregateConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_bad_shard_size() {
        assert!(AggregateConfig::new().with_shard_size(0).validate().is_err());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(AggregateConfig::default(), AggregateConfig::new());
    }
}
