//! Exploration configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an adaptive tree exploration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// Maximum number of 1-bits in any explored mask
    pub max_bits: u32,
    /// Maximum number of fates to yield (0 = unlimited)
    pub fate_limit: usize,
}

impl ExploreConfig {
    /// Create a config bounding masks to `max_bits` ones, with no fate limit
    #[must_use]
    pub fn new(max_bits: u32) -> Self {
        Self {
            max_bits,
            fate_limit: 0,
        }
    }

    /// Set max bits
    #[must_use]
    pub fn with_max_bits(mut self, max_bits: u32) -> Self {
        self.max_bits = max_bits;
        self
    }

    /// Cap the number of fates yielded
    #[must_use]
    pub fn with_fate_limit(mut self, limit: usize) -> Self {
        self.fate_limit = limit;
        self
    }

    /// The fate cap, if any
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        (self.fate_limit > 0).then_some(self.fate_limit)
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explore_config_new() {
        let config = ExploreConfig::new(7);
        assert_eq!(config.max_bits, 7);
        assert_eq!(config.fate_limit, 0);
        assert_eq!(config.limit(), None);
    }

    #[test]
    fn test_explore_config_builders() {
        let config = ExploreConfig::default().with_max_bits(2).with_fate_limit(10);
        assert_eq!(config.max_bits, 2);
        assert_eq!(config.limit(), Some(10));
    }

    #[test]
    fn test_explore_config_default() {
        assert_eq!(ExploreConfig::default().max_bits, 3);
    }

    #[test]
    fn test_explore_config_json() {
        let config = ExploreConfig::new(4).with_fate_limit(2);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"max_bits":4,"fate_limit":2}"#);
        let restored: ExploreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
