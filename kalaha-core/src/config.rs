//! GameConfig - table dimensions

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_PITS: usize = 6;
pub const DEFAULT_STONES: u32 = 6;

/// Dimensions of a fresh table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pits per side
    pub pit_count: usize,
    /// Stones placed in every pit at the start
    pub initial_stones: u32,
}

impl GameConfig {
    pub fn new(pit_count: usize, initial_stones: u32) -> Result<Self, ConfigError> {
        let config = Self {
            pit_count,
            initial_stones,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pit_count == 0 {
            return Err(ConfigError::NoPits);
        }
        if self.initial_stones == 0 {
            return Err(ConfigError::NoStones);
        }

        let total = u32::try_from(self.pit_count)
            .ok()
            .and_then(|pits| pits.checked_mul(2))
            .and_then(|pits| pits.checked_mul(self.initial_stones));
        if total.is_none() {
            return Err(ConfigError::TooManyStones);
        }
        Ok(())
    }

    /// Override dimensions, keeping the rest
    pub fn with_overrides(mut self, pit_count: Option<usize>, initial_stones: Option<u32>) -> Self {
        if let Some(pits) = pit_count {
            self.pit_count = pits;
        }
        if let Some(stones) = initial_stones {
            self.initial_stones = stones;
        }
        self
    }

    /// Load from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pit_count: DEFAULT_PITS,
            initial_stones: DEFAULT_STONES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.pit_count, 6);
        assert_eq!(config.initial_stones, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert_eq!(GameConfig::new(0, 4).unwrap_err(), ConfigError::NoPits);
        assert_eq!(GameConfig::new(4, 0).unwrap_err(), ConfigError::NoStones);
        assert!(GameConfig::new(1, 1).is_ok());
    }

    #[test]
    fn test_validation_bounds_total_stones() {
        assert_eq!(GameConfig::new(usize::MAX, 1).unwrap_err(), ConfigError::TooManyStones);
        assert_eq!(
            GameConfig::new(6, u32::MAX / 12 + 1).unwrap_err(),
            ConfigError::TooManyStones
        );
        assert!(GameConfig::new(6, u32::MAX / 12).is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"pit_count": 4}"#).unwrap();
        assert_eq!(config.pit_count, 4);
        assert_eq!(config.initial_stones, DEFAULT_STONES);
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(Some(4), None);
        assert_eq!(config, GameConfig { pit_count: 4, initial_stones: 6 });
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("kalaha-config-{}.json", std::process::id()));
        let config = GameConfig::new(5, 3).unwrap();

        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
