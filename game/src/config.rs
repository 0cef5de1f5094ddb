pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::DEFAULT_PAUSE;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "mutex_tictactoe.yaml";
pub const MAX_PAUSE_MS: u64 = 5000;

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub pause_ms: u64,
    pub seed: Option<u64>,
    pub show_winning_line: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pause_ms: DEFAULT_PAUSE.as_millis() as u64,
            seed: None,
            show_winning_line: true,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pause_ms > MAX_PAUSE_MS {
            return Err(format!("pause_ms must not exceed {}", MAX_PAUSE_MS));
        }
        Ok(())
    }
}

impl GameConfig {
    /// Applies command-line values on top of the loaded config and validates
    /// the merged result.
    pub fn with_overrides(mut self, seed: Option<u64>, pause_ms: Option<u64>) -> Result<Self, String> {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(pause_ms) = pause_ms {
            self.pause_ms = pause_ms;
        }
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::MemoryContentConfigProvider;

    fn load(content: &str) -> Result<GameConfig, String> {
        ConfigManager::<MemoryContentConfigProvider, GameConfig, YamlConfigSerializer>::new(
            MemoryContentConfigProvider::new(Some(content.to_string())),
            YamlConfigSerializer,
        )
        .get_config()
    }

    #[test]
    fn test_default_config_matches_classic_pacing() {
        let config = GameConfig::default();

        assert_eq!(config.pause_ms, 100);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = load("seed: 7\n").unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pause_ms, 100);
        assert!(config.show_winning_line);
    }

    #[test]
    fn test_pause_limit_enforced() {
        let err = load("pause_ms: 60000\n").unwrap_err();

        assert!(err.contains("pause_ms"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = GameConfig {
            pause_ms: 100,
            seed: Some(1),
            show_winning_line: false,
        }
        .with_overrides(Some(9), Some(0))
        .unwrap();

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pause_ms, 0);
        assert!(!config.show_winning_line);
    }

    #[test]
    fn test_absent_overrides_keep_file_values() {
        let config = GameConfig {
            pause_ms: 30,
            seed: Some(4),
            show_winning_line: true,
        }
        .with_overrides(None, None)
        .unwrap();

        assert_eq!(config.seed, Some(4));
        assert_eq!(config.pause_ms, 30);
    }

    #[test]
    fn test_cli_pause_over_limit_rejected() {
        let err = GameConfig::default()
            .with_overrides(None, Some(60_000))
            .unwrap_err();

        assert!(err.contains("pause_ms"));
    }

    #[test]
    fn test_cli_pause_at_limit_accepted() {
        let config = GameConfig::default()
            .with_overrides(Some(3), Some(MAX_PAUSE_MS))
            .unwrap();

        assert_eq!(config.pause_ms, MAX_PAUSE_MS);
    }
}
