use std::path::PathBuf;

use mnk_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{DisplayConfig, GameConfig, RandomPlayConfig};

const CONFIG_FILE_NAME: &str = "mnk_client_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub random: RandomPlayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.random.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_mnk_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.game.board_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: GameConfig { board_size: 5 },
            random: RandomPlayConfig {
                rounds: 10,
                seed: Some(1234),
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("game:\n  board_size: 4\n").unwrap();
        assert_eq!(config.game.board_size, 4);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.random, RandomPlayConfig::default());
    }

    #[test]
    fn test_too_small_board_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content("game:\n  board_size: 2\n")
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_oversized_board_fails_validation() {
        let config = Config {
            game: GameConfig {
                board_size: 1usize << 33,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);
        let config = Config {
            random: RandomPlayConfig {
                rounds: 0,
                seed: None,
            },
            ..Config::default()
        };
        assert!(manager.set_config(&config).is_err());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_malformed_yaml_is_a_deserialize_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, _> = serializer.deserialize("game: [not, a, map");
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
