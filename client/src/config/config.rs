use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::TicTacToeConfig;

const CONFIG_FILE_NAME: &str = "dracula_tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Manager for `path`, or for the file next to the executable when no path is given.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub use_log_prefix: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::BotType;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_dracula_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let mut config = Config::default();
        config.tictactoe.bot_type = BotType::Optimal;
        config.tictactoe.seed = Some(1897);
        config.verbose = true;

        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config().unwrap(), config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_get_or_create_writes_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(manager.get_or_create_config().unwrap(), Config::default());

        let content = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap();
        assert!(content.unwrap().contains("success_code"));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            tictactoe:
              bot_type: Imperfect
              rules:
                wins_to_succeed: 0
                opponent_streak_to_reset: 3
                draws_to_go_first: 5
              round_pause_ms: 900
              success_code: "CODE"
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unknown_bot_type_cant_be_read() {
        let content = r#"
            tictactoe:
              bot_type: Hopeless
              rules:
                wins_to_succeed: 3
                opponent_streak_to_reset: 3
                draws_to_go_first: 5
              round_pause_ms: 900
              success_code: "CODE"
        "#;
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, String> = serializer.deserialize(content);
        assert!(result.is_err());
    }
}
