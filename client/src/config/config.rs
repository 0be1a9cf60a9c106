use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::GameConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const STATS_FILE_NAME: &str = "tictactoe_stats.yaml";

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn file_next_to_exe(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_manager(path_override: Option<&str>) -> ClientConfigManager {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&file_next_to_exe(CONFIG_FILE_NAME)),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub stats_file: String,
    #[serde(default = "default_show_thinking_delay")]
    pub thinking_delay: bool,
}

fn default_show_thinking_delay() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.stats_file.trim().is_empty() {
            return Err("stats_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            stats_file: file_next_to_exe(STATS_FILE_NAME),
            thinking_delay: true,
        }
    }
}
