use serde::{Serialize, Deserialize};
use lazy_static::lazy_static;
use std::sync::RwLock;
use std::path::Path;
use std::fs;
use std::io::Write;

use crate::constants;

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    pub filename: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PacingConfig {
    pub scroll_poll_ms: u64,
    pub progress_interval: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub export: ExportConfig,
    pub pacing: PacingConfig,
}

impl Config {
    fn default() -> Self {
        Config {
            export: ExportConfig {
                filename: constants::DEFAULT_EXPORT_FILENAME.to_string(),
            },
            pacing: PacingConfig {
                scroll_poll_ms: constants::DEFAULT_SCROLL_POLL_MS,
                progress_interval: constants::DEFAULT_PROGRESS_INTERVAL,
            },
        }
    }

    fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(toml.as_bytes())?;
        Ok(())
    }

    fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config_contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_contents)?;

        if config.pacing.progress_interval < 1 {
            panic!("It makes no sense for progress_interval to be less than 1");
        }

        Ok(config)
    }

    fn load_or_create_default(path: &str) -> Config {
        if Path::new(path).exists() {
            Config::load_from_file(path).expect("Failed to load configuration")
        } else {
            let default_config = Config::default();
            default_config.save_to_file(path).expect("Failed to save default configuration");
            default_config
        }
    }
}

lazy_static! {
    pub static ref CONFIG: RwLock<Config> = RwLock::new(
        Config::load_or_create_default("settings.toml"),
    );
}
