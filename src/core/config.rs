use std::env;
use std::path::PathBuf;

use crate::error::{Result, WkaError};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WKA_HOME";

const ALIAS_FILE_NAME: &str = "aliases.sh";
const METADATA_FILE_NAME: &str = "metadata.json";

/// Resolved locations used by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub alias_file: PathBuf,
    pub metadata_file: PathBuf,
    /// Root of the well-known directory registry
    pub home_dir: PathBuf,
}

impl Config {
    /// Resolve paths from the environment and the platform directories
    pub fn load() -> Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| WkaError::config("Could not determine home directory"))?;
        let data_dir = Self::get_data_dir()?;

        log::debug!("Using data directory {:?}", data_dir);
        Ok(Self::with_paths(data_dir, home_dir))
    }

    /// Build a config rooted at explicit directories (useful for testing)
    pub fn with_paths(data_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            alias_file: data_dir.join(ALIAS_FILE_NAME),
            metadata_file: data_dir.join(METADATA_FILE_NAME),
            data_dir,
            home_dir,
        }
    }

    /// Whether setup has created the alias file
    pub fn is_set_up(&self) -> bool {
        self.alias_file.exists()
    }

    fn get_data_dir() -> Result<PathBuf> {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            _ => dirs::config_dir()
                .map(|dir| dir.join("wka"))
                .ok_or_else(|| WkaError::config("Could not determine config directory")),
        }
    }
}
