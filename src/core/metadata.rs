use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Tool metadata written at setup and shown in help, version and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub author: String,
    pub year: i32,
}

impl Metadata {
    /// Metadata taken from the package manifest, dated this year
    pub fn from_package() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            keywords: ["cli", "alias", "shell", "directories", "productivity"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            author: env!("CARGO_PKG_AUTHORS").to_string(),
            year: chrono::Local::now().year(),
        }
    }

    /// Read the metadata file, `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let metadata = serde_json::from_str(&content)?;
        Ok(Some(metadata))
    }

    /// Read the metadata file, falling back to the package defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(metadata)) => metadata,
            Ok(None) => Self::from_package(),
            Err(e) => {
                log::warn!("Ignoring unreadable metadata at {:?}: {}", path, e);
                Self::from_package()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
