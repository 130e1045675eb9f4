//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::reading_time::WORDS_PER_MINUTE;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Content
    pub content_dir: String,
    pub words_per_minute: usize,

    // Date format (Moment.js style)
    pub date_format: String,

    // Pagination
    pub per_page_home: usize,
    pub per_page_tag: usize,

    // Persisted UI state, relative to the base directory
    pub storage_path: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_dir: "blogs".to_string(),
            words_per_minute: WORDS_PER_MINUTE,

            date_format: "MMMM D, YYYY".to_string(),

            per_page_home: 2,
            per_page_tag: 3,

            storage_path: ".blog-kit/storage.json".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }
}
