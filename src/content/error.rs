//! Per-file loading failures

use std::path::PathBuf;
use thiserror::Error;

/// Why a single blog file was skipped
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error loading blog post {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing blog post \"{file}\": {message}")]
    Parse { file: String, message: String },

    #[error("Invalid blog post \"{file}\": Missing required fields: {}", .fields.join(", "))]
    MissingFields {
        file: String,
        fields: Vec<&'static str>,
    },
}

impl LoadError {
    /// File name of the skipped post
    pub fn file(&self) -> String {
        match self {
            LoadError::Read { path, .. } => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            LoadError::Parse { file, .. } | LoadError::MissingFields { file, .. } => file.clone(),
        }
    }
}
