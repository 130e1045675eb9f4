//! Theme module - light/dark theme state and its persistence
//!
//! The persisted value and the document flag are reached through two
//! injected capabilities: a [`KeyValueStore`] standing in for browser local
//! storage, and an optional [`PresentationSurface`] standing in for the
//! document root. Without a surface the controller is headless and every
//! operation is a no-op.

mod controller;
mod storage;
mod surface;

pub use controller::{RevealOrigin, ThemeController, THEME_STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use surface::{Document, PresentationSurface};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Class set on the document root while the light theme is active
pub const LIGHT_CLASS: &str = "light";

/// Color theme of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value persisted in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
