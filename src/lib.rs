//! blog-kit: presentation utilities for a static markdown blog
//!
//! This crate loads blog posts from a directory of markdown files with
//! front-matter, derives reading times and tables of contents, formats
//! dates, and keeps the light/dark theme choice in a key/value store.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{BlogLoader, BlogPost};

/// The blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory the markdown posts are read from
    pub content_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Blog rooted at the current working directory
    pub fn from_current_dir() -> Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    /// Loader configured for this blog
    pub fn loader(&self) -> BlogLoader {
        BlogLoader::new(&self.content_dir, self.config.words_per_minute)
    }

    /// All active posts, newest first
    pub fn posts(&self) -> Vec<BlogPost> {
        self.loader().load_posts()
    }

    /// A single active post by id
    pub fn post_by_id(&self, id: &str) -> Option<BlogPost> {
        self.loader().load_post_by_id(id)
    }

    /// File holding the persisted UI state
    pub fn storage_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.storage_path)
    }
}

/// Load all active posts of the blog in the current directory
pub fn load_all_posts() -> Vec<BlogPost> {
    match Blog::from_current_dir() {
        Ok(blog) => blog.posts(),
        Err(e) => {
            tracing::error!("Error loading blogs: {}", e);
            Vec::new()
        }
    }
}

/// Find an active post of the blog in the current directory
pub fn load_post_by_id(id: &str) -> Option<BlogPost> {
    load_all_posts().into_iter().find(|post| post.id == id)
}
