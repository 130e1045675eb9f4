//! Content loader - loads blog posts from the content directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::{parse_frontmatter, validate_frontmatter, BlogFrontmatter};
use super::{BlogPost, LoadError};

/// Everything produced by one pass over the content directory
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Every valid post, in enumeration order, inactive ones included
    pub posts: Vec<BlogPost>,
    /// Files that were skipped and why
    pub failures: Vec<LoadError>,
}

/// Loads blog posts from a directory of markdown files
pub struct BlogLoader {
    content_dir: PathBuf,
    words_per_minute: usize,
}

impl BlogLoader {
    /// Create a new loader for `content_dir`
    pub fn new<P: AsRef<Path>>(content_dir: P, words_per_minute: usize) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            words_per_minute,
        }
    }

    /// Read and parse every markdown file, keeping failures apart
    pub fn load_report(&self) -> LoadReport {
        if !self.content_dir.is_dir() {
            tracing::error!("Blogs directory not found: {:?}", self.content_dir);
            return LoadReport::default();
        }

        let walker = WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let report = walker
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Failed to read entry in {:?}: {}", self.content_dir, e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
            .fold(LoadReport::default(), |mut report, entry| {
                match self.load_post(entry.path()) {
                    Ok(post) => report.posts.push(post),
                    Err(e) => {
                        tracing::error!("{}", e);
                        report.failures.push(e);
                    }
                }
                report
            });

        let mut seen = HashSet::new();
        for post in &report.posts {
            if !seen.insert(post.id.as_str()) {
                tracing::warn!("Duplicate blog post id {:?} in {:?}", post.id, self.content_dir);
            }
        }

        tracing::debug!(
            "Loaded {} posts from {:?} ({} skipped)",
            report.posts.len(),
            self.content_dir,
            report.failures.len()
        );

        report
    }

    /// Load all active posts, newest first
    pub fn load_posts(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self
            .load_report()
            .posts
            .into_iter()
            .filter(|post| post.active)
            .collect();

        // Sort by date descending (newest first), undated posts last
        posts.sort_by_cached_key(|post| std::cmp::Reverse(post.published_at()));

        posts
    }

    /// Find a single active post by id
    pub fn load_post_by_id(&self, id: &str) -> Option<BlogPost> {
        self.load_posts().into_iter().find(|post| post.id == id)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<BlogPost, LoadError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (data, body) = parse_frontmatter(&content).map_err(|message| LoadError::Parse {
            file: file_name.clone(),
            message,
        })?;

        validate_frontmatter(&data, &file_name)?;
        let fm = BlogFrontmatter::from_mapping(&data, &file_name)?;

        let stem = file_name.strip_suffix(".md").unwrap_or(&file_name);
        Ok(BlogPost::from_parts(fm, stem, body, self.words_per_minute))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".md"))
}
