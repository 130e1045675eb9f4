//! Content module - blog posts, front-matter and derived fields

mod error;
pub mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod reading_time;
pub mod toc;

pub use error::LoadError;
pub use frontmatter::{parse_frontmatter, validate_frontmatter, BlogFrontmatter};
pub use loader::{BlogLoader, LoadReport};
pub use markdown::MarkdownRenderer;
pub use post::BlogPost;
pub use reading_time::{reading_time, reading_time_with_rate, word_count};
pub use toc::{add_heading_ids, generate_toc, slugify, TocItem};
