//! Blog post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::frontmatter::BlogFrontmatter;
use super::reading_time::reading_time_with_rate;
use crate::helpers::parse_date;

/// A loaded blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique id, from front-matter or the file name
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the front-matter
    pub date: String,

    pub author: String,

    pub excerpt: String,

    /// Raw markdown body
    pub content: String,

    /// Estimated reading time, e.g. "3 min read"
    pub reading_time: String,

    pub active: bool,

    pub tags: Vec<String>,
}

impl BlogPost {
    /// Build a post from validated front-matter and its body
    pub fn from_parts(
        fm: BlogFrontmatter,
        file_stem: &str,
        body: &str,
        words_per_minute: usize,
    ) -> Self {
        Self {
            id: fm.id.unwrap_or_else(|| file_stem.to_string()),
            title: fm.title,
            date: fm.date,
            author: fm.author,
            excerpt: fm.excerpt,
            content: body.to_string(),
            reading_time: reading_time_with_rate(body, words_per_minute),
            active: fm.active,
            tags: fm.tags,
        }
    }

    /// Parsed publication date, used for ordering
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    /// Whether the post carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontmatter() -> BlogFrontmatter {
        BlogFrontmatter {
            id: None,
            title: "Title".to_string(),
            date: "2024-05-15".to_string(),
            author: "Ann".to_string(),
            excerpt: "Short".to_string(),
            active: true,
            tags: vec!["rust".to_string()],
        }
    }

    #[test]
    fn test_id_falls_back_to_file_stem() {
        let post = BlogPost::from_parts(frontmatter(), "my-post", "body text", 200);
        assert_eq!(post.id, "my-post");
        assert_eq!(post.reading_time, "1 min read");

        let fm = BlogFrontmatter {
            id: Some("custom".to_string()),
            ..frontmatter()
        };
        let post = BlogPost::from_parts(fm, "my-post", "", 200);
        assert_eq!(post.id, "custom");
        assert_eq!(post.reading_time, "0 min read");
    }

    #[test]
    fn test_serialize_camel_case() {
        let post = BlogPost::from_parts(frontmatter(), "p", "one two", 200);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["readingTime"], "1 min read");
        assert!(post.has_tag("rust"));
        assert!(!post.has_tag("Rust"));
    }
}
