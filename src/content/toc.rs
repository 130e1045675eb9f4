//! Table of contents extraction and heading anchors

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref H2_LINE: Regex = Regex::new(r"(?m)^(#{2})\s+(.+)$").unwrap();
    static ref HEADING_TAG: Regex = Regex::new(r"<h2>(.*?)</h2>|<h3>(.*?)</h3>").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_\s-]").unwrap();
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// A single entry in a post's table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor slug, not unique across a document
    pub id: String,
    pub text: String,
    pub level: usize,
}

/// Generate a URL-friendly slug from heading text
///
/// # Examples
/// ```ignore
/// slugify("My Topic!") // -> "my-topic"
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let joined = SEPARATOR_RUN.replace_all(&stripped, "-");
    joined.trim_matches('-').to_string()
}

/// Extract the level-2 (`##`) headings of a markdown document, in order
pub fn generate_toc(markdown: &str) -> Vec<TocItem> {
    H2_LINE
        .captures_iter(markdown)
        .map(|caps| {
            let text = caps[2].trim().to_string();
            TocItem {
                id: slugify(&text),
                level: caps[1].len(),
                text,
            }
        })
        .collect()
}

/// Add `id` attributes to the `<h2>` and `<h3>` tags of rendered HTML
pub fn add_heading_ids(html: &str) -> String {
    HEADING_TAG
        .replace_all(html, |caps: &Captures| {
            let (level, content) = match (caps.get(1), caps.get(2)) {
                (Some(inner), _) => (2, inner.as_str()),
                (None, Some(inner)) => (3, inner.as_str()),
                (None, None) => return caps[0].to_string(),
            };
            let text = HTML_TAG.replace_all(content, "");
            let id = slugify(text.trim());
            format!(r#"<h{level} id="{id}">{content}</h{level}>"#)
        })
        .into_owned()
}
