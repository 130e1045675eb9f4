//! List helpers for tag filtering and pagination

use crate::content::BlogPost;

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// 1-based page number
    pub current: usize,
    /// Number of pages
    pub total: usize,
}

impl<T> Pagination<'_, T> {
    /// Whether a previous page exists
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a following page exists
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// Posts carrying `tag`, input order kept
pub fn filter_by_tag<'a>(posts: &'a [BlogPost], tag: &str) -> Vec<&'a BlogPost> {
    posts.iter().filter(|post| post.has_tag(tag)).collect()
}

/// Slice out the 1-based `page` of `items`
///
/// Pages past the end are empty; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], per_page: usize, page: usize) -> Pagination<'_, T> {
    let per_page = per_page.max(1);
    let current = page.max(1);
    let total = items.len().div_ceil(per_page);

    let start = (current - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());

    Pagination {
        items: &items[start..end],
        current,
        total,
    }
}

/// Every distinct tag with its post count, most used first
pub fn tag_counts(posts: &[BlogPost]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for tag in posts.iter().flat_map(|post| &post.tags) {
        match counts.iter_mut().find(|(name, _)| name == tag) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: id.to_string(),
            date: "2024-01-01".to_string(),
            author: "a".to_string(),
            excerpt: String::new(),
            content: String::new(),
            reading_time: "0 min read".to_string(),
            active: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_paginate() {
        let items = [1, 2, 3, 4, 5];
        let page = paginate(&items, 2, 1);
        assert_eq!(page.items, &[1, 2]);
        assert_eq!(page.total, 3);
        assert!(!page.has_prev());
        assert!(page.has_next());

        let last = paginate(&items, 2, 3);
        assert_eq!(last.items, &[5]);
        assert!(!last.has_next());

        assert!(paginate(&items, 2, 9).items.is_empty());
        assert_eq!(paginate(&items, 2, 0).current, 1);
        assert_eq!(paginate::<i32>(&[], 3, 1).total, 0);
    }

    #[test]
    fn test_filter_by_tag() {
        let posts = vec![post("a", &["rust"]), post("b", &["go"]), post("c", &["rust", "go"])];
        let ids: Vec<&str> = filter_by_tag(&posts, "rust")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(filter_by_tag(&posts, "python").is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let posts = vec![post("a", &["rust"]), post("b", &["go"]), post("c", &["rust", "go", "cli"])];
        assert_eq!(
            tag_counts(&posts),
            vec![
                ("go".to_string(), 2),
                ("rust".to_string(), 2),
                ("cli".to_string(), 1)
            ]
        );
    }
}
