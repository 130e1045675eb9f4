//! List blog posts and tags

use anyhow::Result;

use crate::content::BlogPost;
use crate::helpers::{filter_by_tag, format_date_with, paginate, tag_counts};
use crate::Blog;

/// Options of the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Only posts carrying this tag
    pub tag: Option<String>,
    /// 1-based page, all posts when unset
    pub page: Option<usize>,
    /// Print JSON instead of text
    pub json: bool,
}

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, options: &ListOptions) -> Result<()> {
    let posts = blog.posts();

    match content_type {
        "post" | "posts" => {
            let selected: Vec<&BlogPost> = match &options.tag {
                Some(tag) => filter_by_tag(&posts, tag),
                None => posts.iter().collect(),
            };
            let per_page = if options.tag.is_some() {
                blog.config.per_page_tag
            } else {
                blog.config.per_page_home
            };

            let (shown, footer) = match options.page {
                Some(page) => {
                    let pagination = paginate(&selected, per_page, page);
                    let footer = format!("Page {} of {}", pagination.current, pagination.total);
                    (pagination.items.to_vec(), Some(footer))
                }
                None => (selected, None),
            };

            if options.json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
                return Ok(());
            }

            println!("Posts ({}):", shown.len());
            for post in &shown {
                println!(
                    "  {} - {} [{}] ({})",
                    format_date_with(&post.date, &blog.config.date_format),
                    post.title,
                    post.id,
                    post.reading_time
                );
            }
            if let Some(footer) = footer {
                println!("{}", footer);
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&posts);
            if options.json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
                return Ok(());
            }
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
