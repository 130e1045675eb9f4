//! Show a single blog post

use anyhow::{anyhow, Result};

use crate::content::MarkdownRenderer;
use crate::helpers::{format_date_with, time_tag};
use crate::Blog;

/// Print a post's metadata followed by its body
pub fn run(blog: &Blog, id: &str, html: bool) -> Result<()> {
    let post = blog
        .post_by_id(id)
        .ok_or_else(|| anyhow!("No blog post with id: {}", id))?;

    if html {
        let renderer = MarkdownRenderer::new();
        println!("<article id=\"{}\">", post.id);
        println!("<h1>{}</h1>", post.title);
        println!("{}", time_tag(&post.date, &blog.config.date_format));
        println!("{}", renderer.render(&post.content));
        println!("</article>");
        return Ok(());
    }

    println!("{}", post.title);
    println!(
        "{} · {} · {}",
        format_date_with(&post.date, &blog.config.date_format),
        post.author,
        post.reading_time
    );
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.content);

    Ok(())
}
