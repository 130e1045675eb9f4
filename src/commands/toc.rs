//! Print a post's table of contents

use anyhow::{anyhow, Result};

use crate::content::generate_toc;
use crate::Blog;

pub fn run(blog: &Blog, id: &str, json: bool) -> Result<()> {
    let post = blog
        .post_by_id(id)
        .ok_or_else(|| anyhow!("No blog post with id: {}", id))?;
    let toc = generate_toc(&post.content);

    if json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
        return Ok(());
    }

    if toc.is_empty() {
        println!("{} has no sections", post.id);
    }
    for item in toc {
        println!("  {} (#{})", item.text, item.id);
    }

    Ok(())
}
