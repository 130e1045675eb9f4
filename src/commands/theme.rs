//! Read or change the persisted theme

use anyhow::Result;

use crate::theme::{Document, FileStore, RevealOrigin, Theme, ThemeController};
use crate::Blog;

/// What to do with the theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeAction {
    Get,
    Toggle(Option<RevealOrigin>),
    Set(Theme),
}

/// Apply `action` against the blog's store and return the resulting theme
pub fn apply(blog: &Blog, action: ThemeAction) -> Result<Theme> {
    let store = FileStore::open(blog.storage_path())?;
    let mut controller = ThemeController::new(store, Some(Document::new()));
    controller.initialize();

    match action {
        ThemeAction::Get => {}
        ThemeAction::Toggle(origin) => controller.toggle(origin)?,
        ThemeAction::Set(theme) => controller.set_theme(theme)?,
    }

    Ok(controller.current())
}

pub fn run(blog: &Blog, action: ThemeAction) -> Result<()> {
    let theme = apply(blog, action)?;
    println!("{}", theme);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_persists_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        assert_eq!(apply(&blog, ThemeAction::Get).unwrap(), Theme::Dark);
        assert_eq!(apply(&blog, ThemeAction::Toggle(None)).unwrap(), Theme::Light);
        assert_eq!(apply(&blog, ThemeAction::Get).unwrap(), Theme::Light);
        assert_eq!(
            apply(&blog, ThemeAction::Toggle(Some(RevealOrigin::new(3.0, 4.0)))).unwrap(),
            Theme::Dark
        );
        assert_eq!(apply(&blog, ThemeAction::Set(Theme::Light)).unwrap(), Theme::Light);

        let stored = std::fs::read_to_string(blog.storage_path()).unwrap();
        assert!(stored.contains("\"theme\": \"light\""));
    }
}
