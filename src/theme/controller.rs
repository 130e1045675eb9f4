//! Theme controller - toggles the document flag and persists the choice

use anyhow::Result;

use super::{KeyValueStore, PresentationSurface, Theme, LIGHT_CLASS};

/// Storage key of the persisted theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Screen coordinate the reveal animation starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOrigin {
    pub x: f64,
    pub y: f64,
}

impl RevealOrigin {
    /// Origin at `x`, `y` in CSS pixels
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Owns the theme state of one document
pub struct ThemeController<S, P> {
    storage: S,
    /// `None` when there is no document to present on
    surface: Option<P>,
}

impl<S: KeyValueStore, P: PresentationSurface> ThemeController<S, P> {
    /// Create a controller, headless when `surface` is `None`
    pub fn new(storage: S, surface: Option<P>) -> Self {
        Self { storage, surface }
    }

    /// A controller with no presentation surface
    pub fn headless(storage: S) -> Self {
        Self::new(storage, None)
    }

    /// Whether a presentation surface is attached
    pub fn is_interactive(&self) -> bool {
        self.surface.is_some()
    }

    /// Store the theme is persisted in
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Attached presentation surface, if any
    pub fn surface(&self) -> Option<&P> {
        self.surface.as_ref()
    }

    /// Apply the persisted theme, call once on startup
    pub fn initialize(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let saved = self.storage.get_item(THEME_STORAGE_KEY);
        if saved.as_deref() == Some(Theme::Light.as_str()) {
            surface.add_class(LIGHT_CLASS);
        }
        tracing::debug!("Initialized theme from storage: {:?}", saved);
    }

    /// Theme currently shown, dark when headless
    pub fn current(&self) -> Theme {
        match &self.surface {
            Some(surface) if surface.has_class(LIGHT_CLASS) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Switch to the other theme and persist it
    ///
    /// `origin` only positions the reveal animation. The flip runs inside a
    /// view transition when the surface supports one.
    pub fn toggle(&mut self, origin: Option<RevealOrigin>) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        if let Some(origin) = origin {
            surface.set_style_property("--reveal-x", &format!("{}px", origin.x));
            surface.set_style_property("--reveal-y", &format!("{}px", origin.y));
        }

        let new_theme = if surface.has_class(LIGHT_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        };
        let storage = &mut self.storage;

        if !surface.supports_view_transition() {
            surface.toggle_class(LIGHT_CLASS);
            storage.set_item(THEME_STORAGE_KEY, new_theme.as_str())?;
            tracing::debug!("Switched theme to {}", new_theme);
            return Ok(());
        }

        let mut result = Ok(());
        surface.start_view_transition(&mut |root| {
            root.toggle_class(LIGHT_CLASS);
            result = storage.set_item(THEME_STORAGE_KEY, new_theme.as_str());
        });
        tracing::debug!("Switched theme to {} with view transition", new_theme);
        result
    }

    /// Force `theme` on the document and persist it
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        match theme {
            Theme::Light => surface.add_class(LIGHT_CLASS),
            Theme::Dark => surface.remove_class(LIGHT_CLASS),
        }
        self.storage.set_item(THEME_STORAGE_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Document, MemoryStore};

    fn interactive(store: MemoryStore) -> ThemeController<MemoryStore, Document> {
        ThemeController::new(store, Some(Document::new()))
    }

    fn stored(controller: &ThemeController<MemoryStore, Document>) -> Option<String> {
        controller.storage().get_item(THEME_STORAGE_KEY)
    }

    #[test]
    fn test_toggle_from_default() {
        let mut controller = interactive(MemoryStore::new());
        controller.initialize();
        assert_eq!(controller.current(), Theme::Dark);

        controller.toggle(None).unwrap();
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));

        controller.toggle(None).unwrap();
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn test_initialize_applies_light() {
        let mut store = MemoryStore::new();
        store.set_item(THEME_STORAGE_KEY, "light").unwrap();
        let mut controller = interactive(store);
        controller.initialize();
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_initialize_ignores_other_values() {
        for value in ["dark", "LIGHT", "sepia"] {
            let mut store = MemoryStore::new();
            store.set_item(THEME_STORAGE_KEY, value).unwrap();
            let mut controller = interactive(store);
            controller.initialize();
            assert_eq!(controller.current(), Theme::Dark, "for {:?}", value);
        }
    }

    #[test]
    fn test_toggle_sets_reveal_origin() {
        let mut controller = interactive(MemoryStore::new());
        controller.toggle(Some(RevealOrigin::new(120.0, 48.5))).unwrap();

        let doc = controller.surface().unwrap();
        assert_eq!(doc.style_property("--reveal-x"), Some("120px"));
        assert_eq!(doc.style_property("--reveal-y"), Some("48.5px"));
        assert_eq!(doc.transitions_started(), 0);
    }

    #[test]
    fn test_toggle_uses_view_transition() {
        let mut controller =
            ThemeController::new(MemoryStore::new(), Some(Document::with_view_transitions()));
        controller.toggle(None).unwrap();

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
        assert_eq!(controller.surface().unwrap().transitions_started(), 1);
    }

    #[test]
    fn test_set_theme() {
        let mut controller = interactive(MemoryStore::new());
        controller.set_theme(Theme::Light).unwrap();
        assert_eq!(controller.current(), Theme::Light);
        controller.set_theme(Theme::Light).unwrap();
        assert_eq!(controller.surface().unwrap().classes().len(), 1);

        controller.set_theme(Theme::Dark).unwrap();
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn test_headless_is_noop() {
        let mut store = MemoryStore::new();
        store.set_item(THEME_STORAGE_KEY, "light").unwrap();
        let mut controller: ThemeController<MemoryStore, Document> =
            ThemeController::headless(store);

        controller.initialize();
        assert_eq!(controller.current(), Theme::Dark);
        controller.toggle(Some(RevealOrigin::new(1.0, 2.0))).unwrap();
        controller.set_theme(Theme::Dark).unwrap();

        assert!(!controller.is_interactive());
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }
}
