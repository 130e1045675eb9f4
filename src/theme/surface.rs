//! Presentation surface - the document root the theme flag lives on

use std::collections::BTreeMap;

/// Class list and style properties of a document root
pub trait PresentationSurface {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);

    /// Flip `class`, returning whether it is now present
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Set a CSS custom property such as `--reveal-x`
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Whether animated view transitions are available
    fn supports_view_transition(&self) -> bool {
        false
    }

    /// Run `update` inside an animated view transition
    fn start_view_transition(&mut self, update: &mut dyn FnMut(&mut dyn PresentationSurface));
}

/// In-memory document root
#[derive(Debug, Clone, Default)]
pub struct Document {
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    view_transitions: bool,
    transitions_started: usize,
}

impl Document {
    /// Document without view transition support
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that animates changes through view transitions
    pub fn with_view_transitions() -> Self {
        Self {
            view_transitions: true,
            ..Self::default()
        }
    }

    /// Classes on the root, in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value of a style custom property
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Number of view transitions run so far
    pub fn transitions_started(&self) -> usize {
        self.transitions_started
    }
}

impl PresentationSurface for Document {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    fn supports_view_transition(&self) -> bool {
        self.view_transitions
    }

    fn start_view_transition(&mut self, update: &mut dyn FnMut(&mut dyn PresentationSurface)) {
        self.transitions_started += 1;
        update(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        let mut doc = Document::new();
        assert!(!doc.has_class("light"));
        doc.add_class("light");
        doc.add_class("light");
        assert_eq!(doc.classes(), &["light".to_string()]);
        assert!(!doc.toggle_class("light"));
        assert!(doc.classes().is_empty());
        assert!(doc.toggle_class("light"));
    }

    #[test]
    fn test_view_transition_runs_update() {
        let mut doc = Document::with_view_transitions();
        doc.start_view_transition(&mut |root| root.add_class("light"));
        assert!(doc.has_class("light"));
        assert_eq!(doc.transitions_started(), 1);
    }
}
