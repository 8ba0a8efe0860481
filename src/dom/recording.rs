use std::collections::{BTreeMap, BTreeSet};

use super::{DomSurface, NavElement};

/// In-memory page that records everything done to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingDom {
    body_prefix: Vec<String>,
    classes: BTreeMap<NavElement, BTreeSet<String>>,
    selector_classes: BTreeMap<String, BTreeSet<String>>,
    scroll_locked: bool,
    navigations: Vec<String>,
    console: Vec<String>,
}

impl RecordingDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that the page contains an element matching `selector`.
    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        self.selector_classes.entry(selector.into()).or_default();
        self
    }

    /// Markup inserted at the top of the body, most recent first.
    pub fn body_prefix(&self) -> &[String] {
        &self.body_prefix
    }

    pub fn has_class(&self, element: NavElement, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn selector_has_class(&self, selector: &str, class: &str) -> bool {
        self.selector_classes
            .get(selector)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn console(&self) -> &[String] {
        &self.console
    }
}

impl DomSurface for RecordingDom {
    fn prepend_to_body(&mut self, markup: &str) {
        self.body_prefix.insert(0, markup.to_string());
    }

    fn set_class(&mut self, element: NavElement, class: &str, on: bool) {
        let classes = self.classes.entry(element).or_default();
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn add_class_to_first(&mut self, selector: &str, class: &str) -> bool {
        let Some(classes) = self.selector_classes.get_mut(selector) else {
            return false;
        };
        classes.insert(class.to_string());
        true
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn navigate(&mut self, href: &str) {
        self.navigations.push(href.to_string());
    }

    fn announce(&mut self, line: &str) {
        self.console.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingDom;
    use crate::dom::{DomSurface, NavElement};

    #[test]
    fn add_class_to_first_is_a_noop_without_matching_element() {
        let mut dom = RecordingDom::new();
        assert!(!dom.add_class_to_first(".slide-container", "home-page"));
        assert!(!dom.selector_has_class(".slide-container", "home-page"));

        let mut dom = RecordingDom::new().with_element(".slide-container");
        assert!(dom.add_class_to_first(".slide-container", "home-page"));
        assert!(dom.selector_has_class(".slide-container", "home-page"));
    }

    #[test]
    fn set_class_adds_and_removes() {
        let mut dom = RecordingDom::new();
        dom.set_class(NavElement::Nav, "scrolled", true);
        assert!(dom.has_class(NavElement::Nav, "scrolled"));
        assert!(!dom.has_class(NavElement::Links, "scrolled"));
        dom.set_class(NavElement::Nav, "scrolled", false);
        assert!(!dom.has_class(NavElement::Nav, "scrolled"));
    }

    #[test]
    fn element_ids_match_rendered_markup() {
        let ids: Vec<&str> = NavElement::ALL.iter().map(|element| element.dom_id()).collect();
        assert_eq!(ids, ["mainNav", "navLinks", "navToggle", "navOverlay"]);
    }
}
