mod recording;

pub use recording::RecordingDom;

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

/// Elements of the injected navigation the controller addresses by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavElement {
    Nav,
    Links,
    Toggle,
    Overlay,
}

impl NavElement {
    pub const ALL: [Self; 4] = [Self::Nav, Self::Links, Self::Toggle, Self::Overlay];

    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Nav => "mainNav",
            Self::Links => "navLinks",
            Self::Toggle => "navToggle",
            Self::Overlay => "navOverlay",
        }
    }
}

/// The page as seen by the navigation controller. Every method is
/// best-effort: a missing element is silently skipped.
pub trait DomSurface {
    /// Inserts `markup` as the first child of the body.
    fn prepend_to_body(&mut self, markup: &str);
    fn set_class(&mut self, element: NavElement, class: &str, on: bool);
    /// Adds `class` to the first element matching `selector`. Returns whether
    /// such an element existed.
    fn add_class_to_first(&mut self, selector: &str, class: &str) -> bool;
    fn set_scroll_locked(&mut self, locked: bool);
    /// Replaces the current location with `href`.
    fn navigate(&mut self, href: &str);
    /// Writes an informational line to the page console.
    fn announce(&mut self, line: &str);
}

impl<D: DomSurface + ?Sized> DomSurface for &mut D {
    fn prepend_to_body(&mut self, markup: &str) {
        (**self).prepend_to_body(markup);
    }

    fn set_class(&mut self, element: NavElement, class: &str, on: bool) {
        (**self).set_class(element, class, on);
    }

    fn add_class_to_first(&mut self, selector: &str, class: &str) -> bool {
        (**self).add_class_to_first(selector, class)
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        (**self).set_scroll_locked(locked);
    }

    fn navigate(&mut self, href: &str) {
        (**self).navigate(href);
    }

    fn announce(&mut self, line: &str) {
        (**self).announce(line);
    }
}
