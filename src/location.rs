/// Read-only view of the document location the controller was loaded under.
pub trait LocationProvider {
    /// Path component of the current URL, e.g. `/deck/3.html`.
    fn pathname(&self) -> String;
}

/// Fixed location, for tests and non-browser hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation {
    path: String,
}

impl StaticLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl LocationProvider for StaticLocation {
    fn pathname(&self) -> String {
        self.path.clone()
    }
}

impl<L: LocationProvider + ?Sized> LocationProvider for &L {
    fn pathname(&self) -> String {
        (**self).pathname()
    }
}

/// Final path segment of `path`, or `default_id` for a root request.
pub fn current_page_id<'a>(path: &'a str, default_id: &'a str) -> &'a str {
    let segment = match path.rfind('/') {
        Some(slash) => &path[slash + 1..],
        None => path,
    };
    if segment.is_empty() {
        default_id
    } else {
        segment
    }
}
