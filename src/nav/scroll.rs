/// Tracks the nav bar's `scrolled` styling. Recomputed on every scroll
/// event; flips back as soon as the offset drops to the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStyle {
    threshold_px: f64,
    scrolled: bool,
}

impl ScrollStyle {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns the new flag when it changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> Option<bool> {
        let scrolled = offset_y > self.threshold_px;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}
