use super::position::NavStep;

/// Horizontal swipe detector. Only x displacement is considered, so a mostly
/// vertical gesture that also travels far enough sideways still counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: f64,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: 0.0,
        }
    }

    pub fn on_touch_start(&mut self, screen_x: f64) {
        self.start_x = screen_x;
    }

    /// Rightward travel goes back, leftward travel goes forward. The start
    /// point is kept, so a stray touch-end measures from the last start.
    pub fn on_touch_end(&self, screen_x: f64) -> Option<NavStep> {
        if screen_x - self.start_x > self.threshold_px {
            Some(NavStep::Previous)
        } else if self.start_x - screen_x > self.threshold_px {
            Some(NavStep::Next)
        } else {
            None
        }
    }
}
