use super::keymap::NavKey;

/// Input delivered by the host's event listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    ToggleActivated,
    OverlayActivated,
    LinkActivated { viewport_width: f64 },
    Scrolled { offset_y: f64 },
    KeyPressed(NavKey),
    TouchStarted { screen_x: f64 },
    TouchEnded { screen_x: f64 },
}

/// What the host must do to the page in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    MenuChanged { open: bool },
    ScrolledChanged { scrolled: bool },
    Navigate { href: String },
}
