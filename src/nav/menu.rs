#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Toggle,
    Overlay,
    /// A nav link was followed while the viewport is at or below the mobile
    /// breakpoint. Wider viewports never feed this input.
    NarrowLinkFollowed,
    Escape,
}

impl MenuState {
    pub fn on(self, input: MenuInput) -> Self {
        match (self, input) {
            (Self::Closed, MenuInput::Toggle) => Self::Open,
            (Self::Open, _) => Self::Closed,
            (Self::Closed, _) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Page scroll is suppressed exactly while the menu is open.
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }
}
