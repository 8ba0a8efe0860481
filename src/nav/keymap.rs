use super::position::NavStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl NavKey {
    /// Parses a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(value: &str) -> Self {
        match value {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Step(NavStep),
    CloseMenu,
}

pub fn map_key_to_command(key: NavKey) -> Option<NavCommand> {
    match key {
        NavKey::ArrowRight => Some(NavCommand::Step(NavStep::Next)),
        NavKey::ArrowLeft => Some(NavCommand::Step(NavStep::Previous)),
        NavKey::Escape => Some(NavCommand::CloseMenu),
        NavKey::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{NavCommand, NavKey, map_key_to_command};
    use crate::nav::NavStep;

    #[test]
    fn from_dom_key_parses_arrows_and_escape() {
        assert_eq!(NavKey::from_dom_key("ArrowLeft"), NavKey::ArrowLeft);
        assert_eq!(NavKey::from_dom_key("ArrowRight"), NavKey::ArrowRight);
        assert_eq!(NavKey::from_dom_key("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_dom_key("Esc"), NavKey::Escape);
        assert_eq!(NavKey::from_dom_key("ArrowUp"), NavKey::Other);
        assert_eq!(NavKey::from_dom_key("l"), NavKey::Other);
    }

    #[test]
    fn arrows_map_to_steps() {
        assert_eq!(
            map_key_to_command(NavKey::ArrowRight),
            Some(NavCommand::Step(NavStep::Next))
        );
        assert_eq!(
            map_key_to_command(NavKey::ArrowLeft),
            Some(NavCommand::Step(NavStep::Previous))
        );
        assert_eq!(map_key_to_command(NavKey::Escape), Some(NavCommand::CloseMenu));
        assert_eq!(map_key_to_command(NavKey::Other), None);
    }
}
