mod controller;
mod event;
mod keymap;
mod menu;
mod position;
mod scroll;
mod swipe;

#[cfg(test)]
mod tests;

pub use controller::{NavUiState, NavigationController, apply_effect, startup_lines};
pub use event::{NavEffect, NavEvent};
pub use keymap::{NavCommand, NavKey, map_key_to_command};
pub use menu::{MenuInput, MenuState};
pub use position::{CurrentPosition, NavStep};
pub use scroll::ScrollStyle;
pub use swipe::SwipeTracker;
