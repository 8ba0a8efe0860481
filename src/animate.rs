//! Staggered fade-in of content blocks on page load. Cosmetic only: the plan
//! carries no state and an interrupted schedule has no effect on navigation.

use crate::config::FadeInConfig;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeStep {
    /// Document-order index among the matched elements.
    pub index: usize,
    pub delay_ms: u32,
}

/// Comma-joined selector list, or `None` when fading is disabled.
pub fn selector_query(config: &FadeInConfig) -> Option<String> {
    if !config.enabled || config.selectors.is_empty() {
        return None;
    }
    Some(config.selectors.join(", "))
}

pub fn fade_in_plan(config: &FadeInConfig, element_count: usize) -> Vec<FadeStep> {
    if !config.enabled {
        return Vec::new();
    }
    (0..element_count)
        .map(|index| {
            let offset = u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(config.stagger_ms);
            FadeStep {
                index,
                delay_ms: config.base_delay_ms.saturating_add(offset),
            }
        })
        .collect()
}
