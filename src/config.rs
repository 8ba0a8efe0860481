use serde::Deserialize;

use crate::error::{DeckError, DeckResult};

/// Id of the `<script type="application/toml">` element a page may carry to
/// override the defaults.
pub const INLINE_CONFIG_ID: &str = "deck-nav-config";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub behavior: BehaviorConfig,
    pub brand: BrandConfig,
    pub fade_in: FadeInConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Nav bar gets `scrolled` once the vertical offset exceeds this.
    pub scroll_threshold_px: f64,
    /// Horizontal travel a swipe must strictly exceed.
    pub swipe_threshold_px: f64,
    /// Link clicks close the menu at or below this viewport width.
    pub mobile_breakpoint_px: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            swipe_threshold_px: 100.0,
            mobile_breakpoint_px: 900.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandConfig {
    pub logo_icon: String,
    pub title_lines: Vec<String>,
    pub home_container_selector: String,
    pub home_class: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            logo_icon: "fa-passport".to_string(),
            title_lines: vec!["Digital Product".to_string(), "Passport Lite".to_string()],
            home_container_selector: ".slide-container".to_string(),
            home_class: "home-page".to_string(),
        }
    }
}

impl BrandConfig {
    pub fn display_name(&self) -> String {
        self.title_lines.join(" ")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FadeInConfig {
    pub enabled: bool,
    pub base_delay_ms: u32,
    pub stagger_ms: u32,
    pub selectors: Vec<String>,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_delay_ms: 100,
            stagger_ms: 100,
            selectors: [
                ".content-wrapper",
                ".title-section",
                ".features-grid",
                ".column-card",
                ".trend-card",
                ".feature-card",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> DeckResult<Self> {
        let parsed = toml::from_str::<Self>(raw).map_err(|source| {
            DeckError::invalid_argument(format!("failed to parse nav config: {source}"))
        })?;
        Ok(parsed.sanitized())
    }

    /// Parses the text of an inline config block. An absent or blank block
    /// means defaults.
    pub fn from_inline(raw: Option<&str>) -> DeckResult<Self> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_toml_str(raw),
            _ => Ok(Self::default()),
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = BehaviorConfig::default();
        self.behavior.scroll_threshold_px =
            non_negative_or(self.behavior.scroll_threshold_px, defaults.scroll_threshold_px);
        self.behavior.swipe_threshold_px =
            non_negative_or(self.behavior.swipe_threshold_px, defaults.swipe_threshold_px);
        self.behavior.mobile_breakpoint_px = non_negative_or(
            self.behavior.mobile_breakpoint_px,
            defaults.mobile_breakpoint_px,
        );
        if self.brand.home_container_selector.trim().is_empty() {
            self.brand.home_container_selector = BrandConfig::default().home_container_selector;
        }
        self.fade_in.selectors.retain(|selector| !selector.trim().is_empty());
        self
    }
}

fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}
