use tracing::{debug, info};

use crate::config::{BrandConfig, Config};
use crate::dom::{ACTIVE_CLASS, DomSurface, NavElement, SCROLLED_CLASS};
use crate::location::LocationProvider;
use crate::registry::PageRegistry;
use crate::render::{Element, nav_markup};

use super::event::{NavEffect, NavEvent};
use super::keymap::{NavCommand, map_key_to_command};
use super::menu::{MenuInput, MenuState};
use super::position::{CurrentPosition, NavStep};
use super::scroll::ScrollStyle;
use super::swipe::SwipeTracker;

/// Transient per-page-load UI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavUiState {
    pub menu_open: bool,
    pub scrolled: bool,
}

/// Keeps the injected navigation and its interactions consistent with the
/// registry and the location the page was loaded under.
pub struct NavigationController<L> {
    registry: PageRegistry,
    location: L,
    config: Config,
    menu: MenuState,
    scroll: ScrollStyle,
    swipe: SwipeTracker,
}

impl<L: LocationProvider> NavigationController<L> {
    pub fn new(registry: PageRegistry, location: L, config: Config) -> Self {
        let scroll = ScrollStyle::new(config.behavior.scroll_threshold_px);
        let swipe = SwipeTracker::new(config.behavior.swipe_threshold_px);
        Self {
            registry,
            location,
            config,
            menu: MenuState::default(),
            scroll,
            swipe,
        }
    }

    pub fn ui_state(&self) -> NavUiState {
        NavUiState {
            menu_open: self.menu.is_open(),
            scrolled: self.scroll.scrolled(),
        }
    }

    pub fn resolve_current_page(&self) -> CurrentPosition {
        CurrentPosition::resolve(&self.registry, &self.location.pathname())
    }

    pub fn render(&self) -> Element {
        nav_markup(
            &self.registry,
            &self.resolve_current_page(),
            &self.config.brand,
        )
    }

    /// Injects the navigation as the body's first child and applies the
    /// home-page marker when the first registry entry is showing.
    pub fn mount(&self, dom: &mut impl DomSurface) {
        let position = self.resolve_current_page();
        let markup = nav_markup(&self.registry, &position, &self.config.brand);
        dom.prepend_to_body(&markup.to_html());

        if position.is_home() {
            let brand = &self.config.brand;
            if !dom.add_class_to_first(&brand.home_container_selector, &brand.home_class) {
                debug!(
                    selector = %brand.home_container_selector,
                    "home container not found; skipping home-page marker"
                );
            }
        }

        for line in startup_lines(&self.config.brand) {
            dom.announce(&line);
        }
        info!(
            page = %position.page_id,
            position = %position.indicator_text(),
            "{} navigation ready",
            self.config.brand.display_name()
        );
    }

    pub fn handle(&mut self, event: NavEvent) -> Option<NavEffect> {
        match event {
            NavEvent::ToggleActivated => self.transition_menu(MenuInput::Toggle),
            NavEvent::OverlayActivated => self.transition_menu(MenuInput::Overlay),
            NavEvent::LinkActivated { viewport_width } => {
                if viewport_width <= self.config.behavior.mobile_breakpoint_px {
                    self.transition_menu(MenuInput::NarrowLinkFollowed)
                } else {
                    None
                }
            }
            NavEvent::Scrolled { offset_y } => self
                .scroll
                .on_scroll(offset_y)
                .map(|scrolled| NavEffect::ScrolledChanged { scrolled }),
            NavEvent::KeyPressed(key) => match map_key_to_command(key)? {
                NavCommand::Step(step) => self.step(step),
                NavCommand::CloseMenu => self.transition_menu(MenuInput::Escape),
            },
            NavEvent::TouchStarted { screen_x } => {
                self.swipe.on_touch_start(screen_x);
                None
            }
            NavEvent::TouchEnded { screen_x } => {
                let step = self.swipe.on_touch_end(screen_x)?;
                self.step(step)
            }
        }
    }

    /// Handles `event` and applies the resulting effect to `dom`.
    pub fn dispatch(&mut self, event: NavEvent, dom: &mut impl DomSurface) {
        if let Some(effect) = self.handle(event) {
            apply_effect(&effect, dom);
        }
    }

    fn transition_menu(&mut self, input: MenuInput) -> Option<NavEffect> {
        let next = self.menu.on(input);
        if next == self.menu {
            return None;
        }
        debug!(?input, from = ?self.menu, to = ?next, "menu transition");
        self.menu = next;
        Some(NavEffect::MenuChanged {
            open: next.is_open(),
        })
    }

    fn step(&self, step: NavStep) -> Option<NavEffect> {
        let position = self.resolve_current_page();
        let Some(target) = position.step_target(&self.registry, step) else {
            debug!(?step, position = %position.indicator_text(), "at deck boundary");
            return None;
        };
        debug!(?step, from = %position.page_id, to = %target.id, "navigating");
        Some(NavEffect::Navigate {
            href: target.id.clone(),
        })
    }
}

/// Welcome lines written to the page console once the navigation is mounted.
pub fn startup_lines(brand: &BrandConfig) -> [String; 2] {
    [
        format!("✨ {}", brand.display_name()),
        "Use Arrow Keys (←/→) to navigate between pages".to_string(),
    ]
}

pub fn apply_effect(effect: &NavEffect, dom: &mut impl DomSurface) {
    match effect {
        NavEffect::MenuChanged { open } => {
            for element in [NavElement::Toggle, NavElement::Links, NavElement::Overlay] {
                dom.set_class(element, ACTIVE_CLASS, *open);
            }
            dom.set_scroll_locked(*open);
        }
        NavEffect::ScrolledChanged { scrolled } => {
            dom.set_class(NavElement::Nav, SCROLLED_CLASS, *scrolled);
        }
        NavEffect::Navigate { href } => dom.navigate(href),
    }
}
