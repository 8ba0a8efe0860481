//! `web-sys` host: mounts the navigation into the live document and forwards
//! browser events to the controller.
//!
//! ```javascript,ignore
//! import init, { registry_json } from './decknav.js';
//! await init(); // runs `start`, which mounts once the DOM is ready
//! ```
//!
//! A page may override the defaults with an inline TOML block:
//!
//! ```html
//! <script type="application/toml" id="deck-nav-config">
//! [behavior]
//! swipe_threshold_px = 80.0
//! </script>
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, TouchEvent, Window};

use crate::animate::{
    HIDDEN_OPACITY, HIDDEN_TRANSFORM, SHOWN_OPACITY, SHOWN_TRANSFORM, TRANSITION, fade_in_plan,
    selector_query,
};
use crate::config::{Config, FadeInConfig, INLINE_CONFIG_ID};
use crate::dom::{DomSurface, NavElement};
use crate::location::LocationProvider;
use crate::nav::{NavEvent, NavKey, NavigationController};
use crate::registry::builtin_registry;

pub struct WindowLocation {
    window: Window,
}

impl LocationProvider for WindowLocation {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }
}

pub struct WebDom {
    window: Window,
    document: Document,
}

impl DomSurface for WebDom {
    fn prepend_to_body(&mut self, markup: &str) {
        let Some(body) = self.document.body() else {
            debug!("document has no body; navigation not injected");
            return;
        };
        if let Err(err) = body.insert_adjacent_html("afterbegin", markup) {
            debug!(?err, "failed to inject navigation markup");
        }
    }

    fn set_class(&mut self, element: NavElement, class: &str, on: bool) {
        if let Some(node) = self.document.get_element_by_id(element.dom_id()) {
            let _ = node.class_list().toggle_with_force(class, on);
        }
    }

    fn add_class_to_first(&mut self, selector: &str, class: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(node)) => node.class_list().add_1(class).is_ok(),
            _ => false,
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            let overflow = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", overflow);
        }
    }

    fn navigate(&mut self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            debug!(?err, href, "navigation failed");
        }
    }

    fn announce(&mut self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }
}

struct BrowserNav {
    controller: NavigationController<WindowLocation>,
    dom: WebDom,
}

impl BrowserNav {
    fn dispatch(&mut self, event: NavEvent) {
        self.controller.dispatch(event, &mut self.dom);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        return mount(window, document);
    }

    let target = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = mount(window.clone(), document.clone()) {
            debug!(?err, "failed to mount navigation");
        }
    });
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// The compiled-in registry as a JSON array, for page scripts.
#[wasm_bindgen]
pub fn registry_json() -> Result<String, JsValue> {
    builtin_registry()
        .to_json()
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn inline_config(document: &Document) -> Config {
    let raw = document
        .get_element_by_id(INLINE_CONFIG_ID)
        .and_then(|block| block.text_content());
    Config::from_inline(raw.as_deref()).unwrap_or_else(|err| {
        debug!(%err, "ignoring inline nav config");
        Config::default()
    })
}

fn mount(window: Window, document: Document) -> Result<(), JsValue> {
    let config = inline_config(&document);
    let fade_in = config.fade_in.clone();
    let controller = NavigationController::new(
        builtin_registry(),
        WindowLocation {
            window: window.clone(),
        },
        config,
    );
    let mut dom = WebDom {
        window: window.clone(),
        document: document.clone(),
    };
    controller.mount(&mut dom);

    let nav = Rc::new(RefCell::new(BrowserNav { controller, dom }));
    attach_behaviors(&nav, &window, &document)?;
    schedule_fade_in(&window, &document, &fade_in)
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_behaviors(
    nav: &Rc<RefCell<BrowserNav>>,
    window: &Window,
    document: &Document,
) -> Result<(), JsValue> {
    if let Some(toggle) = document.get_element_by_id(NavElement::Toggle.dom_id()) {
        let nav = Rc::clone(nav);
        listen(&toggle, "click", move |_| {
            nav.borrow_mut().dispatch(NavEvent::ToggleActivated)
        })?;
    }

    if let Some(overlay) = document.get_element_by_id(NavElement::Overlay.dom_id()) {
        let nav = Rc::clone(nav);
        listen(&overlay, "click", move |_| {
            nav.borrow_mut().dispatch(NavEvent::OverlayActivated)
        })?;
    }

    let links = document.query_selector_all(".nav-links li a")?;
    for link in (0..links.length()).filter_map(|index| links.get(index)) {
        let nav = Rc::clone(nav);
        let window = window.clone();
        listen(&link, "click", move |_| {
            let viewport_width = window
                .inner_width()
                .ok()
                .and_then(|width| width.as_f64())
                .unwrap_or(f64::INFINITY);
            nav.borrow_mut()
                .dispatch(NavEvent::LinkActivated { viewport_width });
        })?;
    }

    {
        let nav = Rc::clone(nav);
        let scroll_window = window.clone();
        listen(window, "scroll", move |_| {
            let offset_y = scroll_window.scroll_y().unwrap_or(0.0);
            nav.borrow_mut().dispatch(NavEvent::Scrolled { offset_y });
        })?;
    }

    {
        let nav = Rc::clone(nav);
        listen(document, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                let key = NavKey::from_dom_key(&key.key());
                nav.borrow_mut().dispatch(NavEvent::KeyPressed(key));
            }
        })?;
    }

    {
        let nav = Rc::clone(nav);
        listen(document, "touchstart", move |event| {
            if let Some(screen_x) = touch_screen_x(&event) {
                nav.borrow_mut().dispatch(NavEvent::TouchStarted { screen_x });
            }
        })?;
    }

    let nav = Rc::clone(nav);
    listen(document, "touchend", move |event| {
        if let Some(screen_x) = touch_screen_x(&event) {
            nav.borrow_mut().dispatch(NavEvent::TouchEnded { screen_x });
        }
    })
}

fn touch_screen_x(event: &Event) -> Option<f64> {
    let touch = event
        .dyn_ref::<TouchEvent>()?
        .changed_touches()
        .get(0)?;
    Some(f64::from(touch.screen_x()))
}

fn schedule_fade_in(
    window: &Window,
    document: &Document,
    config: &FadeInConfig,
) -> Result<(), JsValue> {
    let Some(query) = selector_query(config) else {
        return Ok(());
    };
    let nodes = document.query_selector_all(&query)?;
    let elements: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let plan = fade_in_plan(config, elements.len());

    for (element, step) in elements.into_iter().zip(plan) {
        let style = element.style();
        style.set_property("opacity", HIDDEN_OPACITY)?;
        style.set_property("transform", HIDDEN_TRANSFORM)?;

        let reveal = Closure::once_into_js(move || {
            let style = element.style();
            let _ = style.set_property("transition", TRANSITION);
            let _ = style.set_property("opacity", SHOWN_OPACITY);
            let _ = style.set_property("transform", SHOWN_TRANSFORM);
        });
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            reveal.unchecked_ref(),
            i32::try_from(step.delay_ms).unwrap_or(i32::MAX),
        )?;
    }
    Ok(())
}
