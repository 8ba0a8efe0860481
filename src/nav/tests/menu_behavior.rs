use crate::dom::{NavElement, RecordingDom};
use crate::nav::{NavEffect, NavEvent, NavKey, NavUiState};

use super::controller_at;

fn menu_classes_active(dom: &RecordingDom) -> [bool; 3] {
    [NavElement::Toggle, NavElement::Links, NavElement::Overlay]
        .map(|element| dom.has_class(element, "active"))
}

#[test]
fn toggle_twice_restores_menu_and_scroll_lock() {
    let mut controller = controller_at("/b.html");
    let mut dom = RecordingDom::new();

    controller.dispatch(NavEvent::ToggleActivated, &mut dom);
    assert!(controller.ui_state().menu_open);
    assert!(dom.scroll_locked());
    assert_eq!(menu_classes_active(&dom), [true; 3]);

    controller.dispatch(NavEvent::ToggleActivated, &mut dom);
    assert_eq!(controller.ui_state(), NavUiState::default());
    assert!(!dom.scroll_locked());
    assert_eq!(menu_classes_active(&dom), [false; 3]);
}

#[test]
fn overlay_and_escape_close_an_open_menu() {
    let mut controller = controller_at("/b.html");
    let mut dom = RecordingDom::new();

    controller.dispatch(NavEvent::ToggleActivated, &mut dom);
    controller.dispatch(NavEvent::OverlayActivated, &mut dom);
    assert!(!controller.ui_state().menu_open);
    assert!(!dom.scroll_locked());

    controller.dispatch(NavEvent::ToggleActivated, &mut dom);
    assert_eq!(
        controller.handle(NavEvent::KeyPressed(NavKey::Escape)),
        Some(NavEffect::MenuChanged { open: false })
    );
    assert_eq!(controller.handle(NavEvent::KeyPressed(NavKey::Escape)), None);
    assert_eq!(controller.handle(NavEvent::OverlayActivated), None);
}

#[test]
fn link_click_closes_menu_only_on_narrow_viewports() {
    let mut controller = controller_at("/b.html");

    controller.handle(NavEvent::ToggleActivated);
    assert_eq!(
        controller.handle(NavEvent::LinkActivated {
            viewport_width: 1280.0
        }),
        None
    );
    assert!(controller.ui_state().menu_open);

    assert_eq!(
        controller.handle(NavEvent::LinkActivated {
            viewport_width: 900.0
        }),
        Some(NavEffect::MenuChanged { open: false })
    );
    assert!(!controller.ui_state().menu_open);
}

#[test]
fn arrow_keys_navigate_while_menu_is_open() {
    let mut controller = controller_at("/b.html");
    controller.handle(NavEvent::ToggleActivated);

    assert_eq!(
        controller.handle(NavEvent::KeyPressed(NavKey::ArrowRight)),
        Some(NavEffect::Navigate {
            href: "c.html".to_string()
        })
    );
    assert!(controller.ui_state().menu_open);
}
