use crate::config::BrandConfig;
use crate::dom::{ACTIVE_CLASS, NavElement};
use crate::nav::CurrentPosition;
use crate::registry::{PageDescriptor, PageRegistry};

use super::markup::Element;

const ICON_FAMILY: &str = "fa-solid";

/// Builds the navigation block injected at the top of every page: a wrapper
/// holding the nav bar followed by the mobile overlay.
pub fn nav_markup(
    registry: &PageRegistry,
    position: &CurrentPosition,
    brand: &BrandConfig,
) -> Element {
    let nav = Element::new("nav")
        .class("main-nav")
        .id(NavElement::Nav.dom_id())
        .child(home_link(registry.first(), brand))
        .child(
            Element::new("ul")
                .class("nav-links")
                .id(NavElement::Links.dom_id())
                .children(registry.iter().map(|page| page_entry(page, position))),
        )
        .child(page_indicator(position))
        .child(toggle_button());

    Element::new("div").child(nav).child(
        Element::new("div")
            .class("nav-overlay")
            .id(NavElement::Overlay.dom_id()),
    )
}

fn icon(name: &str) -> Element {
    Element::new("i").class(format!("{ICON_FAMILY} {name}"))
}

fn home_link(home: &PageDescriptor, brand: &BrandConfig) -> Element {
    Element::new("a")
        .attr("href", home.id.as_str())
        .class("nav-logo")
        .child(
            Element::new("div")
                .class("nav-logo-icon")
                .child(icon(&brand.logo_icon)),
        )
        .child(
            Element::new("div").class("nav-logo-text").children(
                brand
                    .title_lines
                    .iter()
                    .map(|line| Element::new("span").text(line.as_str())),
            ),
        )
}

fn page_entry(page: &PageDescriptor, position: &CurrentPosition) -> Element {
    let mut link = Element::new("a").attr("href", page.id.as_str());
    if position.is_active(page) {
        link = link.class(ACTIVE_CLASS);
    }
    let link = link
        .attr("title", page.title.as_str())
        .child(icon(&page.icon))
        .child(Element::new("span").text(page.short_label.as_str()));

    Element::new("li").child(link)
}

fn page_indicator(position: &CurrentPosition) -> Element {
    Element::new("div")
        .class("page-indicator")
        .child(
            Element::new("div")
                .class("page-indicator-number")
                .text(position.one_based_index.to_string()),
        )
        .child(Element::new("span").text(format!("/ {}", position.total)))
}

fn toggle_button() -> Element {
    Element::new("button")
        .class("nav-toggle")
        .id(NavElement::Toggle.dom_id())
        .attr("aria-label", "Toggle Navigation")
        .children((0..3).map(|_| Element::new("span")))
}
