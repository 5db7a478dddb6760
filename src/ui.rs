use crate::dom;
use crate::navbar::NavBarState;
use crate::section::SectionId;
use crate::view;
use web_sys as web;

/// Nav links, indicator dots, progress bar and section wrappers for the
/// active section. Idempotent.
pub fn sync_active(document: &web::Document, active: SectionId) {
    for el in dom::document_query_all(document, "a.nav-link[data-nav-target]") {
        let is_active = el.get_attribute("data-nav-target").as_deref() == Some(active.dom_id());
        let class = if el.has_attribute("data-mobile") {
            view::mobile_link_class(is_active)
        } else {
            view::nav_link_class(is_active)
        };
        dom::set_class(&el, &class);
    }
    for el in dom::document_query_all(document, "button.indicator-dot[data-nav-target]") {
        let is_active = el.get_attribute("data-nav-target").as_deref() == Some(active.dom_id());
        dom::set_class(&el, &view::indicator_class(is_active));
    }
    for el in dom::document_query_all(document, "[data-section-wrapper]") {
        let is_active =
            el.get_attribute("data-section-wrapper").as_deref() == Some(active.dom_id());
        dom::set_class(&el, &view::wrapper_class(is_active));
    }
    if let Some(bar) = document.get_element_by_id("progress-bar") {
        _ = bar.set_attribute("style", &format!("width: {}", view::progress_width(active)));
    }
}

/// One-way reveal mark on a section.
pub fn reveal(document: &web::Document, section: SectionId) {
    if let Some(el) = dom::section_element(document, section) {
        _ = el.class_list().add_1("section-reveal");
    }
}

pub fn sync_navbar(document: &web::Document, nav: &NavBarState) {
    if let Some(el) = document.get_element_by_id("navbar") {
        dom::set_class(&el, &view::navbar_class(nav));
    }
    if let Some(el) = document.get_element_by_id("mobile-menu") {
        dom::set_class(&el, &view::mobile_menu_class(nav.menu_open));
    }
}
