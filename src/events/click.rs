use crate::dom::{self, EventListener};
use crate::page::Page;
use crate::section::SectionId;
use instant::Instant;
use std::rc::Rc;
use web_sys as web;

/// One delegated click handler for nav links, indicator dots, the menu
/// toggle, project cards and the overlay's close targets.
pub fn wire_clicks(page: &Rc<Page>) {
    let p = page.clone();
    let listener = EventListener::new_active(&page.document, "click", move |ev: web::Event| {
        let fx = if dom::closest_from_event(&ev, "[data-modal-close]").is_some() {
            p.state.borrow_mut().on_modal_close(Instant::now())
        } else if dom::closest_from_event(&ev, "[data-menu-toggle]").is_some() {
            p.state.borrow_mut().on_menu_toggle()
        } else if let Some(el) = dom::closest_from_event(&ev, "[data-nav-target]") {
            let Some(section) = el
                .get_attribute("data-nav-target")
                .and_then(|id| SectionId::from_dom_id(&id))
            else {
                return;
            };
            ev.prevent_default();
            p.state.borrow_mut().on_nav_click(section)
        } else if let Some(el) = dom::closest_from_event(&ev, "[data-project-id]") {
            let Some(id) = el.get_attribute("data-project-id") else {
                return;
            };
            p.state.borrow_mut().on_card_click(&id)
        } else {
            return;
        };
        p.apply(fx);
    });
    page.add_listener(listener);
}
