use crate::dom::EventListener;
use crate::page::Page;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel over the project gallery scrolls it sideways until an edge is
/// reached; past the edge the event bubbles to the page navigator.
pub fn wire_gallery_wheel(page: &Rc<Page>) {
    let Some(gallery) = page.document.get_element_by_id("project-gallery") else {
        return;
    };
    let p = page.clone();
    let el = gallery.clone();
    let listener = EventListener::new_active(&gallery, "wheel", move |ev: web::Event| {
        let Some(wev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let scroll_left = el.scroll_left() as f64;
        let max_scroll = (el.scroll_width() - el.client_width()).max(0) as f64;
        let next = p
            .state
            .borrow()
            .on_gallery_wheel(wev.delta_y(), scroll_left, max_scroll);
        if let Some(next) = next {
            ev.prevent_default();
            ev.stop_propagation();
            el.scroll_by_with_x_and_y(next - scroll_left, 0.0);
        }
    });
    page.add_listener(listener);
}

/// Section-at-a-time wheel navigation.
pub fn wire_page_wheel(page: &Rc<Page>, window: &web::Window) {
    let p = page.clone();
    let listener = EventListener::new_active(window, "wheel", move |ev: web::Event| {
        let Some(wev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let fx = p.state.borrow_mut().on_wheel(wev.delta_y(), Instant::now());
        if !fx.is_empty() {
            ev.prevent_default();
        }
        p.apply(fx);
    });
    page.add_listener(listener);
}
