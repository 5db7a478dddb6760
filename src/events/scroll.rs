use crate::dom::EventListener;
use crate::page::Page;
use std::rc::Rc;
use web_sys as web;

/// Navbar chrome and scroll parallax both follow `window.scrollY`.
pub fn wire_scroll(page: &Rc<Page>, window: &web::Window) {
    let p = page.clone();
    let w = window.clone();
    let listener = EventListener::new(window, "scroll", move |_ev: web::Event| {
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        let fx = p.state.borrow_mut().on_scroll(scroll_y);
        p.apply(fx);
    });
    page.add_listener(listener);
}
