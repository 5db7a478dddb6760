use crate::dom::EventListener;
use crate::page::Page;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys step between sections; Escape closes the project overlay.
pub fn wire_keydown(page: &Rc<Page>, window: &web::Window) {
    let p = page.clone();
    let listener = EventListener::new_active(window, "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        let key = kev.key();
        let (fx, consumed) = p.state.borrow_mut().on_key(&key, Instant::now());
        if consumed {
            ev.prevent_default();
            log::debug!("[keys] {}", key);
        }
        p.apply(fx);
    });
    page.add_listener(listener);
}
