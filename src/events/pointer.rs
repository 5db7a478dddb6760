use crate::dom::{self, EventListener};
use crate::page::Page;
use crate::parallax;
use crate::section::SectionId;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position normalized to the hero's box.
#[inline]
fn pointer_hero_uv(ev: &web::MouseEvent, hero: &web::Element) -> Option<Vec2> {
    let rect = hero.get_bounding_client_rect();
    parallax::normalize_pointer(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

pub fn wire_pointermove(page: &Rc<Page>, window: &web::Window) {
    let p = page.clone();
    let listener = EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(mev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(hero) = dom::section_element(&p.document, SectionId::Home) else {
            return;
        };
        if let Some(uv) = pointer_hero_uv(mev, &hero) {
            let fx = p.state.borrow_mut().on_pointer(uv);
            p.apply(fx);
        }
    });
    page.add_listener(listener);
}
