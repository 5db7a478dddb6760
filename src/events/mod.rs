use crate::page::Page;
use std::rc::Rc;
use web_sys as web;

mod click;
mod keyboard;
mod pointer;
mod scroll;
mod wheel;

/// Register every page-level listener on `page`. The wheel navigator is
/// left out entirely when the platform asks for reduced motion.
pub fn wire_all(page: &Rc<Page>, window: &web::Window, reduced_motion: bool) {
    keyboard::wire_keydown(page, window);
    click::wire_clicks(page);
    scroll::wire_scroll(page, window);
    pointer::wire_pointermove(page, window);
    wheel::wire_gallery_wheel(page);
    if reduced_motion {
        log::info!("[nav] reduced motion: wheel navigation disabled");
    } else {
        wheel::wire_page_wheel(page, window);
    }
}
