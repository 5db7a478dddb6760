use crate::constants::{OBSERVER_ROOT_MARGIN, VISIBILITY_THRESHOLD};
use crate::dom;
use crate::section::SectionId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// IntersectionObserver over every section; disconnects when dropped.
pub struct SectionObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl SectionObserver {
    /// `None` when the browser has no IntersectionObserver; the page then
    /// simply goes without auto-highlighting.
    pub fn new(
        document: &web::Document,
        mut on_batch: impl FnMut(Vec<(SectionId, f64)>) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let batch: Vec<(SectionId, f64)> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let section = SectionId::from_dom_id(&entry.target().id())?;
                        let ratio = if entry.is_intersecting() {
                            entry.intersection_ratio()
                        } else {
                            0.0
                        };
                        Some((section, ratio))
                    })
                    .collect();
                if !batch.is_empty() {
                    on_batch(batch);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        init.set_root_margin(OBSERVER_ROOT_MARGIN);
        let observer = match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[observer] unavailable, no auto-highlighting: {:?}", e);
                return None;
            }
        };
        for section in SectionId::ALL {
            if let Some(el) = dom::section_element(document, section) {
                observer.observe(&el);
            }
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
