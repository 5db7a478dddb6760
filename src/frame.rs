use crate::dom;
use crate::parallax::{self, PendingSamples, Transform};
use crate::section::SectionId;
use glam::Vec2;
use web_sys as web;

/// Last applied parallax inputs. Pointer and scroll samples arrive
/// separately, but some elements combine both.
pub struct FrameContext {
    pub document: web::Document,
    pub pointer: Vec2,
    pub scroll_y: f32,
}

impl FrameContext {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            pointer: Vec2::splat(0.5),
            scroll_y: 0.0,
        }
    }

    /// Apply everything recorded since the previous frame.
    pub fn frame(&mut self, samples: PendingSamples) {
        if let Some(p) = samples.pointer {
            self.pointer = p;
        }
        if let Some(y) = samples.scroll_y {
            self.scroll_y = y;
        }
        self.apply_background();
        self.apply_hero();
        self.apply_section_drift();
    }

    fn apply_background(&self) {
        for el in dom::document_query_all(&self.document, "[data-parallax]") {
            let speed = parallax::parse_speed(el.get_attribute("data-parallax").as_deref());
            let t = Transform::translate_y(parallax::scroll_offset(self.scroll_y, speed, true));
            dom::set_style(&el, "transform", &t.to_css());
        }
    }

    fn apply_hero(&self) {
        let Some(hero) = dom::section_element(&self.document, SectionId::Home) else {
            return;
        };
        let gradients = dom::query_all(&hero, ".bg-gradient");
        let floating = dom::query_all(&hero, ".floating-element");
        let (g, f) = parallax::hero_pointer_frame(self.pointer, gradients.len(), floating.len());
        // foreground layers advance with the scroll; gradient blobs also follow the pointer
        for el in dom::query_all(&hero, "[data-parallax-speed]") {
            let speed = parallax::parse_speed(el.get_attribute("data-parallax-speed").as_deref());
            let base = gradients
                .iter()
                .position(|gradient| *gradient == el)
                .and_then(|i| g.get(i).copied())
                .unwrap_or_default();
            let t = base.with_offset_y(parallax::scroll_offset(self.scroll_y, speed, false));
            dom::set_style(&el, "transform", &t.to_css());
        }
        for (el, t) in floating.iter().zip(f) {
            dom::set_style(el, "transform", &t.to_css());
        }
    }

    fn apply_section_drift(&self) {
        for el in dom::document_query_all(&self.document, "[data-section-wrapper]") {
            let section = el
                .get_attribute("data-section-wrapper")
                .and_then(|id| SectionId::from_dom_id(&id));
            if let Some(section) = section {
                let t = Transform::translate_y(parallax::section_drift(section, self.scroll_y));
                dom::set_style(&el, "transform", &t.to_css());
            }
        }
    }
}
