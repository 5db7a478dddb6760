use crate::content::Project;
use crate::dom;
use crate::view;
use web_sys as web;

const MODAL_ID: &str = "project-modal";
const GALLERY_ID: &str = "project-gallery";
const LOADING_ID: &str = "loading-overlay";

/// Render the project into the detail overlay and fade it in.
pub fn show_project(document: &web::Document, project: &Project) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        el.set_inner_html(&view::render_project_detail(project));
        dom::set_class(&el, &view::modal_class(true));
    }
    set_gallery_blocked(document, true);
}

/// Fade the overlay out; its content stays until `clear_project`.
pub fn hide_project(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        dom::set_class(&el, &view::modal_class(false));
    }
    set_gallery_blocked(document, false);
}

pub fn clear_project(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        el.set_inner_html("");
    }
}

fn set_gallery_blocked(document: &web::Document, blocked: bool) {
    if let Some(el) = document.get_element_by_id(GALLERY_ID) {
        dom::set_class(&el, &view::gallery_class(blocked));
    }
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        dom::set_class(&el, &view::loading_overlay_class(true));
    }
}
