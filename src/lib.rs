#![cfg(target_arch = "wasm32")]
use crate::dom::DomError;
use crate::navigator::NavigatorConfig;
use crate::page::Page;
use crate::state::PageState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod modal;
mod navbar;
mod navigator;
mod observer;
mod overlay;
mod page;
mod parallax;
mod section;
mod state;
mod ui;
mod view;
mod visibility;

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Unmount: remove every listener, observer and timer the page installed.
#[wasm_bindgen]
pub fn stop() {
    if let Some(page) = PAGE.with(|p| p.borrow_mut().take()) {
        page.teardown();
        log::info!("[init] page torn down");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let mount = document
        .get_element_by_id("app")
        .ok_or(DomError::MissingElement("app"))?;

    // a second start() replaces the previous mount
    stop();
    document.set_title(constants::DOCUMENT_TITLE);

    let reduced_motion = dom::prefers_reduced_motion(&window);
    let config = NavigatorConfig {
        wheel_enabled: !reduced_motion,
        ..NavigatorConfig::default()
    };
    let state = PageState::new(config);

    let year = js_sys::Date::new_0().get_full_year();
    mount.set_inner_html(&view::render_page(state.active(), &state.navbar, year));

    let page = Page::new(document.clone(), state);

    let observed = page.clone();
    page.set_observer(observer::SectionObserver::new(&document, move |batch| {
        let fx = observed.state.borrow_mut().on_visibility(batch);
        observed.apply(fx);
    }));

    events::wire_all(&page, &window, reduced_motion);
    page.prime(&window);

    PAGE.with(|p| *p.borrow_mut() = Some(page));
    log::info!("[init] mounted (reduced_motion={})", reduced_motion);
    Ok(())
}
