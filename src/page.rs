use crate::constants::{LOADING_OVERLAY_MS, TIMER_SLACK_MS};
use crate::dom::{self, AnimationFrame, EventListener, Timeout};
use crate::frame::FrameContext;
use crate::observer::SectionObserver;
use crate::overlay;
use crate::section::SectionId;
use crate::state::{Effect, Effects, PageState};
use crate::ui;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// The mounted page: shared state plus every registration that has to be
/// undone on unmount.
pub struct Page {
    pub state: Rc<RefCell<PageState>>,
    pub document: web::Document,
    frame_ctx: RefCell<FrameContext>,
    listeners: RefCell<Vec<EventListener>>,
    observer: RefCell<Option<SectionObserver>>,
    settle_timer: RefCell<Option<Timeout>>,
    modal_timer: RefCell<Option<Timeout>>,
    loading_timer: RefCell<Option<Timeout>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Page {
    pub fn new(document: web::Document, state: PageState) -> Rc<Self> {
        Rc::new(Self {
            state: Rc::new(RefCell::new(state)),
            frame_ctx: RefCell::new(FrameContext::new(document.clone())),
            document,
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            settle_timer: RefCell::new(None),
            modal_timer: RefCell::new(None),
            loading_timer: RefCell::new(None),
            frame: RefCell::new(None),
        })
    }

    pub fn add_listener(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn set_observer(&self, observer: Option<SectionObserver>) {
        *self.observer.borrow_mut() = observer;
    }

    /// Execute the DOM side of a state change.
    pub fn apply(self: &Rc<Self>, fx: Effects) {
        for effect in fx {
            match effect {
                Effect::ScrollTo(section) => {
                    log::info!("[nav] scroll to {}", section.dom_id());
                    dom::scroll_to_section(&self.document, section);
                }
                Effect::ActiveChanged(section) => ui::sync_active(&self.document, section),
                Effect::Reveal(section) => ui::reveal(&self.document, section),
                Effect::NavChrome | Effect::MenuChanged => {
                    let nav = self.state.borrow().navbar;
                    ui::sync_navbar(&self.document, &nav);
                }
                Effect::ModalOpened(project) => {
                    log::info!("[modal] open {}", project.id);
                    // a reopen during the fade-out supersedes the pending clear
                    self.modal_timer.borrow_mut().take();
                    overlay::show_project(&self.document, project);
                }
                Effect::ModalClosing => overlay::hide_project(&self.document),
                Effect::ModalCleared => {
                    log::info!("[modal] cleared");
                    overlay::clear_project(&self.document);
                }
                Effect::ScheduleSettle(delay) => {
                    *self.settle_timer.borrow_mut() = self.settle_after(delay);
                }
                Effect::ScheduleModalClear(delay) => {
                    *self.modal_timer.borrow_mut() = self.settle_after(delay);
                }
                Effect::RequestFrame => self.request_frame(),
                Effect::LoadingDone => overlay::hide_loading(&self.document),
            }
        }
    }

    /// First paint bookkeeping: measure sections, then fade the loader.
    pub fn prime(self: &Rc<Self>, window: &web::Window) {
        let viewport = dom::viewport_height(window);
        let rects: Vec<(SectionId, f64, f64)> = SectionId::ALL
            .iter()
            .filter_map(|s| {
                let rect = dom::section_element(&self.document, *s)?.get_bounding_client_rect();
                Some((*s, rect.top(), rect.height()))
            })
            .collect();
        let fx = self.state.borrow_mut().on_prime(rects, viewport);
        self.apply(fx);
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let fx = self.state.borrow_mut().on_scroll(scroll_y);
        self.apply(fx);

        let page = self.clone();
        *self.loading_timer.borrow_mut() =
            Timeout::new(Duration::from_millis(LOADING_OVERLAY_MS), move || {
                let fx = page.state.borrow_mut().on_loaded();
                page.apply(fx);
            });
    }

    /// Drop every listener, observer and pending callback.
    pub fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.observer.borrow_mut().take();
        self.settle_timer.borrow_mut().take();
        self.modal_timer.borrow_mut().take();
        self.loading_timer.borrow_mut().take();
        self.frame.borrow_mut().take();
    }

    fn settle_after(self: &Rc<Self>, delay: Duration) -> Option<Timeout> {
        let page = self.clone();
        Timeout::new(delay + Duration::from_millis(TIMER_SLACK_MS), move || {
            let fx = page.state.borrow_mut().settle(Instant::now());
            page.apply(fx);
        })
    }

    fn request_frame(self: &Rc<Self>) {
        let page = self.clone();
        let frame = AnimationFrame::request(move || {
            let samples = page.state.borrow_mut().pending.take();
            page.frame_ctx.borrow_mut().frame(samples);
        });
        *self.frame.borrow_mut() = frame;
    }
}
