use crate::content::{project_by_id, Project};
use crate::modal::ProjectDetailSelection;
use crate::navbar::NavBarState;
use crate::navigator::{Direction, Gesture, GestureOutcome, NavigatorConfig, ScrollNavigator};
use crate::parallax::PendingSamples;
use crate::section::SectionId;
use crate::visibility::{SectionVisibilityTracker, VisibilityUpdate};
use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

/// What the DOM layer has to do after a state change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    ScrollTo(SectionId),
    /// Nav links, indicator dots, progress bar and wrappers follow this.
    ActiveChanged(SectionId),
    Reveal(SectionId),
    NavChrome,
    MenuChanged,
    ModalOpened(&'static Project),
    ModalClosing,
    ModalCleared,
    ScheduleSettle(Duration),
    ScheduleModalClear(Duration),
    RequestFrame,
    LoadingDone,
}

pub type Effects = SmallVec<[Effect; 4]>;

/// All mutable UI state of the page, owned by the top-level composition.
#[derive(Debug)]
pub struct PageState {
    pub navigator: ScrollNavigator,
    pub tracker: SectionVisibilityTracker,
    pub navbar: NavBarState,
    pub modal: ProjectDetailSelection,
    pub pending: PendingSamples,
    pub loaded: bool,
    pub scroll_y: f64,
}

impl PageState {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            navigator: ScrollNavigator::new(config),
            tracker: SectionVisibilityTracker::default(),
            navbar: NavBarState::default(),
            modal: ProjectDetailSelection::default(),
            pending: PendingSamples::default(),
            loaded: false,
            scroll_y: 0.0,
        }
    }

    #[inline]
    pub fn active(&self) -> SectionId {
        self.navigator.current()
    }

    pub fn on_wheel(&mut self, delta_y: f64, now: Instant) -> Effects {
        match Direction::from_wheel_delta(delta_y) {
            Some(dir) => self.gesture(Gesture::Wheel(dir), now),
            None => Effects::new(),
        }
    }

    /// Returns the effects and whether the key was consumed.
    pub fn on_key(&mut self, key: &str, now: Instant) -> (Effects, bool) {
        if key == "Escape" {
            let fx = self.on_modal_close(now);
            let consumed = !fx.is_empty();
            return (fx, consumed);
        }
        match Direction::from_key(key) {
            Some(dir) => (self.gesture(Gesture::Key(dir), now), true),
            None => (Effects::new(), false),
        }
    }

    /// Nav link, indicator dot or call-to-action click.
    pub fn on_nav_click(&mut self, section: SectionId) -> Effects {
        let mut fx = Effects::new();
        if self.navbar.on_nav_click() {
            fx.push(Effect::MenuChanged);
        }
        let before = self.active();
        let target = self.navigator.jump_to(section);
        self.tracker.assume_active(target);
        fx.push(Effect::ScrollTo(target));
        if before != target {
            fx.push(Effect::ActiveChanged(target));
        }
        fx
    }

    pub fn on_menu_toggle(&mut self) -> Effects {
        self.navbar.toggle_menu();
        let mut fx = Effects::new();
        fx.push(Effect::MenuChanged);
        fx
    }

    /// A batch of `(section, ratio)` pairs from the visibility observer.
    pub fn on_visibility<I>(&mut self, observations: I) -> Effects
    where
        I: IntoIterator<Item = (SectionId, f64)>,
    {
        let update = self.tracker.observe(observations);
        self.apply_visibility(update)
    }

    /// Initial measurement: `(section, top, height)` in viewport pixels.
    pub fn on_prime<I>(&mut self, rects: I, viewport_height: f64) -> Effects
    where
        I: IntoIterator<Item = (SectionId, f64, f64)>,
    {
        let update = self.tracker.prime(rects, viewport_height);
        self.apply_visibility(update)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> Effects {
        self.scroll_y = scroll_y;
        let mut fx = Effects::new();
        if self.navbar.on_scroll(scroll_y) {
            fx.push(Effect::NavChrome);
        }
        if self.pending.record_scroll(scroll_y as f32) {
            fx.push(Effect::RequestFrame);
        }
        fx
    }

    pub fn on_pointer(&mut self, pos: Vec2) -> Effects {
        let mut fx = Effects::new();
        if self.pending.record_pointer(pos) {
            fx.push(Effect::RequestFrame);
        }
        fx
    }

    pub fn on_card_click(&mut self, project_id: &str) -> Effects {
        let mut fx = Effects::new();
        if let Some(project) = project_by_id(project_id) {
            if self.modal.open(project) {
                fx.push(Effect::ModalOpened(project));
            }
        }
        fx
    }

    pub fn on_modal_close(&mut self, now: Instant) -> Effects {
        let mut fx = Effects::new();
        if self.modal.close(now) {
            fx.push(Effect::ModalClosing);
            fx.push(Effect::ScheduleModalClear(self.modal.close_delay()));
        }
        fx
    }

    /// Timer callback: release whatever windows have elapsed.
    pub fn settle(&mut self, now: Instant) -> Effects {
        let mut fx = Effects::new();
        self.navigator.settle(now);
        if self.modal.settle(now) {
            fx.push(Effect::ModalCleared);
        }
        fx
    }

    /// Gallery wheel: the new `scroll_left` when the gallery consumes the
    /// event. At either edge, or with the detail view open, it does not and
    /// the page navigator sees the wheel instead.
    pub fn on_gallery_wheel(&self, delta_y: f64, scroll_left: f64, max_scroll: f64) -> Option<f64> {
        if self.modal.is_visible() || delta_y == 0.0 || max_scroll <= 0.0 {
            return None;
        }
        let at_start = scroll_left <= 0.0 && delta_y < 0.0;
        let at_end = scroll_left >= max_scroll && delta_y > 0.0;
        if at_start || at_end {
            return None;
        }
        Some((scroll_left + delta_y).clamp(0.0, max_scroll))
    }

    pub fn on_loaded(&mut self) -> Effects {
        let mut fx = Effects::new();
        if !self.loaded {
            self.loaded = true;
            fx.push(Effect::LoadingDone);
        }
        fx
    }

    fn apply_visibility(&mut self, update: VisibilityUpdate) -> Effects {
        let mut fx = Effects::new();
        if let Some(section) = update.revealed {
            fx.push(Effect::Reveal(section));
        }
        if let Some(section) = update.activated {
            if section != self.active() {
                self.navigator.observe(section);
                fx.push(Effect::ActiveChanged(section));
            }
        }
        fx
    }

    fn gesture(&mut self, gesture: Gesture, now: Instant) -> Effects {
        let mut fx = Effects::new();
        match self.navigator.handle(gesture, now) {
            GestureOutcome::Ignored => {}
            GestureOutcome::Held => {
                fx.push(Effect::ScheduleSettle(self.navigator.config().settle));
            }
            GestureOutcome::ScrollTo(target) => {
                self.tracker.assume_active(target);
                fx.push(Effect::ScrollTo(target));
                fx.push(Effect::ActiveChanged(target));
                fx.push(Effect::ScheduleSettle(self.navigator.config().settle));
            }
        }
        fx
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}
