use crate::constants::MODAL_CLOSE_DELAY_MS;
use crate::content::Project;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalPhase {
    Closed,
    Open,
    /// Still rendering the record while the fade-out runs.
    Closing { until: Instant },
}

/// Which project's detail view is shown, if any.
#[derive(Debug)]
pub struct ProjectDetailSelection {
    selected: Option<&'static Project>,
    phase: ModalPhase,
    close_delay: Duration,
}

impl ProjectDetailSelection {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            selected: None,
            phase: ModalPhase::Closed,
            close_delay,
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    #[inline]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    #[inline]
    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// Card click. Ignored while the overlay is open; while closing, the
    /// pending clear is cancelled and the new project shown.
    pub fn open(&mut self, project: &'static Project) -> bool {
        if self.phase == ModalPhase::Open {
            return false;
        }
        self.selected = Some(project);
        self.phase = ModalPhase::Open;
        true
    }

    /// Backdrop, close button or Escape. Returns true if a close started.
    pub fn close(&mut self, now: Instant) -> bool {
        if self.phase != ModalPhase::Open {
            return false;
        }
        self.phase = ModalPhase::Closing {
            until: now + self.close_delay,
        };
        true
    }

    /// Drop the record once the closing delay has elapsed. Returns true
    /// when the selection was cleared by this call.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.phase {
            ModalPhase::Closing { until } if now >= until => {
                self.phase = ModalPhase::Closed;
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ProjectDetailSelection {
    fn default() -> Self {
        Self::new(Duration::from_millis(MODAL_CLOSE_DELAY_MS))
    }
}
