use crate::constants::{SECTION_SETTLE_MS, WHEEL_DEBOUNCE_MS};
use crate::section::SectionId;
use instant::Instant;
use std::time::Duration;

/// Timing knobs for [`ScrollNavigator`]. `Default` reads `constants.rs`.
#[derive(Clone, Copy, Debug)]
pub struct NavigatorConfig {
    pub wheel_debounce: Duration,
    pub settle: Duration,
    /// False when the platform asks for reduced motion.
    pub wheel_enabled: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            wheel_debounce: Duration::from_millis(WHEEL_DEBOUNCE_MS),
            settle: Duration::from_millis(SECTION_SETTLE_MS),
            wheel_enabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Vertical wheel delta to a direction. A zero delta (pure horizontal
    /// swipe) carries no vertical intent.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Direction> {
        if delta_y > 0.0 {
            Some(Direction::Down)
        } else if delta_y < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowDown" => Some(Direction::Down),
            "ArrowUp" => Some(Direction::Up),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Wheel(Direction),
    Key(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    Transitioning { until: Instant },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Dropped: debounced, cooling down, or wheel navigation disabled.
    Ignored,
    /// Accepted but already at the boundary; the cooldown is still re-armed.
    Held,
    /// Scroll to this section; the current section was already updated.
    ScrollTo(SectionId),
}

/// Turns discrete wheel and arrow-key gestures into section-to-section
/// scrolling.
///
/// The current section is updated optimistically when a transition is
/// triggered; the transition is released by time (`settle`), not by the
/// browser reporting the scroll as finished.
#[derive(Debug)]
pub struct ScrollNavigator {
    config: NavigatorConfig,
    current: SectionId,
    phase: NavPhase,
    last_wheel: Option<Instant>,
}

impl ScrollNavigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            config,
            current: SectionId::Home,
            phase: NavPhase::Idle,
            last_wheel: None,
        }
    }

    #[inline]
    pub fn current(&self) -> SectionId {
        self.current
    }

    #[inline]
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        matches!(self.phase, NavPhase::Transitioning { until } if now < until)
    }

    /// Release the cooldown once its window has passed. Returns true when
    /// this call moved the navigator back to `Idle`.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.phase {
            NavPhase::Transitioning { until } if now >= until => {
                self.phase = NavPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn handle(&mut self, gesture: Gesture, now: Instant) -> GestureOutcome {
        self.settle(now);
        match gesture {
            Gesture::Wheel(dir) => {
                if !self.config.wheel_enabled || self.is_transitioning(now) {
                    return GestureOutcome::Ignored;
                }
                if let Some(last) = self.last_wheel {
                    if now < last + self.config.wheel_debounce {
                        return GestureOutcome::Ignored;
                    }
                }
                self.last_wheel = Some(now);
                self.step(dir, now)
            }
            Gesture::Key(dir) => self.step(dir, now),
        }
    }

    /// Explicit navigation (nav link, indicator dot). Not rate limited.
    pub fn jump_to(&mut self, section: SectionId) -> SectionId {
        self.current = section;
        section
    }

    /// Visibility tracking reported a new dominant section.
    pub fn observe(&mut self, section: SectionId) {
        self.current = section;
    }

    fn step(&mut self, dir: Direction, now: Instant) -> GestureOutcome {
        self.phase = NavPhase::Transitioning {
            until: now + self.config.settle,
        };
        let target = self.current.offset_clamped(dir.step());
        if target == self.current {
            GestureOutcome::Held
        } else {
            self.current = target;
            GestureOutcome::ScrollTo(target)
        }
    }
}

impl Default for ScrollNavigator {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}
