use crate::constants::{VIEWPORT_MARGIN_FRAC, VISIBILITY_THRESHOLD};
use crate::section::SectionId;
use fnv::FnvHashMap;

/// Fraction of a section's box that lies inside the viewport after the
/// viewport is shrunk by `margin_frac` at both top and bottom. Mirrors the
/// ratio an IntersectionObserver with a negative root margin reports.
pub fn intersection_ratio(top: f64, height: f64, viewport_height: f64, margin_frac: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let inset = viewport_height * margin_frac;
    let view_top = inset;
    let view_bottom = viewport_height - inset;
    let visible = (top + height).min(view_bottom) - top.max(view_top);
    (visible.max(0.0) / height).clamp(0.0, 1.0)
}

/// Result of feeding observations to the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityUpdate {
    /// The dominant section changed to this one.
    pub activated: Option<SectionId>,
    /// This section was revealed for the first time.
    pub revealed: Option<SectionId>,
}

/// Decides which section dominates the viewport from per-section
/// intersection ratios.
///
/// A section only qualifies at or above the threshold. Reveal marks are
/// one-way.
#[derive(Debug)]
pub struct SectionVisibilityTracker {
    threshold: f64,
    ratios: FnvHashMap<SectionId, f64>,
    active: Option<SectionId>,
    revealed: [bool; SectionId::ALL.len()],
}

impl SectionVisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ratios: FnvHashMap::default(),
            active: None,
            revealed: [false; SectionId::ALL.len()],
        }
    }

    #[inline]
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    #[inline]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed[section.index()]
    }

    pub fn ratio(&self, section: SectionId) -> f64 {
        self.ratios.get(&section).copied().unwrap_or(0.0)
    }

    /// Feed a batch of observations.
    pub fn observe<I>(&mut self, observations: I) -> VisibilityUpdate
    where
        I: IntoIterator<Item = (SectionId, f64)>,
    {
        for (section, ratio) in observations {
            self.ratios.insert(section, ratio.clamp(0.0, 1.0));
        }
        let mut update = VisibilityUpdate::default();
        let Some(winner) = self.dominant() else {
            return update;
        };
        if !self.revealed[winner.index()] {
            self.revealed[winner.index()] = true;
            update.revealed = Some(winner);
        }
        if self.active != Some(winner) {
            self.active = Some(winner);
            update.activated = Some(winner);
        }
        update
    }

    /// Seed ratios from measured geometry before the observer fires.
    /// `rects` yields `(section, top, height)` in viewport coordinates.
    pub fn prime<I>(&mut self, rects: I, viewport_height: f64) -> VisibilityUpdate
    where
        I: IntoIterator<Item = (SectionId, f64, f64)>,
    {
        let samples: Vec<(SectionId, f64)> = rects
            .into_iter()
            .map(|(s, top, height)| {
                (s, intersection_ratio(top, height, viewport_height, VIEWPORT_MARGIN_FRAC))
            })
            .collect();
        self.observe(samples)
    }

    /// Navigation moved the page programmatically; keep the tracker's
    /// notion in step so the observer does not re-announce it.
    pub fn assume_active(&mut self, section: SectionId) {
        self.active = Some(section);
    }

    fn dominant(&self) -> Option<SectionId> {
        let mut best: Option<(SectionId, f64)> = None;
        for section in SectionId::ALL {
            let ratio = self.ratio(section);
            if ratio < self.threshold {
                continue;
            }
            best = match best {
                None => Some((section, ratio)),
                // ties stay with the current section, else the earlier one
                Some((_, r)) if ratio > r || (ratio == r && self.active == Some(section)) => {
                    Some((section, ratio))
                }
                keep => keep,
            };
        }
        best.map(|(s, _)| s)
    }
}

impl Default for SectionVisibilityTracker {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}
