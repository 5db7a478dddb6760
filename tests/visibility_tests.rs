// Host-side tests for the section visibility tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod section {
    include!("../src/section.rs");
}
mod visibility {
    include!("../src/visibility.rs");
}

use section::SectionId;
use visibility::*;

#[test]
fn ratio_for_fully_inside_section() {
    // viewport 1000 shrunk to [100, 900]
    let r = intersection_ratio(200.0, 400.0, 1000.0, 0.1);
    assert!((r - 1.0).abs() < 1e-9);
}

#[test]
fn ratio_for_partially_visible_section() {
    let r = intersection_ratio(500.0, 800.0, 1000.0, 0.1);
    assert!((r - 0.5).abs() < 1e-9);
    assert_eq!(intersection_ratio(950.0, 400.0, 1000.0, 0.1), 0.0);
    assert_eq!(intersection_ratio(-1200.0, 1000.0, 1000.0, 0.1), 0.0);
}

#[test]
fn ratio_degenerate_inputs() {
    assert_eq!(intersection_ratio(0.0, 0.0, 1000.0, 0.1), 0.0);
    assert_eq!(intersection_ratio(0.0, 100.0, 0.0, 0.1), 0.0);
}

#[test]
fn section_above_threshold_becomes_active_and_revealed() {
    let mut t = SectionVisibilityTracker::default();
    let up = t.observe([(SectionId::About, 0.8)]);
    assert_eq!(up.activated, Some(SectionId::About));
    assert_eq!(up.revealed, Some(SectionId::About));
    assert_eq!(t.active(), Some(SectionId::About));
    assert!(t.is_revealed(SectionId::About));
}

#[test]
fn section_below_threshold_is_not_announced() {
    let mut t = SectionVisibilityTracker::default();
    let up = t.observe([(SectionId::Skills, 0.3)]);
    assert_eq!(up, VisibilityUpdate::default());
    assert_eq!(t.active(), None);
    assert!((t.ratio(SectionId::Skills) - 0.3).abs() < 1e-9);
}

#[test]
fn highest_ratio_wins() {
    let mut t = SectionVisibilityTracker::default();
    t.observe([(SectionId::Home, 0.6), (SectionId::About, 0.9)]);
    assert_eq!(t.active(), Some(SectionId::About));
}

#[test]
fn tie_keeps_current_section() {
    let mut t = SectionVisibilityTracker::default();
    t.observe([(SectionId::About, 0.9)]);
    let up = t.observe([(SectionId::Home, 0.7), (SectionId::About, 0.7)]);
    assert_eq!(up.activated, None);
    assert_eq!(t.active(), Some(SectionId::About));
}

#[test]
fn reveal_is_one_way() {
    let mut t = SectionVisibilityTracker::default();
    t.observe([(SectionId::About, 0.9)]);
    t.observe([(SectionId::About, 0.0), (SectionId::Projects, 0.9)]);
    let up = t.observe([(SectionId::Projects, 0.0), (SectionId::About, 0.9)]);
    assert_eq!(up.activated, Some(SectionId::About));
    assert_eq!(up.revealed, None);
    assert!(t.is_revealed(SectionId::Projects));
}

#[test]
fn assumed_section_is_not_reannounced_but_still_revealed() {
    let mut t = SectionVisibilityTracker::default();
    t.assume_active(SectionId::Skills);
    let up = t.observe([(SectionId::Skills, 1.0)]);
    assert_eq!(up.activated, None);
    assert_eq!(up.revealed, Some(SectionId::Skills));
}

#[test]
fn prime_uses_measured_rects() {
    let mut t = SectionVisibilityTracker::default();
    let vh = 1000.0;
    let up = t.prime(
        [
            (SectionId::Home, 0.0, 1000.0),
            (SectionId::About, 1000.0, 1000.0),
        ],
        vh,
    );
    assert_eq!(up.activated, Some(SectionId::Home));
    assert!((t.ratio(SectionId::Home) - 0.8).abs() < 1e-9);
    assert_eq!(t.ratio(SectionId::About), 0.0);
}
