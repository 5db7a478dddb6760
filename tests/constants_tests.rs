// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_ordered() {
    // Debounce must be shorter than the settle window or nothing would ever fire twice
    assert!(WHEEL_DEBOUNCE_MS > 0);
    assert!(WHEEL_DEBOUNCE_MS < SECTION_SETTLE_MS);
    assert!(MODAL_CLOSE_DELAY_MS > 0);
    assert!(TIMER_SLACK_MS < WHEEL_DEBOUNCE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visibility_geometry_is_consistent() {
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD <= 1.0);
    assert!(VIEWPORT_MARGIN_FRAC >= 0.0 && VIEWPORT_MARGIN_FRAC < 0.5);
    // Root margin string matches the fraction used for priming
    let pct = format!("-{}%", (VIEWPORT_MARGIN_FRAC * 100.0).round() as u32);
    assert!(OBSERVER_ROOT_MARGIN.starts_with(&pct));
}

#[test]
fn section_drift_covers_every_section() {
    assert_eq!(SECTION_DRIFT.len(), 5);
    for f in SECTION_DRIFT {
        assert!(f > 0.0 && f < 1.0, "drift {f} out of range");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_layers_are_bounded() {
    assert!(HERO_GRADIENT_AMPLITUDE > HERO_FLOAT_AMPLITUDE);
    assert!(HERO_GRADIENT_BASE_SPEED > 0.0);
    assert!(HERO_FLOAT_MULTIPLIER_STEP > 0.0);
    assert!(DEFAULT_PARALLAX_SPEED > 0.0 && DEFAULT_PARALLAX_SPEED < 1.0);
    assert_eq!(SKILL_LEVEL_MAX, 5);
}
