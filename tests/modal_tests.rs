// Host-side tests for the project detail overlay lifecycle and navbar chrome.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/content.rs");
}
mod modal {
    include!("../src/modal.rs");
}
mod navbar {
    include!("../src/navbar.rs");
}

use content::project_by_id;
use instant::Instant;
use modal::*;
use navbar::NavBarState;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn open_then_close_clears_after_delay() {
    let t0 = Instant::now();
    let project = project_by_id("ecommerce").unwrap();
    let mut sel = ProjectDetailSelection::default();
    assert!(sel.open(project));
    assert!(sel.is_visible());
    assert_eq!(sel.selected().map(|p| p.id), Some("ecommerce"));

    assert!(sel.close(t0));
    assert!(!sel.is_visible());
    // record stays while fading out
    assert_eq!(sel.selected().map(|p| p.id), Some("ecommerce"));
    assert!(!sel.settle(t0 + ms(299)));
    assert!(sel.settle(t0 + ms(300)));
    assert_eq!(sel.phase(), ModalPhase::Closed);
    assert!(sel.selected().is_none());
}

#[test]
fn open_is_ignored_while_open() {
    let mut sel = ProjectDetailSelection::default();
    sel.open(project_by_id("ecommerce").unwrap());
    assert!(!sel.open(project_by_id("portfolio").unwrap()));
    assert_eq!(sel.selected().map(|p| p.id), Some("ecommerce"));
}

#[test]
fn reopen_during_closing_replaces_selection() {
    let t0 = Instant::now();
    let mut sel = ProjectDetailSelection::default();
    sel.open(project_by_id("ecommerce").unwrap());
    sel.close(t0);
    assert!(sel.open(project_by_id("ai-assistant").unwrap()));
    // the old deadline must not clear the new selection
    assert!(!sel.settle(t0 + ms(400)));
    assert_eq!(sel.selected().map(|p| p.id), Some("ai-assistant"));
    assert!(sel.is_visible());
}

#[test]
fn close_only_from_open() {
    let t0 = Instant::now();
    let mut sel = ProjectDetailSelection::new(ms(50));
    assert!(!sel.close(t0));
    sel.open(project_by_id("social-media").unwrap());
    assert!(sel.close(t0));
    assert!(!sel.close(t0 + ms(10)));
    assert_eq!(sel.phase(), ModalPhase::Closing { until: t0 + ms(50) });
}

#[test]
fn unknown_project_id() {
    assert!(project_by_id("nope").is_none());
}

#[test]
fn navbar_hides_on_scroll_down_and_shows_on_scroll_up() {
    let mut nav = NavBarState::default();
    assert!(nav.visible && !nav.scrolled);

    assert!(nav.on_scroll(300.0));
    assert!(nav.scrolled);
    assert!(!nav.visible);

    assert!(nav.on_scroll(200.0));
    assert!(nav.visible);
    assert!(nav.scrolled);

    // near the top it is always shown and transparent
    nav.on_scroll(500.0);
    assert!(nav.on_scroll(20.0));
    assert!(nav.visible && !nav.scrolled);
    assert!(!nav.on_scroll(30.0));
}

#[test]
fn nav_click_closes_mobile_menu() {
    let mut nav = NavBarState::default();
    assert!(nav.toggle_menu());
    assert!(nav.on_nav_click());
    assert!(!nav.menu_open);
    assert!(!nav.on_nav_click());
}
