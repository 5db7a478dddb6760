// Host-side tests for HTML rendering.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/content.rs");
}
mod section {
    include!("../src/section.rs");
}
mod navbar {
    include!("../src/navbar.rs");
}
mod view {
    include!("../src/view.rs");
}

use content::project_by_id;
use navbar::NavBarState;
use section::SectionId;
use view::*;

#[test]
fn escape_special_characters() {
    assert_eq!(
        escape("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn classes_join_enabled_only() {
    assert_eq!(classes(&[("a", true), ("b", false), ("c", true)]), "a c");
    assert_eq!(classes(&[("a", false)]), "");
}

#[test]
fn progress_width_per_section() {
    let widths: Vec<String> = SectionId::ALL.iter().map(|s| progress_width(*s)).collect();
    assert_eq!(widths, vec!["20%", "40%", "60%", "80%", "100%"]);
}

#[test]
fn navbar_class_follows_state() {
    let mut nav = NavBarState::default();
    let c = navbar_class(&nav);
    assert!(c.contains("bg-transparent") && c.contains("translate-y-0"));
    nav.on_scroll(300.0);
    let c = navbar_class(&nav);
    assert!(c.contains("glass") && c.contains("-translate-y-full"));
}

#[test]
fn project_card_truncates_tech_tags() {
    let project = project_by_id("ecommerce").unwrap();
    assert_eq!(project.tech.len(), 5);
    let html = render_project_card(project, 0);
    assert!(html.contains("data-project-id=\"ecommerce\""));
    assert!(html.contains("+2 more"));
    assert!(!html.contains(project.tech[3]));
}

#[test]
fn detail_view_has_requirements_and_optional_demo() {
    let with_demo = render_project_detail(project_by_id("ecommerce").unwrap());
    assert!(with_demo.contains("Software Requirements"));
    assert!(with_demo.contains("View Demo"));
    assert!(with_demo.contains("data-modal-close"));
    let without = render_project_detail(project_by_id("ai-assistant").unwrap());
    assert!(!without.contains("View Demo"));
}

#[test]
fn skill_meter_fills_dots_and_bar() {
    let html = render_skill_meter("Rust", 3);
    assert_eq!(html.matches("w-2 h-2 rounded-full bg-primary\"").count(), 3);
    assert_eq!(html.matches("w-2 h-2 rounded-full bg-muted\"").count(), 2);
    assert!(html.contains("width: 60%"));
    // levels above the maximum are capped
    assert!(render_skill_meter("x", 9).contains("width: 100%"));
}

#[test]
fn page_contains_every_section_and_chrome() {
    let html = render_page(SectionId::Home, &NavBarState::default(), 2026);
    for s in SectionId::ALL {
        assert!(html.contains(&format!("id=\"{}\"", s.dom_id())), "missing {}", s.dom_id());
        assert!(html.contains(&format!("data-section-wrapper=\"{}\"", s.dom_id())));
        assert!(html.contains(&format!("data-nav-target=\"{}\"", s.dom_id())));
    }
    let chrome = [
        "navbar",
        "mobile-menu",
        "section-indicator",
        "progress-bar",
        "loading-overlay",
        "project-gallery",
        "project-modal",
    ];
    for id in chrome {
        assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
    }
    assert!(html.contains("2026"));
    assert!(html.contains("width: 20%"));
}

#[test]
fn hero_carries_every_parallax_layer() {
    let hero = render_hero();
    // three gradient blobs, grid overlay, text column, image column
    for speed in ["0.2", "0.15", "0.25", "0.1", "0.05", "0.08"] {
        let attr = format!("data-parallax-speed=\"{}\"", speed);
        assert_eq!(hero.matches(&attr).count(), 1, "missing layer {}", attr);
    }
    assert_eq!(hero.matches("data-parallax-speed=").count(), 6);
}

#[test]
fn detail_overlay_sits_outside_section_wrappers() {
    let html = render_page(SectionId::Projects, &NavBarState::default(), 2026);
    let modal = html.find("id=\"project-modal\"").unwrap();
    let main_end = html.find("</main>").unwrap();
    assert!(modal > main_end);
    assert!(!render_projects().contains("project-modal"));
    assert_eq!(html.matches("id=\"project-modal\"").count(), 1);
}

const STYLESHEET: &str = include_str!("../styles.css");
const INDEX_HTML: &str = include_str!("../index.html");

// `.name` as it appears in a selector, with Tailwind punctuation escaped
fn selector(class: &str) -> String {
    let mut out = String::from(".");
    for c in class.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn is_defined(class: &str) -> bool {
    let sel = selector(class);
    STYLESHEET.match_indices(&sel).any(|(i, _)| {
        STYLESHEET[i + sel.len()..]
            .chars()
            .next()
            .is_some_and(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '\\'))
    })
}

#[test]
fn selector_escapes_punctuation() {
    assert_eq!(selector("md:hidden"), ".md\\:hidden");
    assert_eq!(selector("scale-[0.98]"), ".scale-\\[0\\.98\\]");
    assert_eq!(selector("bg-primary/15"), ".bg-primary\\/15");
}

#[test]
fn stylesheet_defines_every_toggled_class() {
    let mut scrolled = NavBarState::default();
    scrolled.on_scroll(300.0);
    let mut emitted = vec![
        navbar_class(&NavBarState::default()),
        navbar_class(&scrolled),
        "section-reveal".to_string(),
    ];
    for on in [true, false] {
        emitted.extend([
            nav_link_class(on),
            mobile_link_class(on),
            mobile_menu_class(on),
            indicator_class(on),
            wrapper_class(on),
            gallery_class(on),
            modal_class(on),
            loading_overlay_class(on),
        ]);
    }
    for list in &emitted {
        for class in list.split_whitespace() {
            assert!(is_defined(class), "no rule for {}", selector(class));
        }
    }
}

#[test]
fn overlay_and_backdrop_are_styled() {
    for class in ["fixed", "inset-0", "bg-black/50", "z-50", "opacity-0", "pointer-events-none", "-translate-y-full"] {
        assert!(is_defined(class), "no rule for {}", selector(class));
    }
    assert!(!is_defined("not-a-class"));
    assert!(INDEX_HTML.contains("<link rel=\"stylesheet\" href=\"styles.css\""));
    assert!(INDEX_HTML.contains("id=\"app\""));
}
