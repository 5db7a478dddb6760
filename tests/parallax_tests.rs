// Host-side tests for pointer and scroll parallax math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod section {
    include!("../src/section.rs");
}
mod parallax {
    include!("../src/parallax.rs");
}

use glam::Vec2;
use parallax::*;
use section::SectionId;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn centered_pointer_gives_zero_offset() {
    let t = pointer_transform(Vec2::splat(0.5), PointerLayer::hero_gradient(2));
    assert_eq!(t.translate, Vec2::ZERO);
    assert_eq!(t.rotate_deg, 0.0);
}

#[test]
fn pointer_offset_is_linear() {
    let a = pointer_offset(Vec2::new(0.75, 0.5), 100.0, 0.1);
    let b = pointer_offset(Vec2::new(1.0, 0.5), 100.0, 0.1);
    assert!(close(a.x, 2.5));
    assert!(close(b.x, 5.0));
    assert!(close(a.y, 0.0));
}

#[test]
fn gradient_layers_speed_up_with_index() {
    let corner = Vec2::new(1.0, 1.0);
    let first = pointer_transform(corner, PointerLayer::hero_gradient(0));
    let third = pointer_transform(corner, PointerLayer::hero_gradient(2));
    // 0.5 * 150 * 0.02 and 0.5 * 150 * 0.04
    assert!(close(first.translate.x, 1.5));
    assert!(close(third.translate.x, 3.0));
    assert!(close(first.rotate_deg, 2.5));
}

#[test]
fn floating_layers_do_not_rotate() {
    let t = pointer_transform(Vec2::new(0.0, 0.0), PointerLayer::hero_floating(1));
    assert!(close(t.translate.x, -3.0));
    assert_eq!(t.rotate_deg, 0.0);
}

#[test]
fn hero_frame_has_one_transform_per_element() {
    let (g, f) = hero_pointer_frame(Vec2::new(0.2, 0.8), 3, 2);
    assert_eq!(g.len(), 3);
    assert_eq!(f.len(), 2);
    assert!(!g.spilled());
}

#[test]
fn normalize_pointer_against_container() {
    let uv = normalize_pointer(Vec2::new(150.0, 100.0), Vec2::new(100.0, 0.0), Vec2::new(200.0, 400.0));
    assert_eq!(uv, Some(Vec2::new(0.25, 0.25)));
    assert_eq!(normalize_pointer(Vec2::ONE, Vec2::ZERO, Vec2::new(0.0, 10.0)), None);
}

#[test]
fn scroll_offset_direction() {
    assert!(close(scroll_offset(200.0, 0.5, false), 100.0));
    assert!(close(scroll_offset(200.0, 0.5, true), -100.0));
    assert!(close(section_drift(SectionId::Home, 100.0), 10.0));
    assert!(close(section_drift(SectionId::Projects, 100.0), 3.0));
}

#[test]
fn parse_speed_falls_back_to_default() {
    assert!(close(parse_speed(Some("0.2")), 0.2));
    assert!(close(parse_speed(Some(" 0.8 ")), 0.8));
    assert!(close(parse_speed(Some("fast")), 0.5));
    assert!(close(parse_speed(Some("NaN")), 0.5));
    assert!(close(parse_speed(None), 0.5));
}

#[test]
fn css_output_forms() {
    assert_eq!(Transform::translate_y(-12.5).to_css(), "translateY(-12.50px)");
    let t = Transform {
        translate: Vec2::new(1.0, 2.0),
        rotate_deg: 0.0,
    };
    assert_eq!(t.to_css(), "translate(1.00px, 2.00px)");
    let t = Transform {
        translate: Vec2::new(1.0, 2.0),
        rotate_deg: 1.5,
    }
    .with_offset_y(3.0);
    assert_eq!(t.to_css(), "translate(1.00px, 5.00px) rotate(1.50deg)");
}

#[test]
fn pending_samples_request_one_frame() {
    let mut p = PendingSamples::default();
    assert!(p.record_scroll(10.0));
    assert!(!p.record_pointer(Vec2::ONE));
    assert!(!p.record_scroll(20.0));
    let taken = p.take();
    assert_eq!(taken.scroll_y, Some(20.0));
    assert_eq!(taken.pointer, Some(Vec2::ONE));
    assert!(p.is_empty());
    assert!(p.record_pointer(Vec2::ZERO));
}
