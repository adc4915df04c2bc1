// Host-side tests for evasive control geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod evade {
        include!("../src/core/evade.rs");
    }
}

use crate::core::constants::EVADE_EDGE_MARGIN_PX;
use crate::core::evade::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn new_position_keeps_control_inside_container() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let container = Vec2::new(rng.gen_range(50.0..900.0), rng.gen_range(40.0..400.0));
        let element = Vec2::new(
            rng.gen_range(10.0..container.x),
            rng.gen_range(10.0..container.y),
        );
        let p = evade_position(container, element, &mut rng);
        assert!(p.x >= 0.0 && p.y >= 0.0, "negative offset {p:?}");
        assert!(
            p.x + element.x <= container.x,
            "x overflow: {p:?} {element:?} in {container:?}"
        );
        assert!(
            p.y + element.y <= container.y,
            "y overflow: {p:?} {element:?} in {container:?}"
        );
    }
}

#[test]
fn positions_are_whole_pixels() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let p = evade_position(Vec2::new(321.7, 123.3), Vec2::new(80.0, 36.0), &mut rng);
        assert_eq!(p.x, p.x.floor());
        assert_eq!(p.y, p.y.floor());
    }
}

#[test]
fn fractional_bound_is_floored() {
    // max_x = 110.5 - 100 - 6 = 4.5, so 4 is the largest legal whole pixel
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let p = evade_position(Vec2::new(110.5, 50.0), Vec2::new(100.0, 20.0), &mut rng);
        assert!(p.x <= 4.0);
    }
}

#[test]
fn oversized_element_pins_to_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = evade_position(Vec2::new(50.0, 30.0), Vec2::new(80.0, 40.0), &mut rng);
    assert_eq!(p, Vec2::ZERO);
    assert_eq!(max_offset(Vec2::new(50.0, 30.0), Vec2::new(80.0, 40.0)), Vec2::ZERO);
}

#[test]
fn non_finite_geometry_pins_to_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = evade_position(Vec2::new(f32::NAN, f32::INFINITY), Vec2::new(10.0, 10.0), &mut rng);
    assert_eq!(p, Vec2::ZERO);
}

#[test]
fn max_offset_leaves_edge_margin() {
    let m = max_offset(Vec2::new(300.0, 100.0), Vec2::new(80.0, 40.0));
    assert_eq!(m, Vec2::new(220.0 - EVADE_EDGE_MARGIN_PX, 60.0 - EVADE_EDGE_MARGIN_PX));
}

#[test]
fn sampling_reaches_both_ends_of_the_range() {
    // container leaves exactly 2px of travel on each axis
    let container = Vec2::new(40.0 + EVADE_EDGE_MARGIN_PX + 2.0, 20.0 + EVADE_EDGE_MARGIN_PX + 2.0);
    let element = Vec2::new(40.0, 20.0);
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = [false; 3];
    for _ in 0..300 {
        let p = evade_position(container, element, &mut rng);
        seen[p.x as usize] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn repeated_positions_are_possible() {
    // no exclusion of the previous spot: with one legal cell every move repeats
    let container = Vec2::new(40.0 + EVADE_EDGE_MARGIN_PX, 20.0 + EVADE_EDGE_MARGIN_PX);
    let element = Vec2::new(40.0, 20.0);
    let mut rng = StdRng::seed_from_u64(5);
    let first = evade_position(container, element, &mut rng);
    let second = evade_position(container, element, &mut rng);
    assert_eq!(first, second);
}

#[test]
fn initial_positions_sit_left_and_right_of_centre() {
    let (confirm, evasive) = initial_positions(Vec2::new(400.0, 80.0), 40.0);
    assert_eq!(confirm, Vec2::new(80.0, 20.0));
    assert_eq!(evasive, Vec2::new(248.0, 20.0));
    assert!(confirm.x < evasive.x);
}

#[test]
fn initial_positions_respect_minimums() {
    let (confirm, evasive) = initial_positions(Vec2::new(20.0, 10.0), 40.0);
    assert_eq!(confirm, Vec2::new(10.0, 6.0));
    assert!((evasive.x - 12.4).abs() < 1e-4);
    assert_eq!(evasive.y, 6.0);
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(12.0), "12px");
    assert_eq!(px(0.0), "0px");
    assert_eq!(px(12.5), "12.5px");
}
