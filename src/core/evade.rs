use super::constants::{
    CONFIRM_LEFT_FRACTION, EVADE_EDGE_MARGIN_PX, EVASIVE_LEFT_FRACTION, INITIAL_LEFT_MIN_PX,
    INITIAL_TOP_MIN_PX,
};
use glam::Vec2;
use rand::Rng;

/// Largest (left, top) offset that keeps `element` inside `container`.
///
/// Leaves `EVADE_EDGE_MARGIN_PX` clear on the far edges and clamps to zero
/// when the element does not fit at all.
#[inline]
pub fn max_offset(container: Vec2, element: Vec2) -> Vec2 {
    (container - element - Vec2::splat(EVADE_EDGE_MARGIN_PX)).max(Vec2::ZERO)
}

/// Pick a new uniformly random whole-pixel position for the evasive control.
///
/// Each call samples afresh from the current geometry; the previous position
/// is not excluded, so the control can land where it already was.
pub fn evade_position<R: Rng + ?Sized>(container: Vec2, element: Vec2, rng: &mut R) -> Vec2 {
    let max = max_offset(container, element);
    // floor keeps the integer sample inside a fractional bound
    let max_x = finite_or_zero(max.x).floor() as u32;
    let max_y = finite_or_zero(max.y).floor() as u32;
    Vec2::new(
        rng.gen_range(0..=max_x) as f32,
        rng.gen_range(0..=max_y) as f32,
    )
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Starting spots for the confirm and evasive buttons: same row, left and
/// right of centre.
pub fn initial_positions(container: Vec2, button_height: f32) -> (Vec2, Vec2) {
    let top = ((container.y - button_height) / 2.0).max(INITIAL_TOP_MIN_PX);
    let confirm_left = (container.x * CONFIRM_LEFT_FRACTION).max(INITIAL_LEFT_MIN_PX);
    let evasive_left = (container.x * EVASIVE_LEFT_FRACTION).max(INITIAL_LEFT_MIN_PX);
    (Vec2::new(confirm_left, top), Vec2::new(evasive_left, top))
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}
