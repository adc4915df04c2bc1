use super::constants::{
    PARTICLE_LIFETIME_MS, PARTICLE_ROTATION_DEG, PARTICLE_SCALE_SPAN, PARTICLE_STAGGER_MS,
    PARTICLE_X_SPAN, PARTICLE_Y_SPAN,
};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// One decorative heart: where it starts, how it's drawn, when it goes away.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub start: Vec2,
    pub scale: f32,
    pub rotation_deg: f32,
    pub remove_after_ms: i32,
}

impl ParticleSpec {
    /// CSS transform for the particle's first frame.
    pub fn transform(&self) -> String {
        format!(
            "translateY(0) scale({:.3}) rotate({:.2}deg)",
            self.scale, self.rotation_deg
        )
    }
}

pub type ParticleBatch = SmallVec<[ParticleSpec; 16]>;

#[inline]
pub fn removal_delay_ms(index: usize) -> i32 {
    let index = i32::try_from(index).unwrap_or(i32::MAX);
    PARTICLE_LIFETIME_MS.saturating_add(PARTICLE_STAGGER_MS.saturating_mul(index))
}

#[inline]
fn lerp_span<R: Rng + ?Sized>(rng: &mut R, span: (f32, f32)) -> f32 {
    span.0 + rng.gen::<f32>() * (span.1 - span.0)
}

/// Lay out `count` particles biased toward the middle of `viewport`.
pub fn plan_particles<R: Rng + ?Sized>(count: usize, viewport: Vec2, rng: &mut R) -> ParticleBatch {
    (0..count)
        .map(|i| {
            let x = lerp_span(rng, PARTICLE_X_SPAN) * viewport.x;
            let y = lerp_span(rng, PARTICLE_Y_SPAN) * viewport.y;
            let scale = lerp_span(rng, PARTICLE_SCALE_SPAN);
            let rotation_deg = lerp_span(rng, (-PARTICLE_ROTATION_DEG, PARTICLE_ROTATION_DEG));
            ParticleSpec {
                start: Vec2::new(x, y),
                scale,
                rotation_deg,
                remove_after_ms: removal_delay_ms(i),
            }
        })
        .collect()
}
