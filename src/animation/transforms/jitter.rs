//! Random shake about the glyph center: `Jitter` and `JitterTogether`.

use glam::{Mat4, Quat, Vec3};
use rand::Rng;

use super::{transform_about, write_quad, TickInput};
use crate::animation::mode::Coupling;
use crate::layout::{BOTTOM_LEFT, TOP_RIGHT};
use crate::options::JitterOptions;
use crate::util::random::sample_symmetric;

/// One random jitter step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterSample {
    /// Translation in `[-distance, distance]` on X and Y.
    pub offset: Vec3,
    /// Twist in degrees, in `[-twist, twist]`.
    pub twist: f32,
}

impl JitterSample {
    /// Draw a fresh step from the jitter tunables.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, options: &JitterOptions) -> Self {
        let x = sample_symmetric(rng, options.distance);
        let y = sample_symmetric(rng, options.distance);
        let twist = sample_symmetric(rng, options.twist);
        Self {
            offset: Vec3::new(x, y, 0.0),
            twist,
        }
    }
}

/// Midpoint of the bottom-left and top-right corners, on the z = 0 plane.
#[must_use]
pub fn jitter_pivot(quad: &[Vec3; 4]) -> Vec3 {
    ((quad[BOTTOM_LEFT] + quad[TOP_RIGHT]) * 0.5).truncate().extend(0.0)
}

/// Translate, twist and scale every visible glyph about its center.
///
/// Independent coupling draws a fresh [`JitterSample`] per glyph; together
/// coupling draws one per tick and applies it to every glyph.
///
/// The per-character slot table is not read here: only the random twist
/// rotates a glyph, so jitter has no oscillating angle to look up.
pub fn jitter<R: Rng + ?Sized>(
    input: &TickInput<'_>,
    rng: &mut R,
    out: &mut [Vec<Vec3>],
) {
    let options = &input.config.jitter;
    let modifiers = &input.config.modifiers;
    let shared = match input.coupling {
        Coupling::Together => Some(JitterSample::draw(rng, options)),
        Coupling::Independent => None,
    };
    let scale = Vec3::splat(modifiers.size_multiplier);

    for (glyph, base) in input.visible_quads() {
        let sample =
            shared.unwrap_or_else(|| JitterSample::draw(rng, options));
        let rotation = Quat::from_rotation_z(
            (sample.twist * modifiers.angle_multiplier).to_radians(),
        );
        let matrix = Mat4::from_scale_rotation_translation(
            scale,
            rotation,
            sample.offset * modifiers.curve_scale,
        );
        let pivot = jitter_pivot(&base);
        write_quad(out, glyph, transform_about(base, pivot, &matrix));
    }
}
