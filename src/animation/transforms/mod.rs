//! The four transform families.
//!
//! Each positional transform reads the baseline snapshot and writes whole
//! quads into a working copy of the vertex buffers (one `Vec<Vec3>` per mesh
//! group, prefilled from the baseline). Invisible glyphs and glyphs whose
//! indices fall outside the buffers are left untouched.

mod color;
mod dangle;
mod jitter;
mod wave;

pub use color::{change_color, Recolor};
pub use dangle::{dangle, dangle_pivot};
pub use jitter::{jitter, jitter_pivot, JitterSample};
pub use wave::{wave, wave_height};

use glam::{Mat4, Vec3};

use super::mode::Coupling;
use super::snapshot::GlyphSnapshot;
use crate::layout::GlyphRecord;
use crate::options::AnimationConfig;

/// Everything a positional transform reads for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInput<'a> {
    /// Current glyph records.
    pub glyphs: &'a [GlyphRecord],
    /// Resting geometry for the current content epoch.
    pub baseline: &'a GlyphSnapshot,
    /// Clamped tunables.
    pub config: &'a AnimationConfig,
    /// Ticks elapsed since the transform started.
    pub tick: u64,
    /// Per-glyph or whole-text motion.
    pub coupling: Coupling,
}

impl<'a> TickInput<'a> {
    /// Visible glyphs paired with their baseline quads.
    pub(crate) fn visible_quads(
        &self,
    ) -> impl Iterator<Item = (&'a GlyphRecord, [Vec3; 4])> + 'a {
        let baseline = self.baseline;
        self.glyphs
            .iter()
            .filter(|g| g.visible)
            .filter_map(move |g| baseline.quad(g).map(|q| (g, q)))
    }
}

/// Write `quad` over `glyph`'s vertices in the working buffers.
pub(crate) fn write_quad(
    out: &mut [Vec<Vec3>],
    glyph: &GlyphRecord,
    quad: [Vec3; 4],
) {
    let target = out
        .get_mut(glyph.mesh_group)
        .and_then(|buf| buf.get_mut(glyph.vertex_range()));
    if let Some(target) = target {
        target.copy_from_slice(&quad);
    }
}

/// Apply `matrix` to `quad` with `pivot` moved to the origin first, then
/// restore the pivot.
pub(crate) fn transform_about(
    quad: [Vec3; 4],
    pivot: Vec3,
    matrix: &Mat4,
) -> [Vec3; 4] {
    quad.map(|v| matrix.transform_point3(v - pivot) + pivot)
}


#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Quat;

    use super::*;

    #[test]
    fn transform_about_rotates_around_pivot() {
        let quad = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        let pivot = Vec3::new(1.0, 1.0, 0.0);
        let m = Mat4::from_rotation_z(FRAC_PI_2);
        let out = transform_about(quad, pivot, &m);
        // Quarter turn CCW about the center: BL lands where BR was.
        assert!((out[0] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        assert!((out[2] - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn transform_about_identity_is_noop() {
        let quad = [Vec3::X, Vec3::Y, Vec3::ONE, Vec3::Z];
        let m = Mat4::from_scale_rotation_translation(
            Vec3::ONE,
            Quat::IDENTITY,
            Vec3::ZERO,
        );
        assert_eq!(transform_about(quad, Vec3::splat(3.0), &m), quad);
    }

    #[test]
    fn write_quad_ignores_out_of_range() {
        let (layout, _, mut out) = test_support::setup("A");
        let mut glyph = crate::layout::TextLayout::glyphs(&layout)[0];
        glyph.vertex_index = 2;
        write_quad(&mut out, &glyph, [Vec3::ONE; 4]);
        assert!(out[0].iter().all(|v| *v != Vec3::ONE));
    }
}
