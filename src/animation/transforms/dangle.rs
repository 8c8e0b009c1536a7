//! Swing from the glyph top-center: `Dangle` and `DangleTogether`.

use glam::{Mat4, Quat, Vec3};

use super::{transform_about, write_quad, TickInput};
use crate::animation::mode::Coupling;
use crate::animation::slots::CharacterSlots;
use crate::layout::{GlyphRecord, TOP_LEFT, TOP_RIGHT};
use crate::util::easing::{oscillate, tick_phase};

/// Hanging point of a glyph: horizontally centered on its top edge, at the
/// glyph's top-right height.
#[must_use]
pub fn dangle_pivot(quad: &[Vec3; 4], glyph: &GlyphRecord) -> Vec3 {
    let x = (quad[TOP_LEFT].x + quad[TOP_RIGHT].x) * 0.5;
    Vec3::new(x, glyph.top_right.y, 0.0)
}

/// Rotate and scale every visible glyph about its top-center.
///
/// Independent coupling swings each glyph with its own slot parameters and a
/// one-tick phase lag per slot, storing the result in the slot's
/// `current_angle`. Together coupling swings every glyph by one shared angle
/// taken straight from the dangle maxima and leaves the slots alone.
pub fn dangle(
    input: &TickInput<'_>,
    slots: &mut CharacterSlots,
    out: &mut [Vec<Vec3>],
) {
    let options = &input.config.dangle;
    let modifiers = &input.config.modifiers;
    let shared_angle = oscillate(
        options.max_angle,
        tick_phase(
            input.tick as f32,
            options.max_speed,
            modifiers.speed_multiplier,
        ),
    );
    let scale = Vec3::splat(modifiers.size_multiplier);

    for (glyph, base) in input.visible_quads() {
        let angle = match input.coupling {
            Coupling::Together => shared_angle,
            Coupling::Independent => {
                let lag = CharacterSlots::slot_index(glyph.index) as u64;
                let slot = slots.get_mut(glyph.index);
                let phase = tick_phase(
                    (input.tick + lag) as f32,
                    slot.speed,
                    modifiers.speed_multiplier,
                );
                slot.current_angle = slot.swing_angle(phase);
                slot.current_angle
            }
        };
        let rotation = Quat::from_rotation_z(
            (angle * modifiers.angle_multiplier).to_radians(),
        );
        let matrix =
            Mat4::from_scale_rotation_translation(scale, rotation, Vec3::ZERO);
        let pivot = dangle_pivot(&base, glyph);
        write_quad(out, glyph, transform_about(base, pivot, &matrix));
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::animation::mode::AnimationMode;
    use crate::animation::transforms::test_support::{quad, setup};
    use crate::layout::{TextLayout, BOTTOM_LEFT, BOTTOM_RIGHT};
    use crate::options::AnimationConfig;

    fn slots_for(mode: AnimationMode) -> CharacterSlots {
        let mut slots = CharacterSlots::new();
        let mut rng = StdRng::seed_from_u64(21);
        slots.regenerate(mode, &AnimationConfig::default(), &mut rng);
        slots
    }

    /// Bottom-edge angle (degrees) of every glyph after one tick.
    fn angles(
        text: &str,
        tick: u64,
        coupling: Coupling,
        slots: &mut CharacterSlots,
    ) -> Vec<f32> {
        let (layout, snap, mut out) = setup(text);
        let config = AnimationConfig::default();
        let input = TickInput {
            glyphs: layout.glyphs(),
            baseline: &snap,
            config: &config,
            tick,
            coupling,
        };
        dangle(&input, slots, &mut out);
        layout
            .glyphs()
            .iter()
            .map(|g| {
                let q = quad(&out, g);
                let edge = q[BOTTOM_RIGHT] - q[BOTTOM_LEFT];
                edge.y.atan2(edge.x).to_degrees()
            })
            .collect()
    }

    #[test]
    fn pivot_stays_fixed() {
        let (layout, snap, mut out) = setup("AB");
        let config = AnimationConfig::default();
        let mut slots = slots_for(AnimationMode::Dangle);
        let input = TickInput {
            glyphs: layout.glyphs(),
            baseline: &snap,
            config: &config,
            tick: 4,
            coupling: Coupling::Independent,
        };
        dangle(&input, &mut slots, &mut out);
        for g in layout.glyphs() {
            let before = dangle_pivot(&g.corners, g);
            let q = quad(&out, g);
            // Top edge midpoint is the pivot; rotation keeps it in place.
            let after = (q[TOP_LEFT] + q[TOP_RIGHT]) * 0.5;
            assert!((after - before).length() < 1e-4);
        }
    }

    #[test]
    fn together_uses_one_shared_angle() {
        let mut slots = slots_for(AnimationMode::DangleTogether);
        let untouched = slots.clone();
        let a = angles("ABCD", 5, Coupling::Together, &mut slots);
        assert!(a.iter().all(|x| (x - a[0]).abs() < 1e-3));
        let config = AnimationConfig::default();
        let expected = oscillate(
            config.dangle.max_angle,
            tick_phase(5.0, config.dangle.max_speed, 1.0),
        );
        assert!((a[0] - expected).abs() < 1e-3);
        assert_eq!(slots, untouched);
    }

    #[test]
    fn independent_swings_out_of_phase() {
        let mut slots = slots_for(AnimationMode::Dangle);
        let a = angles("ABCD", 2, Coupling::Independent, &mut slots);
        assert!(a[1..].iter().any(|x| (x - a[0]).abs() > 1e-3));
        for (i, angle) in a.iter().enumerate() {
            assert!((angle - slots.get(i).current_angle).abs() < 1e-3);
        }
    }

    #[test]
    fn glyphs_past_capacity_follow_last_slot() {
        let text = "x".repeat(40);
        let mut slots = slots_for(AnimationMode::Dangle);
        let a = angles(&text, 9, Coupling::Independent, &mut slots);
        assert!((a[39] - a[31]).abs() < 1e-3);
        assert!((a[35] - a[31]).abs() < 1e-3);
    }

    #[test]
    fn top_center_pivot_uses_top_edge() {
        let layout = crate::layout::MonospaceLayout::new("A");
        let g = layout.glyphs()[0];
        assert_eq!(dangle_pivot(&g.corners, &g), Vec3::new(4.0, 14.0, 0.0));
    }
}
