//! Vertical wave: `Wave` and `UpAndDown`.

use glam::Vec3;

use super::{write_quad, TickInput};
use crate::animation::mode::Coupling;
use crate::options::AnimationConfig;
use crate::util::easing::{oscillate, tick_phase};

/// Vertical offset of glyph `glyph_index` at `tick`.
///
/// Independent coupling adds the glyph index to the tick count so each
/// glyph lags its predecessor by one tick; together coupling moves the
/// whole text in unison.
#[must_use]
pub fn wave_height(
    tick: u64,
    glyph_index: usize,
    coupling: Coupling,
    config: &AnimationConfig,
) -> f32 {
    let ticks = match coupling {
        Coupling::Independent => tick + glyph_index as u64,
        Coupling::Together => tick,
    };
    let phase = tick_phase(
        ticks as f32,
        config.wave.max_speed,
        config.modifiers.speed_multiplier,
    );
    oscillate(config.wave.max_height, phase)
}

/// Shift every visible glyph's baseline quad vertically.
pub fn wave(input: &TickInput<'_>, out: &mut [Vec<Vec3>]) {
    for (glyph, base) in input.visible_quads() {
        let height =
            wave_height(input.tick, glyph.index, input.coupling, input.config);
        let offset = Vec3::new(0.0, height, 0.0);
        write_quad(out, glyph, base.map(|v| v + offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::transforms::test_support::{quad, setup};
    use crate::layout::TextLayout;

    fn run(text: &str, tick: u64, coupling: Coupling) -> Vec<f32> {
        let (layout, snap, mut out) = setup(text);
        let config = AnimationConfig::default();
        let input = TickInput {
            glyphs: layout.glyphs(),
            baseline: &snap,
            config: &config,
            tick,
            coupling,
        };
        wave(&input, &mut out);
        layout
            .glyphs()
            .iter()
            .map(|g| quad(&out, g)[0].y - g.corners[0].y)
            .collect()
    }

    #[test]
    fn up_and_down_moves_in_unison() {
        let offsets = run("AB", 0, Coupling::Together);
        assert_eq!(offsets[0], offsets[1]);
        assert!((offsets[0] + 3.0).abs() < 1e-5);
    }

    #[test]
    fn wave_lags_per_glyph() {
        let offsets = run("AB", 0, Coupling::Independent);
        assert!((offsets[0] + 3.0).abs() < 1e-5);
        assert!((offsets[1] - offsets[0]).abs() > 0.1);
    }

    #[test]
    fn offset_is_purely_vertical() {
        let (layout, snap, mut out) = setup("AB");
        let config = AnimationConfig::default();
        let input = TickInput {
            glyphs: layout.glyphs(),
            baseline: &snap,
            config: &config,
            tick: 7,
            coupling: Coupling::Independent,
        };
        wave(&input, &mut out);
        for g in layout.glyphs() {
            let q = quad(&out, g);
            let dy = q[0].y - g.corners[0].y;
            for (moved, rest) in q.iter().zip(g.corners) {
                assert_eq!(moved.x, rest.x);
                assert!((moved.y - rest.y - dy).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn invisible_glyphs_untouched() {
        let offsets = run("A B", 3, Coupling::Together);
        assert_eq!(offsets[1], 0.0);
        assert!(offsets[0] != 0.0);
    }

    #[test]
    fn height_stays_within_amplitude() {
        let config = AnimationConfig::default();
        for tick in 0..200 {
            let h = wave_height(tick, 5, Coupling::Independent, &config);
            assert!(h.abs() <= config.wave.max_height + 1e-5);
        }
    }

    #[test]
    fn speed_multiplier_scales_phase() {
        let mut fast = AnimationConfig::default();
        fast.modifiers.speed_multiplier = 2.0;
        let slow = AnimationConfig::default();
        let a = wave_height(3, 0, Coupling::Together, &fast);
        let b = wave_height(6, 0, Coupling::Together, &slow);
        assert!((a - b).abs() < 1e-5);
    }
}
