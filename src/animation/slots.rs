//! Per-character randomized motion parameters.
//!
//! A fixed table of [`MAX_ANIMATED_CHARS`] slots. Glyph `i` reads slot `i`;
//! glyphs past the end of the table read the last slot, so in independent
//! modes they move in lockstep with that glyph. The table never grows.

use rand::Rng;

use super::mode::{AnimationMode, Coupling, Family};
use crate::options::AnimationConfig;
use crate::util::easing::{oscillate, tick_phase};
use crate::util::random::sample_between;

/// Number of characters that get their own motion parameters.
pub const MAX_ANIMATED_CHARS: usize = 32;

/// Motion parameters of one character slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotParams {
    /// Swing amplitude in degrees.
    pub angle_range: f32,
    /// Phase speed.
    pub speed: f32,
    /// Last evaluated swing angle. Advanced by the dangle family only.
    pub current_angle: f32,
}

impl SlotParams {
    /// Swing angle at `phase`, in `[-angle_range, angle_range]`.
    #[must_use]
    pub fn swing_angle(&self, phase: f32) -> f32 {
        oscillate(self.angle_range, phase)
    }
}

/// Fixed-capacity table of per-character motion parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSlots {
    slots: [SlotParams; MAX_ANIMATED_CHARS],
}

impl CharacterSlots {
    /// All-zero table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [SlotParams::default(); MAX_ANIMATED_CHARS],
        }
    }

    /// Slot used by glyph `glyph_index`; saturates at the last slot.
    #[must_use]
    pub fn slot_index(glyph_index: usize) -> usize {
        glyph_index.min(MAX_ANIMATED_CHARS - 1)
    }

    /// Parameters for glyph `glyph_index`.
    #[must_use]
    pub fn get(&self, glyph_index: usize) -> &SlotParams {
        &self.slots[Self::slot_index(glyph_index)]
    }

    /// Mutable parameters for glyph `glyph_index`.
    pub fn get_mut(&mut self, glyph_index: usize) -> &mut SlotParams {
        &mut self.slots[Self::slot_index(glyph_index)]
    }

    /// All slots in order.
    #[must_use]
    pub fn as_slice(&self) -> &[SlotParams] {
        &self.slots
    }

    /// Redraw every slot for a freshly started `mode`.
    ///
    /// `Jitter` and `Dangle` draw an independent `(angle_range, speed)` pair
    /// per slot; every other mode draws one pair and broadcasts it.
    /// `current_angle` is reset to the motion value at tick 0.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        mode: AnimationMode,
        config: &AnimationConfig,
        rng: &mut R,
    ) {
        let family = mode.family();
        let ((a0, a1), (s0, s1)) = draw_ranges(family, config);
        let per_slot = mode.coupling() == Coupling::Independent
            && matches!(family, Some(Family::Jitter | Family::Dangle));

        if per_slot {
            for slot in &mut self.slots {
                slot.angle_range = sample_between(rng, a0, a1);
                slot.speed = sample_between(rng, s0, s1);
            }
        } else {
            let angle_range = sample_between(rng, a0, a1);
            let speed = sample_between(rng, s0, s1);
            for slot in &mut self.slots {
                slot.angle_range = angle_range;
                slot.speed = speed;
            }
        }

        let phased = mode == AnimationMode::Dangle;
        let speed_multiplier = config.modifiers.speed_multiplier;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let offset = if phased { i as f32 } else { 0.0 };
            slot.current_angle = slot
                .swing_angle(tick_phase(offset, slot.speed, speed_multiplier));
        }
    }
}

impl Default for CharacterSlots {
    fn default() -> Self {
        Self::new()
    }
}

/// `(angle, speed)` draw bounds for a family. Families without a parameter
/// table get a degenerate range mirroring the wave tunables.
fn draw_ranges(
    family: Option<Family>,
    config: &AnimationConfig,
) -> ((f32, f32), (f32, f32)) {
    match family {
        Some(Family::Jitter) => (
            (config.jitter.min_angle, config.jitter.max_angle),
            (config.jitter.min_speed, config.jitter.max_speed),
        ),
        Some(Family::Dangle) => (
            (config.dangle.min_angle, config.dangle.max_angle),
            (config.dangle.min_speed, config.dangle.max_speed),
        ),
        Some(Family::Color | Family::Wave) | None => (
            (config.wave.max_height, config.wave.max_height),
            (config.wave.max_speed, config.wave.max_speed),
        ),
    }
}
