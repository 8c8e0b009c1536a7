use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::random::sample_between;

/// Lower bound shared by every global multiplier.
pub const MIN_MODIFIER: f32 = 0.1;
/// Upper bound shared by every global multiplier.
pub const MAX_MODIFIER: f32 = 5.0;

/// Global multipliers applied on top of every family's own tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Modifiers", inline)]
#[serde(default)]
pub struct ModifierOptions {
    /// Scales rotation angles (jitter twist, dangle swing).
    #[schemars(title = "Angle", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub angle_multiplier: f32,
    /// Scales the phase speed of oscillating motion.
    #[schemars(title = "Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed_multiplier: f32,
    /// Uniform glyph scale applied by jitter and dangle.
    #[schemars(title = "Size", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub size_multiplier: f32,
    /// Scales random jitter translation.
    #[schemars(title = "Curve Scale", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub curve_scale: f32,
}

impl ModifierOptions {
    /// Copy with every multiplier clamped to its range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let clamp = |v: f32| v.clamp(MIN_MODIFIER, MAX_MODIFIER);
        Self {
            angle_multiplier: clamp(self.angle_multiplier),
            speed_multiplier: clamp(self.speed_multiplier),
            size_multiplier: clamp(self.size_multiplier),
            curve_scale: clamp(self.curve_scale),
        }
    }

    /// Draw all four multipliers uniformly from their range.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.angle_multiplier = sample_between(rng, MIN_MODIFIER, MAX_MODIFIER);
        self.speed_multiplier = sample_between(rng, MIN_MODIFIER, MAX_MODIFIER);
        self.size_multiplier = sample_between(rng, MIN_MODIFIER, MAX_MODIFIER);
        self.curve_scale = sample_between(rng, MIN_MODIFIER, MAX_MODIFIER);
    }
}

impl Default for ModifierOptions {
    fn default() -> Self {
        Self {
            angle_multiplier: 1.0,
            speed_multiplier: 1.0,
            size_multiplier: 1.0,
            curve_scale: 1.0,
        }
    }
}
