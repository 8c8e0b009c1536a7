use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Speed bounds for jitter oscillation.
pub const JITTER_SPEED_RANGE: (f32, f32) = (0.1, 10.0);
/// Angle bounds (degrees) for per-character jitter ranges.
pub const JITTER_ANGLE_RANGE: (f32, f32) = (5.0, 75.0);
/// Bounds for the random jitter translation extent.
pub const JITTER_DISTANCE_RANGE: (f32, f32) = (0.5, 15.0);
/// Bounds (degrees) for the random jitter twist.
pub const JITTER_TWIST_RANGE: (f32, f32) = (1.0, 20.0);

/// Tunables for `Jitter` / `JitterTogether`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Jitter", inline)]
#[serde(default)]
pub struct JitterOptions {
    /// Upper bound of the per-character speed draw.
    #[schemars(title = "Max Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Lower bound of the per-character speed draw.
    #[schemars(title = "Min Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub min_speed: f32,
    /// Upper bound of the per-character angle range draw.
    #[schemars(title = "Max Angle", range(min = 5.0, max = 75.0), extend("step" = 1.0))]
    pub max_angle: f32,
    /// Lower bound of the per-character angle range draw.
    #[schemars(title = "Min Angle", range(min = 5.0, max = 75.0), extend("step" = 1.0))]
    pub min_angle: f32,
    /// How far glyphs move in each jitter step.
    #[schemars(title = "Distance", range(min = 0.5, max = 15.0), extend("step" = 0.1))]
    pub distance: f32,
    /// How far glyphs twist (degrees) in each jitter step.
    #[schemars(title = "Twist", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub twist: f32,
}

impl JitterOptions {
    /// Copy with every tunable clamped to its range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let (s0, s1) = JITTER_SPEED_RANGE;
        let (a0, a1) = JITTER_ANGLE_RANGE;
        let (d0, d1) = JITTER_DISTANCE_RANGE;
        let (t0, t1) = JITTER_TWIST_RANGE;
        Self {
            max_speed: self.max_speed.clamp(s0, s1),
            min_speed: self.min_speed.clamp(s0, s1),
            max_angle: self.max_angle.clamp(a0, a1),
            min_angle: self.min_angle.clamp(a0, a1),
            distance: self.distance.clamp(d0, d1),
            twist: self.twist.clamp(t0, t1),
        }
    }
}

impl Default for JitterOptions {
    fn default() -> Self {
        Self {
            max_speed: 3.0,
            min_speed: 1.0,
            max_angle: 25.0,
            min_angle: 10.0,
            distance: 0.5,
            twist: 5.0,
        }
    }
}
