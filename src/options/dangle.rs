use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Speed bounds for dangle swing.
pub const DANGLE_SPEED_RANGE: (f32, f32) = (0.1, 10.0);
/// Angle bounds (degrees) for dangle swing.
pub const DANGLE_ANGLE_RANGE: (f32, f32) = (5.0, 75.0);

/// Tunables for `Dangle` / `DangleTogether`.
///
/// `DangleTogether` swings with `max_angle` and `max_speed` directly; the
/// min values only bound the per-character draw of `Dangle`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Dangle", inline)]
#[serde(default)]
pub struct DangleOptions {
    /// Upper bound of the per-character speed draw.
    #[schemars(title = "Max Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Lower bound of the per-character speed draw.
    #[schemars(title = "Min Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub min_speed: f32,
    /// Upper bound of the per-character swing range draw.
    #[schemars(title = "Max Angle", range(min = 5.0, max = 75.0), extend("step" = 1.0))]
    pub max_angle: f32,
    /// Lower bound of the per-character swing range draw.
    #[schemars(title = "Min Angle", range(min = 5.0, max = 75.0), extend("step" = 1.0))]
    pub min_angle: f32,
}

impl DangleOptions {
    /// Copy with every tunable clamped to its range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let (s0, s1) = DANGLE_SPEED_RANGE;
        let (a0, a1) = DANGLE_ANGLE_RANGE;
        Self {
            max_speed: self.max_speed.clamp(s0, s1),
            min_speed: self.min_speed.clamp(s0, s1),
            max_angle: self.max_angle.clamp(a0, a1),
            min_angle: self.min_angle.clamp(a0, a1),
        }
    }
}

impl Default for DangleOptions {
    fn default() -> Self {
        Self {
            max_speed: 3.0,
            min_speed: 1.0,
            max_angle: 25.0,
            min_angle: 10.0,
        }
    }
}
