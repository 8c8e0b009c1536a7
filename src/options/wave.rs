use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bounds for the wave amplitude.
pub const WAVE_HEIGHT_RANGE: (f32, f32) = (0.1, 10.0);
/// Bounds for the wave phase speed.
pub const WAVE_SPEED_RANGE: (f32, f32) = (0.1, 10.0);

/// Tunables for `Wave` / `UpAndDown`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Wave", inline)]
#[serde(default)]
pub struct WaveOptions {
    /// Peak vertical displacement.
    #[schemars(title = "Height", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub max_height: f32,
    /// Phase speed of the wave.
    #[schemars(title = "Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub max_speed: f32,
}

impl WaveOptions {
    /// Copy with every tunable clamped to its range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            max_height: self.max_height.clamp(WAVE_HEIGHT_RANGE.0, WAVE_HEIGHT_RANGE.1),
            max_speed: self.max_speed.clamp(WAVE_SPEED_RANGE.0, WAVE_SPEED_RANGE.1),
        }
    }
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            max_height: 3.0,
            max_speed: 3.0,
        }
    }
}
