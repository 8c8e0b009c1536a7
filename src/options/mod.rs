//! Designer-facing animation tunables with TOML preset support.
//!
//! Every tunable has a documented range. Values are clamped when set through
//! [`AnimationConfig::set_option`], and the animator reads a
//! [`AnimationConfig::clamped`] copy each tick, so out-of-range writes made
//! directly to the public fields never reach a transform.

mod dangle;
mod jitter;
mod modifiers;
mod wave;

use std::path::Path;

pub use dangle::{DangleOptions, DANGLE_ANGLE_RANGE, DANGLE_SPEED_RANGE};
pub use jitter::{
    JitterOptions, JITTER_ANGLE_RANGE, JITTER_DISTANCE_RANGE,
    JITTER_SPEED_RANGE, JITTER_TWIST_RANGE,
};
pub use modifiers::{ModifierOptions, MAX_MODIFIER, MIN_MODIFIER};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use wave::{WaveOptions, WAVE_HEIGHT_RANGE, WAVE_SPEED_RANGE};

use crate::error::GlyphMotionError;

/// Dotted keys accepted by [`AnimationConfig::set_option`].
pub const OPTION_KEYS: [&str; 16] = [
    "modifiers.angle_multiplier",
    "modifiers.speed_multiplier",
    "modifiers.size_multiplier",
    "modifiers.curve_scale",
    "jitter.max_speed",
    "jitter.min_speed",
    "jitter.max_angle",
    "jitter.min_angle",
    "jitter.distance",
    "jitter.twist",
    "wave.max_height",
    "wave.max_speed",
    "dangle.max_speed",
    "dangle.min_speed",
    "dangle.max_angle",
    "dangle.min_angle",
];

/// Top-level tunables container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[wave]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct AnimationConfig {
    /// Global multipliers shared by all families.
    pub modifiers: ModifierOptions,
    /// Jitter family tunables.
    pub jitter: JitterOptions,
    /// Wave family tunables.
    pub wave: WaveOptions,
    /// Dangle family tunables.
    pub dangle: DangleOptions,
}

impl AnimationConfig {
    /// Generate JSON Schema describing the tunables and their ranges.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(AnimationConfig)
    }

    /// Copy with every tunable clamped to its documented range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            modifiers: self.modifiers.clamped(),
            jitter: self.jitter.clamped(),
            wave: self.wave.clamped(),
            dangle: self.dangle.clamped(),
        }
    }

    /// Randomize the four global multipliers within [0.1, 5.0].
    pub fn randomize_modifiers<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.modifiers.randomize(rng);
    }

    /// Set one tunable by dotted key, clamping to its range.
    ///
    /// Returns `false` for unknown keys or non-numeric values.
    pub fn set_option(&mut self, key: &str, value: &serde_json::Value) -> bool {
        let Some(raw) = value.as_f64() else {
            log::debug!("Non-numeric value for animation option '{key}'");
            return false;
        };
        let Some((slot, (lo, hi))) = self.tunable_mut(key) else {
            log::debug!("Unhandled animation option: {key}");
            return false;
        };
        *slot = (raw as f32).clamp(lo, hi);
        true
    }

    fn tunable_mut(&mut self, key: &str) -> Option<(&mut f32, (f32, f32))> {
        let modifier = (MIN_MODIFIER, MAX_MODIFIER);
        let entry = match key {
            "modifiers.angle_multiplier" => {
                (&mut self.modifiers.angle_multiplier, modifier)
            }
            "modifiers.speed_multiplier" => {
                (&mut self.modifiers.speed_multiplier, modifier)
            }
            "modifiers.size_multiplier" => {
                (&mut self.modifiers.size_multiplier, modifier)
            }
            "modifiers.curve_scale" => {
                (&mut self.modifiers.curve_scale, modifier)
            }
            "jitter.max_speed" => (&mut self.jitter.max_speed, JITTER_SPEED_RANGE),
            "jitter.min_speed" => (&mut self.jitter.min_speed, JITTER_SPEED_RANGE),
            "jitter.max_angle" => (&mut self.jitter.max_angle, JITTER_ANGLE_RANGE),
            "jitter.min_angle" => (&mut self.jitter.min_angle, JITTER_ANGLE_RANGE),
            "jitter.distance" => {
                (&mut self.jitter.distance, JITTER_DISTANCE_RANGE)
            }
            "jitter.twist" => (&mut self.jitter.twist, JITTER_TWIST_RANGE),
            "wave.max_height" => (&mut self.wave.max_height, WAVE_HEIGHT_RANGE),
            "wave.max_speed" => (&mut self.wave.max_speed, WAVE_SPEED_RANGE),
            "dangle.max_speed" => (&mut self.dangle.max_speed, DANGLE_SPEED_RANGE),
            "dangle.min_speed" => (&mut self.dangle.min_speed, DANGLE_SPEED_RANGE),
            "dangle.max_angle" => (&mut self.dangle.max_angle, DANGLE_ANGLE_RANGE),
            "dangle.min_angle" => (&mut self.dangle.min_angle, DANGLE_ANGLE_RANGE),
            _ => return None,
        };
        Some(entry)
    }

    /// Load tunables from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, GlyphMotionError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GlyphMotionError::OptionsParse(e.to_string()))
    }

    /// Save tunables to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), GlyphMotionError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlyphMotionError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(GlyphMotionError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
