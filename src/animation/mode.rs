//! Animation modes and the transform family each one runs.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Selected text animation. Exactly one is active per animated text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// No transform running.
    #[default]
    None,
    /// Recolor one glyph at a time with a random color.
    ChangeColor,
    /// Traveling wave; later glyphs lag earlier ones.
    Wave,
    /// Whole text rises and falls in unison.
    UpAndDown,
    /// Each glyph shakes and twists on its own.
    Jitter,
    /// Whole text shakes in concert.
    JitterTogether,
    /// Each glyph swings from its top-center, out of phase with neighbors.
    Dangle,
    /// Whole text swings in concert.
    DangleTogether,
}

/// The four transform families. Paired modes share a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Color cycling.
    Color,
    /// Vertical wave.
    Wave,
    /// Random shake about the glyph center.
    Jitter,
    /// Swing about the glyph top-center.
    Dangle,
}

/// Whether per-character motion parameters differ per glyph or are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coupling {
    /// Each glyph gets its own parameters / phase.
    Independent,
    /// One set of parameters is broadcast to every glyph.
    Together,
}

impl AnimationMode {
    /// Every mode, `None` first, in cycling order.
    pub const ALL: [AnimationMode; 8] = [
        AnimationMode::None,
        AnimationMode::ChangeColor,
        AnimationMode::Wave,
        AnimationMode::UpAndDown,
        AnimationMode::Jitter,
        AnimationMode::JitterTogether,
        AnimationMode::Dangle,
        AnimationMode::DangleTogether,
    ];

    /// Transform family, or `None` for [`AnimationMode::None`].
    #[must_use]
    pub fn family(self) -> Option<Family> {
        match self {
            Self::None => None,
            Self::ChangeColor => Some(Family::Color),
            Self::Wave | Self::UpAndDown => Some(Family::Wave),
            Self::Jitter | Self::JitterTogether => Some(Family::Jitter),
            Self::Dangle | Self::DangleTogether => Some(Family::Dangle),
        }
    }

    /// Independent modes vary motion per glyph; the rest move the whole
    /// text as one.
    #[must_use]
    pub fn coupling(self) -> Coupling {
        match self {
            Self::Wave | Self::Jitter | Self::Dangle => Coupling::Independent,
            _ => Coupling::Together,
        }
    }

    /// Whether this mode runs a transform.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::None
    }

    /// Next mode in cycling order; wraps from the last mode back to `None`.
    #[must_use]
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Stable snake_case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ChangeColor => "change_color",
            Self::Wave => "wave",
            Self::UpAndDown => "up_and_down",
            Self::Jitter => "jitter",
            Self::JitterTogether => "jitter_together",
            Self::Dangle => "dangle",
            Self::DangleTogether => "dangle_together",
        }
    }

    /// Parse a snake_case name as produced by [`AnimationMode::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_modes_share_a_family() {
        assert_eq!(AnimationMode::Wave.family(), AnimationMode::UpAndDown.family());
        assert_eq!(
            AnimationMode::Jitter.family(),
            AnimationMode::JitterTogether.family()
        );
        assert_eq!(
            AnimationMode::Dangle.family(),
            AnimationMode::DangleTogether.family()
        );
        assert_eq!(AnimationMode::None.family(), None);
    }

    #[test]
    fn coupling_splits_pairs() {
        assert_eq!(AnimationMode::Wave.coupling(), Coupling::Independent);
        assert_eq!(AnimationMode::UpAndDown.coupling(), Coupling::Together);
        assert_eq!(AnimationMode::Jitter.coupling(), Coupling::Independent);
        assert_eq!(AnimationMode::JitterTogether.coupling(), Coupling::Together);
        assert_eq!(AnimationMode::Dangle.coupling(), Coupling::Independent);
        assert_eq!(AnimationMode::DangleTogether.coupling(), Coupling::Together);
        assert_eq!(AnimationMode::ChangeColor.coupling(), Coupling::Together);
    }

    #[test]
    fn next_cycles_through_all_and_wraps() {
        let mut mode = AnimationMode::None;
        for _ in 0..AnimationMode::ALL.len() {
            mode = mode.next();
        }
        assert_eq!(mode, AnimationMode::None);
        assert_eq!(AnimationMode::None.next(), AnimationMode::ChangeColor);
        assert_eq!(AnimationMode::DangleTogether.next(), AnimationMode::None);
    }

    #[test]
    fn names_round_trip() {
        for mode in AnimationMode::ALL {
            assert_eq!(AnimationMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(AnimationMode::from_name("spin"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&AnimationMode::JitterTogether).unwrap();
        assert_eq!(json, "\"jitter_together\"");
    }
}
