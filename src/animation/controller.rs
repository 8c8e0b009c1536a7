//! Mode controller: owns all per-text animation state and runs one tick of
//! the active transform at a time.
//!
//! The controller is purely synchronous. Something else decides *when* to
//! tick: the frame-polled [`TickScheduler`](super::scheduler::TickScheduler)
//! or the background [`AnimationWorker`](super::worker::AnimationWorker).

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::Duration;

use super::mode::{AnimationMode, Family};
use super::scheduler::{COLOR_INTERVAL, IDLE_BACKOFF, MOTION_INTERVAL};
use super::slots::CharacterSlots;
use super::snapshot::{GlyphSnapshot, SnapshotCache};
use super::transforms::{self, TickInput};
use crate::layout::TextLayout;
use crate::options::AnimationConfig;

/// What a call to [`TextAnimator::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// No transform is running.
    Stopped,
    /// The text had no glyphs; nothing was touched.
    Idle,
    /// One tick of the given family was applied.
    Advanced(Family),
}

impl TickStatus {
    /// How long to wait before the next tick, or `None` when stopped.
    #[must_use]
    pub fn next_delay(self) -> Option<Duration> {
        match self {
            Self::Stopped => None,
            Self::Idle => Some(IDLE_BACKOFF),
            Self::Advanced(Family::Color) => Some(COLOR_INTERVAL),
            Self::Advanced(_) => Some(MOTION_INTERVAL),
        }
    }
}

/// Identifies one run of a transform. A new token is issued every time a
/// mode starts, so a driver holding an old token knows to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken {
    mode: AnimationMode,
    generation: u64,
}

impl RunToken {
    /// Mode this run was started for.
    #[must_use]
    pub fn mode(self) -> AnimationMode {
        self.mode
    }
}

/// Per-text animation engine.
///
/// Owns the baseline snapshot, the per-character parameter table, the tick
/// counter and the random source. Borrows the layout only for the duration
/// of each call.
#[derive(Debug, Clone)]
pub struct TextAnimator<R = StdRng> {
    mode: AnimationMode,
    config: AnimationConfig,
    snapshot: SnapshotCache,
    slots: CharacterSlots,
    rng: R,
    tick: u64,
    color_cursor: usize,
    generation: u64,
    frame: Vec<Vec<Vec3>>,
}

impl TextAnimator<StdRng> {
    /// Animator with default tunables and an OS-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Animator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TextAnimator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TextAnimator<R> {
    /// Animator drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            mode: AnimationMode::None,
            config: AnimationConfig::default(),
            snapshot: SnapshotCache::new(),
            slots: CharacterSlots::new(),
            rng,
            tick: 0,
            color_cursor: 0,
            generation: 0,
            frame: Vec::new(),
        }
    }

    /// Replace the tunables before starting.
    #[must_use]
    pub fn with_config(mut self, config: AnimationConfig) -> Self {
        self.config = config;
        self
    }

    /// Currently selected mode.
    #[must_use]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Token for the current run.
    #[must_use]
    pub fn run_token(&self) -> RunToken {
        RunToken {
            mode: self.mode,
            generation: self.generation,
        }
    }

    /// Current tunables (possibly out of range; clamped at tick time).
    #[must_use]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Mutable tunables. Changes apply from the next tick without a restart.
    pub fn config_mut(&mut self) -> &mut AnimationConfig {
        &mut self.config
    }

    /// Replace the tunables. Applies from the next tick without a restart.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Ticks applied since the current mode started.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Per-character parameter table.
    #[must_use]
    pub fn slots(&self) -> &CharacterSlots {
        &self.slots
    }

    /// Baseline the positional transforms displace from.
    #[must_use]
    pub fn baseline(&self) -> &GlyphSnapshot {
        self.snapshot.snapshot()
    }

    /// Whether the next positional tick will recapture the baseline.
    #[must_use]
    pub fn is_baseline_dirty(&self) -> bool {
        self.snapshot.is_dirty()
    }

    /// Switch to `mode` and return the now-current mode.
    ///
    /// Selecting the mode that is already active is a no-op; otherwise the
    /// layout geometry is reset, the baseline is invalidated, the tick
    /// counter restarts and the per-character table is redrawn.
    pub fn set_mode<L: TextLayout + ?Sized>(
        &mut self,
        mode: AnimationMode,
        layout: &mut L,
    ) -> AnimationMode {
        if mode != self.mode {
            self.mode = mode;
            self.start(layout);
        }
        self.mode
    }

    /// Stop animating. Same as `set_mode(AnimationMode::None)`.
    pub fn stop<L: TextLayout + ?Sized>(&mut self, layout: &mut L) {
        let _ = self.set_mode(AnimationMode::None, layout);
    }

    /// Advance to the next mode in [`AnimationMode::ALL`] order.
    pub fn cycle_mode<L: TextLayout + ?Sized>(
        &mut self,
        layout: &mut L,
    ) -> AnimationMode {
        self.set_mode(self.mode.next(), layout)
    }

    /// Text content changed: recapture the baseline on the next tick.
    /// The running transform keeps its phase.
    pub fn notify_content_changed(&mut self) {
        self.snapshot.mark_dirty();
    }

    /// Restore the layout's undeformed geometry and colors. The baseline
    /// is recaptured on the next positional tick.
    pub fn reset_geometry<L: TextLayout + ?Sized>(&mut self, layout: &mut L) {
        layout.force_layout_update();
        self.snapshot.mark_dirty();
    }

    /// Run one tick of the active transform against `layout`.
    pub fn tick<L: TextLayout + ?Sized>(&mut self, layout: &mut L) -> TickStatus {
        let Some(family) = self.mode.family() else {
            return TickStatus::Stopped;
        };
        if family == Family::Color {
            return self.tick_color(layout);
        }

        let _ = self
            .snapshot
            .refresh_if_dirty(layout.glyphs(), layout.mesh_groups());
        if layout.glyphs().is_empty() {
            log::trace!("{} animation idle: no glyphs", self.mode);
            return TickStatus::Idle;
        }

        let config = self.config.clamped();
        let baseline = self.snapshot.snapshot();
        reset_frame(&mut self.frame, baseline);
        let input = TickInput {
            glyphs: layout.glyphs(),
            baseline,
            config: &config,
            tick: self.tick,
            coupling: self.mode.coupling(),
        };
        match family {
            Family::Wave => transforms::wave(&input, &mut self.frame),
            Family::Jitter => {
                transforms::jitter(&input, &mut self.rng, &mut self.frame);
            }
            Family::Dangle => {
                transforms::dangle(&input, &mut self.slots, &mut self.frame);
            }
            Family::Color => {}
        }

        for (group, vertices) in self.frame.iter().enumerate() {
            let fits = layout
                .mesh_groups()
                .get(group)
                .is_some_and(|live| live.vertices.len() == vertices.len());
            if fits && !vertices.is_empty() {
                layout.commit_vertices(group, vertices);
            }
        }
        self.tick += 1;
        TickStatus::Advanced(family)
    }

    fn tick_color<L: TextLayout + ?Sized>(&mut self, layout: &mut L) -> TickStatus {
        if layout.glyphs().is_empty() {
            log::trace!("{} animation idle: no glyphs", self.mode);
            return TickStatus::Idle;
        }
        let change = transforms::change_color(
            layout.glyphs(),
            layout.mesh_groups(),
            &mut self.color_cursor,
            &mut self.rng,
        );
        if let Some(change) = change {
            layout.commit_colors(change.group, &change.colors);
        }
        self.tick += 1;
        TickStatus::Advanced(Family::Color)
    }

    fn start<L: TextLayout + ?Sized>(&mut self, layout: &mut L) {
        self.reset_geometry(layout);
        self.tick = 0;
        self.color_cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        if self.mode.is_active() {
            let config = self.config.clamped();
            self.slots.regenerate(self.mode, &config, &mut self.rng);
            log::debug!("starting {} animation", self.mode);
        } else {
            log::debug!("animation stopped");
        }
    }
}

/// Overwrite the working buffers with the baseline, reusing allocations.
fn reset_frame(frame: &mut Vec<Vec<Vec3>>, baseline: &GlyphSnapshot) {
    let groups = baseline.groups();
    frame.resize_with(groups.len(), Vec::new);
    for (dst, src) in frame.iter_mut().zip(groups) {
        dst.clear();
        dst.extend_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::mode::Coupling;
    use crate::layout::MonospaceLayout;

    #[test]
    fn starts_stopped() {
        let mut layout = MonospaceLayout::new("AB");
        let mut animator = TextAnimator::seeded(1);
        assert_eq!(animator.mode(), AnimationMode::None);
        assert_eq!(animator.tick(&mut layout), TickStatus::Stopped);
        assert_eq!(layout.vertex_commits(), 0);
    }

    #[test]
    fn set_mode_resets_layout_and_returns_mode() {
        let mut layout = MonospaceLayout::new("AB");
        let mut animator = TextAnimator::seeded(1);
        let mode = animator.set_mode(AnimationMode::Wave, &mut layout);
        assert_eq!(mode, AnimationMode::Wave);
        assert_eq!(layout.layout_updates(), 1);
        assert!(animator.is_baseline_dirty());
    }

    #[test]
    fn same_mode_is_noop() {
        let mut layout = MonospaceLayout::new("ABCDEF");
        let mut animator = TextAnimator::seeded(2);
        let _ = animator.set_mode(AnimationMode::Jitter, &mut layout);
        for _ in 0..3 {
            let _ = animator.tick(&mut layout);
        }
        let slots = animator.slots().clone();
        let token = animator.run_token();

        let mode = animator.set_mode(AnimationMode::Jitter, &mut layout);
        assert_eq!(mode, AnimationMode::Jitter);
        assert_eq!(animator.tick_count(), 3);
        assert_eq!(animator.slots(), &slots);
        assert_eq!(animator.run_token(), token);
        assert_eq!(layout.layout_updates(), 1);
        assert!(!animator.is_baseline_dirty());
    }

    #[test]
    fn switching_mode_restarts() {
        let mut layout = MonospaceLayout::new("AB");
        let mut animator = TextAnimator::seeded(3);
        let _ = animator.set_mode(AnimationMode::Wave, &mut layout);
        let _ = animator.tick(&mut layout);
        let first = animator.run_token();

        let _ = animator.set_mode(AnimationMode::Dangle, &mut layout);
        assert_eq!(animator.tick_count(), 0);
        assert_ne!(animator.run_token(), first);
        assert_eq!(animator.run_token().mode(), AnimationMode::Dangle);
    }

    #[test]
    fn stop_restores_geometry() {
        let mut layout = MonospaceLayout::new("AB");
        let mut animator = TextAnimator::seeded(4);
        let _ = animator.set_mode(AnimationMode::UpAndDown, &mut layout);
        let _ = animator.tick(&mut layout);
        assert_ne!(layout.quad(0), Some(layout.glyphs()[0].corners));

        animator.stop(&mut layout);
        assert_eq!(animator.mode(), AnimationMode::None);
        assert_eq!(layout.quad(0), Some(layout.glyphs()[0].corners));
        assert_eq!(animator.tick(&mut layout), TickStatus::Stopped);
    }

    #[test]
    fn reset_geometry_keeps_mode_running() {
        let mut layout = MonospaceLayout::new("AB");
        let mut animator = TextAnimator::seeded(9);
        let _ = animator.set_mode(AnimationMode::DangleTogether, &mut layout);
        let _ = animator.tick(&mut layout);

        animator.reset_geometry(&mut layout);
        assert_eq!(layout.quad(0), Some(layout.glyphs()[0].corners));
        assert!(animator.is_baseline_dirty());
        assert_eq!(animator.mode(), AnimationMode::DangleTogether);
        assert_eq!(animator.tick_count(), 1);
    }

    #[test]
    fn tick_status_delays() {
        assert_eq!(TickStatus::Stopped.next_delay(), None);
        assert_eq!(TickStatus::Idle.next_delay(), Some(Duration::from_millis(250)));
        assert_eq!(
            TickStatus::Advanced(Family::Color).next_delay(),
            Some(Duration::from_millis(50))
        );
        assert_eq!(
            TickStatus::Advanced(Family::Dangle).next_delay(),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn notify_keeps_phase_and_recaptures() {
        let mut layout = MonospaceLayout::new("AB");
        let mut animator = TextAnimator::seeded(5);
        let _ = animator.set_mode(AnimationMode::Wave, &mut layout);
        let _ = animator.tick(&mut layout);
        let _ = animator.tick(&mut layout);

        layout.set_text("ABC");
        animator.notify_content_changed();
        assert_eq!(animator.tick(&mut layout), TickStatus::Advanced(Family::Wave));
        assert_eq!(animator.tick_count(), 3);
        assert_eq!(animator.baseline().groups()[0].len(), 12);

        let config = animator.config().clamped();
        let c = layout.glyphs()[2];
        let h = transforms::wave_height(2, 2, Coupling::Independent, &config);
        let q = layout.quad(2).unwrap();
        assert!((q[0].y - (c.corners[0].y + h)).abs() < 1e-5);
    }

    #[test]
    fn out_of_range_config_is_clamped_at_tick() {
        let mut layout = MonospaceLayout::new("A");
        let mut animator = TextAnimator::seeded(6);
        animator.config_mut().wave.max_height = 1000.0;
        let _ = animator.set_mode(AnimationMode::UpAndDown, &mut layout);
        let _ = animator.tick(&mut layout);
        let dy = layout.quad(0).unwrap()[0].y - layout.glyphs()[0].corners[0].y;
        assert!((dy + 10.0).abs() < 1e-5);
    }

    #[test]
    fn config_change_applies_next_tick_without_restart() {
        let mut layout = MonospaceLayout::new("A");
        let mut animator = TextAnimator::seeded(7);
        let _ = animator.set_mode(AnimationMode::UpAndDown, &mut layout);
        let _ = animator.tick(&mut layout);
        let mut config = animator.config().clone();
        config.wave.max_height = 5.0;
        animator.set_config(config);
        let _ = animator.tick(&mut layout);
        assert_eq!(animator.tick_count(), 2);
        let expected = transforms::wave_height(
            1,
            0,
            Coupling::Together,
            &animator.config().clamped(),
        );
        let dy = layout.quad(0).unwrap()[0].y - layout.glyphs()[0].corners[0].y;
        assert!((dy - expected).abs() < 1e-5);
    }

    #[test]
    fn cycle_mode_walks_all_modes() {
        let mut layout = MonospaceLayout::new("A");
        let mut animator = TextAnimator::seeded(8);
        let seen: Vec<AnimationMode> =
            (0..8).map(|_| animator.cycle_mode(&mut layout)).collect();
        assert_eq!(seen.first(), Some(&AnimationMode::ChangeColor));
        assert_eq!(seen.last(), Some(&AnimationMode::None));
    }
}
