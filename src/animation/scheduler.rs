//! Fixed-cadence tick driver.
//!
//! [`TickScheduler`] is polled from a host loop (render frame, event loop,
//! worker thread) with the current time and runs at most one tick per poll
//! once the previous tick's delay has elapsed. It remembers the
//! [`RunToken`] of the run it is driving; when the animator's token changes
//! (new mode, or stopped) the old run is abandoned before any further tick,
//! and a new run ticks immediately.

use rand::Rng;
use web_time::{Duration, Instant};

use super::controller::{RunToken, TextAnimator, TickStatus};
use crate::layout::TextLayout;

/// Delay between ticks of the positional transforms.
pub const MOTION_INTERVAL: Duration = Duration::from_millis(100);
/// Delay between ticks of the color transform.
pub const COLOR_INTERVAL: Duration = Duration::from_millis(50);
/// Delay before re-checking a text with no glyphs.
pub const IDLE_BACKOFF: Duration = Duration::from_millis(250);

/// Result of one [`TickScheduler::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing is running; poll again after the next mode change.
    Stopped,
    /// Not due yet; the next tick is this far away.
    Waiting(Duration),
    /// A tick ran; the next one is due after `next_in`.
    Ticked {
        /// What the tick did.
        status: TickStatus,
        /// Delay until the next tick.
        next_in: Duration,
    },
}

impl PollOutcome {
    /// How long the host may sleep before polling again, or `None` if it
    /// should wait for an external event.
    #[must_use]
    pub fn wait(self) -> Option<Duration> {
        match self {
            Self::Stopped => None,
            Self::Waiting(d) | Self::Ticked { next_in: d, .. } => Some(d),
        }
    }
}

/// Drives one [`TextAnimator`] at the cadence its transform asks for.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    active: Option<RunToken>,
    next_due: Option<Instant>,
}

impl TickScheduler {
    /// Scheduler with no run attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the animator's tick if one is due at `now`.
    pub fn poll<R: Rng, L: TextLayout + ?Sized>(
        &mut self,
        animator: &mut TextAnimator<R>,
        layout: &mut L,
        now: Instant,
    ) -> PollOutcome {
        let token = animator.run_token();
        if self.active != Some(token) {
            if let Some(old) = self.active {
                log::trace!("scheduler dropping {} run", old.mode());
            }
            self.active = token.mode().is_active().then_some(token);
            self.next_due = Some(now);
        }
        if self.active.is_none() {
            self.next_due = None;
            return PollOutcome::Stopped;
        }

        if let Some(due) = self.next_due {
            if now < due {
                return PollOutcome::Waiting(due - now);
            }
        }

        let status = animator.tick(layout);
        let Some(next_in) = status.next_delay() else {
            self.active = None;
            self.next_due = None;
            return PollOutcome::Stopped;
        };
        self.next_due = Some(now + next_in);
        PollOutcome::Ticked { status, next_in }
    }
}
