//! Per-glyph text animation.
//!
//! [`TextAnimator`] owns the state for one text: the selected
//! [`AnimationMode`], a baseline snapshot of the glyph geometry, the
//! per-character parameter table and the tick counter. Each tick rebuilds
//! the vertex buffers from the baseline through one of the
//! [`transforms`] and commits them to the [`TextLayout`](crate::layout::TextLayout).
//!
//! Two drivers decide when ticks happen:
//!
//! - [`TickScheduler`] is polled with the current time from a host loop.
//! - [`AnimationWorker`] owns the layout on its own thread.

mod controller;
mod mode;
mod scheduler;
mod slots;
mod snapshot;
pub mod transforms;
mod worker;

pub use controller::{RunToken, TextAnimator, TickStatus};
pub use mode::{AnimationMode, Coupling, Family};
pub use scheduler::{
    PollOutcome, TickScheduler, COLOR_INTERVAL, IDLE_BACKOFF, MOTION_INTERVAL,
};
pub use slots::{CharacterSlots, SlotParams, MAX_ANIMATED_CHARS};
pub use snapshot::{GlyphSnapshot, SnapshotCache};
pub use worker::AnimationWorker;
