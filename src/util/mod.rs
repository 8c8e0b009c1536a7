//! Shared math helpers: easing curves and random sampling.

pub mod easing;
pub mod random;
