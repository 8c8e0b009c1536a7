//! Oscillation curves shared by every positional transform.
//!
//! All periodic motion in the crate is a triangle wave folded into
//! [0, 1] and then eased with a cubic Hermite smooth-step. The easing has
//! zero slope at both ends, so the composite curve has a continuous first
//! derivative at the triangle wave's turning points.

/// Fold `t` into `[0, length]`, bouncing back and forth (period `2 * length`).
///
/// Negative inputs mirror positive ones. A non-positive `length` yields 0.
#[inline]
#[must_use]
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let period = length * 2.0;
    let wrapped = (t - (t / period).floor() * period).clamp(0.0, period);
    length - (wrapped - length).abs()
}

/// Cubic Hermite interpolation between `from` and `to`.
///
/// `t` is clamped to [0, 1] and eased with `3t² - 2t³` before the lerp.
#[inline]
#[must_use]
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let eased = t * t * (3.0 - 2.0 * t);
    from + (to - from) * eased
}

/// Swing between `-amplitude` and `+amplitude`.
///
/// `phase` advances without bound; one full swing (down to up and back)
/// spans two phase units.
#[inline]
#[must_use]
pub fn oscillate(amplitude: f32, phase: f32) -> f32 {
    smooth_step(-amplitude, amplitude, ping_pong(phase, 1.0))
}

/// Phase used by wave and dangle motion: `ticks / 25 * speed * multiplier`.
#[inline]
#[must_use]
pub fn tick_phase(ticks: f32, speed: f32, speed_multiplier: f32) -> f32 {
    ticks / 25.0 * speed * speed_multiplier
}
