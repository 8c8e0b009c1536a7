//! Range sampling helpers over any [`rand::Rng`].

use rand::Rng;

/// Uniform sample from the closed interval spanned by `a` and `b`.
///
/// The bounds may be given in either order; equal bounds return that value
/// without consuming randomness.
pub fn sample_between<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi || !(hi - lo).is_finite() {
        return lo;
    }
    rng.random_range(lo..=hi)
}

/// Uniform sample from `[-extent, extent]`.
pub fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    sample_between(rng, -extent, extent)
}

/// Opaque color with random RGB channels.
pub fn opaque_color<R: Rng + ?Sized>(rng: &mut R) -> [u8; 4] {
    [rng.random(), rng.random(), rng.random(), 255]
}
