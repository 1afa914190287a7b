// Easing curves and small numeric helpers shared by the scroll choreography.

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// `1 - (1 - t)^4`, with `t` clamped to `[0, 1]`.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let inv = 1.0 - clamp01(t);
    1.0 - inv * inv * inv * inv
}
