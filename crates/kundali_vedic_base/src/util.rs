//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose sum with 360 rounds to exactly 360.0 map to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees, [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_360(b - a)
}

/// Fold an angle to (-180, 180] degrees.
pub(crate) fn wrap_180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Index of the equal segment of width `span` that contains `lon`.
///
/// Lower bound inclusive, upper bound exclusive; the result is clamped to
/// `count - 1` against float rounding at the 360° end.
pub(crate) fn segment_index(lon: f64, span: f64, count: u8) -> u8 {
    let lon = normalize_360(lon);
    let mut idx = (lon / span).floor();
    // Boundaries are the products k * span, so settle the quotient against them.
    if (idx + 1.0) * span <= lon {
        idx += 1.0;
    } else if idx > 0.0 && idx * span > lon {
        idx -= 1.0;
    }
    (idx.max(0.0) as u8).min(count - 1)
}
