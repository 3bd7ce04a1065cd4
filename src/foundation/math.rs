/// Normalized elapsed fraction `index / total`, clamped to `[0, 1]`.
///
/// The last frame of a stream reaches `(total - 1) / total`, not `1.0`. A zero `total` yields `0`.
pub fn progress(index: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index as f64 / total as f64).clamp(0.0, 1.0)
}

/// Linear ramp between `1.0` and `max` over `progress`.
///
/// `rising` ramps `1 -> max`, otherwise `max -> 1`.
pub fn ramp(progress: f64, max: f64, rising: bool) -> f64 {
    let span = max - 1.0;
    if rising {
        1.0 + span * progress
    } else {
        max - span * progress
    }
}

/// Truncate a non-negative length to whole pixels, never below one.
pub(crate) fn trunc_px(len: f64) -> u32 {
    (len as u32).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
