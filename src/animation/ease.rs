/// Overshoot amount of the back curve.
pub const BACK_C1: f64 = 1.70158;
/// Cubic coefficient of the back curve.
pub const BACK_C3: f64 = BACK_C1 + 1.0;

/// Back ease-out for normalized progress `t`.
///
/// Input is clamped to `[0, 1]`. The output overshoots past 1 in between and is exactly 0 and 1
/// at the ends.
pub fn ease_out_back(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    // The raw formula lands a rounding error away from 0 at t = 0.
    if t == 0.0 {
        return 0.0;
    }
    out_back(t)
}

/// `1 + c3·(t−1)³ + c1·(t−1)²`, unclamped.
pub fn out_back(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 + BACK_C3 * u.powi(3) + BACK_C1 * u.powi(2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
