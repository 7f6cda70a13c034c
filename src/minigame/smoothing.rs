//! Critically-damped smoothing used to move the rendered cursor toward its
//! logical target.

/// Smallest smoothing time accepted; anything lower is treated as this.
const MIN_SMOOTH_TIME: f64 = 1e-4;

/// Moves `current` toward `target` as a critically-damped spring with the
/// given `smooth_time` (roughly the time to reach the target).
///
/// `velocity` is the spring state and must be carried between calls. The
/// exponential decay uses a rational approximation that stays in `(0, 1]`
/// for every non-negative `dt`, and the result is snapped to `target` if it
/// would cross it, so the output never overshoots no matter how large `dt`
/// gets. A zero `dt` leaves both `current` and `velocity` untouched.
pub fn smooth_damp(current: f64, target: f64, velocity: &mut f64, smooth_time: f64, dt: f64) -> f64 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Steps long enough to overflow the spring have already settled
    if !output.is_finite() || !velocity.is_finite() {
        *velocity = 0.0;
        return target;
    }

    // Crossed the target: snap and derive the velocity that got us there
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}
