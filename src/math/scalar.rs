use std::f64::consts::PI;
use crate::error::{IkError, Result};


/// Clamp into `[lower, upper]`, rejecting an inverted range instead of
/// swapping it. `axis` names the component in the error.
pub fn clamp(value: f64, lower: f64, upper: f64, axis: &'static str) -> Result<f64> {
	if lower > upper {
		return Err(IkError::InvalidBounds { axis, lower, upper });
	}
	Ok(value.max(lower).min(upper))
}

/// Linear interpolation, `amount` saturates to `[0, 1]`.
pub fn lerp(from: f64, to: f64, amount: f64) -> f64 {
	let amount = amount.max(0.0).min(1.0);
	from + (to - from) * amount
}

/// Interpolates angles the short way round the circle.
pub fn lerp_theta(from: f64, to: f64, amount: f64) -> f64 {
	lerp(from, from + wrap_angle(to - from), amount)
}

/// Maps an angle into `[-PI, PI]`.
pub fn wrap_angle(angle: f64) -> f64 {
	let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
	// rem_euclid lands on -PI for odd multiples of PI, keep the sign of the input
	if wrapped == -PI && angle > 0.0 { PI } else { wrapped }
}
