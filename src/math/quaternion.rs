//! Unit quaternion algebra.
//!
//! Quaternions are nalgebra's `Quaternion<f64>`, stored `[x, y, z, w]`.
//! Composition follows the Hamilton product: `multiply(a, b)` applies `b`
//! first, then `a`.

use std::f64::consts::PI;
use itertools::multizip;
use super::scalar;
use super::vector3::{self, V3};
use crate::error::Result;


pub type Quaternion = nalgebra::Quaternion<f64>;

/// Component names used when a clamp bound is rejected, in `x, y, z` order.
pub const AXIS_NAMES: [&str; 3] = ["pitch", "yaw", "roll"];

const SLERP_LINEAR_THRESHOLD: f64 = 1e-6;

/// The zero rotation, `[0, 0, 0, 1]`.
pub fn identity() -> Quaternion {
	Quaternion::new(1.0, 0.0, 0.0, 0.0)
}

pub fn multiply(a: &Quaternion, b: &Quaternion) -> Quaternion {
	a * b
}

pub fn conjugate(rotation: &Quaternion) -> Quaternion {
	rotation.conjugate()
}

pub fn magnitude(rotation: &Quaternion) -> f64 {
	rotation.norm()
}

pub fn inverse(rotation: &Quaternion) -> Quaternion {
	let norm_squared = rotation.norm_squared();
	if norm_squared == 0.0 {
		return identity();
	}
	rotation.conjugate() / norm_squared
}

pub fn normalize(rotation: &Quaternion) -> Quaternion {
	let magnitude = magnitude(rotation);
	if magnitude == 0.0 {
		return identity();
	}
	*rotation / magnitude
}

/// Rotation from an XYZ ordered Euler triple (radians).
pub fn from_euler_angles(angles: &V3) -> Quaternion {
	let (s1, c1) = (angles.x / 2.0).sin_cos();
	let (s2, c2) = (angles.y / 2.0).sin_cos();
	let (s3, c3) = (angles.z / 2.0).sin_cos();

	Quaternion::new(
		c1 * c2 * c3 - s1 * s2 * s3,
		s1 * c2 * c3 + c1 * s2 * s3,
		c1 * s2 * c3 - s1 * c2 * s3,
		c1 * c2 * s3 + s1 * s2 * c3,
	)
}

/// `axis` must be unit length.
pub fn from_axis_angle(axis: &V3, angle: f64) -> Quaternion {
	let (sin, cos) = (angle / 2.0).sin_cos();
	Quaternion::from_parts(cos, axis * sin)
}

/// Rotation turning the forward (+X) axis onto `direction`.
pub fn from_unit_direction_vector(direction: &V3) -> Quaternion {
	rotation_from_to(&vector3::right(), direction)
}

/// Shortest arc rotation taking the direction of `a` onto the direction of `b`.
pub fn rotation_from_to(a: &V3, b: &V3) -> Quaternion {
	let a = vector3::normalize(a);
	let b = vector3::normalize(b);
	let dot = a.dot(&b);

	if dot >= 1.0 - f64::EPSILON {
		return identity();
	}

	if dot <= -1.0 + f64::EPSILON {
		// any perpendicular axis will do, up unless `a` lies along it
		let mut axis = vector3::up().cross(&a);
		if axis.norm_squared() < f64::EPSILON {
			axis = vector3::right().cross(&a);
		}
		return from_axis_angle(&vector3::normalize(&axis), PI);
	}

	normalize(&Quaternion::from_parts(1.0 + dot, a.cross(&b)))
}

/// Clamps each axis of `rotation` into `[lower[i], upper[i]]`.
///
/// The per-axis angle is read as `2 * atan(component / w)`, which is only an
/// approximation of an axis-angle split: it is exact for rotations about a
/// single axis and drifts for large compound rotations, especially near 180
/// degrees. An inverted bound pair on any axis is an error.
pub fn clamp(rotation: &Quaternion, lower: &V3, upper: &V3) -> Result<Quaternion> {
	let w = rotation.w;
	let mut tangents = [0.0; 3];

	for (tangent, component, lower, upper, axis) in multizip((
		tangents.iter_mut(),
		rotation.imag().iter(),
		lower.iter(),
		upper.iter(),
		AXIS_NAMES,
	)) {
		// a zero component stays zero, even on a half turn where `w` is zero
		let angle = if *component == 0.0 { 0.0 } else { 2.0 * (component / w).atan() };
		let clamped = scalar::clamp(angle, *lower, *upper, axis)?;
		*tangent = (0.5 * clamped).tan();
	}

	Ok(normalize(&Quaternion::new(1.0, tangents[0], tangents[1], tangents[2])))
}

/// Spherical interpolation from `from` (amount 0) to `to` (amount 1) along
/// the shorter arc.
pub fn slerp(from: &Quaternion, to: &Quaternion, amount: f64) -> Quaternion {
	let mut to = *to;
	let mut cos = from.coords.dot(&to.coords);
	if cos < 0.0 {
		to = -to;
		cos = -cos;
	}

	if cos > 1.0 - SLERP_LINEAR_THRESHOLD {
		return normalize(&(*from * (1.0 - amount) + to * amount));
	}

	let theta = cos.acos();
	let sin = theta.sin();
	let from_weight = ((1.0 - amount) * theta).sin() / sin;
	let to_weight = (amount * theta).sin() / sin;
	*from * from_weight + to * to_weight
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::IkError;
	use approx::assert_abs_diff_eq;
	use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

	fn q(x: f64, y: f64, z: f64, w: f64) -> Quaternion {
		Quaternion::new(w, x, y, z)
	}

	#[test]
	fn multiply_with_identity() {
		let b = q(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2);
		assert_eq!(multiply(&identity(), &identity()), identity());
		assert_eq!(multiply(&identity(), &b), b);
	}

	#[test]
	fn two_quarter_turns_make_a_half_turn() {
		for axis in 0..3 {
			let mut imag = V3::zeros();
			imag[axis] = FRAC_1_SQRT_2;
			let quarter = Quaternion::from_parts(FRAC_1_SQRT_2, imag);

			let mut expected = V3::zeros();
			expected[axis] = 1.0;
			assert_abs_diff_eq!(multiply(&quarter, &quarter), Quaternion::from_parts(0.0, expected), epsilon = 1e-9);
		}
	}

	#[test]
	fn multiply_is_not_commutative() {
		let a = from_euler_angles(&V3::new(FRAC_PI_2, 0.0, 0.0));
		let b = from_euler_angles(&V3::new(0.0, FRAC_PI_2, 0.0));
		assert!((multiply(&a, &b) - multiply(&b, &a)).norm() > 0.1);
	}

	#[test]
	fn from_euler_angles_matches_reference() {
		let rotation = from_euler_angles(&V3::new(FRAC_PI_2, FRAC_PI_4, FRAC_PI_6));
		assert_abs_diff_eq!(rotation, q(0.701, 0.092, 0.43, 0.56), epsilon = 5e-3);
		assert_abs_diff_eq!(magnitude(&rotation), 1.0, epsilon = 1e-12);
	}

	#[test]
	fn conjugate_and_inverse() {
		let input = q(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2);
		assert_abs_diff_eq!(conjugate(&input), q(0.0, -FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2));

		let half_turn = from_euler_angles(&V3::new(PI, 0.0, 0.0));
		let expected = from_euler_angles(&V3::new(-PI, 0.0, 0.0));
		assert_abs_diff_eq!(inverse(&half_turn), expected, epsilon = 1e-9);
		assert_eq!(inverse(&Quaternion::new(0.0, 0.0, 0.0, 0.0)), identity());
	}

	#[test]
	fn inverse_of_scaled_rotation() {
		let scaled = from_euler_angles(&V3::new(0.4, -0.3, 1.2)) * 3.0;
		assert_abs_diff_eq!(multiply(&scaled, &inverse(&scaled)), identity(), epsilon = 1e-12);
		assert_abs_diff_eq!(multiply(&inverse(&scaled), &scaled), identity(), epsilon = 1e-12);
	}

	#[test]
	fn magnitude_and_normalize() {
		assert_eq!(magnitude(&identity()), 1.0);
		assert_eq!(magnitude(&Quaternion::new(0.0, 0.0, 0.0, 0.0)), 0.0);
		assert_eq!(normalize(&Quaternion::new(0.0, 0.0, 0.0, 0.0)), identity());
		assert_abs_diff_eq!(normalize(&q(0.0, 0.0, 2.0, 2.0)), q(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2), epsilon = 1e-12);
	}

	#[test]
	fn clamps_to_zero() {
		let input = q(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
		let clamped = clamp(&input, &V3::zeros(), &V3::zeros()).unwrap();
		assert_eq!(clamped, identity());

		let tilted = from_euler_angles(&V3::new(0.3, -0.7, 1.1));
		assert_abs_diff_eq!(clamp(&tilted, &V3::zeros(), &V3::zeros()).unwrap(), identity(), epsilon = 1e-12);
	}

	#[test]
	fn clamps_to_bounds() {
		let input = q(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
		let upper = clamp(&input, &V3::zeros(), &V3::new(FRAC_PI_4, 0.0, 0.0)).unwrap();
		assert_abs_diff_eq!(upper, q(0.3826834, 0.0, 0.0, 0.9238795), epsilon = 1e-6);

		let input = q(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
		let lower = clamp(&input, &V3::new(-FRAC_PI_4, 0.0, 0.0), &V3::zeros()).unwrap();
		assert_abs_diff_eq!(lower, q(-0.3826834, 0.0, 0.0, 0.9238795), epsilon = 1e-6);
	}

	#[test]
	fn infinite_bounds_leave_rotation_alone() {
		let input = q(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
		let lower = V3::new(f64::NEG_INFINITY, 0.0, 0.0);
		let upper = V3::new(f64::INFINITY, 0.0, 0.0);
		assert_abs_diff_eq!(clamp(&input, &lower, &upper).unwrap(), input, epsilon = 1e-9);
	}

	#[test]
	fn clamps_a_half_turn() {
		let half_turn = q(0.0, 0.0, 1.0, 0.0);
		let lower = V3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, -0.5);
		let upper = V3::new(f64::INFINITY, f64::INFINITY, 0.5);

		let clamped = clamp(&half_turn, &lower, &upper).unwrap();
		assert_abs_diff_eq!(clamped, from_axis_angle(&V3::new(0.0, 0.0, 1.0), 0.5), epsilon = 1e-12);
	}

	#[test]
	fn clamp_rejects_inverted_bounds() {
		let result = clamp(&identity(), &V3::new(0.0, FRAC_PI_2, 0.0), &V3::zeros());
		assert_eq!(result, Err(IkError::InvalidBounds { axis: "yaw", lower: FRAC_PI_2, upper: 0.0 }));
	}

	#[test]
	fn from_unit_direction_vectors() {
		let r = FRAC_1_SQRT_2;
		assert_abs_diff_eq!(from_unit_direction_vector(&V3::new(0.0, 1.0, 0.0)), q(0.0, 0.0, r, r), epsilon = 1e-9);
		assert_abs_diff_eq!(from_unit_direction_vector(&V3::new(0.0, -1.0, 0.0)), q(0.0, 0.0, -r, r), epsilon = 1e-9);
		assert_eq!(from_unit_direction_vector(&V3::new(1.0, 0.0, 0.0)), identity());
	}

	#[test]
	fn from_axis_angle_quarter_turn() {
		let rotation = from_axis_angle(&V3::new(0.0, 1.0, 0.0), FRAC_PI_2);
		assert_abs_diff_eq!(rotation, q(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2), epsilon = 1e-12);
	}

	#[test]
	fn rotation_between_vectors() {
		let r = FRAC_1_SQRT_2;
		let rotation = rotation_from_to(&V3::new(0.0, 0.0, -1.0), &V3::new(-1.0, 0.0, 0.0));
		assert_abs_diff_eq!(rotation, q(0.0, r, 0.0, r), epsilon = 1e-9);

		let rotation = rotation_from_to(&V3::new(1.0, 0.0, 0.0), &V3::new(0.0, 4.0, 0.0));
		assert_abs_diff_eq!(rotation, q(0.0, 0.0, r, r), epsilon = 1e-9);
	}

	#[test]
	fn rotation_between_degenerate_vectors() {
		assert_eq!(rotation_from_to(&V3::new(2.0, 0.0, 0.0), &V3::new(5.0, 0.0, 0.0)), identity());
		assert_eq!(rotation_from_to(&V3::zeros(), &V3::new(5.0, 0.0, 0.0)), identity());

		for a in [V3::new(1.0, 0.0, 0.0), V3::new(0.0, 1.0, 0.0), V3::new(0.0, 0.0, -3.0)] {
			let b = -a;
			let rotation = rotation_from_to(&a, &b);
			assert_abs_diff_eq!(magnitude(&rotation), 1.0, epsilon = 1e-12);
			assert_abs_diff_eq!(vector3::rotate(&a, &rotation), b, epsilon = 1e-9);
		}
	}

	#[test]
	fn slerp_halfway() {
		let z = V3::new(0.0, 0.0, 1.0);
		let quarter = from_axis_angle(&z, FRAC_PI_2);
		assert_abs_diff_eq!(slerp(&identity(), &quarter, 0.0), identity(), epsilon = 1e-12);
		assert_abs_diff_eq!(slerp(&identity(), &quarter, 1.0), quarter, epsilon = 1e-12);
		assert_abs_diff_eq!(slerp(&identity(), &quarter, 0.5), from_axis_angle(&z, FRAC_PI_4), epsilon = 1e-12);
		assert_eq!(slerp(&identity(), &identity(), 0.3), identity());
	}
}
