//! Planar vector helpers on top of nalgebra's `Vector2<f64>`.
//!
//! Arithmetic (add, subtract, scale, dot, component multiply/divide) is left
//! to nalgebra's operators; the helpers here carry the semantics the solver
//! depends on, notably a normalize that maps zero to zero.

use nalgebra::Vector2;
use super::scalar;


pub type V2 = Vector2<f64>;

/// Angle of the vector measured anticlockwise from +X.
pub fn angle(vector: &V2) -> f64 {
	vector.y.atan2(vector.x)
}

pub fn rotate(vector: &V2, angle: f64) -> V2 {
	let (sin, cos) = angle.sin_cos();
	V2::new(vector.x * cos - vector.y * sin, vector.x * sin + vector.y * cos)
}

pub fn from_polar(radius: f64, angle: f64) -> V2 {
	rotate(&V2::new(radius, 0.0), angle)
}

/// `(radius, angle)`, the inverse of [`from_polar`].
pub fn to_polar(vector: &V2) -> (f64, f64) {
	(vector.norm(), angle(vector))
}

pub fn normalize(vector: &V2) -> V2 {
	let length = vector.norm();
	if length == 0.0 {
		return V2::zeros();
	}
	vector / length
}

pub fn euclidean_distance(a: &V2, b: &V2) -> f64 {
	(a - b).norm()
}

pub fn lerp(from: &V2, to: &V2, amount: f64) -> V2 {
	V2::new(scalar::lerp(from.x, to.x, amount), scalar::lerp(from.y, to.y, amount))
}

/// Per-component clamp. Bounds are trusted to be ordered.
pub fn clamp(vector: &V2, min: &V2, max: &V2) -> V2 {
	V2::new(vector.x.max(min.x).min(max.x), vector.y.max(min.y).min(max.y))
}

/// Perpendicular, rotated a quarter turn anticlockwise.
pub fn tangent(vector: &V2) -> V2 {
	V2::new(-vector.y, vector.x)
}

/// Shortens the vector to `max` if it is longer, keeping its direction.
pub fn clip_length(vector: &V2, max: f64) -> V2 {
	if vector.norm_squared() <= max * max {
		return *vector;
	}
	normalize(vector) * max
}

pub fn average(vectors: &[V2]) -> V2 {
	if vectors.is_empty() {
		return V2::zeros();
	}
	vectors.iter().sum::<V2>() / vectors.len() as f64
}
