use nalgebra::Vector3;
use super::quaternion::{self, Quaternion};
use super::scalar;


pub type V3 = Vector3<f64>;

pub fn up() -> V3 { V3::new(0.0, 1.0, 0.0) }
pub fn right() -> V3 { V3::new(1.0, 0.0, 0.0) }
pub fn forwards() -> V3 { V3::new(0.0, 0.0, 1.0) }

pub fn normalize(vector: &V3) -> V3 {
	let length = vector.norm();
	if length == 0.0 {
		return V3::zeros();
	}
	vector / length
}

pub fn euclidean_distance(a: &V3, b: &V3) -> f64 {
	(a - b).norm()
}

pub fn lerp(from: &V3, to: &V3, amount: f64) -> V3 {
	V3::new(
		scalar::lerp(from.x, to.x, amount),
		scalar::lerp(from.y, to.y, amount),
		scalar::lerp(from.z, to.z, amount),
	)
}

/// Per-component clamp. Bounds are trusted to be ordered.
pub fn clamp(vector: &V3, min: &V3, max: &V3) -> V3 {
	V3::new(
		vector.x.max(min.x).min(max.x),
		vector.y.max(min.y).min(max.y),
		vector.z.max(min.z).min(max.z),
	)
}

/// Applies `rotation` to `vector` (`q v q*`).
pub fn rotate(vector: &V3, rotation: &Quaternion) -> V3 {
	let pure = Quaternion::from_parts(0.0, *vector);
	(rotation * pure * rotation.conjugate()).imag()
}

/// The point `radius` along the forward (+X) axis turned by `rotation`.
pub fn from_polar(radius: f64, rotation: &Quaternion) -> V3 {
	rotate(&(right() * radius), rotation)
}

/// `(radius, rotation)` such that [`from_polar`] gives the vector back.
pub fn to_polar(vector: &V3) -> (f64, Quaternion) {
	(vector.norm(), quaternion::from_unit_direction_vector(&normalize(vector)))
}
