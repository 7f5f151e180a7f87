use crate::math::quaternion::Quaternion;
use crate::math::{vector3, V3};
use super::{JointTransform, Link};


#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
	/// `links.len() + 1` transforms, the base first.
	pub transforms: Vec<JointTransform>,
	pub effector_position: V3,
	pub effector_rotation: Quaternion,
}

/// Absolute position and rotation of every joint, base to tip.
pub fn get_joint_transforms(links: &[Link], base: &JointTransform) -> ForwardPass {
	let mut transforms = Vec::with_capacity(links.len() + 1);
	let mut accumulator = *base;
	transforms.push(accumulator);

	for link in links {
		let rotation = accumulator.rotation * link.rotation;
		let position = accumulator.position + vector3::rotate(&link.position, &rotation);

		accumulator = JointTransform { position, rotation };
		transforms.push(accumulator);
	}

	ForwardPass {
		transforms,
		effector_position: accumulator.position,
		effector_rotation: accumulator.rotation,
	}
}

pub fn get_end_effector_position(links: &[Link], base: &JointTransform) -> V3 {
	get_joint_transforms(links, base).effector_position
}

pub fn get_error_distance(links: &[Link], base: &JointTransform, target: &V3) -> f64 {
	vector3::euclidean_distance(target, &get_end_effector_position(links, base))
}
