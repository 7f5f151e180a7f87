use log::trace;
use crate::error::Result;
use crate::math::quaternion;
use crate::math::{vector3, V3};
use crate::options::CcdOptions;
use super::{apply_constraints, get_joint_transforms, JointTransform, Link};


/// One tip-to-base sweep.
///
/// The corrective rotation is found in the joint's local frame: target and
/// effector are first brought into it with the inverse of the joint's
/// absolute rotation. Working on world-space directions diverges once the
/// chain is rotated away from identity.
pub(super) fn sweep(links: &[Link], base: &JointTransform, target: &V3, options: &CcdOptions) -> Result<Vec<Link>> {
	let mut adjusted = links.to_vec();

	for index in (0..adjusted.len()).rev() {
		let pass = get_joint_transforms(&adjusted, base);
		let error = vector3::euclidean_distance(target, &pass.effector_position);

		if error < options.accepted_error {
			trace!("sweep stopped at link {}, error {}", index, error);
			break
		}

		let joint = &pass.transforms[index];
		let to_local = quaternion::inverse(&joint.rotation);
		let local_effector = vector3::rotate(&(pass.effector_position - joint.position), &to_local);
		let local_target = vector3::rotate(&(target - joint.position), &to_local);

		let correction = quaternion::rotation_from_to(&local_effector, &local_target);
		let angle_step = quaternion::slerp(&quaternion::identity(), &correction, options.learning_rate.at(error));
		trace!("link {}: step {:?}", index, angle_step);

		let link = &mut adjusted[index];
		link.rotation = quaternion::normalize(&(angle_step * link.rotation));
	}

	let adjusted_joints = get_joint_transforms(&adjusted, base).transforms;
	apply_constraints(&adjusted, &adjusted_joints)
}
