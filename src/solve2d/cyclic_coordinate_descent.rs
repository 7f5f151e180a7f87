use log::trace;
use crate::error::Result;
use crate::math::{scalar, vector2, V2};
use crate::options::CcdOptions;
use super::{apply_constraints, get_joint_transforms, JointTransform, Link};


/// One tip-to-base sweep: each link turns to point the effector at the
/// target. Constraints are applied once, after the sweep.
pub(super) fn sweep(links: &[Link], base: &JointTransform, target: &V2, options: &CcdOptions) -> Result<Vec<Link>> {
	let mut adjusted = links.to_vec();

	for index in (0..adjusted.len()).rev() {
		let pass = get_joint_transforms(&adjusted, base);
		let error = vector2::euclidean_distance(target, &pass.effector_position);

		if error < options.accepted_error {
			trace!("sweep stopped at link {}, error {}", index, error);
			break
		}

		let joint = &pass.transforms[index];
		let direction_to_target = vector2::angle(&(target - joint.position));
		let direction_to_effector = vector2::angle(&(pass.effector_position - joint.position));
		let angle_between = scalar::wrap_angle(direction_to_effector - direction_to_target);

		let angle_step = -angle_between * options.learning_rate.at(error);
		trace!("link {}: step {}", index, angle_step);
		adjusted[index].rotation += angle_step;
	}

	let adjusted_joints = get_joint_transforms(&adjusted, base).transforms;
	apply_constraints(&adjusted, &adjusted_joints)
}
