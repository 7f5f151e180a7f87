use log::trace;
use crate::error::Result;
use crate::math::V2;
use crate::options::FabrikOptions;
use super::{apply_constraints, get_error_distance, get_joint_transforms, JointTransform, Link};


/// One finite-difference gradient step on every link.
///
/// Each link's gradient is measured against the same pre-step `joints`
/// snapshot: the link is nudged by `delta_angle` and only the sub-chain from
/// its own joint onwards is re-evaluated.
pub(super) fn step(
	links: &[Link],
	joints: &[JointTransform],
	error: f64,
	base: &JointTransform,
	target: &V2,
	options: &FabrikOptions,
) -> Result<Vec<Link>> {
	let FabrikOptions { delta_angle, ref learning_rate, .. } = *options;

	let with_angle_step: Vec<Link> = links.iter().enumerate().map(|(index, link)| {
		let mut projected = links[index..].to_vec();
		projected[0].rotation += delta_angle;

		let projected_error = get_error_distance(&projected, &joints[index], target);
		let gradient = (projected_error - error) / delta_angle;
		let angle_step = -gradient * learning_rate.at(projected_error);
		trace!("link {}: gradient {}, step {}", index, gradient, angle_step);

		Link { rotation: link.rotation + angle_step, ..*link }
	}).collect();

	let adjusted = get_joint_transforms(&with_angle_step, base).transforms;
	apply_constraints(&with_angle_step, &adjusted)
}
