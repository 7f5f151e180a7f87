use log::trace;
use crate::error::Result;
use crate::math::quaternion;
use crate::math::V3;
use crate::options::FabrikOptions;
use super::{apply_constraints, get_error_distance, get_joint_transforms, JointTransform, Link};


/// One finite-difference gradient step on every link, three Euler axes per
/// link, all measured against the pre-step `joints` snapshot.
pub(super) fn step(
	links: &[Link],
	joints: &[JointTransform],
	error: f64,
	base: &JointTransform,
	target: &V3,
	options: &FabrikOptions,
) -> Result<Vec<Link>> {
	let FabrikOptions { delta_angle, ref learning_rate, .. } = *options;

	let with_angle_step: Vec<Link> = links.iter().enumerate().map(|(index, link)| {
		let mut angle_step = V3::zeros();

		for axis in 0..3 {
			let mut euler_angle = V3::zeros();
			euler_angle[axis] = delta_angle;

			let mut projected = links[index..].to_vec();
			projected[0].rotation = link.rotation * quaternion::from_euler_angles(&euler_angle);

			let projected_error = get_error_distance(&projected, &joints[index], target);
			let gradient = (projected_error - error) / delta_angle;
			angle_step[axis] = -gradient * learning_rate.at(projected_error);
		}
		trace!("link {}: step {:?}", index, angle_step);

		let rotation = quaternion::normalize(&(link.rotation * quaternion::from_euler_angles(&angle_step)));
		Link { rotation, ..*link }
	}).collect();

	let adjusted = get_joint_transforms(&with_angle_step, base).transforms;
	apply_constraints(&with_angle_step, &adjusted)
}
