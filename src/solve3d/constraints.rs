use crate::constraint::{ExactRotation, RotationFrame};
use crate::error::{check_transform_count, Result};
use crate::math::quaternion::{self, Quaternion};
use super::{Constraint, JointTransform, Link};


/// Applies each link's constraint to a stepped chain.
///
/// `transforms` is the forward pass of the stepped chain. Links are visited
/// base to tip, and `drift` carries the rotation that maps a stepped
/// absolute frame onto its constrained one, so corrections made to a parent
/// are seen by the global locks below it.
pub fn apply_constraints(links: &[Link], transforms: &[JointTransform]) -> Result<Vec<Link>> {
	check_transform_count(links.len(), transforms.len())?;

	let mut constrained = Vec::with_capacity(links.len());
	let mut drift = quaternion::identity();

	for (link, joints) in links.iter().zip(transforms.windows(2)) {
		let (parent, joint) = (&joints[0], &joints[1]);

		let link_constrained = apply_constraint(link, &(drift * joint.rotation))?;

		let constrained_absolute = drift * parent.rotation * link_constrained.rotation;
		drift = constrained_absolute * quaternion::inverse(&joint.rotation);
		constrained.push(link_constrained);
	}
	Ok(constrained)
}

fn apply_constraint(link: &Link, absolute_rotation: &Quaternion) -> Result<Link> {
	let rotation = match link.constraint {
		None => link.rotation,
		Some(Constraint::Axes(ranges)) => {
			let (lower, upper) = ranges.bounds();
			quaternion::clamp(&link.rotation, &lower, &upper)?
		},
		Some(Constraint::Exact(ExactRotation { value, frame: RotationFrame::Local })) => value,
		Some(Constraint::Exact(ExactRotation { value, frame: RotationFrame::Global })) => {
			// order matters: undo the current absolute rotation, then apply the target
			quaternion::normalize(&(link.rotation * quaternion::inverse(absolute_rotation) * value))
		},
	};
	Ok(Link { rotation, ..*link })
}
