use crate::constraint::{ExactRotation, RotationFrame};
use crate::error::{check_transform_count, Result};
use crate::math::scalar;
use super::{Constraint, JointTransform, Link};


/// Applies each link's constraint to a stepped chain.
///
/// `transforms` is the forward pass of `links` as stepped, before any
/// constraint. Links are visited base to tip; when a link is corrected, the
/// links after it see their absolute rotation shifted by the same amount, so
/// a global lock further down still lands exactly on its value.
pub fn apply_constraints(links: &[Link], transforms: &[JointTransform]) -> Result<Vec<Link>> {
	check_transform_count(links.len(), transforms.len())?;

	let mut constrained = Vec::with_capacity(links.len());
	// correction accumulated by already constrained parents
	let mut drift = 0.0;

	for (link, joint) in links.iter().zip(&transforms[1..]) {
		let link_constrained = apply_constraint(link, joint.rotation + drift)?;
		drift += link_constrained.rotation - link.rotation;
		constrained.push(link_constrained);
	}
	Ok(constrained)
}

fn apply_constraint(link: &Link, absolute_rotation: f64) -> Result<Link> {
	let rotation = match link.constraint {
		None => link.rotation,
		Some(Constraint::Range(range)) => {
			let (lower, upper) = range.bounds();
			scalar::clamp(link.rotation, lower, upper, "angle")?
		},
		Some(Constraint::Exact(ExactRotation { value, frame: RotationFrame::Local })) => value,
		Some(Constraint::Exact(ExactRotation { value, frame: RotationFrame::Global })) => {
			link.rotation + (value - absolute_rotation)
		},
	};
	Ok(Link { rotation, ..*link })
}
