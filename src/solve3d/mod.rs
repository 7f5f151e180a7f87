//! Spatial chains. Rotations are unit quaternions; a link's forward axis is +X.

use log::debug;
use crate::constraint::{AxisRanges, ExactRotation};
use crate::error::{check_transform_count, Result};
use crate::math::quaternion::{self, Quaternion};
use crate::math::{vector3, V3};
use crate::options::SolveOptions;

mod constraints;
mod cyclic_coordinate_descent;
mod forward;
mod gradient_descent;

pub use constraints::apply_constraints;
pub use forward::{get_end_effector_position, get_error_distance, get_joint_transforms, ForwardPass};


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTransform {
	pub position: V3,
	pub rotation: Quaternion,
}

impl JointTransform {
	pub fn new(position: V3, rotation: Quaternion) -> Self {
		Self { position, rotation }
	}

	pub fn origin() -> Self {
		Self::new(V3::zeros(), quaternion::identity())
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
	/// Clamp pitch, yaw and roll independently.
	Axes(AxisRanges),
	Exact(ExactRotation<Quaternion>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
	/// Rotation at the base of the link, relative to its parent.
	pub rotation: Quaternion,
	/// Offset to the next joint, in the link's own frame.
	pub position: V3,
	pub constraint: Option<Constraint>,
}

impl Link {
	pub fn new(position: V3) -> Self {
		Self { rotation: quaternion::identity(), position, constraint: None }
	}

	pub fn with_length(length: f64) -> Self {
		Self::new(vector3::from_polar(length, &quaternion::identity()))
	}

	pub fn with_rotation(self, rotation: Quaternion) -> Self {
		Self { rotation, ..self }
	}

	pub fn with_constraint(self, constraint: Constraint) -> Self {
		Self { constraint: Some(constraint), ..self }
	}
}

/// Outcome of a single [`solve`] call, see `solve2d::SolveResult`.
#[derive(Debug, Clone)]
pub struct SolveResult {
	pub links: Vec<Link>,
	/// `true` on an early exit, `false` when a step was taken and the new
	/// error is not yet known.
	pub is_within_accepted_error: bool,
	base: JointTransform,
	target: V3,
	known_error: Option<f64>,
}

impl SolveResult {
	pub fn error_distance(&self) -> f64 {
		match self.known_error {
			Some(error) => error,
			None => get_error_distance(&self.links, &self.base, &self.target),
		}
	}
}

/// Moves the chain one step towards putting its effector on `target`.
pub fn solve(links: &[Link], base: &JointTransform, target: &V3, options: &SolveOptions) -> Result<SolveResult> {
	let pass = get_joint_transforms(links, base);
	check_transform_count(links.len(), pass.transforms.len())?;

	let error = vector3::euclidean_distance(target, &pass.effector_position);
	if error < options.accepted_error() {
		debug!("3D solve within accepted error ({} < {})", error, options.accepted_error());
		return Ok(SolveResult {
			links: links.to_vec(),
			is_within_accepted_error: true,
			base: *base,
			target: *target,
			known_error: Some(error),
		});
	}

	debug!("3D {} step over {} links, error {}", options.method_name(), links.len(), error);
	let links = match options {
		SolveOptions::Fabrik(options) => gradient_descent::step(links, &pass.transforms, error, base, target, options)?,
		SolveOptions::Ccd(options) => cyclic_coordinate_descent::sweep(links, base, target, options)?,
	};

	Ok(SolveResult {
		links,
		is_within_accepted_error: false,
		base: *base,
		target: *target,
		known_error: None,
	})
}
