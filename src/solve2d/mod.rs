//! Planar chains. Rotations are scalar angles in radians, positive is
//! anticlockwise.

use log::debug;
use crate::constraint::{ExactRotation, Range};
use crate::error::{check_transform_count, Result};
use crate::math::{vector2, V2};
use crate::options::SolveOptions;

mod constraints;
mod cyclic_coordinate_descent;
mod forward;
mod gradient_descent;

pub use constraints::apply_constraints;
pub use forward::{get_end_effector_position, get_error_distance, get_joint_transforms, ForwardPass};


/// Absolute pose of a joint, relative to the world the base lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTransform {
	pub position: V2,
	pub rotation: f64,
}

impl JointTransform {
	pub fn new(position: V2, rotation: f64) -> Self {
		Self { position, rotation }
	}

	pub fn origin() -> Self {
		Self::new(V2::zeros(), 0.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
	/// Clamp the relative rotation into a range.
	Range(Range),
	/// Lock the rotation to a value.
	Exact(ExactRotation<f64>),
}

/// One rigid segment of the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
	/// Rotation at the base of the link, relative to its parent.
	pub rotation: f64,
	/// Offset from this link's joint to the next, in the link's own frame.
	pub position: V2,
	pub constraint: Option<Constraint>,
}

impl Link {
	pub fn new(position: V2) -> Self {
		Self { rotation: 0.0, position, constraint: None }
	}

	/// A link reaching `length` along its forward axis.
	pub fn with_length(length: f64) -> Self {
		Self::new(vector2::from_polar(length, 0.0))
	}

	pub fn with_rotation(self, rotation: f64) -> Self {
		Self { rotation, ..self }
	}

	pub fn with_constraint(self, constraint: Constraint) -> Self {
		Self { constraint: Some(constraint), ..self }
	}
}

/// Outcome of a single [`solve`] call.
#[derive(Debug, Clone)]
pub struct SolveResult {
	/// Copy of the input chain, rotations possibly adjusted. Feed it back into
	/// the next call.
	pub links: Vec<Link>,
	/// `true` when the solve returned early because the effector was already
	/// within the accepted error. `false` means a step was taken and the
	/// error was not measured again, so it is unknown.
	pub is_within_accepted_error: bool,
	base: JointTransform,
	target: V2,
	known_error: Option<f64>,
}

impl SolveResult {
	/// Distance from the returned chain's effector to the target. Only
	/// computed on request.
	pub fn error_distance(&self) -> f64 {
		match self.known_error {
			Some(error) => error,
			None => get_error_distance(&self.links, &self.base, &self.target),
		}
	}
}

/// Moves the chain one step towards putting its effector on `target`.
///
/// Runs a single iteration of the method selected by `options`; callers
/// converge by feeding [`SolveResult::links`] back in on the next call.
pub fn solve(links: &[Link], base: &JointTransform, target: &V2, options: &SolveOptions) -> Result<SolveResult> {
	let pass = get_joint_transforms(links, base);
	check_transform_count(links.len(), pass.transforms.len())?;

	let error = vector2::euclidean_distance(target, &pass.effector_position);
	if error < options.accepted_error() {
		debug!("2D solve within accepted error ({} < {})", error, options.accepted_error());
		return Ok(SolveResult {
			links: links.to_vec(),
			is_within_accepted_error: true,
			base: *base,
			target: *target,
			known_error: Some(error),
		});
	}

	debug!("2D {} step over {} links, error {}", options.method_name(), links.len(), error);
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
