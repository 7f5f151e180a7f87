//! Errors raised by the solver core.

/// Failures the solver surfaces to its caller.
///
/// Numerical degeneracies (zero-length vectors, parallel directions) are
/// handled internally and never show up here. Not converging is not an error
/// either: convergence is driven by the caller re-invoking `solve`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IkError {
	/// Forward kinematics must yield one transform per link plus the base.
	#[error("joint transforms should have the same length as links + 1, got {actual}, expected {expected}")]
	TransformCountMismatch { expected: usize, actual: usize },

	/// A clamp range whose lower bound lies above its upper bound.
	#[error("lower bound should be less than upper bound for {axis}, lower: {lower}, upper: {upper}")]
	InvalidBounds {
		axis: &'static str,
		lower: f64,
		upper: f64,
	},
}

pub type Result<T> = std::result::Result<T, IkError>;

pub(crate) fn check_transform_count(links: usize, transforms: usize) -> Result<()> {
	if transforms != links + 1 {
		return Err(IkError::TransformCountMismatch { expected: links + 1, actual: transforms });
	}
	Ok(())
}
