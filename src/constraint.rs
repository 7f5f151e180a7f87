//! Constraint vocabulary shared by the 2D and 3D chains.

use crate::math::V3;


/// An allowed rotation range, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range {
	/// Total span `r`, centred on zero: `[-r / 2, r / 2]`.
	Symmetric(f64),
	/// Explicit bounds, no symmetry implied.
	Bounds { min: f64, max: f64 },
}

impl Range {
	/// `(lower, upper)`. Ordering is checked by the clamp that consumes them.
	pub fn bounds(&self) -> (f64, f64) {
		match *self {
			Range::Symmetric(span) => (-span / 2.0, span / 2.0),
			Range::Bounds { min, max } => (min, max),
		}
	}
}

impl From<f64> for Range {
	fn from(span: f64) -> Self {
		Range::Symmetric(span)
	}
}

/// Which frame an [`ExactRotation`] value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationFrame {
	/// Relative to the parent link.
	Local,
	/// Relative to the base transform.
	Global,
}

/// Locks a link to a fixed rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactRotation<R> {
	pub value: R,
	pub frame: RotationFrame,
}

impl<R> ExactRotation<R> {
	pub fn local(value: R) -> Self {
		Self { value, frame: RotationFrame::Local }
	}

	pub fn global(value: R) -> Self {
		Self { value, frame: RotationFrame::Global }
	}
}

/// Per-axis ranges for a 3D link, indexed pitch (x), yaw (y), roll (z).
/// A missing axis is free.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisRanges {
	pub pitch: Option<Range>,
	pub yaw: Option<Range>,
	pub roll: Option<Range>,
}

impl AxisRanges {
	/// Same range on every axis.
	pub fn uniform(range: Range) -> Self {
		Self { pitch: Some(range), yaw: Some(range), roll: Some(range) }
	}

	/// Lower and upper bound vectors, `-inf..inf` on free axes.
	pub fn bounds(&self) -> (V3, V3) {
		let mut lower = V3::repeat(f64::NEG_INFINITY);
		let mut upper = V3::repeat(f64::INFINITY);

		for (index, range) in [self.pitch, self.yaw, self.roll].iter().enumerate() {
			if let Some(range) = range {
				let (min, max) = range.bounds();
				lower[index] = min;
				upper[index] = max;
			}
		}
		(lower, upper)
	}
}
