//! Solver configuration.
//!
//! Each method carries its own option set with its own defaults. Selecting a
//! method means picking a [`SolveOptions`] variant, so options belonging to
//! the other method cannot be passed alongside.

use std::fmt;
use std::sync::Arc;

pub const DEFAULT_DELTA_ANGLE: f64 = 0.0001;
pub const DEFAULT_FABRIK_LEARNING_RATE: f64 = 0.001;
pub const DEFAULT_CCD_LEARNING_RATE: f64 = 1.0;
pub const DEFAULT_ACCEPTED_ERROR: f64 = 0.0;

/// Step-size scale applied to a computed rotation delta.
///
/// Larger values converge faster but oscillate about the target, smaller
/// ones may crawl. `ByError` lets callers shrink the step as the effector
/// closes in.
#[derive(Clone)]
pub enum LearningRate {
	Constant(f64),
	ByError(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl LearningRate {
	pub fn by_error(rate: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
		LearningRate::ByError(Arc::new(rate))
	}

	/// Error-scaled rate for a chain that can reach `total_length`.
	///
	/// Steps at `1e-2` while the error is above a tenth of the reach, then
	/// falls linearly towards `1e-3` at the target.
	pub fn by_reach(total_length: f64) -> Self {
		Self::by_error(move |error| {
			let relative = (error / total_length).clamp(0.0, 1.0);
			if relative > 0.1 {
				return 1e-2;
			}
			1e-3 + relative / 0.02 * 1e-3
		})
	}

	pub fn at(&self, error: f64) -> f64 {
		match self {
			LearningRate::Constant(rate) => *rate,
			LearningRate::ByError(rate) => rate(error),
		}
	}
}

impl fmt::Debug for LearningRate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LearningRate::Constant(rate) => f.debug_tuple("Constant").field(rate).finish(),
			LearningRate::ByError(_) => f.write_str("ByError(..)"),
		}
	}
}

impl From<f64> for LearningRate {
	fn from(rate: f64) -> Self {
		LearningRate::Constant(rate)
	}
}

/// Options for the finite-difference gradient descent ("FABRIK") method.
#[derive(Debug, Clone)]
pub struct FabrikOptions {
	/// Angle gap used to estimate the gradient of the error function.
	pub delta_angle: f64,
	pub learning_rate: LearningRate,
	/// Below this error the solve returns without stepping.
	pub accepted_error: f64,
}

impl Default for FabrikOptions {
	fn default() -> Self {
		Self {
			delta_angle: DEFAULT_DELTA_ANGLE,
			learning_rate: LearningRate::Constant(DEFAULT_FABRIK_LEARNING_RATE),
			accepted_error: DEFAULT_ACCEPTED_ERROR,
		}
	}
}

/// Options for the cyclic coordinate descent method.
#[derive(Debug, Clone)]
pub struct CcdOptions {
	/// `1.0` applies the full correction each sweep.
	pub learning_rate: LearningRate,
	pub accepted_error: f64,
}

impl Default for CcdOptions {
	fn default() -> Self {
		Self {
			learning_rate: LearningRate::Constant(DEFAULT_CCD_LEARNING_RATE),
			accepted_error: DEFAULT_ACCEPTED_ERROR,
		}
	}
}

#[derive(Debug, Clone)]
pub enum SolveOptions {
	Fabrik(FabrikOptions),
	Ccd(CcdOptions),
}

impl SolveOptions {
	pub fn accepted_error(&self) -> f64 {
		match self {
			SolveOptions::Fabrik(options) => options.accepted_error,
			SolveOptions::Ccd(options) => options.accepted_error,
		}
	}

	pub fn method_name(&self) -> &'static str {
		match self {
			SolveOptions::Fabrik(_) => "FABRIK",
			SolveOptions::Ccd(_) => "CCD",
		}
	}
}

impl Default for SolveOptions {
	fn default() -> Self {
		SolveOptions::Fabrik(FabrikOptions::default())
	}
}

impl From<FabrikOptions> for SolveOptions {
	fn from(options: FabrikOptions) -> Self {
		SolveOptions::Fabrik(options)
	}
}

impl From<CcdOptions> for SolveOptions {
	fn from(options: CcdOptions) -> Self {
		SolveOptions::Ccd(options)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_follow_selected_method() {
		let SolveOptions::Fabrik(fabrik) = SolveOptions::default() else {
			panic!("default method should be FABRIK");
		};
		assert_eq!(fabrik.delta_angle, DEFAULT_DELTA_ANGLE);
		assert_eq!(fabrik.learning_rate.at(123.0), DEFAULT_FABRIK_LEARNING_RATE);
		assert_eq!(fabrik.accepted_error, 0.0);

		let ccd = CcdOptions::default();
		assert_eq!(ccd.learning_rate.at(123.0), DEFAULT_CCD_LEARNING_RATE);
		assert_eq!(ccd.accepted_error, 0.0);
	}

	#[test]
	fn partial_options_keep_method_defaults() {
		let options: SolveOptions = CcdOptions { accepted_error: 0.5, ..Default::default() }.into();
		assert_eq!(options.accepted_error(), 0.5);
		assert_eq!(options.method_name(), "CCD");
		match options {
			SolveOptions::Ccd(ccd) => assert_eq!(ccd.learning_rate.at(0.0), 1.0),
			SolveOptions::Fabrik(_) => panic!("expected CCD options"),
		}
	}

	#[test]
	fn learning_rate_by_error() {
		fn halve(error: f64) -> f64 { error / 2.0 }

		let rate = LearningRate::by_error(halve);
		assert_eq!(rate.at(10.0), 5.0);
		assert_eq!(LearningRate::from(0.25).at(10.0), 0.25);
	}

	#[test]
	fn learning_rate_captures_chain_state() {
		let total_length = 150.0;
		let rate = LearningRate::by_error(move |error| error / total_length);
		assert_eq!(rate.at(75.0), 0.5);

		let options = FabrikOptions { learning_rate: rate, ..Default::default() };
		let cloned = options.clone();
		assert_eq!(cloned.learning_rate.at(15.0), 0.1);
		assert_eq!(format!("{:?}", cloned.learning_rate), "ByError(..)");
	}

	#[test]
	fn learning_rate_by_reach() {
		let rate = LearningRate::by_reach(100.0);
		assert_eq!(rate.at(500.0), 1e-2);
		assert_eq!(rate.at(11.0), 1e-2);
		assert_eq!(rate.at(0.0), 1e-3);
		assert!((rate.at(2.0) - 2e-3).abs() < 1e-12);
		assert!(rate.at(5.0) > rate.at(1.0));
	}
}
