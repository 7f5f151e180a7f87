//! Numerical inverse kinematics for planar and spatial chains.
//!
//! A chain is a slice of links hanging off a base transform. Each call to
//! `solve2d::solve` or `solve3d::solve` takes one step towards the target and
//! returns a fresh chain; callers loop by feeding the result back in.
//!
//! Two methods are available, picked through [`SolveOptions`]:
//! finite-difference gradient descent (named FABRIK here for historical
//! reasons) and cyclic coordinate descent.

pub mod constraint;
pub mod error;
pub mod math;
pub mod options;
pub mod solve2d;
pub mod solve3d;

pub use error::{IkError, Result};
pub use options::{CcdOptions, FabrikOptions, LearningRate, SolveOptions};
