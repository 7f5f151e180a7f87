//! Vector and quaternion algebra shared by the 2D and 3D solvers.

pub mod quaternion;
pub mod scalar;
pub mod vector2;
pub mod vector3;

pub use quaternion::Quaternion;
pub use vector2::V2;
pub use vector3::V3;
