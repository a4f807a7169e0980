//! # framekit geometry
//!
//! The dense numeric kernel under the framekit frame graph: rigid-body
//! transforms and the rotation-representation conversions around them.
//!
//! - [`RigidTransform`]: an affine isometry `x -> R*x + t`, stored as a
//!   row-major 3x4 block, with composition, orthogonal inversion, and
//!   point/vector transforms.
//! - [`rotation`]: pure conversions between rotation matrices, unit
//!   quaternions, axis-angle records, and XYZ Euler triples, with the
//!   singular cases handled explicitly.
//! - [`Point3`] / [`Vector3`]: the f64 tuple types the transforms act
//!   on. Points feel translation, vectors do not.
//!
//! Everything is f64. Degenerate numeric inputs resolve to documented
//! fallbacks rather than errors; the one exception is the homogeneous
//! transform, which rejects a weight other than 1.

pub mod error;
pub mod rotation;
pub mod transform;
pub mod tuple;

pub use error::{GeometryError, GeometryResult};
pub use rotation::{AxisAngle, Quaternion, RotationMatrix};
pub use transform::RigidTransform;
pub use tuple::{Point3, Vector3};
