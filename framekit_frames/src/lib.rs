//! # framekit frames
//!
//! A kinematic reference-frame graph for robotics-style code where many
//! coordinate systems hang off one another (root -> body -> link ->
//! sensor) and client code keeps asking "what does this look like in
//! frame B?".
//!
//! ## Key pieces
//!
//! - [`Frame`]: a cheap handle into a per-root frame tree. Children are
//!   created from their parent, carry a local transform expressed in
//!   that parent, and can be wired to a [`TransformUpdater`] hook that
//!   recomputes the local transform from external state (a joint
//!   encoder, a simulation body).
//! - **Generation-cached resolution**: every frame caches its transform
//!   to the root together with the tree generation it was computed at.
//!   Any local-transform mutation bumps the tree's single generation
//!   counter, staling every cache at once; the next query recomputes
//!   with one walk down the chain. O(1) invalidation, no per-subtree
//!   bookkeeping.
//! - [`Frame::world`]: the process-wide root frame, created lazily and
//!   shared; its local transform is immutable.
//! - [`FramePoint`] / [`FrameVector`]: kernel values paired with the
//!   frame they are expressed in. Binary operations between different
//!   frames fail with [`FrameError::FrameMismatch`]; `change_frame`
//!   moves a value between frames of one tree (points feel translation,
//!   vectors only rotate).
//!
//! ## Usage
//!
//! ```rust
//! use framekit_frames::{Frame, FrameVector};
//! use framekit_geometry::{RigidTransform, Vector3};
//!
//! let root = Frame::new_root("root");
//! let body = root.add_child_with_transform(
//!     "body",
//!     &RigidTransform::from_translation(Vector3::new(0.5, 0.0, 0.0)),
//! );
//! let sensor = body.add_child_with_transform("sensor", &RigidTransform::rot_z(0.3));
//!
//! let tf = sensor.transform_to(&root)?;
//! let reading = tf.transform_point(framekit_geometry::Point3::new(1.0, 0.0, 0.0));
//!
//! let mut v = FrameVector::new("ray", &sensor, 0.0, 0.0, 1.0);
//! v.change_frame(&root)?;
//! # Ok::<(), framekit_frames::FrameError>(())
//! ```
//!
//! Transforms between frames under different roots do not exist;
//! asking for one fails with [`FrameError::DifferentRoots`] before any
//! output is produced.
//!
//! The graph is single-threaded by contract: interior locks keep
//! individual operations non-torn, but no ordering is promised between
//! threads mutating and querying one tree.

#[cfg(test)]
mod bench;
mod frame;
mod framed;
mod tree;
mod types;

pub use frame::{Frame, TransformUpdater};
pub use framed::{FramePoint, FrameVector};
pub use types::{FrameError, FrameId, FrameResult};

// Re-export the kernel the frame graph hands out.
pub use framekit_geometry as geometry;
