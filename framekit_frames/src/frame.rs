//! Frame handles and the frame tree API
//!
//! A [`Frame`] is a cheap cloneable handle into a per-root frame tree.
//! Frames form a rooted tree; each carries a local transform expressed
//! in its parent, and queries between any two frames of one tree resolve
//! through cached transforms-to-root.

use std::sync::{Arc, OnceLock};

use framekit_geometry::RigidTransform;

use crate::tree::FrameTree;
use crate::types::{FrameError, FrameId, FrameResult};

/// Recomputes a frame's local transform from external state.
///
/// Implementations typically read a joint encoder, a mocap packet, or a
/// simulation body and write the fresh pose into `out`, which arrives
/// holding the current local transform. Hooked into a frame at
/// construction with [`Frame::add_child_updating`] and run by
/// [`Frame::update`].
pub trait TransformUpdater: Send + Sync {
    fn update_transform_to_parent(&mut self, out: &mut RigidTransform);
}

impl<F> TransformUpdater for F
where
    F: FnMut(&mut RigidTransform) + Send + Sync,
{
    fn update_transform_to_parent(&mut self, out: &mut RigidTransform) {
        self(out)
    }
}

/// Handle to one frame in a frame tree.
///
/// Handles are cheap to clone and compare by identity: two handles are
/// the same frame only when they designate the same slot of the same
/// tree. Names are display labels, never identity.
#[derive(Clone)]
pub struct Frame {
    tree: Arc<FrameTree>,
    id: FrameId,
}

static WORLD: OnceLock<Frame> = OnceLock::new();

impl Frame {
    /// Create a new root frame with its own tree.
    ///
    /// Frames under different roots cannot be related by a transform.
    pub fn new_root(name: impl Into<String>) -> Frame {
        Frame {
            tree: Arc::new(FrameTree::with_root(name.into(), false)),
            id: 0,
        }
    }

    /// The process-wide world frame.
    ///
    /// Created on first access, lives for the process, and is the same
    /// frame from every call site. Its local transform is immutable.
    pub fn world() -> Frame {
        WORLD
            .get_or_init(|| Frame {
                tree: Arc::new(FrameTree::with_root("world".to_string(), true)),
                id: 0,
            })
            .clone()
    }

    // ========================================================================
    // Construction of children
    // ========================================================================

    /// Add a child frame with an identity local transform.
    pub fn add_child(&self, name: impl Into<String>) -> Frame {
        self.add_child_inner(name.into(), RigidTransform::identity(), None, false)
    }

    /// Add a child frame with the given local transform.
    pub fn add_child_with_transform(
        &self,
        name: impl Into<String>,
        local_to_parent: &RigidTransform,
    ) -> Frame {
        self.add_child_inner(name.into(), *local_to_parent, None, false)
    }

    /// Add a child frame whose local transform is recomputed by
    /// `updater` on every [`update`](Self::update).
    ///
    /// The local transform starts at identity until the first update.
    pub fn add_child_updating(
        &self,
        name: impl Into<String>,
        updater: impl TransformUpdater + 'static,
    ) -> Frame {
        self.add_child_inner(
            name.into(),
            RigidTransform::identity(),
            Some(Box::new(updater)),
            false,
        )
    }

    /// Add a body-centered child frame. The label has no effect on the
    /// algebra.
    pub fn add_body_centered_child(
        &self,
        name: impl Into<String>,
        local_to_parent: &RigidTransform,
    ) -> Frame {
        self.add_child_inner(name.into(), *local_to_parent, None, true)
    }

    fn add_child_inner(
        &self,
        name: String,
        local_to_parent: RigidTransform,
        updater: Option<Box<dyn TransformUpdater>>,
        is_body_centered: bool,
    ) -> Frame {
        let id = self
            .tree
            .add_child(self.id, name, local_to_parent, updater, is_body_centered);
        Frame {
            tree: self.tree.clone(),
            id,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Run this frame's update hook, replacing the local transform and
    /// staling every cached transform in the tree.
    ///
    /// A frame constructed without a hook is static; its update is a
    /// no-op and the caches stay valid.
    pub fn update(&self) {
        self.tree.run_update(self.id);
    }

    /// Replace the local transform and stale every cached transform in
    /// the tree. Ignored (with a warning) on the world frame.
    pub fn set_transform_to_parent(&self, transform: &RigidTransform) {
        self.tree.set_local_to_parent(self.id, transform);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// This frame's pose expressed in its parent. Identity for a root.
    pub fn transform_to_parent(&self) -> RigidTransform {
        self.tree.local_to_parent(self.id)
    }

    /// The composition of local transforms from the root down to this
    /// frame, served from the generation-checked cache.
    pub fn transform_to_root(&self) -> RigidTransform {
        self.tree.transforms_to_root(self.id).0
    }

    /// Inverse of [`transform_to_root`](Self::transform_to_root),
    /// refreshed together with it.
    pub fn inverse_transform_to_root(&self) -> RigidTransform {
        self.tree.transforms_to_root(self.id).1
    }

    /// The transform that re-expresses quantities of this frame in
    /// `target`.
    ///
    /// Fails with [`FrameError::DifferentRoots`] when the two frames do
    /// not live under the same root; nothing is computed in that case.
    pub fn transform_to(&self, target: &Frame) -> FrameResult<RigidTransform> {
        self.verify_same_root(target)?;
        let (to_root, _) = self.tree.transforms_to_root(self.id);
        let (_, target_inverse) = self.tree.transforms_to_root(target.id);
        Ok(target_inverse.compose(&to_root))
    }

    /// Error unless `other` shares this frame's root.
    pub fn verify_same_root(&self, other: &Frame) -> FrameResult<()> {
        if !Arc::ptr_eq(&self.tree, &other.tree) {
            return Err(FrameError::DifferentRoots {
                from: self.name(),
                to: other.name(),
            });
        }
        Ok(())
    }

    /// Error unless `other` is this very frame. Name equality is not
    /// enough; the handles must designate the same slot.
    pub fn check_frames_match(&self, other: &Frame) -> FrameResult<()> {
        if !self.same_frame(other) {
            return Err(FrameError::FrameMismatch {
                expected: self.name(),
                actual: other.name(),
            });
        }
        Ok(())
    }

    /// Handle identity.
    pub fn same_frame(&self, other: &Frame) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The root of this frame's tree.
    pub fn root(&self) -> Frame {
        Frame {
            tree: self.tree.clone(),
            id: self.tree.root_of(self.id),
        }
    }

    /// The parent frame, or `None` for a root.
    pub fn parent(&self) -> Option<Frame> {
        self.tree.parent_of(self.id).map(|id| Frame {
            tree: self.tree.clone(),
            id,
        })
    }

    /// Display name. Not an identity.
    pub fn name(&self) -> String {
        self.tree.name_of(self.id)
    }

    pub fn is_root(&self) -> bool {
        self.tree.parent_of(self.id).is_none()
    }

    pub fn is_world(&self) -> bool {
        self.tree.is_world(self.id)
    }

    pub fn is_body_centered(&self) -> bool {
        self.tree.is_body_centered(self.id)
    }

    /// Current generation of the owning tree. Diagnostic only.
    pub fn tree_generation(&self) -> u64 {
        self.tree.current_generation()
    }

    /// Number of frames in the owning tree. Diagnostic only.
    pub fn tree_frame_count(&self) -> usize {
        self.tree.frame_count()
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Frame) -> bool {
        self.same_frame(other)
    }
}

impl Eq for Frame {}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("name", &self.name())
            .field("id", &self.id)
            .finish()
    }
}
