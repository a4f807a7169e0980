//! Per-root frame storage and cached chain resolution
//!
//! One `FrameTree` exists per root frame and owns every frame slot in
//! that tree. Cache invalidation is a single shared generation counter:
//! any local-transform mutation anywhere in the tree bumps it, marking
//! every cached transform-to-root stale at once. The trade is a false
//! stale on untouched branches, whose cost is one upward walk.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use framekit_geometry::RigidTransform;

use crate::frame::TransformUpdater;
use crate::types::{FrameId, GENERATION_NEVER};

/// One frame's storage inside its tree.
pub(crate) struct FrameSlot {
    pub(crate) name: String,
    /// `None` iff this is the root slot (id 0).
    pub(crate) parent: Option<FrameId>,
    /// Ids from the root down to and including this frame. Fixed at
    /// construction.
    pub(crate) chain: Vec<FrameId>,
    pub(crate) local_to_parent: RigidTransform,
    cached_to_root: RigidTransform,
    cached_to_root_inverse: RigidTransform,
    /// Valid only while equal to the tree's current generation.
    cache_generation: u64,
    updater: Option<Box<dyn TransformUpdater>>,
    pub(crate) is_world: bool,
    pub(crate) is_body_centered: bool,
}

/// Per-root tree state: the slot arena and the generation counter.
pub(crate) struct FrameTree {
    slots: RwLock<Vec<FrameSlot>>,
    generation: AtomicU64,
}

impl FrameTree {
    /// Create a tree with its root slot at id 0.
    pub(crate) fn with_root(name: String, is_world: bool) -> Self {
        let root = FrameSlot {
            name,
            parent: None,
            chain: vec![0],
            local_to_parent: RigidTransform::identity(),
            cached_to_root: RigidTransform::identity(),
            cached_to_root_inverse: RigidTransform::identity(),
            cache_generation: GENERATION_NEVER,
            updater: None,
            is_world,
            is_body_centered: false,
        };
        Self {
            slots: RwLock::new(vec![root]),
            generation: AtomicU64::new(0),
        }
    }

    /// Register a child of `parent` and return its id.
    pub(crate) fn add_child(
        &self,
        parent: FrameId,
        name: String,
        local_to_parent: RigidTransform,
        updater: Option<Box<dyn TransformUpdater>>,
        is_body_centered: bool,
    ) -> FrameId {
        let mut slots = self.slots.write();
        let id = slots.len() as FrameId;

        let mut chain = slots[parent as usize].chain.clone();
        chain.push(id);

        slots.push(FrameSlot {
            name,
            parent: Some(parent),
            chain,
            local_to_parent,
            cached_to_root: RigidTransform::identity(),
            cached_to_root_inverse: RigidTransform::identity(),
            cache_generation: GENERATION_NEVER,
            updater,
            is_world: false,
            is_body_centered,
        });
        id
    }

    pub(crate) fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Advance the generation, staling every cache in the tree.
    fn bump(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Replace a frame's local transform and stale the tree.
    ///
    /// The world frame's local transform is immutable; attempts to
    /// change it are ignored with a warning.
    pub(crate) fn set_local_to_parent(&self, id: FrameId, transform: &RigidTransform) {
        {
            let mut slots = self.slots.write();
            let slot = &mut slots[id as usize];
            if slot.is_world {
                log::warn!(
                    "ignoring attempt to set the local transform of world frame '{}'",
                    slot.name
                );
                return;
            }
            slot.local_to_parent = *transform;
        }
        self.bump();
    }

    /// Run a frame's update hook into its local transform.
    ///
    /// Frames without a hook are static: their local transform only
    /// changes through `set_local_to_parent`, so there is nothing to
    /// recompute and the generation is left alone.
    pub(crate) fn run_update(&self, id: FrameId) {
        {
            let mut slots = self.slots.write();
            let slot = &mut slots[id as usize];
            let Some(updater) = slot.updater.as_mut() else {
                return;
            };
            let mut out = slot.local_to_parent;
            updater.update_transform_to_parent(&mut out);
            slot.local_to_parent = out;
        }
        self.bump();
    }

    pub(crate) fn local_to_parent(&self, id: FrameId) -> RigidTransform {
        self.slots.read()[id as usize].local_to_parent
    }

    /// Transform to root and its inverse, served from the cache when
    /// fresh.
    ///
    /// On a stale cache this walks the frame's chain from the root down,
    /// composing each local transform into a running product and storing
    /// the product, its inverse, and the current generation at every
    /// frame visited, so the whole ancestor path comes out fresh.
    pub(crate) fn transforms_to_root(&self, id: FrameId) -> (RigidTransform, RigidTransform) {
        let current = self.current_generation();
        {
            let slots = self.slots.read();
            let slot = &slots[id as usize];
            if slot.cache_generation == current {
                return (slot.cached_to_root, slot.cached_to_root_inverse);
            }
        }

        let mut slots = self.slots.write();
        let current = self.current_generation();
        let chain = slots[id as usize].chain.clone();

        let mut accumulated = RigidTransform::identity();
        for &frame in &chain {
            let slot = &mut slots[frame as usize];
            accumulated.multiply(&slot.local_to_parent);
            slot.cached_to_root = accumulated;
            slot.cached_to_root_inverse = accumulated.inverse();
            slot.cache_generation = current;
        }

        let slot = &slots[id as usize];
        (slot.cached_to_root, slot.cached_to_root_inverse)
    }

    pub(crate) fn parent_of(&self, id: FrameId) -> Option<FrameId> {
        self.slots.read()[id as usize].parent
    }

    pub(crate) fn root_of(&self, id: FrameId) -> FrameId {
        self.slots.read()[id as usize].chain[0]
    }

    pub(crate) fn name_of(&self, id: FrameId) -> String {
        self.slots.read()[id as usize].name.clone()
    }

    pub(crate) fn is_world(&self, id: FrameId) -> bool {
        self.slots.read()[id as usize].is_world
    }

    pub(crate) fn is_body_centered(&self, id: FrameId) -> bool {
        self.slots.read()[id as usize].is_body_centered
    }

    /// Number of frames in this tree.
    pub(crate) fn frame_count(&self) -> usize {
        self.slots.read().len()
    }
}
