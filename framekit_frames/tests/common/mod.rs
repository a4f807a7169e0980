//! Shared helpers for the frame graph tests: randomly placed frames and
//! a randomly changing update hook.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use framekit_frames::{Frame, TransformUpdater};
use framekit_geometry::RigidTransform;

pub fn random_transform(rng: &mut StdRng) -> RigidTransform {
    let mut tf = RigidTransform::rot_z(rng.gen_range(-PI..PI));
    tf.apply_rotation_y(rng.gen_range(-PI..PI));
    tf.apply_rotation_x(rng.gen_range(-PI..PI));
    tf.set_translation(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    tf
}

/// A frame with a fixed random pose in its parent.
pub fn random_unchanging_frame(name: &str, parent: &Frame, rng: &mut StdRng) -> Frame {
    parent.add_child_with_transform(name, &random_transform(rng))
}

/// Update hook that draws a fresh random pose on every update.
pub struct RandomlyChangingPose {
    rng: StdRng,
}

impl TransformUpdater for RandomlyChangingPose {
    fn update_transform_to_parent(&mut self, out: &mut RigidTransform) {
        *out = random_transform(&mut self.rng);
    }
}

/// A frame whose pose in its parent changes on every `update()`.
pub fn randomly_changing_frame(name: &str, parent: &Frame, seed: u64) -> Frame {
    parent.add_child_updating(
        name,
        RandomlyChangingPose {
            rng: StdRng::seed_from_u64(seed),
        },
    )
}
