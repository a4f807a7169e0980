//! Framed points and vectors
//!
//! Thin pairs of a kernel value and the [`Frame`] it is expressed in,
//! plus a display name. Binary operations refuse to mix values from
//! different frames; `change_frame` is the sanctioned way to move a
//! value between frames of one tree.

use framekit_geometry::{Point3, Vector3};

use crate::frame::Frame;
use crate::types::FrameResult;

/// A point and the frame it is expressed in.
#[derive(Debug, Clone)]
pub struct FramePoint {
    name: String,
    frame: Frame,
    point: Point3,
}

impl FramePoint {
    pub fn new(name: impl Into<String>, frame: &Frame, x: f64, y: f64, z: f64) -> Self {
        Self::from_point(name, frame, Point3::new(x, y, z))
    }

    pub fn from_point(name: impl Into<String>, frame: &Frame, point: Point3) -> Self {
        Self {
            name: name.into(),
            frame: frame.clone(),
            point,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    pub fn z(&self) -> f64 {
        self.point.z
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.point.set(x, y, z);
    }

    /// Distance to a point expressed in the same frame.
    pub fn distance_to(&self, other: &FramePoint) -> FrameResult<f64> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.point.distance_to(&other.point))
    }

    /// Squared distance to a point expressed in the same frame.
    pub fn distance_squared_to(&self, other: &FramePoint) -> FrameResult<f64> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.point.distance_squared_to(&other.point))
    }

    /// Displacement from `other` to this point, same frame required.
    pub fn vector_from(&self, other: &FramePoint) -> FrameResult<Vector3> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.point - other.point)
    }

    /// Re-express this point in `target`.
    ///
    /// Applies the full affine transform between the frames. On a
    /// cross-root target the error propagates and the stored value is
    /// untouched.
    pub fn change_frame(&mut self, target: &Frame) -> FrameResult<()> {
        if self.frame.same_frame(target) {
            return Ok(());
        }
        let transform = self.frame.transform_to(target)?;
        transform.transform_point_in_place(&mut self.point);
        self.frame = target.clone();
        Ok(())
    }

    pub fn epsilon_equals(&self, other: &FramePoint, epsilon: f64) -> FrameResult<bool> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.point.epsilon_equals(&other.point, epsilon))
    }
}

/// A vector and the frame it is expressed in.
#[derive(Debug, Clone)]
pub struct FrameVector {
    name: String,
    frame: Frame,
    vector: Vector3,
}

impl FrameVector {
    pub fn new(name: impl Into<String>, frame: &Frame, x: f64, y: f64, z: f64) -> Self {
        Self::from_vector(name, frame, Vector3::new(x, y, z))
    }

    pub fn from_vector(name: impl Into<String>, frame: &Frame, vector: Vector3) -> Self {
        Self {
            name: name.into(),
            frame: frame.clone(),
            vector,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn vector(&self) -> Vector3 {
        self.vector
    }

    pub fn x(&self) -> f64 {
        self.vector.x
    }

    pub fn y(&self) -> f64 {
        self.vector.y
    }

    pub fn z(&self) -> f64 {
        self.vector.z
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.vector.set(x, y, z);
    }

    pub fn length(&self) -> f64 {
        self.vector.length()
    }

    /// Dot product with a vector expressed in the same frame.
    pub fn dot(&self, other: &FrameVector) -> FrameResult<f64> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.vector.dot(&other.vector))
    }

    /// Cross product with a vector expressed in the same frame.
    pub fn cross(&self, other: &FrameVector) -> FrameResult<Vector3> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.vector.cross(&other.vector))
    }

    /// Angle to a vector expressed in the same frame, in `[0, pi]`.
    pub fn angle_between(&self, other: &FrameVector) -> FrameResult<f64> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.vector.angle_between(&other.vector))
    }

    /// Re-express this vector in `target`.
    ///
    /// Only the rotation between the frames applies; a vector is a
    /// displacement and does not feel translation. On a cross-root
    /// target the error propagates and the stored value is untouched.
    pub fn change_frame(&mut self, target: &Frame) -> FrameResult<()> {
        if self.frame.same_frame(target) {
            return Ok(());
        }
        let transform = self.frame.transform_to(target)?;
        transform.transform_vector_in_place(&mut self.vector);
        self.frame = target.clone();
        Ok(())
    }

    pub fn epsilon_equals(&self, other: &FrameVector, epsilon: f64) -> FrameResult<bool> {
        self.frame.check_frames_match(&other.frame)?;
        Ok(self.vector.epsilon_equals(&other.vector, epsilon))
    }
}
