//! Rigid-body transform
//!
//! `RigidTransform` is an affine isometry `x -> R*x + t` stored as the
//! 3x4 block `[R | t]` in twelve f64 scalars; the implicit bottom row is
//! `[0, 0, 0, 1]`:
//!
//! ```text
//! T = | m00 m01 m02 m03 |
//!     | m10 m11 m12 m13 |
//!     | m20 m21 m22 m23 |
//!     |   0   0   0   1 |
//! ```
//!
//! The rotation block is expected to stay a proper rotation up to a
//! drift of about 1e-8; [`RigidTransform::normalize`] is the remedy when
//! long composition chains accumulate more.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::rotation::{self, AxisAngle, Quaternion, RotationMatrix};
use crate::tuple::{Point3, Vector3};

/// Default element-wise tolerance for [`RigidTransform::approx_eq`].
pub const DEFAULT_EPSILON: f64 = 1.0e-10;

/// Affine isometry: rotation plus translation, row-major `[R | t]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RigidTransform {
    pub m00: f64,
    pub m01: f64,
    pub m02: f64,
    pub m03: f64,
    pub m10: f64,
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m20: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            m00: 1.0,
            m01: 0.0,
            m02: 0.0,
            m03: 0.0,
            m10: 0.0,
            m11: 1.0,
            m12: 0.0,
            m13: 0.0,
            m20: 0.0,
            m21: 0.0,
            m22: 1.0,
            m23: 0.0,
        }
    }

    /// Build from a 4x4 row-major matrix. The bottom row is not checked.
    pub fn from_matrix4(m: &[[f64; 4]; 4]) -> Self {
        Self {
            m00: m[0][0],
            m01: m[0][1],
            m02: m[0][2],
            m03: m[0][3],
            m10: m[1][0],
            m11: m[1][1],
            m12: m[1][2],
            m13: m[1][3],
            m20: m[2][0],
            m21: m[2][1],
            m22: m[2][2],
            m23: m[2][3],
        }
    }

    /// Build from a rotation matrix and a translation. The rotation is
    /// not renormalised.
    pub fn from_rotation_and_translation(r: &RotationMatrix, t: Vector3) -> Self {
        let mut out = Self::identity();
        out.set_rotation(r);
        out.set_translation(t.x, t.y, t.z);
        out
    }

    /// Build from a quaternion `[x, y, z, w]` and a translation. The
    /// quaternion is not renormalised.
    pub fn from_quaternion_and_translation(q: Quaternion, t: Vector3) -> Self {
        Self::from_rotation_and_translation(&rotation::matrix_from_quaternion(q), t)
    }

    /// Build from an axis-angle and a translation. A near-zero axis
    /// yields the identity rotation.
    pub fn from_axis_angle_and_translation(aa: AxisAngle, t: Vector3) -> Self {
        let r = rotation::matrix_from_axis_angle(aa.x, aa.y, aa.z, aa.angle);
        Self::from_rotation_and_translation(&r, t)
    }

    /// Build from a rotation matrix, zero translation.
    pub fn from_rotation(r: &RotationMatrix) -> Self {
        Self::from_rotation_and_translation(r, Vector3::default())
    }

    /// Build from a quaternion, zero translation.
    pub fn from_quaternion(q: Quaternion) -> Self {
        Self::from_quaternion_and_translation(q, Vector3::default())
    }

    /// Build from an axis-angle, zero translation.
    pub fn from_axis_angle(aa: AxisAngle) -> Self {
        Self::from_axis_angle_and_translation(aa, Vector3::default())
    }

    /// Build from XYZ Euler angles, zero translation.
    pub fn from_euler_xyz(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_rotation(&rotation::matrix_from_euler_xyz(rx, ry, rz))
    }

    /// Build a translation-only transform.
    pub fn from_translation(t: Vector3) -> Self {
        let mut out = Self::identity();
        out.set_translation(t.x, t.y, t.z);
        out
    }

    /// Rotation about the X axis, zero translation.
    pub fn rot_x(angle: f64) -> Self {
        Self::from_rotation(&rotation::rot_x(angle))
    }

    /// Rotation about the Y axis, zero translation.
    pub fn rot_y(angle: f64) -> Self {
        Self::from_rotation(&rotation::rot_y(angle))
    }

    /// Rotation about the Z axis, zero translation.
    pub fn rot_z(angle: f64) -> Self {
        Self::from_rotation(&rotation::rot_z(angle))
    }

    // ========================================================================
    // Setters
    // ========================================================================

    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Replace the rotation block, leaving the translation alone.
    pub fn set_rotation(&mut self, r: &RotationMatrix) {
        self.m00 = r[0];
        self.m01 = r[1];
        self.m02 = r[2];
        self.m10 = r[3];
        self.m11 = r[4];
        self.m12 = r[5];
        self.m20 = r[6];
        self.m21 = r[7];
        self.m22 = r[8];
    }

    /// Replace the rotation block from a quaternion, leaving the
    /// translation alone. The quaternion is not renormalised.
    pub fn set_rotation_quaternion(&mut self, q: Quaternion) {
        self.set_rotation(&rotation::matrix_from_quaternion(q));
    }

    /// Replace the rotation block from an axis-angle, leaving the
    /// translation alone. A near-zero axis sets the identity rotation.
    pub fn set_rotation_axis_angle(&mut self, aa: AxisAngle) {
        self.set_rotation(&rotation::matrix_from_axis_angle(aa.x, aa.y, aa.z, aa.angle));
    }

    /// Set the rotation from XYZ Euler angles and zero the translation.
    pub fn set_euler_xyz(&mut self, rx: f64, ry: f64, rz: f64) {
        self.set_rotation(&rotation::matrix_from_euler_xyz(rx, ry, rz));
        self.zero_translation();
    }

    pub fn set_translation(&mut self, x: f64, y: f64, z: f64) {
        self.m03 = x;
        self.m13 = y;
        self.m23 = z;
    }

    /// Set the translation and reset the rotation to identity.
    pub fn set_translation_and_identity_rotation(&mut self, t: Vector3) {
        self.set_translation(t.x, t.y, t.z);
        self.set_rotation_to_identity();
    }

    pub fn set_rotation_to_identity(&mut self) {
        self.set_rotation(&rotation::IDENTITY);
    }

    pub fn zero_translation(&mut self) {
        self.set_translation(0.0, 0.0, 0.0);
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// The rotation block, row-major.
    pub fn rotation_matrix(&self) -> RotationMatrix {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        ]
    }

    /// The rotation as a unit quaternion `[x, y, z, w]`.
    ///
    /// Sign is not fixed: `q` and `-q` describe the same rotation.
    pub fn rotation_quaternion(&self) -> Quaternion {
        rotation::quaternion_from_matrix(&self.rotation_matrix())
    }

    /// The rotation in axis-angle form, default small-angle threshold.
    pub fn rotation_axis_angle(&self) -> AxisAngle {
        rotation::axis_angle_from_matrix(&self.rotation_matrix())
    }

    /// The rotation in axis-angle form with an explicit threshold.
    pub fn rotation_axis_angle_with_epsilon(&self, epsilon: f64) -> AxisAngle {
        rotation::axis_angle_from_matrix_with_epsilon(&self.rotation_matrix(), epsilon)
    }

    /// XYZ Euler angles of the rotation. Undefined near `|ry| = pi/2`.
    pub fn euler_xyz(&self) -> [f64; 3] {
        rotation::euler_xyz_from_matrix(&self.rotation_matrix())
    }

    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m03, self.m13, self.m23)
    }

    /// Pack into a 4x4 row-major matrix with bottom row `[0, 0, 0, 1]`.
    pub fn to_matrix4(&self) -> [[f64; 4]; 4] {
        [
            [self.m00, self.m01, self.m02, self.m03],
            [self.m10, self.m11, self.m12, self.m13],
            [self.m20, self.m21, self.m22, self.m23],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// `self * other`, out of place.
    ///
    /// Composition follows the row-vector-on-the-right convention used
    /// throughout the crate: the right factor is applied first.
    pub fn compose(&self, other: &RigidTransform) -> RigidTransform {
        let mut out = *self;
        out.multiply(other);
        out
    }

    /// `self = self * other`, multiplying on the right.
    pub fn multiply(&mut self, other: &RigidTransform) {
        let t00 = self.m00 * other.m00 + self.m01 * other.m10 + self.m02 * other.m20;
        let t01 = self.m00 * other.m01 + self.m01 * other.m11 + self.m02 * other.m21;
        let t02 = self.m00 * other.m02 + self.m01 * other.m12 + self.m02 * other.m22;
        let t03 = self.m00 * other.m03 + self.m01 * other.m13 + self.m02 * other.m23 + self.m03;

        let t10 = self.m10 * other.m00 + self.m11 * other.m10 + self.m12 * other.m20;
        let t11 = self.m10 * other.m01 + self.m11 * other.m11 + self.m12 * other.m21;
        let t12 = self.m10 * other.m02 + self.m11 * other.m12 + self.m12 * other.m22;
        let t13 = self.m10 * other.m03 + self.m11 * other.m13 + self.m12 * other.m23 + self.m13;

        let t20 = self.m20 * other.m00 + self.m21 * other.m10 + self.m22 * other.m20;
        let t21 = self.m20 * other.m01 + self.m21 * other.m11 + self.m22 * other.m21;
        let t22 = self.m20 * other.m02 + self.m21 * other.m12 + self.m22 * other.m22;
        let t23 = self.m20 * other.m03 + self.m21 * other.m13 + self.m22 * other.m23 + self.m23;

        self.m00 = t00;
        self.m01 = t01;
        self.m02 = t02;
        self.m03 = t03;
        self.m10 = t10;
        self.m11 = t11;
        self.m12 = t12;
        self.m13 = t13;
        self.m20 = t20;
        self.m21 = t21;
        self.m22 = t22;
        self.m23 = t23;
    }

    /// Invert in place, exploiting orthogonality of the rotation block:
    /// `R <- R^T`, `t <- -R^T * t`.
    pub fn invert(&mut self) {
        let (tx, ty, tz) = (self.m03, self.m13, self.m23);

        std::mem::swap(&mut self.m01, &mut self.m10);
        std::mem::swap(&mut self.m02, &mut self.m20);
        std::mem::swap(&mut self.m12, &mut self.m21);

        self.m03 = -(self.m00 * tx + self.m01 * ty + self.m02 * tz);
        self.m13 = -(self.m10 * tx + self.m11 * ty + self.m12 * tz);
        self.m23 = -(self.m20 * tx + self.m21 * ty + self.m22 * tz);
    }

    /// The inverse, out of place.
    pub fn inverse(&self) -> RigidTransform {
        let mut out = *self;
        out.invert();
        out
    }

    /// Transpose the rotation block, keeping the translation untouched.
    pub fn invert_rotation_keep_translation(&mut self) {
        std::mem::swap(&mut self.m01, &mut self.m10);
        std::mem::swap(&mut self.m02, &mut self.m20);
        std::mem::swap(&mut self.m12, &mut self.m21);
    }

    /// `R * p + t`.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        let mut out = p;
        self.transform_point_in_place(&mut out);
        out
    }

    /// `p <- R * p + t`.
    pub fn transform_point_in_place(&self, p: &mut Point3) {
        let x = self.m00 * p.x + self.m01 * p.y + self.m02 * p.z + self.m03;
        let y = self.m10 * p.x + self.m11 * p.y + self.m12 * p.z + self.m13;
        p.z = self.m20 * p.x + self.m21 * p.y + self.m22 * p.z + self.m23;
        p.x = x;
        p.y = y;
    }

    /// `R * v`. Translation does not apply to vectors.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let mut out = v;
        self.transform_vector_in_place(&mut out);
        out
    }

    /// `v <- R * v`.
    pub fn transform_vector_in_place(&self, v: &mut Vector3) {
        let x = self.m00 * v.x + self.m01 * v.y + self.m02 * v.z;
        let y = self.m10 * v.x + self.m11 * v.y + self.m12 * v.z;
        v.z = self.m20 * v.x + self.m21 * v.y + self.m22 * v.z;
        v.x = x;
        v.y = y;
    }

    /// Transform a homogeneous point `[x, y, z, 1]`.
    ///
    /// Errors when the weight is not exactly 1; the weight is preserved
    /// in the result.
    pub fn transform_homogeneous(&self, v: [f64; 4]) -> GeometryResult<[f64; 4]> {
        if v[3] != 1.0 {
            return Err(GeometryError::InvalidHomogeneousWeight(v[3]));
        }
        Ok([
            self.m00 * v[0] + self.m01 * v[1] + self.m02 * v[2] + self.m03,
            self.m10 * v[0] + self.m11 * v[1] + self.m12 * v[2] + self.m13,
            self.m20 * v[0] + self.m21 * v[1] + self.m22 * v[2] + self.m23,
            1.0,
        ])
    }

    /// Post-translate by `delta` expressed in the local frame:
    /// `t <- R * delta + t`.
    pub fn apply_translation(&mut self, delta: Vector3) {
        let moved = self.transform_point(Point3::new(delta.x, delta.y, delta.z));
        self.m03 = moved.x;
        self.m13 = moved.y;
        self.m23 = moved.z;
    }

    /// Right-multiply by a rotation about the X axis.
    pub fn apply_rotation_x(&mut self, angle: f64) {
        self.multiply(&RigidTransform::rot_x(angle));
    }

    /// Right-multiply by a rotation about the Y axis.
    pub fn apply_rotation_y(&mut self, angle: f64) {
        self.multiply(&RigidTransform::rot_y(angle));
    }

    /// Right-multiply by a rotation about the Z axis.
    pub fn apply_rotation_z(&mut self, angle: f64) {
        self.multiply(&RigidTransform::rot_z(angle));
    }

    /// Orthonormalise the rotation block with Gram-Schmidt.
    pub fn normalize(&mut self) {
        let mut r = self.rotation_matrix();
        rotation::gram_schmidt(&mut r);
        self.set_rotation(&r);
    }

    /// Determinant of the rotation block. +1 for a proper rotation.
    pub fn determinant(&self) -> f64 {
        self.m00 * (self.m11 * self.m22 - self.m12 * self.m21)
            - self.m01 * (self.m10 * self.m22 - self.m12 * self.m20)
            + self.m02 * (self.m10 * self.m21 - self.m11 * self.m20)
    }

    /// All twelve scalars within `epsilon` of `other`'s.
    pub fn epsilon_equals(&self, other: &RigidTransform, epsilon: f64) -> bool {
        (self.m00 - other.m00).abs() < epsilon
            && (self.m01 - other.m01).abs() < epsilon
            && (self.m02 - other.m02).abs() < epsilon
            && (self.m03 - other.m03).abs() < epsilon
            && (self.m10 - other.m10).abs() < epsilon
            && (self.m11 - other.m11).abs() < epsilon
            && (self.m12 - other.m12).abs() < epsilon
            && (self.m13 - other.m13).abs() < epsilon
            && (self.m20 - other.m20).abs() < epsilon
            && (self.m21 - other.m21).abs() < epsilon
            && (self.m22 - other.m22).abs() < epsilon
            && (self.m23 - other.m23).abs() < epsilon
    }

    /// [`epsilon_equals`](Self::epsilon_equals) at [`DEFAULT_EPSILON`].
    pub fn approx_eq(&self, other: &RigidTransform) -> bool {
        self.epsilon_equals(other, DEFAULT_EPSILON)
    }

    /// `b.translation - a.translation`.
    pub fn translation_difference(a: &RigidTransform, b: &RigidTransform) -> Vector3 {
        b.translation() - a.translation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_point_round_trip() {
        let tf = RigidTransform::identity();
        let p = tf.transform_point(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_degenerate_axis_angle_keeps_translation() {
        let tf = RigidTransform::from_axis_angle_and_translation(
            AxisAngle::new(0.0, 0.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(tf.rotation_matrix(), rotation::IDENTITY);
        assert_eq!(tf.translation(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_point_rotation_and_translation() {
        let mut tf = RigidTransform::rot_z(PI / 2.0);
        tf.set_translation(1.0, 0.0, 0.0);
        let p = tf.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert!(p.epsilon_equals(&Point3::new(1.0, 1.0, 0.0), 1.0e-12));
    }

    #[test]
    fn test_vector_ignores_translation() {
        let mut tf = RigidTransform::rot_z(PI / 2.0);
        tf.set_translation(10.0, -4.0, 2.0);
        let v = tf.transform_vector(Vector3::new(1.0, 0.0, 0.0));
        assert!(v.epsilon_equals(&Vector3::new(0.0, 1.0, 0.0), 1.0e-12));
    }

    #[test]
    fn test_point_vector_difference_is_translation() {
        let tf = RigidTransform::from_euler_xyz(0.3, -0.2, 0.9)
            .compose(&RigidTransform::from_translation(Vector3::new(4.0, 5.0, 6.0)));
        let p = Point3::new(-1.0, 7.0, 2.5);
        let moved = tf.transform_point(p);
        let rotated = tf.transform_vector(Vector3::new(p.x, p.y, p.z));
        let diff = moved - Point3::new(rotated.x, rotated.y, rotated.z);
        assert!(diff.epsilon_equals(&tf.translation(), 1.0e-12));
    }

    #[test]
    fn test_compose_inverse_is_identity() {
        let tf = RigidTransform::from_euler_xyz(0.4, 1.1, -0.7)
            .compose(&RigidTransform::from_translation(Vector3::new(2.0, -3.0, 0.5)));
        let id = RigidTransform::identity();
        assert!(tf.compose(&tf.inverse()).epsilon_equals(&id, 1.0e-12));
        assert!(tf.inverse().compose(&tf).epsilon_equals(&id, 1.0e-12));
    }

    #[test]
    fn test_invert_rotation_keep_translation() {
        let mut tf = RigidTransform::from_euler_xyz(0.4, 0.2, -0.1);
        tf.set_translation(7.0, 8.0, 9.0);
        let r = tf.rotation_matrix();

        tf.invert_rotation_keep_translation();
        assert_eq!(tf.translation(), Vector3::new(7.0, 8.0, 9.0));

        let rt = tf.rotation_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(rt[3 * i + j], r[3 * j + i]);
            }
        }
    }

    #[test]
    fn test_homogeneous_weight_checked() {
        let tf = RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let out = tf.transform_homogeneous([1.0, 2.0, 3.0, 1.0]).unwrap();
        assert_eq!(out, [2.0, 2.0, 3.0, 1.0]);

        let err = tf.transform_homogeneous([1.0, 2.0, 3.0, 0.5]).unwrap_err();
        assert_eq!(err, GeometryError::InvalidHomogeneousWeight(0.5));
    }

    #[test]
    fn test_apply_translation_is_local() {
        // Facing +Y after the Z rotation, a local +X step moves the
        // origin along world +Y.
        let mut tf = RigidTransform::rot_z(PI / 2.0);
        tf.apply_translation(Vector3::new(1.0, 0.0, 0.0));
        assert!(tf
            .translation()
            .epsilon_equals(&Vector3::new(0.0, 1.0, 0.0), 1.0e-12));
    }

    #[test]
    fn test_apply_rotation_right_multiplies() {
        let mut tf = RigidTransform::rot_x(0.3);
        tf.apply_rotation_y(0.5);
        let expected = RigidTransform::rot_x(0.3).compose(&RigidTransform::rot_y(0.5));
        assert!(tf.epsilon_equals(&expected, 1.0e-12));
    }

    #[test]
    fn test_determinant_of_rotation_is_one() {
        let tf = RigidTransform::from_euler_xyz(1.2, -0.8, 0.3);
        assert!((tf.determinant() - 1.0).abs() < 1.0e-12);

        let mut mirrored = tf;
        mirrored.m00 = -mirrored.m00;
        mirrored.m10 = -mirrored.m10;
        mirrored.m20 = -mirrored.m20;
        assert!((mirrored.determinant() + 1.0).abs() < 1.0e-12);
    }

    #[test]
    fn test_matrix4_round_trip() {
        let tf = RigidTransform::from_euler_xyz(0.1, 0.2, 0.3)
            .compose(&RigidTransform::from_translation(Vector3::new(1.0, 2.0, 3.0)));
        let back = RigidTransform::from_matrix4(&tf.to_matrix4());
        assert_eq!(tf, back);
        assert_eq!(tf.to_matrix4()[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quaternion_getter_normalises() {
        let tf = RigidTransform::from_euler_xyz(0.2, 0.4, -1.0);
        let q = tf.rotation_quaternion();
        let norm = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
        assert!((norm - 1.0).abs() < 1.0e-12);
    }

    #[test]
    fn test_set_euler_zeroes_translation() {
        let mut tf = RigidTransform::from_translation(Vector3::new(9.0, 9.0, 9.0));
        tf.set_euler_xyz(0.1, 0.2, 0.3);
        assert_eq!(tf.translation(), Vector3::default());
    }

    #[test]
    fn test_translation_difference() {
        let a = RigidTransform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let b = RigidTransform::from_translation(Vector3::new(4.0, 4.0, 4.0));
        let d = RigidTransform::translation_difference(&a, &b);
        assert_eq!(d, Vector3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_zero_translation_constructors() {
        let aa = AxisAngle::new(0.0, 0.0, 1.0, 0.4);
        let from_aa = RigidTransform::from_axis_angle(aa);
        assert_eq!(from_aa.translation(), Vector3::default());
        assert!(from_aa.epsilon_equals(&RigidTransform::rot_z(0.4), 1.0e-12));

        let q = from_aa.rotation_quaternion();
        let from_q = RigidTransform::from_quaternion(q);
        assert!(from_q.approx_eq(&from_aa));

        let from_r = RigidTransform::from_rotation(&from_aa.rotation_matrix());
        assert!(from_r.approx_eq(&from_aa));
    }

    #[test]
    fn test_axis_angle_getter() {
        let tf = RigidTransform::from_axis_angle_and_translation(
            AxisAngle::new(0.0, 1.0, 0.0, 1.2),
            Vector3::new(1.0, 1.0, 1.0),
        );
        let aa = tf.rotation_axis_angle();
        assert!(aa.epsilon_equals(&AxisAngle::new(0.0, 1.0, 0.0, 1.2), 1.0e-10));

        let loose = tf.rotation_axis_angle_with_epsilon(1.0e-8);
        assert!(loose.epsilon_equals(&aa, 1.0e-10));
    }

    #[test]
    fn test_rotation_setters_leave_translation() {
        let mut tf = RigidTransform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        tf.set_rotation_quaternion(RigidTransform::rot_x(0.3).rotation_quaternion());
        assert_eq!(tf.translation(), Vector3::new(1.0, 2.0, 3.0));

        tf.set_rotation_axis_angle(AxisAngle::new(1.0, 0.0, 0.0, -0.3));
        assert_eq!(tf.translation(), Vector3::new(1.0, 2.0, 3.0));

        tf.set_translation_and_identity_rotation(Vector3::new(4.0, 5.0, 6.0));
        assert!(tf.approx_eq(&RigidTransform::from_translation(Vector3::new(4.0, 5.0, 6.0))));
    }

    #[test]
    fn test_serde_round_trip() {
        let tf = RigidTransform::from_euler_xyz(0.5, -0.2, 0.8)
            .compose(&RigidTransform::from_translation(Vector3::new(1.0, -2.0, 0.25)));
        let json = serde_json::to_string(&tf).unwrap();
        let back: RigidTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(tf, back);
    }

    #[test]
    fn test_pod_round_trip() {
        let tf = RigidTransform::identity();
        let bytes: &[u8] = bytemuck::bytes_of(&tf);
        assert_eq!(bytes.len(), 96);
        let back: RigidTransform = *bytemuck::from_bytes(bytes);
        assert_eq!(back, tf);
    }
}
