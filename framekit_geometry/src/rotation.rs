//! Rotation-representation conversions
//!
//! Pure functions over row-major 3x3 rotation matrices, unit quaternions
//! in `[x, y, z, w]` order, axis-angle records, and XYZ Euler triples.
//! All angles are in radians. Degenerate inputs produce documented
//! fallback values, never errors.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Row-major 3x3 rotation matrix.
///
/// Element `(i, j)` lives at index `3 * i + j`.
pub type RotationMatrix = [f64; 9];

/// Quaternion as `[x, y, z, w]`.
pub type Quaternion = [f64; 4];

/// The identity rotation.
pub const IDENTITY: RotationMatrix = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Axis magnitudes below this are treated as zero when building a
/// rotation from axis-angle.
pub const ALMOST_ZERO: f64 = 1.0e-5;

/// Default small-angle threshold for axis-angle extraction.
pub const AXIS_ANGLE_EPSILON: f64 = 1.0e-12;

/// Rotation parametrised by a (unit) axis and an angle in radians.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct AxisAngle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub angle: f64,
}

impl AxisAngle {
    pub fn new(x: f64, y: f64, z: f64, angle: f64) -> Self {
        Self { x, y, z, angle }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64, angle: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.angle = angle;
    }

    pub fn epsilon_equals(&self, other: &AxisAngle, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.angle - other.angle).abs() < epsilon
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            angle: 0.0,
        }
    }
}

/// Build a rotation matrix from an axis and an angle.
///
/// The axis is normalised internally. An axis with magnitude below
/// [`ALMOST_ZERO`] yields the identity.
pub fn matrix_from_axis_angle(x: f64, y: f64, z: f64, angle: f64) -> RotationMatrix {
    let mag = (x * x + y * y + z * z).sqrt();
    if mag < ALMOST_ZERO {
        return IDENTITY;
    }

    let inv = 1.0 / mag;
    let ax = x * inv;
    let ay = y * inv;
    let az = z * inv;

    let (sin, cos) = angle.sin_cos();
    let t = 1.0 - cos;

    let xy = ax * ay;
    let xz = ax * az;
    let yz = ay * az;

    [
        t * ax * ax + cos,
        t * xy - sin * az,
        t * xz + sin * ay,
        t * xy + sin * az,
        t * ay * ay + cos,
        t * yz - sin * ax,
        t * xz - sin * ay,
        t * yz + sin * ax,
        t * az * az + cos,
    ]
}

/// Build a rotation matrix from a quaternion `[x, y, z, w]`.
///
/// The quaternion is not renormalised; the caller owns unit length.
pub fn matrix_from_quaternion(q: Quaternion) -> RotationMatrix {
    let [qx, qy, qz, qw] = q;

    let xx2 = 2.0 * qx * qx;
    let yy2 = 2.0 * qy * qy;
    let zz2 = 2.0 * qz * qz;
    let xy2 = 2.0 * qx * qy;
    let xz2 = 2.0 * qx * qz;
    let yz2 = 2.0 * qy * qz;
    let wx2 = 2.0 * qw * qx;
    let wy2 = 2.0 * qw * qy;
    let wz2 = 2.0 * qw * qz;

    [
        1.0 - yy2 - zz2,
        xy2 - wz2,
        xz2 + wy2,
        xy2 + wz2,
        1.0 - xx2 - zz2,
        yz2 - wx2,
        xz2 - wy2,
        yz2 + wx2,
        1.0 - xx2 - yy2,
    ]
}

/// Build a rotation matrix from XYZ Euler angles.
///
/// The result is `Rz * Ry * Rx` applied to column vectors: a rotation
/// about X, then Y, then Z.
pub fn matrix_from_euler_xyz(rx: f64, ry: f64, rz: f64) -> RotationMatrix {
    let (sa, ca) = rx.sin_cos();
    let (sb, cb) = ry.sin_cos();
    let (sc, cc) = rz.sin_cos();

    [
        cb * cc,
        -(ca * sc) + (sa * sb * cc),
        (sa * sc) + (ca * sb * cc),
        cb * sc,
        (ca * cc) + (sa * sb * sc),
        -(sa * cc) + (ca * sb * sc),
        -sb,
        sa * cb,
        ca * cb,
    ]
}

/// Rotation about the X axis.
pub fn rot_x(angle: f64) -> RotationMatrix {
    let (sin, cos) = angle.sin_cos();
    [1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos]
}

/// Rotation about the Y axis.
pub fn rot_y(angle: f64) -> RotationMatrix {
    let (sin, cos) = angle.sin_cos();
    [cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos]
}

/// Rotation about the Z axis.
pub fn rot_z(angle: f64) -> RotationMatrix {
    let (sin, cos) = angle.sin_cos();
    [cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0]
}

/// Extract a unit quaternion `[x, y, z, w]` from a rotation matrix.
///
/// Branches on the largest of the four trace candidates to avoid
/// cancellation. The sign of the result is not fixed: `q` and `-q`
/// describe the same rotation and either may be returned.
pub fn quaternion_from_matrix(m: &RotationMatrix) -> Quaternion {
    let t0 = 1.0 + m[0] + m[4] + m[8];
    let t1 = 1.0 + m[0] - m[4] - m[8];
    let t2 = 1.0 - m[0] + m[4] - m[8];
    let t3 = 1.0 - m[0] - m[4] + m[8];

    let (x, y, z, w);
    if t0 >= t1 && t0 >= t2 && t0 >= t3 {
        let s = 2.0 * t0.max(0.0).sqrt();
        x = (m[7] - m[5]) / s;
        y = (m[2] - m[6]) / s;
        z = (m[3] - m[1]) / s;
        w = 0.25 * s;
    } else if t1 >= t2 && t1 >= t3 {
        let s = 2.0 * t1.max(0.0).sqrt();
        x = 0.25 * s;
        y = (m[1] + m[3]) / s;
        z = (m[2] + m[6]) / s;
        w = (m[7] - m[5]) / s;
    } else if t2 >= t3 {
        let s = 2.0 * t2.max(0.0).sqrt();
        x = (m[1] + m[3]) / s;
        y = 0.25 * s;
        z = (m[5] + m[7]) / s;
        w = (m[2] - m[6]) / s;
    } else {
        let s = 2.0 * t3.max(0.0).sqrt();
        x = (m[2] + m[6]) / s;
        y = (m[5] + m[7]) / s;
        z = 0.25 * s;
        w = (m[3] - m[1]) / s;
    }

    normalize_quaternion([x, y, z, w])
}

/// Extract an axis-angle from a rotation matrix with the default
/// small-angle threshold.
pub fn axis_angle_from_matrix(m: &RotationMatrix) -> AxisAngle {
    axis_angle_from_matrix_with_epsilon(m, AXIS_ANGLE_EPSILON)
}

/// Extract an axis-angle from a rotation matrix.
///
/// The general branch reads the axis off the skew-symmetric part. Near
/// the identity the result is `angle = 0` about `(1, 0, 0)`. On the
/// antipodal branch (angle near pi, where the skew part vanishes) the
/// axis is recovered from the dominant diagonal entry, signs fixed by
/// the off-diagonal sums. The returned axis is unit length.
pub fn axis_angle_from_matrix_with_epsilon(m: &RotationMatrix, epsilon: f64) -> AxisAngle {
    let ax = m[7] - m[5];
    let ay = m[2] - m[6];
    let az = m[3] - m[1];
    let mag2 = ax * ax + ay * ay + az * az;

    if mag2 > epsilon {
        let mag = mag2.sqrt();
        let sin = 0.5 * mag;
        let cos = 0.5 * (m[0] + m[4] + m[8] - 1.0);
        let angle = sin.atan2(cos);

        let inv = 1.0 / mag;
        return AxisAngle::new(ax * inv, ay * inv, az * inv, angle);
    }

    if is_rotation_near_identity(m, 10.0 * epsilon) {
        return AxisAngle::new(1.0, 0.0, 0.0, 0.0);
    }

    // Angle is pi; the axis survives only on the diagonal.
    let xx = (m[0] + 1.0) / 2.0;
    let yy = (m[4] + 1.0) / 2.0;
    let zz = (m[8] + 1.0) / 2.0;
    let xy = (m[1] + m[3]) / 4.0;
    let xz = (m[2] + m[6]) / 4.0;
    let yz = (m[5] + m[7]) / 4.0;
    let cos45 = (std::f64::consts::PI / 4.0).cos();

    let mut out = AxisAngle::new(0.0, 0.0, 0.0, std::f64::consts::PI);
    if xx > yy && xx > zz {
        if xx < epsilon {
            out.x = 0.0;
            out.y = cos45;
            out.z = cos45;
        } else {
            out.x = xx.sqrt();
            out.y = xy / out.x;
            out.z = xz / out.x;
        }
    } else if yy > zz {
        if yy < epsilon {
            out.x = cos45;
            out.y = 0.0;
            out.z = cos45;
        } else {
            out.y = yy.sqrt();
            out.x = xy / out.y;
            out.z = yz / out.y;
        }
    } else if zz < epsilon {
        out.x = cos45;
        out.y = cos45;
        out.z = 0.0;
    } else {
        out.z = zz.sqrt();
        out.x = xz / out.z;
        out.y = yz / out.z;
    }
    out
}

/// Extract XYZ Euler angles from a rotation matrix.
///
/// Inverse of [`matrix_from_euler_xyz`]. Undefined near `|ry| = pi/2`
/// (gimbal lock); no flag is raised there.
pub fn euler_xyz_from_matrix(m: &RotationMatrix) -> [f64; 3] {
    [
        m[7].atan2(m[8]),
        (-m[6]).atan2((m[7] * m[7] + m[8] * m[8]).sqrt()),
        m[3].atan2(m[0]),
    ]
}

/// True when the matrix is within `epsilon` of the identity rotation.
///
/// Checks the off-diagonal sums and the trace, which together separate
/// the identity from the antipodal (angle pi) rotations that also have
/// a vanishing skew-symmetric part.
pub fn is_rotation_near_identity(m: &RotationMatrix, epsilon: f64) -> bool {
    (m[1] + m[3]).abs() < epsilon
        && (m[2] + m[6]).abs() < epsilon
        && (m[5] + m[7]).abs() < epsilon
        && (m[0] + m[4] + m[8] - 3.0).abs() < epsilon
}

/// Orthonormalise the columns of a rotation matrix in place.
///
/// Gram-Schmidt in X, Y, Z column order with a final renormalisation
/// of all three columns. The remedy for accumulated drift.
pub fn gram_schmidt(m: &mut RotationMatrix) {
    let xdoty = m[0] * m[1] + m[3] * m[4] + m[6] * m[7];
    let xdotx = m[0] * m[0] + m[3] * m[3] + m[6] * m[6];
    let tmp = xdoty / xdotx;

    m[1] -= tmp * m[0];
    m[4] -= tmp * m[3];
    m[7] -= tmp * m[6];

    let zdoty = m[2] * m[1] + m[5] * m[4] + m[8] * m[7];
    let zdotx = m[2] * m[0] + m[5] * m[3] + m[8] * m[6];
    let ydoty = m[1] * m[1] + m[4] * m[4] + m[7] * m[7];

    let tmp = zdotx / xdotx;
    let tmp1 = zdoty / ydoty;

    m[2] -= tmp * m[0] + tmp1 * m[1];
    m[5] -= tmp * m[3] + tmp1 * m[4];
    m[8] -= tmp * m[6] + tmp1 * m[7];

    let mag_x = (m[0] * m[0] + m[3] * m[3] + m[6] * m[6]).sqrt();
    let mag_y = (m[1] * m[1] + m[4] * m[4] + m[7] * m[7]).sqrt();
    let mag_z = (m[2] * m[2] + m[5] * m[5] + m[8] * m[8]).sqrt();

    m[0] /= mag_x;
    m[3] /= mag_x;
    m[6] /= mag_x;
    m[1] /= mag_y;
    m[4] /= mag_y;
    m[7] /= mag_y;
    m[2] /= mag_z;
    m[5] /= mag_z;
    m[8] /= mag_z;
}

fn normalize_quaternion(q: Quaternion) -> Quaternion {
    let norm = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if norm < 1.0e-10 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    [q[0] / norm, q[1] / norm, q[2] / norm, q[3] / norm]
}
