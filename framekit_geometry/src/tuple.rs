//! 3D point and vector value types
//!
//! Plain f64 tuples used throughout the transform algebra. Both are
//! `#[repr(C)]` Pod types so they can cross zero-copy boundaries, and
//! both serialize with serde. A `Point3` is a location (translation
//! applies to it); a `Vector3` is a displacement (translation does not).

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D point, f64 precision.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D vector, f64 precision.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

macro_rules! tuple_common {
    ($name:ident) => {
        impl $name {
            pub fn new(x: f64, y: f64, z: f64) -> Self {
                Self { x, y, z }
            }

            pub fn set(&mut self, x: f64, y: f64, z: f64) {
                self.x = x;
                self.y = y;
                self.z = z;
            }

            pub fn negate(&mut self) {
                self.x = -self.x;
                self.y = -self.y;
                self.z = -self.z;
            }

            pub fn scale(&mut self, value: f64) {
                self.x *= value;
                self.y *= value;
                self.z *= value;
            }

            /// `self = self * value + other`
            pub fn scale_add(&mut self, value: f64, other: &$name) {
                self.scale(value);
                self.x += other.x;
                self.y += other.y;
                self.z += other.z;
            }

            pub fn absolute_value(&mut self) {
                self.x = self.x.abs();
                self.y = self.y.abs();
                self.z = self.z.abs();
            }

            pub fn clamp_min(&mut self, min: f64) {
                self.x = self.x.max(min);
                self.y = self.y.max(min);
                self.z = self.z.max(min);
            }

            pub fn clamp_max(&mut self, max: f64) {
                self.x = self.x.min(max);
                self.y = self.y.min(max);
                self.z = self.z.min(max);
            }

            pub fn clamp_min_max(&mut self, min: f64, max: f64) {
                self.clamp_min(min);
                self.clamp_max(max);
            }

            pub fn epsilon_equals(&self, other: &$name, epsilon: f64) -> bool {
                (self.x - other.x).abs() < epsilon
                    && (self.y - other.y).abs() < epsilon
                    && (self.z - other.z).abs() < epsilon
            }
        }

        impl From<[f64; 3]> for $name {
            fn from(a: [f64; 3]) -> Self {
                Self::new(a[0], a[1], a[2])
            }
        }

        impl From<$name> for [f64; 3] {
            fn from(t: $name) -> [f64; 3] {
                [t.x, t.y, t.z]
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.x += rhs.x;
                self.y += rhs.y;
                self.z += rhs.z;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                self.x -= rhs.x;
                self.y -= rhs.y;
                self.z -= rhs.z;
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                $name::new(-self.x, -self.y, -self.z)
            }
        }
    };
}

tuple_common!(Point3);
tuple_common!(Vector3);

impl Point3 {
    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Manhattan distance.
    pub fn distance_l1(&self, other: &Point3) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Chebyshev distance.
    pub fn distance_linf(&self, other: &Point3) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl Vector3 {
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scale to unit length. A vector shorter than 1e-12 is left unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len < 1.0e-12 {
            return;
        }
        self.scale(1.0 / len);
    }

    /// Angle to `other` in radians, in `[0, pi]`.
    pub fn angle_between(&self, other: &Vector3) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
