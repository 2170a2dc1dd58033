//! 3D position.
//!
//! [`Point3`] is a location in space. Under a 4x4 transform it is extended
//! with `w = 1`, so translation applies, and the result is divided by the
//! transformed `w`.

use std::ops::{Add, Index, IndexMut, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Vector3;

/// A position in 3D space.
///
/// Points and vectors combine the affine way: the difference of two points is
/// a [`Vector3`], and a point offset by a vector is another point. Adding two
/// points is not defined.
///
/// # Example
///
/// ```rust
/// use trace_core::{Point3, Vector3};
///
/// let p = Point3::ORIGIN + Vector3::new(1.0, 2.0, 2.0);
/// assert_eq!(p.distance(Point3::ORIGIN), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3 {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Returns true if all coordinates are finite (not NaN or infinite).
    ///
    /// A point pushed through a projective transform with `w == 0` comes
    /// back non-finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Point3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Point3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3 index out of bounds: {}", i),
        }
    }
}

// Point3 - Point3 = Vector3
impl Sub for Point3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Point3 + Vector3 = Point3
impl Add<Vector3> for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vector3) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Point3 - Vector3 = Point3
impl Sub<Vector3> for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vector3) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[f64; 3]> for Point3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Point3> for [f64; 3] {
    #[inline]
    fn from(p: Point3) -> [f64; 3] {
        p.to_array()
    }
}

impl From<glam::DVec3> for Point3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Point3> for glam::DVec3 {
    #[inline]
    fn from(p: Point3) -> glam::DVec3 {
        p.to_glam()
    }
}
