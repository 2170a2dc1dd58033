//! 4x4 homogeneous transform matrix.
//!
//! [`Matrix4`] places objects in a scene and maps rays between world and
//! object space.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **row vectors**. A point
//! is extended with `w = 1` and multiplied on the left; row 3 holds the
//! translation:
//!
//! ```text
//!                   | m00 m01 m02 m03 |
//! [x y z 1]    *    | m10 m11 m12 m13 |   =   [x' y' z' w']
//!                   | m20 m21 m22 m23 |
//!                   | m30 m31 m32 m33 |
//! ```
//!
//! The transformed point is `(x'/w', y'/w', z'/w')`. Vectors use only the upper
//! left 3x3 block: no translation, no divide.
//!
//! Because of the row-vector convention, `a * b` applies `a` first and `b`
//! second.

use std::ops::{Index, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use trace_core::{Error, Point3, Result, Vector3};

/// A 4x4 homogeneous transform.
///
/// Stored in row-major order. Start from [`Matrix4::identity`] and compose
/// with [`translate`](Matrix4::translate) / [`scale`](Matrix4::scale), or
/// build one directly with [`Matrix4::from_rows`].
///
/// # Example
///
/// ```rust
/// use trace_math::{Matrix4, Point3, Vector3};
///
/// let mut m = Matrix4::identity();
/// m.translate(Vector3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(m.transform_point(Point3::ORIGIN), Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(m.rotate_vector(Vector3::ZERO), Vector3::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Matrix4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f64; 4]; 4],
}

impl Matrix4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns a new identity matrix.
    ///
    /// Every call produces an independent value; there is no shared instance
    /// to mutate.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trace_math::Matrix4;
    ///
    /// let m = Matrix4::from_rows([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Matrix4::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a pure translation.
    #[inline]
    pub fn from_translation(v: Vector3) -> Self {
        Self::IDENTITY.translated(v)
    }

    /// Creates a pure axis-aligned scale.
    #[inline]
    pub fn from_scale(v: Vector3) -> Self {
        Self::IDENTITY.scaled(v)
    }

    /// Adds `v` to the translation row in place.
    ///
    /// Only row 3, columns 0..3, change. Returns `self` so calls can be
    /// chained:
    ///
    /// ```rust
    /// use trace_math::{Matrix4, Point3, Vector3};
    ///
    /// let mut m = Matrix4::identity();
    /// m.translate(Vector3::X).translate(Vector3::Y);
    /// assert_eq!(m.transform_point(Point3::ORIGIN), Point3::new(1.0, 1.0, 0.0));
    /// ```
    #[inline]
    pub fn translate(&mut self, v: Vector3) -> &mut Self {
        self.m[3][0] += v.x;
        self.m[3][1] += v.y;
        self.m[3][2] += v.z;
        self
    }

    /// Multiplies the diagonal entries `[0][0]`, `[1][1]`, `[2][2]` by the
    /// components of `v` in place.
    ///
    /// The translation row is left alone, so scaling after a translation does
    /// not scale the offset. Returns `self` for chaining.
    #[inline]
    pub fn scale(&mut self, v: Vector3) -> &mut Self {
        self.m[0][0] *= v.x;
        self.m[1][1] *= v.y;
        self.m[2][2] *= v.z;
        self
    }

    /// By-value form of [`translate`](Self::translate).
    #[inline]
    #[must_use]
    pub fn translated(mut self, v: Vector3) -> Self {
        self.translate(v);
        self
    }

    /// By-value form of [`scale`](Self::scale).
    #[inline]
    #[must_use]
    pub fn scaled(mut self, v: Vector3) -> Self {
        self.scale(v);
        self
    }

    /// Returns a row.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 4] {
        self.m[i]
    }

    /// Returns a column.
    #[inline]
    pub fn col(&self, i: usize) -> [f64; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([self.col(0), self.col(1), self.col(2), self.col(3)])
    }

    /// Computes the inverse of this matrix.
    ///
    /// A singular matrix yields the identity rather than an error, so the
    /// result is not guaranteed to be a true inverse. Use
    /// [`try_inverse`](Self::try_inverse) to tell the two cases apart.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trace_math::{Matrix4, Point3, Vector3};
    ///
    /// let m = Matrix4::from_scale(Vector3::splat(2.0));
    /// let p = m.inverse().transform_point(Point3::new(2.0, 2.0, 2.0));
    /// assert_eq!(p, Point3::new(1.0, 1.0, 1.0));
    ///
    /// assert_eq!(Matrix4::ZERO.inverse(), Matrix4::IDENTITY);
    /// ```
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|err| {
            debug!(%err, "singular matrix, using identity as inverse");
            Self::identity()
        })
    }

    /// Computes the inverse, reporting singular input as an error.
    ///
    /// Gauss-Jordan elimination with partial pivoting. A pivot column with no
    /// non-zero entry gives [`Error::SingularPivot`]; a zero left on the
    /// diagonal during back substitution gives [`Error::SingularDiagonal`].
    /// Both checks compare against exactly `0.0`.
    pub fn try_inverse(&self) -> Result<Self> {
        let mut s = Self::IDENTITY.m;
        let mut t = self.m;
        let mut pivots = [0usize; 3];

        // Forward elimination
        for i in 0..3 {
            let mut pivot = i;
            let mut pivot_size = t[i][i].abs();

            for (j, row) in t.iter().enumerate().skip(i + 1) {
                let size = row[i].abs();
                if size > pivot_size {
                    pivot = j;
                    pivot_size = size;
                }
            }

            if pivot_size == 0.0 {
                return Err(Error::singular_pivot(i));
            }

            if pivot != i {
                t.swap(i, pivot);
                s.swap(i, pivot);
            }
            pivots[i] = pivot;

            for j in (i + 1)..4 {
                let f = t[j][i] / t[i][i];
                for k in 0..4 {
                    t[j][k] -= f * t[i][k];
                    s[j][k] -= f * s[i][k];
                }
            }
        }

        // Backward substitution
        for i in (0..4).rev() {
            let f = t[i][i];
            if f == 0.0 {
                return Err(Error::singular_diagonal(i));
            }

            for k in 0..4 {
                t[i][k] /= f;
                s[i][k] /= f;
            }

            for j in 0..i {
                let f = t[j][i];
                for k in 0..4 {
                    t[j][k] -= f * t[i][k];
                    s[j][k] -= f * s[i][k];
                }
            }
        }

        trace!(?pivots, "inverted matrix");
        Ok(Self::from_rows(s))
    }

    /// Returns `true` if [`try_inverse`](Self::try_inverse) succeeds.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.try_inverse().is_ok()
    }

    /// Transforms a point.
    ///
    /// Computes `[p.x, p.y, p.z, 1] * M` and divides by the resulting `w`.
    /// `w == 0` is not guarded against; the result is then infinite or NaN.
    #[inline]
    pub fn transform_point(&self, p: Point3) -> Point3 {
        let m = &self.m;
        let x = p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0];
        let y = p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1];
        let z = p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2];
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];

        Point3::new(x / w, y / w, z / w)
    }

    /// Transforms a direction vector by the upper-left 3x3 block.
    ///
    /// Translation (row 3) and the projective column 3 are ignored.
    #[inline]
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }

    /// Multiplies two matrices.
    ///
    /// The product applies `self` first, then `other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat4.
    ///
    /// glam uses column vectors, so its matrix is the transpose of this one;
    /// `to_glam().project_point3(p)` agrees with [`transform_point`](Self::transform_point).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat4 {
        glam::DMat4::from_cols_array_2d(&self.m)
    }

    /// Creates from glam DMat4.
    #[inline]
    pub fn from_glam(m: glam::DMat4) -> Self {
        Self::from_rows(m.to_cols_array_2d())
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix4 * Matrix4
impl Mul for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Matrix4 * Point3
impl Mul<Point3> for Matrix4 {
    type Output = Point3;

    #[inline]
    fn mul(self, rhs: Point3) -> Point3 {
        self.transform_point(rhs)
    }
}

// Matrix4 * Vector3
impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate_vector(rhs)
    }
}

impl Index<usize> for Matrix4 {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 4] {
        &self.m[i]
    }
}

impl From<glam::DMat4> for Matrix4 {
    #[inline]
    fn from(m: glam::DMat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix4> for glam::DMat4 {
    #[inline]
    fn from(m: Matrix4) -> glam::DMat4 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_mat_near(a: &Matrix4, b: &Matrix4, eps: f64) {
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(a.m[i][j], b.m[i][j], epsilon = eps);
            }
        }
    }

    #[test]
    fn test_mat4_identity() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(-4.0, 5.0, 0.5);
        assert_eq!(Matrix4::identity().transform_point(p), p);
        assert_eq!(Matrix4::identity().rotate_vector(v), v);
        assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_mat4_translate_mutates_in_place() {
        let mut m = Matrix4::identity();
        m.translate(Vector3::new(1.0, 2.0, 3.0))
            .translate(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(m.row(3), [2.0, 2.0, 3.0, 1.0]);
        assert_eq!(m.row(0), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mat4_scale_touches_diagonal_only() {
        let mut m = Matrix4::from_translation(Vector3::new(1.0, 1.0, 1.0));
        m.scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.m[0][0], 2.0);
        assert_eq!(m.m[1][1], 3.0);
        assert_eq!(m.m[2][2], 4.0);
        assert_eq!(m.m[3][3], 1.0);
        assert_eq!(m.row(3), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_mat4_translate_and_scale_commute() {
        let t = Vector3::new(1.0, -2.0, 3.0);
        let s = Vector3::new(2.0, 2.0, 0.5);
        let a = Matrix4::identity().translated(t).scaled(s);
        let b = Matrix4::identity().scaled(s).translated(t);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mat4_scale_point() {
        let m = Matrix4::from_scale(Vector3::new(2.0, 3.0, 4.0));
        let p = m.transform_point(Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mat4_inverse_affine_exact() {
        let m = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 8.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);
        let expected = Matrix4::from_rows([
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 0.25, 0.0, 0.0],
            [0.0, 0.0, 0.125, 0.0],
            [-0.5, -0.5, -0.375, 1.0],
        ]);
        assert_eq!(m.inverse(), expected);
    }

    #[test]
    fn test_mat4_inverse_with_pivoting() {
        // Zero on the leading diagonal forces a row swap.
        let m = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 2.0, 0.0],
            [0.0, 3.0, 1.0, 0.5],
            [4.0, 2.0, 3.0, 1.0],
        ]);
        let inv = m.try_inverse().unwrap();
        assert_mat_near(&(m * inv), &Matrix4::IDENTITY, 1e-12);
        assert_mat_near(&(inv * m), &Matrix4::IDENTITY, 1e-12);
    }

    #[test]
    fn test_mat4_inverse_picks_largest_pivot() {
        // Column 0 holds 0, 1, 0, 4: row 3 must be chosen over row 1, the
        // first non-zero entry. The other choice rounds differently.
        let m = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 2.0, 0.0],
            [0.0, 3.0, 1.0, 0.5],
            [4.0, 2.0, 3.0, 1.0],
        ]);
        let expected = Matrix4::from_rows([
            [1.1428571428571428, -0.14285714285714285, -0.5714285714285714, 0.2857142857142857],
            [1.0000000000000002, 0.0, 0.0, 0.0],
            [-0.5714285714285715, 0.5714285714285714, 0.2857142857142857, -0.14285714285714285],
            [-4.857142857142858, -1.1428571428571428, 1.4285714285714286, 0.2857142857142857],
        ]);
        let inv = m.try_inverse().unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(inv.m[i][j], expected.m[i][j], "element [{i}][{j}]");
            }
        }
    }

    #[test]
    fn test_mat4_inverse_pivot_tie_keeps_earlier_row() {
        // Rows 0 and 1 tie at |3| in column 0 with opposite signs; row 0
        // stays as pivot. Swapping in row 1 changes the low bits.
        let m = Matrix4::from_rows([
            [3.0, 1.0, 0.1, 0.0],
            [-3.0, 0.7, 0.3, 0.0],
            [1.0, 0.2, 0.9, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let expected = Matrix4::from_rows([
            [0.12445414847161569, -0.19213973799126638, 0.050218340611353725, 0.0],
            [0.6550218340611355, 0.5676855895196506, -0.2620087336244542, 0.0],
            [-0.2838427947598253, 0.0873362445414847, 1.1135371179039302, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = m.try_inverse().unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(inv.m[i][j], expected.m[i][j], "element [{i}][{j}]");
            }
        }
    }

    #[test]
    fn test_mat4_inverse_of_identity() {
        assert_eq!(Matrix4::IDENTITY.inverse(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_mat4_singular_zero_row() {
        let mut m = Matrix4::IDENTITY;
        m.m[0] = [0.0; 4];
        assert_eq!(m.try_inverse(), Err(Error::SingularPivot { column: 0 }));
        assert_eq!(m.inverse(), Matrix4::IDENTITY);
        assert!(!m.is_invertible());
    }

    #[test]
    fn test_mat4_singular_dependent_rows() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 0.0],
            [2.0, 4.0, 6.0, 0.0], // Row 1 = 2 * Row 0
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.try_inverse(), Err(Error::SingularPivot { column: 1 }));
        assert_eq!(m.inverse(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_mat4_singular_last_diagonal() {
        let mut m = Matrix4::IDENTITY;
        m.m[3][3] = 0.0;
        assert_eq!(m.try_inverse(), Err(Error::SingularDiagonal { row: 3 }));
        assert_eq!(m.inverse(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_mat4_inverse_leaves_receiver() {
        let m = Matrix4::from_scale(Vector3::splat(4.0));
        let before = m;
        let _ = m.inverse();
        assert_eq!(m, before);
    }

    #[test]
    fn test_mat4_rotate_vector_ignores_translation() {
        let m = Matrix4::identity().translated(Vector3::splat(5.0));
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(m.rotate_vector(v), v);
        assert_eq!(m * v, v);
    }

    #[test]
    fn test_mat4_rotate_vector_ignores_projective_column() {
        let mut m = Matrix4::IDENTITY;
        m.m[0][3] = 7.0;
        m.m[3][3] = 3.0;
        assert_eq!(m.rotate_vector(Vector3::X), Vector3::X);
    }

    #[test]
    fn test_mat4_rotation_about_z() {
        // Row-vector form of a 90 degree turn: X -> Y, Y -> -X.
        let m = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.rotate_vector(Vector3::X), Vector3::Y);
        assert_eq!(m.rotate_vector(Vector3::Y), -Vector3::X);
        assert_eq!(m.inverse(), m.transpose());
    }

    #[test]
    fn test_mat4_perspective_divide() {
        // w' = z
        let mut m = Matrix4::IDENTITY;
        m.m[2][3] = 1.0;
        m.m[3][3] = 0.0;
        let p = m.transform_point(Point3::new(2.0, 4.0, 2.0));
        assert_eq!(p, Point3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_mat4_zero_w_is_not_finite() {
        let mut m = Matrix4::IDENTITY;
        m.m[3][0] = 1.0;
        m.m[3][3] = 0.0;
        let p = m.transform_point(Point3::ORIGIN);
        assert!(p.x.is_infinite());
        assert!(p.y.is_nan());
        assert!(!p.is_finite());
    }

    #[test]
    fn test_mat4_mul_order() {
        let t = Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let s = Matrix4::from_scale(Vector3::splat(2.0));
        let p = Point3::ORIGIN;
        // translate, then scale
        assert_eq!((t * s).transform_point(p), Point3::new(2.0, 0.0, 0.0));
        // scale, then translate
        assert_eq!((s * t).transform_point(p), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_mat4_transpose_and_index() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let t = m.transpose();
        assert_eq!(t[0], [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m.col(3), [4.0, 8.0, 12.0, 16.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat4_is_finite() {
        assert!(Matrix4::IDENTITY.is_finite());
        let mut m = Matrix4::IDENTITY;
        m.m[2][1] = f64::NAN;
        assert!(!m.is_finite());
    }

    #[test]
    fn test_mat4_glam_agrees() {
        let m = Matrix4::from_rows([
            [1.0, 0.5, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.25],
            [3.0, -1.0, 2.0, 1.0],
        ]);
        let g = m.to_glam();
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(-1.0, 0.5, 2.0);

        let gp = Point3::from_glam(g.project_point3(p.to_glam()));
        let gv = Vector3::from_glam(g.transform_vector3(v.to_glam()));
        let ours_p = m.transform_point(p);
        let ours_v = m.rotate_vector(v);
        assert_abs_diff_eq!(gp.x, ours_p.x, epsilon = 1e-12);
        assert_abs_diff_eq!(gp.y, ours_p.y, epsilon = 1e-12);
        assert_abs_diff_eq!(gp.z, ours_p.z, epsilon = 1e-12);
        assert_abs_diff_eq!(gv.x, ours_v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(gv.y, ours_v.y, epsilon = 1e-12);
        assert_abs_diff_eq!(gv.z, ours_v.z, epsilon = 1e-12);

        assert_eq!(Matrix4::from(g), m);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_mat4_serde() {
        let m = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.starts_with(r#"{"m":[[1.0,0.0,0.0,0.0]"#));
        let back: Matrix4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
