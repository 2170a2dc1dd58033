//! # trace-math
//!
//! Transform math for the trace renderer.
//!
//! This crate provides [`Matrix4`], the 4x4 homogeneous matrix used to place
//! geometry in a scene and to move rays between world and object space:
//!
//! - composition with [`Matrix4::translate`] and [`Matrix4::scale`]
//! - exact inversion by Gauss-Jordan elimination with partial pivoting
//! - [`Matrix4::transform_point`] (affine, perspective-divided) and
//!   [`Matrix4::rotate_vector`] (linear only)
//!
//! # Design
//!
//! Matrices use **row vectors**. A point is the row `[x, y, z, 1]` multiplied
//! on the left, and row 3 of the matrix holds the translation:
//!
//! ```text
//! result = [x, y, z, 1] * matrix
//! ```
//!
//! # Usage
//!
//! ```rust
//! use trace_math::{Matrix4, Point3, Vector3};
//!
//! let object_to_world = Matrix4::identity()
//!     .translated(Vector3::new(0.0, 0.0, -5.0))
//!     .scaled(Vector3::splat(2.0));
//! let world_to_object = object_to_world.inverse();
//!
//! let p = Point3::new(1.0, 1.0, 1.0);
//! let q = world_to_object.transform_point(object_to_world.transform_point(p));
//! assert!((q.x - p.x).abs() < 1e-12);
//!
//! // Directions ignore translation.
//! assert_eq!(object_to_world.rotate_vector(Vector3::X), Vector3::new(2.0, 0.0, 0.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with `DMat4`
//! - [`tracing`] - Diagnostics for singular inversions
//! - `trace-core` - [`Point3`], [`Vector3`], [`Error`]
//!
//! # Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for [`Matrix4`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;

pub use mat4::*;

pub use trace_core::{Error, Point3, Result, Vector3};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat4, DVec3, DVec4};
}
