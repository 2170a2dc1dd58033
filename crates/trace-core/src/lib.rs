//! # trace-core
//!
//! Core value types shared by the trace renderer's geometry layer.
//!
//! - [`Point3`] - a position in 3D space
//! - [`Vector3`] - a direction or displacement in 3D space
//! - [`Error`], [`Result`] - failures reported by the strict math APIs
//!
//! ## Points vs. vectors
//!
//! The two types are kept distinct because different transform rules apply
//! to them. A point carries an implicit homogeneous `w = 1` and is moved
//! by translation; a vector carries `w = 0` and is not:
//!
//! ```rust
//! use trace_core::{Point3, Vector3};
//!
//! let a = Point3::new(1.0, 2.0, 3.0);
//! let b = Point3::new(4.0, 6.0, 3.0);
//!
//! // point - point = vector
//! let d: Vector3 = b - a;
//! assert_eq!(d.length(), 5.0);
//!
//! // point + vector = point
//! assert_eq!(a + d, b);
//! ```
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. `trace-math` builds the
//! 4x4 transform matrix on top of it:
//!
//! ```text
//! trace-core (this crate)
//!    ^
//!    |
//!    +-- trace-math (Matrix4, inverse, transforms)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for the value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod point;
pub mod vector;

pub use error::*;
pub use point::*;
pub use vector::*;
