//! # Capsule Mesh
//!
//! Vertex and index buffers for a capsule: a cylinder of a given height
//! closed by two hemispherical caps, aligned with the y axis and centered at
//! the origin.
//!
//! ## Architecture
//!
//! ```text
//! CapsuleParams → CapsuleBuilder (top cap, band, bottom cap) → MeshBuffers → Geometry
//! ```
//!
//! Generation is pure: no shared state, no I/O. Buffers belong to the caller
//! once returned. [`Geometry`] is a generic attribute container owned by the
//! rendering side; it computes bounding volumes but the builder never uses it.
//!
//! ## Usage
//!
//! ```rust
//! use capsule_mesh::{build_capsule, Geometry};
//!
//! let buffers = build_capsule(1.0, 2.0, 8, 16)?;
//! assert_eq!(buffers.vertex_count(), 340);
//! assert_eq!(buffers.triangle_count(), 544);
//!
//! let geometry = Geometry::from(buffers);
//! assert!(geometry.bounding_sphere().is_some());
//! # Ok::<(), capsule_mesh::GeometryError>(())
//! ```

pub mod buffers;
pub mod capsule;
pub mod error;
pub mod geometry;
pub mod params;

pub use buffers::MeshBuffers;
pub use capsule::{build_capsule, CapsuleBuilder};
pub use error::{GeometryError, GeometryResult};
pub use geometry::Geometry;
pub use params::CapsuleParams;
