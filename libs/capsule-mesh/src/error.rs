//! # Geometry Errors
//!
//! Error types for capsule generation and the attribute container.
//!
//! ## Error Policy
//!
//! - Parameters are validated before any buffer is allocated
//! - No partial results: a call either returns complete buffers or an error
//! - Errors name the offending parameter or attribute

use thiserror::Error;

/// Errors that can occur while generating or assembling capsule geometry.
///
/// ## Example
///
/// ```rust
/// use capsule_mesh::{build_capsule, GeometryError};
///
/// match build_capsule(1.0, 2.0, 8, 2) {
///     Ok(buffers) => println!("{} vertices", buffers.vertex_count()),
///     Err(GeometryError::InvalidParameter { parameter, .. }) => {
///         assert_eq!(parameter, "radial_segments");
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A generation parameter is outside its valid range.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Description of the constraint that failed
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// An attribute or index buffer does not fit the geometry it is added to.
    #[error("Attribute '{name}' mismatch: {message}")]
    AttributeMismatch { name: String, message: String },
}

impl GeometryError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Creates an attribute mismatch error.
    pub fn attribute_mismatch(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AttributeMismatch {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
