//! # Capsule Parameters
//!
//! Radius, height and tessellation density of a capsule, plus the closed-form
//! vertex and triangle counts they imply.

use config::constants::{
    TessellationConfig, DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS, DEFAULT_CAP_SEGMENTS,
    DEFAULT_RADIAL_SEGMENTS, MAX_COORDINATE, MAX_TRIANGLES, MAX_VERTICES, MIN_CAP_SEGMENTS, MIN_RADIAL_SEGMENTS,
};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// Parameters describing a y-axis aligned capsule centered at the origin.
///
/// Missing fields fall back to the defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use capsule_mesh::CapsuleParams;
///
/// let params = CapsuleParams::default().with_radius(0.5).with_radial_segments(24);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.ring_len(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleParams {
    /// Radius of the cylinder and of both hemispheres.
    pub radius: f64,
    /// Distance between the two cap centers along the y axis.
    pub height: f64,
    /// Latitude bands per hemispherical cap.
    pub cap_segments: u32,
    /// Longitude divisions around the circumference.
    pub radial_segments: u32,
}

impl Default for CapsuleParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CAPSULE_RADIUS,
            height: DEFAULT_CAPSULE_HEIGHT,
            cap_segments: DEFAULT_CAP_SEGMENTS,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

impl CapsuleParams {
    /// Creates a parameter set. Nothing is validated until [`Self::validate`].
    pub fn new(radius: f64, height: f64, cap_segments: u32, radial_segments: u32) -> Self {
        Self {
            radius,
            height,
            cap_segments,
            radial_segments,
        }
    }

    /// Creates a parameter set using a shared tessellation density.
    pub fn from_tessellation(radius: f64, height: f64, tessellation: &TessellationConfig) -> Self {
        Self::new(
            radius,
            height,
            tessellation.cap_segments,
            tessellation.radial_segments,
        )
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_cap_segments(mut self, cap_segments: u32) -> Self {
        self.cap_segments = cap_segments;
        self
    }

    pub fn with_radial_segments(mut self, radial_segments: u32) -> Self {
        self.radial_segments = radial_segments;
        self
    }

    /// Number of vertices in one ring, including the duplicated seam vertex.
    #[inline]
    pub fn ring_len(&self) -> usize {
        (self.radial_segments as usize).saturating_add(1)
    }

    /// Total vertex count: two caps of `cap_segments + 1` rings plus the two
    /// band rings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use capsule_mesh::CapsuleParams;
    ///
    /// // 9 * 17 * 2 + 2 * 17
    /// assert_eq!(CapsuleParams::default().vertex_count(), 340);
    /// ```
    pub fn vertex_count(&self) -> usize {
        let cap_rings = (self.cap_segments as usize).saturating_add(1);
        cap_rings
            .saturating_mul(2)
            .saturating_add(2)
            .saturating_mul(self.ring_len())
    }

    /// Total triangle count: two per quad, `cap_segments * radial_segments`
    /// quads per cap and `radial_segments` quads in the band.
    ///
    /// # Example
    ///
    /// ```rust
    /// use capsule_mesh::CapsuleParams;
    ///
    /// // 4 * 8 * 16 + 2 * 16
    /// assert_eq!(CapsuleParams::default().triangle_count(), 544);
    /// ```
    pub fn triangle_count(&self) -> usize {
        let radial = self.radial_segments as usize;
        (self.cap_segments as usize)
            .saturating_mul(4)
            .saturating_add(2)
            .saturating_mul(radial)
    }

    /// Checks every parameter and the resulting buffer sizes.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] when `radius <= 0`, `height < 0`,
    /// either is not finite, `cap_segments < 1` or `radial_segments < 3`, and
    /// when the tips at `±(radius + height / 2)` fall outside the `f32` range.
    /// [`GeometryError::TooManyVertices`] / [`GeometryError::TooManyTriangles`]
    /// when the tessellation exceeds the configured limits.
    pub fn validate(&self) -> GeometryResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "radius",
                format!("must be positive and finite: {}", self.radius),
            ));
        }

        if !self.height.is_finite() || self.height < 0.0 {
            return Err(GeometryError::invalid_parameter(
                "height",
                format!("must be non-negative and finite: {}", self.height),
            ));
        }

        if self.radius > MAX_COORDINATE {
            return Err(GeometryError::invalid_parameter(
                "radius",
                format!("exceeds f32 range: {}", self.radius),
            ));
        }

        let extent = self.radius + self.height / 2.0;
        if extent > MAX_COORDINATE {
            return Err(GeometryError::invalid_parameter(
                "height",
                format!("tips at {} exceed f32 range", extent),
            ));
        }

        if self.cap_segments < MIN_CAP_SEGMENTS {
            return Err(GeometryError::invalid_parameter(
                "cap_segments",
                format!(
                    "must be at least {}: {}",
                    MIN_CAP_SEGMENTS, self.cap_segments
                ),
            ));
        }

        if self.radial_segments < MIN_RADIAL_SEGMENTS {
            return Err(GeometryError::invalid_parameter(
                "radial_segments",
                format!(
                    "must be at least {}: {}",
                    MIN_RADIAL_SEGMENTS, self.radial_segments
                ),
            ));
        }

        let vertex_count = self.vertex_count();
        if vertex_count > MAX_VERTICES {
            return Err(GeometryError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }

        let triangle_count = self.triangle_count();
        if triangle_count > MAX_TRIANGLES {
            return Err(GeometryError::TooManyTriangles {
                count: triangle_count,
                max: MAX_TRIANGLES,
            });
        }

        Ok(())
    }
}
