//! # Configuration Constants
//!
//! Centralized values shared by the capsule mesh pipeline. Each public item
//! documents its purpose and provides a minimal usage example so that
//! downstream crates can remain declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Capsule Defaults**: Reference radius, height and segment counts
//! - **Limits**: Minimum tessellation and maximum buffer sizes

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of `f64` geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when checking generated `f32` attribute data, such as
/// unit-length normals or coincident seam vertices.
///
/// Vertex buffers are narrowed to `f32`, so comparisons against them need a
/// looser bound than [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::NORMAL_TOLERANCE;
/// let normal = [0.6_f32, 0.8, 0.0];
/// let length = normal.iter().map(|c| c * c).sum::<f32>().sqrt();
/// assert!((length as f64 - 1.0).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1e-5;

// =============================================================================
// CAPSULE DEFAULTS
// =============================================================================

/// Default capsule radius.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CAPSULE_RADIUS;
/// assert_eq!(DEFAULT_CAPSULE_RADIUS, 1.0);
/// ```
pub const DEFAULT_CAPSULE_RADIUS: f64 = 1.0;

/// Default distance between the two cap centers along the capsule axis.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS};
/// let total = DEFAULT_CAPSULE_HEIGHT + 2.0 * DEFAULT_CAPSULE_RADIUS;
/// assert_eq!(total, 4.0);
/// ```
pub const DEFAULT_CAPSULE_HEIGHT: f64 = 2.0;

/// Default number of latitude bands per hemispherical cap.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_CAP_SEGMENTS, MIN_CAP_SEGMENTS};
/// assert!(DEFAULT_CAP_SEGMENTS >= MIN_CAP_SEGMENTS);
/// ```
pub const DEFAULT_CAP_SEGMENTS: u32 = 8;

/// Default number of longitude divisions around the circumference.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_RADIAL_SEGMENTS, MIN_RADIAL_SEGMENTS};
/// assert!(DEFAULT_RADIAL_SEGMENTS >= MIN_RADIAL_SEGMENTS);
/// ```
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 16;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum latitude bands per cap. Zero bands would leave the cap empty.
pub const MIN_CAP_SEGMENTS: u32 = 1;

/// Minimum radial divisions. Fewer than three cannot enclose any area.
///
/// # Examples
/// ```
/// use config::constants::MIN_RADIAL_SEGMENTS;
/// let requested = 2;
/// assert!(requested < MIN_RADIAL_SEGMENTS);
/// ```
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

/// Maximum number of vertices in a single generated mesh.
///
/// Safety limit to prevent memory exhaustion. Also keeps every index well
/// inside the `u32` range used by the index buffer.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES < u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single generated mesh.
///
/// A capsule has roughly twice as many triangles as vertices, so dense
/// tessellations hit this limit before [`MAX_VERTICES`].
///
/// # Examples
/// ```
/// use config::constants::MAX_TRIANGLES;
/// // 2000 x 2000 segments: 8_012_004 vertices, 16_004_000 triangles
/// assert!(16_004_000 > MAX_TRIANGLES);
/// ```
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Largest distance from the origin a generated vertex may reach.
///
/// Buffers store `f32`; anything farther would narrow to infinity.
pub const MAX_COORDINATE: f64 = f32::MAX as f64;

// =============================================================================
// HELPERS
// =============================================================================

/// Checks if two f64 values are approximately equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// TESSELLATION CONFIG
// =============================================================================

/// Tessellation density shared by every capsule a host generates.
///
/// # Examples
/// ```
/// use config::constants::TessellationConfig;
/// let config = TessellationConfig::default();
/// assert!(config.radial_segments >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationConfig {
    /// Latitude bands per hemispherical cap.
    pub cap_segments: u32,
    /// Longitude divisions around the circumference.
    pub radial_segments: u32,
}

impl TessellationConfig {
    /// Builds a configuration enforcing the segment minimums.
    ///
    /// # Examples
    /// ```
    /// use config::constants::TessellationConfig;
    /// let cfg = TessellationConfig::new(4, 24).expect("valid config");
    /// assert_eq!(cfg.radial_segments, 24);
    /// ```
    pub fn new(cap_segments: u32, radial_segments: u32) -> Result<Self, ConfigError> {
        if cap_segments < MIN_CAP_SEGMENTS {
            return Err(ConfigError::InvalidCapSegments(cap_segments));
        }
        if radial_segments < MIN_RADIAL_SEGMENTS {
            return Err(ConfigError::InvalidRadialSegments(radial_segments));
        }
        Ok(Self {
            cap_segments,
            radial_segments,
        })
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            cap_segments: DEFAULT_CAP_SEGMENTS,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the cap would have no latitude bands.
    InvalidCapSegments(u32),
    /// Raised when the requested radial count is too small to form a ring.
    InvalidRadialSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapSegments(value) => {
                write!(f, "cap_segments must be >= {MIN_CAP_SEGMENTS}: {value}")
            }
            ConfigError::InvalidRadialSegments(value) => {
                write!(f, "radial_segments must be >= {MIN_RADIAL_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
