//! # Config Crate
//!
//! Centralized configuration constants for capsule mesh generation.
//! Default parameters, tessellation minimums and safety limits are defined
//! here so the mesh crate never carries magic numbers of its own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CAP_SEGMENTS, DEFAULT_RADIAL_SEGMENTS, TessellationConfig};
//!
//! let tessellation = TessellationConfig::default();
//! assert_eq!(tessellation.cap_segments, DEFAULT_CAP_SEGMENTS);
//! assert_eq!(tessellation.radial_segments, DEFAULT_RADIAL_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer-Agnostic**: No GPU or platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
