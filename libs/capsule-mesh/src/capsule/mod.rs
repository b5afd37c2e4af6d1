//! # Capsule Primitive
//!
//! Generates a y-axis aligned capsule: a cylindrical band of height `height`
//! closed by two hemispheres of radius `radius`, centered at the origin.
//!
//! ## Layout
//!
//! Vertices are emitted in three phases that share one running index:
//!
//! ```text
//! top cap      rows 0..=cap_segments     pole (y = r + h/2) -> equator (y = h/2)
//! band         2 rings                   y = h/2, y = -h/2
//! bottom cap   rows 0..=cap_segments     equator (y = -h/2) -> pole (y = -r - h/2)
//! ```
//!
//! Every ring holds `radial_segments + 1` vertices; the first and last share a
//! position so `u` runs linearly from 0 to 1 across the seam.
//!
//! Pole rows are not welded. Each pole row holds coincident vertices with
//! distinct `u`, and the triangles touching it have zero area. Shading there
//! relies on the per-vertex normals, which are exact.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::{DVec2, DVec3};
use tracing::{debug, trace, warn};

use crate::buffers::MeshBuffers;
use crate::error::GeometryResult;
use crate::params::CapsuleParams;

/// Capsule generator holding validated parameters.
///
/// # Examples
/// ```
/// use capsule_mesh::{CapsuleBuilder, CapsuleParams};
///
/// let builder = CapsuleBuilder::new(CapsuleParams::default()).expect("valid parameters");
/// let buffers = builder.build();
/// assert_eq!(buffers.vertex_count(), 340);
/// assert_eq!(buffers.triangle_count(), 544);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleBuilder {
    params: CapsuleParams,
}

impl CapsuleBuilder {
    /// Validates `params` and returns a builder for them.
    ///
    /// # Errors
    ///
    /// Propagates [`CapsuleParams::validate`] failures unchanged.
    pub fn new(params: CapsuleParams) -> GeometryResult<Self> {
        if let Err(err) = params.validate() {
            warn!(%err, ?params, "rejected capsule parameters");
            return Err(err);
        }
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &CapsuleParams {
        &self.params
    }

    /// Index of the first band vertex, i.e. the vertex count of the top cap.
    ///
    /// # Examples
    /// ```text
    /// cap_segments=8, radial_segments=16 -> 9 * 17 = 153
    /// ```
    pub fn top_index_end(&self) -> u32 {
        ((self.params.cap_segments as usize + 1) * self.params.ring_len()) as u32
    }

    /// Index of the first bottom cap vertex.
    pub fn bottom_index_start(&self) -> u32 {
        self.top_index_end() + 2 * self.params.ring_len() as u32
    }

    /// Generates the capsule buffers.
    ///
    /// The buffers are preallocated from the closed-form counts and are
    /// filled exactly to them.
    pub fn build(&self) -> MeshBuffers {
        let params = &self.params;
        let mut buffers =
            MeshBuffers::with_capacity(params.vertex_count(), params.triangle_count());

        self.push_top_cap(&mut buffers);
        let top_index_end = buffers.vertex_count() as u32;
        debug_assert_eq!(top_index_end, self.top_index_end());
        trace!(top_index_end, "top cap emitted");

        self.push_band(&mut buffers, top_index_end);
        let bottom_index_start = buffers.vertex_count() as u32;
        debug_assert_eq!(bottom_index_start, self.bottom_index_start());
        trace!(bottom_index_start, "cylindrical band emitted");

        self.push_bottom_cap(&mut buffers, bottom_index_start);

        debug!(
            radius = params.radius,
            height = params.height,
            cap_segments = params.cap_segments,
            radial_segments = params.radial_segments,
            vertices = buffers.vertex_count(),
            triangles = buffers.triangle_count(),
            "built capsule"
        );

        buffers
    }

    /// Top hemisphere centered at `(0, h/2, 0)`, pole first.
    fn push_top_cap(&self, buffers: &mut MeshBuffers) {
        let base = buffers.vertex_count() as u32;
        self.push_cap_rings(buffers, self.params.height / 2.0, 0.0, |t| t);
        self.push_quad_rows(buffers, base, self.params.cap_segments);
    }

    /// Two rings at `y = ±h/2` joined by a single row of quads.
    ///
    /// # Examples
    /// ```text
    /// radial_segments=3, top_index_end=T -> quads (T+0..T+1), (T+1..T+2), (T+2..T+3)
    /// ```
    fn push_band(&self, buffers: &mut MeshBuffers, top_index_end: u32) {
        let radial = self.params.radial_segments;
        let ring = radial + 1;
        let half_height = self.params.height / 2.0;

        for (row, y) in [half_height, -half_height].into_iter().enumerate() {
            for j in 0..=radial {
                let theta = TAU * (j as f64 / radial as f64);
                let (sin_theta, cos_theta) = theta.sin_cos();
                let radial_dir = DVec3::new(cos_theta, 0.0, sin_theta);

                buffers.push_vertex(
                    DVec3::new(self.params.radius * cos_theta, y, self.params.radius * sin_theta),
                    radial_dir,
                    DVec2::new(j as f64 / radial as f64, row as f64),
                );
            }
        }

        // The column after `j` is taken modulo the ring length; since `j`
        // stops at `radial - 1` this never wraps and the last quad closes on
        // the seam duplicate column.
        for j in 0..radial {
            let next = (j + 1) % ring;
            let a = top_index_end + j;
            let b = top_index_end + j + ring;
            let c = top_index_end + next + ring;
            let d = top_index_end + next;

            buffers.push_triangle(a, d, b);
            buffers.push_triangle(b, d, c);
        }
    }

    /// Bottom hemisphere centered at `(0, -h/2, 0)`, equator first.
    fn push_bottom_cap(&self, buffers: &mut MeshBuffers, bottom_index_start: u32) {
        self.push_cap_rings(buffers, -self.params.height / 2.0, FRAC_PI_2, |t| 1.0 - t);
        self.push_quad_rows(buffers, bottom_index_start, self.params.cap_segments);
    }

    /// Emits `cap_segments + 1` rings of a hemisphere.
    ///
    /// Row `i` sits at polar angle `phi_start + i * (pi/2) / cap_segments`,
    /// measured from +Y, and gets `v = v_of(i / cap_segments)`.
    fn push_cap_rings(
        &self,
        buffers: &mut MeshBuffers,
        center_y: f64,
        phi_start: f64,
        v_of: impl Fn(f64) -> f64,
    ) {
        let CapsuleParams {
            radius,
            cap_segments,
            radial_segments,
            ..
        } = self.params;
        let center = DVec3::new(0.0, center_y, 0.0);

        for i in 0..=cap_segments {
            let t = i as f64 / cap_segments as f64;
            let phi = phi_start + FRAC_PI_2 * t;
            let (sin_phi, cos_phi) = phi.sin_cos();

            for j in 0..=radial_segments {
                let u = j as f64 / radial_segments as f64;
                let (sin_theta, cos_theta) = (TAU * u).sin_cos();
                let normal = DVec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);

                buffers.push_vertex(center + radius * normal, normal, DVec2::new(u, v_of(t)));
            }
        }
    }

    /// Triangulates `rows` rows of quads between consecutive rings starting
    /// at vertex `base`.
    ///
    /// Corners of quad `(i, j)` are `a = (i, j)`, `b = (i + 1, j)`,
    /// `c = (i + 1, j + 1)`, `d = (i, j + 1)`. With theta sweeping from +X
    /// toward +Z and rows descending in y, `(a, d, b)` and `(b, d, c)` are
    /// counter-clockwise seen from outside.
    ///
    /// # Examples
    /// ```text
    /// radial_segments=3 (ring=4), base=0, quad (0,0) -> [0,1,4], [4,1,5]
    /// ```
    fn push_quad_rows(&self, buffers: &mut MeshBuffers, base: u32, rows: u32) {
        let radial = self.params.radial_segments;
        let ring = radial + 1;

        for i in 0..rows {
            for j in 0..radial {
                let a = base + ring * i + j;
                let b = base + ring * (i + 1) + j;
                let c = b + 1;
                let d = a + 1;

                buffers.push_triangle(a, d, b);
                buffers.push_triangle(b, d, c);
            }
        }
    }
}

/// Builds capsule buffers in one call.
///
/// # Errors
///
/// [`crate::GeometryError::InvalidParameter`] when `radius <= 0`,
/// `height < 0`, `cap_segments < 1` or `radial_segments < 3`; nothing is
/// generated in that case.
///
/// # Example
///
/// ```rust
/// use capsule_mesh::build_capsule;
///
/// let buffers = build_capsule(1.0, 2.0, 8, 16).unwrap();
/// assert_eq!(buffers.vertex_count(), 340);
/// assert!(build_capsule(0.0, 2.0, 8, 16).is_err());
/// ```
pub fn build_capsule(
    radius: f64,
    height: f64,
    cap_segments: u32,
    radial_segments: u32,
) -> GeometryResult<MeshBuffers> {
    let params = CapsuleParams::new(radius, height, cap_segments, radial_segments);
    Ok(CapsuleBuilder::new(params)?.build())
}
