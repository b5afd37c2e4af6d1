//! # Mesh Buffers
//!
//! Flat vertex attribute and index arrays, laid out for direct upload as GPU
//! vertex attributes.

use glam::{DVec2, DVec3};

/// Flat position/normal/uv/index arrays produced by a generator.
///
/// Geometry is computed in f64 and narrowed to f32 when a vertex is pushed.
/// Every vertex contributes three position floats, three normal floats and
/// two uv floats, so the three attribute arrays always describe the same
/// number of vertices.
///
/// # Example
///
/// ```rust
/// use capsule_mesh::MeshBuffers;
/// use glam::{DVec2, DVec3};
///
/// let mut buffers = MeshBuffers::new();
/// let a = buffers.push_vertex(DVec3::ZERO, DVec3::Y, DVec2::ZERO);
/// let b = buffers.push_vertex(DVec3::X, DVec3::Y, DVec2::X);
/// let c = buffers.push_vertex(DVec3::Z, DVec3::Y, DVec2::Y);
/// buffers.push_triangle(a, c, b);
/// assert_eq!(buffers.vertex_count(), 3);
/// assert_eq!(buffers.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with room for exactly `vertex_count` vertices and
    /// `triangle_count` triangles.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            uvs: Vec::with_capacity(vertex_count * 2),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions.extend_from_slice(&position.as_vec3().to_array());
        self.normals.extend_from_slice(&normal.as_vec3().to_array());
        self.uvs.extend_from_slice(&uv.as_vec2().to_array());
        index
    }

    /// Appends one triangle by vertex indices.
    pub fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position floats, three per vertex.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Normal floats, three per vertex.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Texture coordinate floats, two per vertex.
    #[inline]
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Triangle indices, three per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the position of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_count()`.
    pub fn position(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [self.positions[i], self.positions[i + 1], self.positions[i + 2]]
    }

    /// Returns the normal of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_count()`.
    pub fn normal(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [self.normals[i], self.normals[i + 1], self.normals[i + 2]]
    }

    /// Returns the texture coordinate of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_count()`.
    pub fn uv(&self, index: usize) -> [f32; 2] {
        let i = index * 2;
        [self.uvs[i], self.uvs[i + 1]]
    }

    /// Returns the vertex indices of triangle `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.triangle_count()`.
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let i = index * 3;
        [self.indices[i], self.indices[i + 1], self.indices[i + 2]]
    }

    /// Iterates over triangles in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Splits the buffers into `(positions, normals, uvs, indices)`.
    pub fn into_parts(self) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<u32>) {
        (self.positions, self.normals, self.uvs, self.indices)
    }
}
