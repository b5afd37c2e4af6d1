//! # Geometry Container
//!
//! Renderer-facing container of named vertex attributes and an optional index
//! buffer. Generators never depend on it; they return [`MeshBuffers`], which
//! converts into a [`Geometry`] that also carries bounding volumes.

use std::collections::BTreeMap;

use glam::DVec3;
use tracing::trace;

use crate::buffers::MeshBuffers;
use crate::error::{GeometryError, GeometryResult};

/// Name of the position attribute (3 floats per vertex).
pub const ATTRIBUTE_POSITION: &str = "position";
/// Name of the normal attribute (3 floats per vertex).
pub const ATTRIBUTE_NORMAL: &str = "normal";
/// Name of the texture coordinate attribute (2 floats per vertex).
pub const ATTRIBUTE_UV: &str = "uv";

/// A flat float array interpreted as `item_size`-wide items.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferAttribute {
    array: Vec<f32>,
    item_size: usize,
}

impl BufferAttribute {
    pub fn new(array: Vec<f32>, item_size: usize) -> Self {
        Self { array, item_size }
    }

    #[inline]
    pub fn array(&self) -> &[f32] {
        &self.array
    }

    #[inline]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Number of items (vertices) in the attribute.
    #[inline]
    pub fn count(&self) -> usize {
        if self.item_size == 0 {
            0
        } else {
            self.array.len() / self.item_size
        }
    }

    /// Returns item `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.item_size)?;
        self.array.get(start..start.checked_add(self.item_size)?)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

/// Bounding sphere enclosing every position of a geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}

impl BoundingSphere {
    pub fn contains_point(&self, point: DVec3, tolerance: f64) -> bool {
        point.distance(self.center) <= self.radius + tolerance
    }
}

/// Named vertex attributes plus an optional triangle index.
///
/// All attributes must describe the same number of vertices, and every index
/// must address one of them.
///
/// # Example
///
/// ```rust
/// use capsule_mesh::geometry::{Geometry, ATTRIBUTE_POSITION};
/// use capsule_mesh::build_capsule;
///
/// let geometry = Geometry::from(build_capsule(1.0, 2.0, 8, 16).unwrap());
/// assert!(geometry.has_attribute(ATTRIBUTE_POSITION));
/// let sphere = geometry.bounding_sphere().unwrap();
/// assert!((sphere.radius - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    attributes: BTreeMap<String, BufferAttribute>,
    index: Option<Vec<u32>>,
    bounding_box: Option<BoundingBox>,
    bounding_sphere: Option<BoundingSphere>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves generator output into a container with `position`, `normal` and
    /// `uv` attributes and the triangle index, then computes the bounding
    /// sphere.
    pub fn from_buffers(buffers: MeshBuffers) -> Self {
        let (positions, normals, uvs, indices) = buffers.into_parts();
        let mut geometry = Self::new();
        geometry.attributes.insert(
            ATTRIBUTE_POSITION.to_string(),
            BufferAttribute::new(positions, 3),
        );
        geometry
            .attributes
            .insert(ATTRIBUTE_NORMAL.to_string(), BufferAttribute::new(normals, 3));
        geometry
            .attributes
            .insert(ATTRIBUTE_UV.to_string(), BufferAttribute::new(uvs, 2));
        geometry.index = Some(indices);
        geometry.compute_bounding_sphere();
        geometry
    }

    /// Adds or replaces an attribute.
    ///
    /// # Errors
    ///
    /// [`GeometryError::AttributeMismatch`] when the item size is zero, the
    /// array length is not a multiple of it, the vertex count disagrees with
    /// the other attributes, or the current index addresses a missing vertex.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        attribute: BufferAttribute,
    ) -> GeometryResult<()> {
        let name = name.into();

        if attribute.item_size == 0 {
            return Err(GeometryError::attribute_mismatch(
                name,
                "item size must be positive",
            ));
        }
        if attribute.array.len() % attribute.item_size != 0 {
            return Err(GeometryError::attribute_mismatch(
                name,
                format!(
                    "length {} is not a multiple of item size {}",
                    attribute.array.len(),
                    attribute.item_size
                ),
            ));
        }

        let count = attribute.count();
        if let Some((other, existing)) = self
            .attributes
            .iter()
            .find(|(other, existing)| **other != name && existing.count() != count)
        {
            return Err(GeometryError::attribute_mismatch(
                name,
                format!(
                    "{count} items, but '{other}' has {}",
                    existing.count()
                ),
            ));
        }

        if let Some(max) = self.index.as_ref().and_then(|index| index.iter().max()) {
            if *max as usize >= count {
                return Err(GeometryError::attribute_mismatch(
                    name,
                    format!("{count} items, but the index references vertex {max}"),
                ));
            }
        }

        if name == ATTRIBUTE_POSITION {
            self.bounding_box = None;
            self.bounding_sphere = None;
        }
        self.attributes.insert(name, attribute);
        Ok(())
    }

    /// Removes an attribute, returning it if present.
    pub fn delete_attribute(&mut self, name: &str) -> Option<BufferAttribute> {
        if name == ATTRIBUTE_POSITION {
            self.bounding_box = None;
            self.bounding_sphere = None;
        }
        self.attributes.remove(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&BufferAttribute> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute names in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Sets the triangle index.
    ///
    /// # Errors
    ///
    /// [`GeometryError::AttributeMismatch`] when the length is not a multiple
    /// of three or an index is out of range for the current attributes.
    pub fn set_index(&mut self, indices: Vec<u32>) -> GeometryResult<()> {
        if indices.len() % 3 != 0 {
            return Err(GeometryError::attribute_mismatch(
                "index",
                format!("length {} is not a multiple of 3", indices.len()),
            ));
        }

        if !self.attributes.is_empty() {
            let count = self.vertex_count();
            if let Some(bad) = indices.iter().find(|&&i| i as usize >= count) {
                return Err(GeometryError::attribute_mismatch(
                    "index",
                    format!("vertex {bad} out of range for {count} vertices"),
                ));
            }
        }

        self.index = Some(indices);
        Ok(())
    }

    pub fn index(&self) -> Option<&[u32]> {
        self.index.as_deref()
    }

    /// Vertex count shared by all attributes, zero when there are none.
    pub fn vertex_count(&self) -> usize {
        self.attributes
            .values()
            .next()
            .map_or(0, BufferAttribute::count)
    }

    /// Triangle count; non-indexed geometry takes vertices three at a time.
    pub fn triangle_count(&self) -> usize {
        match &self.index {
            Some(index) => index.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    pub fn bounding_sphere(&self) -> Option<&BoundingSphere> {
        self.bounding_sphere.as_ref()
    }

    /// Computes and caches the box around the `position` attribute.
    ///
    /// Returns `None` when there are no positions.
    pub fn compute_bounding_box(&mut self) -> Option<BoundingBox> {
        let mut points = self.positions();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));

        let bounds = BoundingBox { min, max };
        self.bounding_box = Some(bounds);
        Some(bounds)
    }

    /// Computes and caches the bounding sphere.
    ///
    /// The center is the center of the bounding box; the radius is the
    /// largest distance from it to any position.
    pub fn compute_bounding_sphere(&mut self) -> Option<BoundingSphere> {
        let Some(bounds) = self.compute_bounding_box() else {
            self.bounding_sphere = None;
            return None;
        };

        let center = bounds.center();
        let max_distance_sq = self
            .positions()
            .map(|p| center.distance_squared(p))
            .fold(0.0_f64, f64::max);

        let sphere = BoundingSphere {
            center,
            radius: max_distance_sq.sqrt(),
        };
        trace!(?sphere.center, sphere.radius, "computed bounding sphere");

        self.bounding_sphere = Some(sphere);
        Some(sphere)
    }

    fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.attributes
            .get(ATTRIBUTE_POSITION)
            .filter(|attribute| attribute.item_size == 3)
            .map(|attribute| attribute.array.chunks_exact(3))
            .into_iter()
            .flatten()
            .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
    }
}

impl From<MeshBuffers> for Geometry {
    fn from(buffers: MeshBuffers) -> Self {
        Self::from_buffers(buffers)
    }
}

#[cfg(test)]
mod tests;
