//! Geometry container tests.

use approx::assert_abs_diff_eq;
use config::constants::approx_equal;
use glam::Vec3;

use super::*;
use crate::capsule::build_capsule;

fn triangle_geometry() -> Geometry {
    let mut geometry = Geometry::new();
    geometry
        .set_attribute(
            ATTRIBUTE_POSITION,
            BufferAttribute::new(vec![0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 4.0, 0.0], 3),
        )
        .unwrap();
    geometry.set_index(vec![0, 1, 2]).unwrap();
    geometry
}

#[test]
fn test_from_capsule_buffers_registers_attributes() {
    let geometry = Geometry::from(build_capsule(1.0, 2.0, 8, 16).unwrap());

    let names: Vec<&str> = geometry.attribute_names().collect();
    assert_eq!(names, vec!["normal", "position", "uv"]);
    assert_eq!(geometry.attribute(ATTRIBUTE_POSITION).unwrap().item_size(), 3);
    assert_eq!(geometry.attribute(ATTRIBUTE_UV).unwrap().item_size(), 2);
    assert_eq!(geometry.vertex_count(), 340);
    assert_eq!(geometry.triangle_count(), 544);
}

#[test]
fn test_capsule_bounding_sphere() {
    let radius = 1.5;
    let height = 3.0;
    let geometry = Geometry::from(build_capsule(radius, height, 6, 12).unwrap());

    let sphere = geometry.bounding_sphere().copied().unwrap();
    assert_abs_diff_eq!(sphere.center.length(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(sphere.radius, radius + height / 2.0, epsilon = 1e-6);

    let bounds = geometry.bounding_box().copied().unwrap();
    assert_abs_diff_eq!(bounds.max.y, radius + height / 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bounds.min.y, -(radius + height / 2.0), epsilon = 1e-6);
    assert_abs_diff_eq!(bounds.size().x, 2.0 * radius, epsilon = 1e-6);
}

#[test]
fn test_bounding_sphere_contains_every_vertex() {
    let buffers = build_capsule(0.5, 1.0, 3, 7).unwrap();
    let points: Vec<DVec3> = (0..buffers.vertex_count())
        .map(|i| Vec3::from_array(buffers.position(i)).as_dvec3())
        .collect();
    let geometry = Geometry::from(buffers);
    let sphere = geometry.bounding_sphere().unwrap();

    for point in points {
        assert!(sphere.contains_point(point, 1e-9));
    }
}

#[test]
fn test_largest_accepted_capsule_has_finite_bounds() {
    let geometry = Geometry::from(build_capsule(1e38, 2e38, 2, 4).unwrap());
    let sphere = geometry.bounding_sphere().copied().unwrap();
    assert!(sphere.center.is_finite());
    assert!(sphere.radius.is_finite());
    assert!(sphere.radius >= 2e38 * 0.999);

    assert!(build_capsule(1e38, 5e38, 2, 4).is_err());
}

#[test]
fn test_empty_geometry_has_no_bounds() {
    let mut geometry = Geometry::new();
    assert_eq!(geometry.compute_bounding_box(), None);
    assert_eq!(geometry.compute_bounding_sphere(), None);
    assert_eq!(geometry.vertex_count(), 0);
    assert_eq!(geometry.triangle_count(), 0);
}

#[test]
fn test_triangle_bounds() {
    let mut geometry = triangle_geometry();
    let bounds = geometry.compute_bounding_box().unwrap();
    assert_eq!(bounds.min, DVec3::ZERO);
    assert_eq!(bounds.max, DVec3::new(2.0, 4.0, 0.0));

    let sphere = geometry.compute_bounding_sphere().unwrap();
    assert_eq!(sphere.center, DVec3::new(1.0, 2.0, 0.0));
    assert!(approx_equal(sphere.radius, 5.0_f64.sqrt()));
}

#[test]
fn test_replacing_positions_clears_cached_bounds() {
    let mut geometry = triangle_geometry();
    geometry.compute_bounding_sphere();
    assert!(geometry.bounding_sphere().is_some());

    geometry
        .set_attribute(
            ATTRIBUTE_POSITION,
            BufferAttribute::new(vec![1.0; 9], 3),
        )
        .unwrap();
    assert!(geometry.bounding_sphere().is_none());
    assert!(geometry.bounding_box().is_none());
}

#[test]
fn test_rejects_ragged_attribute() {
    let mut geometry = Geometry::new();
    let err = geometry
        .set_attribute(ATTRIBUTE_UV, BufferAttribute::new(vec![0.0; 5], 2))
        .unwrap_err();
    assert!(matches!(err, GeometryError::AttributeMismatch { ref name, .. } if name == "uv"));

    let err = geometry
        .set_attribute(ATTRIBUTE_UV, BufferAttribute::new(vec![0.0; 4], 0))
        .unwrap_err();
    assert!(matches!(err, GeometryError::AttributeMismatch { .. }));
}

#[test]
fn test_rejects_attribute_count_mismatch() {
    let mut geometry = triangle_geometry();
    let err = geometry
        .set_attribute(ATTRIBUTE_UV, BufferAttribute::new(vec![0.0; 4], 2))
        .unwrap_err();
    assert!(err.to_string().contains("'position' has 3"));

    geometry
        .set_attribute(ATTRIBUTE_UV, BufferAttribute::new(vec![0.0; 6], 2))
        .unwrap();
    assert_eq!(geometry.attribute(ATTRIBUTE_UV).unwrap().get(2), Some(&[0.0, 0.0][..]));
    assert_eq!(geometry.attribute(ATTRIBUTE_UV).unwrap().get(3), None);
}

#[test]
fn test_rejects_bad_index() {
    let mut geometry = triangle_geometry();
    assert!(geometry.set_index(vec![0, 1]).is_err());

    let err = geometry.set_index(vec![0, 1, 3]).unwrap_err();
    assert!(err.to_string().contains("vertex 3"));

    // The previous index survives a rejected update.
    assert_eq!(geometry.index(), Some(&[0, 1, 2][..]));
}

#[test]
fn test_rejects_shrinking_positions_below_index() {
    let mut geometry = triangle_geometry();
    let err = geometry
        .set_attribute(ATTRIBUTE_POSITION, BufferAttribute::new(vec![0.0; 6], 3))
        .unwrap_err();
    assert!(err.to_string().contains("references vertex 2"));
}

#[test]
fn test_delete_attribute() {
    let mut geometry = triangle_geometry();
    geometry.compute_bounding_box();
    assert!(geometry.delete_attribute(ATTRIBUTE_POSITION).is_some());
    assert!(!geometry.has_attribute(ATTRIBUTE_POSITION));
    assert!(geometry.bounding_box().is_none());
    assert!(geometry.delete_attribute(ATTRIBUTE_NORMAL).is_none());
}
