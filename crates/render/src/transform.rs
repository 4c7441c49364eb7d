//! World transforms for located entities.
//!
//! Matrices are column-major and compose as `T * R * S`, matching glam and
//! the OpenGL-style matrix stack the pass feeds.

use blockview_common::{Aabb, Location};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Compose translation, rotation and uniform scale into a world matrix.
pub fn world_matrix(position: Vec3, rotation: Quat, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
}

pub fn location_matrix(location: &Location) -> Mat4 {
    world_matrix(location.position, location.rotation, location.scale)
}

/// Axis-aligned box that fully contains `bounds` transformed by `world`.
///
/// The center is transformed as a point; half-extents go through the
/// component-wise absolute value of the linear part.
pub fn transform_bounds(bounds: &Aabb, world: &Mat4) -> Aabb {
    let center = world.transform_point3(bounds.center());
    let linear = Mat3::from_mat4(*world);
    let abs = Mat3::from_cols(linear.x_axis.abs(), linear.y_axis.abs(), linear.z_axis.abs());
    Aabb::from_center_extents(center, abs * bounds.extents())
}
