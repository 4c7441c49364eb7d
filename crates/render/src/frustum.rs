use crate::camera::Camera;
use blockview_common::Aabb;
use glam::{Mat4, Vec3, Vec4};

/// Six clip planes of a view volume, each `(n, d)` with `n·p + d >= 0` inside.
///
/// Plane extraction assumes glam's right-handed projection with a `[0, 1]`
/// depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    pub fn from_view_projection(view_projection: Mat4) -> Self {
        let r0 = view_projection.row(0);
        let r1 = view_projection.row(1);
        let r2 = view_projection.row(2);
        let r3 = view_projection.row(3);
        let planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r2,      // near
            r3 - r2, // far
        ]
        .map(normalize_plane);
        Self { planes }
    }

    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_view_projection(camera.view_projection())
    }

    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.truncate().dot(p) + plane.w >= 0.0)
    }

    /// Conservative box test: false only when the box lies fully outside at
    /// least one plane.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            let positive = Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min);
            normal.dot(positive) + plane.w >= 0.0
        })
    }
}

fn normalize_plane(plane: Vec4) -> Vec4 {
    let len = plane.truncate().length();
    if len > 0.0 { plane / len } else { plane }
}
