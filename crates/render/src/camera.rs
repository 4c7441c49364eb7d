use glam::{Mat4, Vec3};

const PITCH_LIMIT_DEG: f32 = 89.0;

/// Perspective camera with position, yaw, pitch and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 15.0),
            yaw: -90.0_f32.to_radians(),
            pitch: -30.0_f32.to_radians(),
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Camera at `position` looking along `direction`. Pitch is clamped short
    /// of straight up/down so the view matrix stays well defined.
    pub fn looking_along(position: Vec3, direction: Vec3) -> Self {
        let dir = direction.try_normalize().unwrap_or(Vec3::NEG_Z);
        let limit = PITCH_LIMIT_DEG.to_radians();
        Self {
            position,
            yaw: dir.z.atan2(dir.x),
            pitch: dir.y.clamp(-1.0, 1.0).asin().clamp(-limit, limit),
            ..Self::default()
        }
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Normalized viewing direction.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera() {
        let cam = Camera::default();
        assert!(cam.position.y > 0.0);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn looking_along_recovers_direction() {
        let dir = Vec3::new(1.0, -0.5, -2.0).normalize();
        let cam = Camera::looking_along(Vec3::ZERO, dir);
        assert!(cam.forward().abs_diff_eq(dir, 1e-5));
    }

    #[test]
    fn straight_down_is_clamped() {
        let cam = Camera::looking_along(Vec3::ZERO, Vec3::NEG_Y);
        assert!(cam.pitch > -std::f32::consts::FRAC_PI_2);
        assert!(!cam.view_matrix().col(0).x.is_nan());
    }

    #[test]
    fn forward_is_normalized() {
        let cam = Camera::default();
        assert!((cam.forward().length() - 1.0).abs() < 1e-6);
    }
}
