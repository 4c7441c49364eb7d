use crate::camera::Camera;
use blockview_common::Aabb;
use blockview_kernel::World;
use glam::Vec3;

/// Per-frame view of the world renderer: camera, lighting and culling.
pub trait WorldRenderer {
    fn active_camera(&self) -> Option<&Camera>;

    /// Ambient daylight factor in `[0, 1]`.
    fn daylight(&self) -> f32;

    /// True when the active camera is submerged.
    fn is_under_water(&self) -> bool;

    fn tick(&self) -> u64;

    /// Sunlight at the player position, smoothed over recent frames.
    fn smoothed_player_sunlight(&self) -> f32;

    fn sun_direction(&self) -> Vec3;

    /// Light value applied to untextured block geometry.
    fn rendering_light_value(&self) -> f32;

    /// Whether a world-space box intersects the active camera's view volume.
    fn is_aabb_visible(&self, aabb: &Aabb) -> bool;
}

/// Source of elapsed world time.
pub trait WorldTimeProvider {
    fn time_in_days(&self) -> f32;
}

impl WorldTimeProvider for World {
    fn time_in_days(&self) -> f32 {
        World::time_in_days(self)
    }
}
