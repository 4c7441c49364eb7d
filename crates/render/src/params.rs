//! Global shader parameters shared by every program.
//!
//! A `FrameSnapshot` is captured from whichever collaborators are available
//! this frame; `bind_globals` writes the uniforms whose source was present and
//! leaves the others untouched.

use crate::config::RenderingConfig;
use crate::shader::ShaderProgram;
use crate::world::{WorldRenderer, WorldTimeProvider};
use glam::Vec3;
use serde::Serialize;

/// Chunk edge length; scales the configured viewing distance into blocks.
pub const VIEWING_DISTANCE_SCALE: f32 = 8.0;

/// Uniform slot names.
pub mod uniforms {
    pub const VIEWING_DISTANCE: &str = "viewingDistance";
    pub const DAYLIGHT: &str = "daylight";
    pub const SWIMMING: &str = "swimming";
    pub const TICK: &str = "tick";
    pub const SUNLIGHT_AT_PLAYER: &str = "sunlightValueAtPlayerPos";
    pub const CAMERA_POSITION: &str = "cameraPosition";
    pub const CAMERA_DIRECTION: &str = "cameraDirection";
    pub const CAMERA_PARAMETERS: &str = "cameraParameters";
    pub const SUN_VEC: &str = "sunVec";
    pub const TIME: &str = "time";
    pub const TEXTURED: &str = "textured";
    pub const LIGHT: &str = "light";
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub position: Vec3,
    pub direction: Vec3,
    pub z_near: f32,
    pub z_far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightingState {
    pub daylight: f32,
    pub under_water: bool,
    pub tick: u64,
    pub sunlight_at_player: f32,
    pub sun_direction: Vec3,
}

/// Everything the global uniforms derive from, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub viewing_distance: u32,
    pub lighting: Option<LightingState>,
    pub camera: Option<CameraState>,
    pub time_in_days: Option<f32>,
}

impl FrameSnapshot {
    pub fn capture(
        config: &RenderingConfig,
        world_renderer: Option<&dyn WorldRenderer>,
        time: Option<&dyn WorldTimeProvider>,
    ) -> Self {
        let lighting = world_renderer.map(|wr| LightingState {
            daylight: wr.daylight(),
            under_water: wr.is_under_water(),
            tick: wr.tick(),
            sunlight_at_player: wr.smoothed_player_sunlight(),
            sun_direction: wr.sun_direction(),
        });
        let camera = world_renderer
            .and_then(|wr| wr.active_camera())
            .map(|cam| CameraState {
                position: cam.position,
                direction: cam.forward(),
                z_near: cam.near,
                z_far: cam.far,
            });
        Self {
            viewing_distance: config.active_viewing_distance(),
            lighting,
            camera,
            time_in_days: time.map(|t| t.time_in_days()),
        }
    }
}

/// Write the global uniform set for `frame` into `program`.
pub fn bind_globals<P: ShaderProgram + ?Sized>(program: &mut P, frame: &FrameSnapshot) {
    program.set_float(
        uniforms::VIEWING_DISTANCE,
        frame.viewing_distance as f32 * VIEWING_DISTANCE_SCALE,
    );

    if let Some(light) = &frame.lighting {
        program.set_float(uniforms::DAYLIGHT, light.daylight);
        program.set_float(uniforms::SWIMMING, if light.under_water { 1.0 } else { 0.0 });
        program.set_float(uniforms::TICK, light.tick as f32);
        program.set_float(uniforms::SUNLIGHT_AT_PLAYER, light.sunlight_at_player);
        program.set_float3(uniforms::SUN_VEC, light.sun_direction);
    }

    if let Some(cam) = &frame.camera {
        program.set_float3(uniforms::CAMERA_POSITION, cam.position);
        program.set_float3(uniforms::CAMERA_DIRECTION, cam.direction);
        program.set_float3(
            uniforms::CAMERA_PARAMETERS,
            Vec3::new(cam.z_near, cam.z_far, 0.0),
        );
    }

    if let Some(days) = frame.time_in_days {
        program.set_float(uniforms::TIME, days);
    }
}

/// Parameters a program applies when it is bound.
pub trait ShaderParameters {
    fn apply(&self, program: &mut dyn ShaderProgram);
}

/// The base parameter set: the global uniforms every program receives.
#[derive(Clone, Copy)]
pub struct ShaderParametersBase<'a> {
    config: &'a RenderingConfig,
    world_renderer: Option<&'a dyn WorldRenderer>,
    time: Option<&'a dyn WorldTimeProvider>,
}

impl<'a> ShaderParametersBase<'a> {
    pub fn new(
        config: &'a RenderingConfig,
        world_renderer: Option<&'a dyn WorldRenderer>,
        time: Option<&'a dyn WorldTimeProvider>,
    ) -> Self {
        Self {
            config,
            world_renderer,
            time,
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.config, self.world_renderer, self.time)
    }
}

impl ShaderParameters for ShaderParametersBase<'_> {
    fn apply(&self, program: &mut dyn ShaderProgram) {
        bind_globals(program, &self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::debug::{DebugShaderProgram, SceneState};
    use blockview_kernel::World;

    fn bound(
        config: &RenderingConfig,
        scene: Option<&SceneState>,
        time: Option<&dyn WorldTimeProvider>,
    ) -> DebugShaderProgram {
        let mut program = DebugShaderProgram::with_all_features("block");
        let params =
            ShaderParametersBase::new(config, scene.map(|s| s as &dyn WorldRenderer), time);
        params.apply(&mut program);
        program
    }

    #[test]
    fn viewing_distance_is_scaled_by_chunk_size() {
        let config = RenderingConfig::with_viewing_distance(10);
        let program = bound(&config, None, None);
        assert_eq!(program.float(uniforms::VIEWING_DISTANCE), Some(80.0));
    }

    #[test]
    fn swimming_follows_submersion() {
        let config = RenderingConfig::default();
        let mut scene = SceneState::default();

        scene.under_water = true;
        assert_eq!(bound(&config, Some(&scene), None).float(uniforms::SWIMMING), Some(1.0));

        scene.under_water = false;
        assert_eq!(bound(&config, Some(&scene), None).float(uniforms::SWIMMING), Some(0.0));
    }

    #[test]
    fn full_uniform_set() {
        let config = RenderingConfig::with_viewing_distance(4);
        let camera = Camera::looking_along(Vec3::new(1.0, 2.0, 3.0), Vec3::X)
            .with_clip_planes(0.5, 250.0);
        let scene = SceneState {
            camera: Some(camera),
            daylight: 0.75,
            under_water: false,
            tick: 1234,
            sunlight: 0.6,
            sun_direction: Vec3::new(0.0, 1.0, 0.0),
            light_value: 0.9,
        };
        let mut world = World::with_day_length(1000);
        world.step(1500);

        let p = bound(&config, Some(&scene), Some(&world));
        assert_eq!(p.float(uniforms::VIEWING_DISTANCE), Some(32.0));
        assert_eq!(p.float(uniforms::DAYLIGHT), Some(0.75));
        assert_eq!(p.float(uniforms::TICK), Some(1234.0));
        assert_eq!(p.float(uniforms::SUNLIGHT_AT_PLAYER), Some(0.6));
        assert_eq!(p.float3(uniforms::SUN_VEC), Some(Vec3::Y));
        assert_eq!(p.float3(uniforms::CAMERA_POSITION), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert!(
            p.float3(uniforms::CAMERA_DIRECTION)
                .unwrap()
                .abs_diff_eq(Vec3::X, 1e-5)
        );
        assert_eq!(
            p.float3(uniforms::CAMERA_PARAMETERS),
            Some(Vec3::new(0.5, 250.0, 0.0))
        );
        assert_eq!(p.float(uniforms::TIME), Some(1.5));
    }

    #[test]
    fn missing_world_renderer_skips_its_groups() {
        let config = RenderingConfig::default();
        let world = World::new();
        let p = bound(&config, None, Some(&world));
        assert!(p.uniform(uniforms::VIEWING_DISTANCE).is_some());
        assert!(p.uniform(uniforms::TIME).is_some());
        for name in [
            uniforms::DAYLIGHT,
            uniforms::SWIMMING,
            uniforms::TICK,
            uniforms::SUN_VEC,
            uniforms::CAMERA_POSITION,
        ] {
            assert!(p.uniform(name).is_none(), "{name} should be unset");
        }
    }

    #[test]
    fn missing_camera_skips_only_camera_group() {
        let config = RenderingConfig::default();
        let scene = SceneState {
            camera: None,
            ..SceneState::default()
        };
        let p = bound(&config, Some(&scene), None);
        assert!(p.uniform(uniforms::DAYLIGHT).is_some());
        assert!(p.uniform(uniforms::SUN_VEC).is_some());
        assert!(p.uniform(uniforms::CAMERA_POSITION).is_none());
        assert!(p.uniform(uniforms::CAMERA_PARAMETERS).is_none());
        assert!(p.uniform(uniforms::TIME).is_none());
    }

    #[test]
    fn snapshot_groups_match_sources() {
        let config = RenderingConfig::default();
        let snap = FrameSnapshot::capture(&config, None, None);
        assert!(snap.lighting.is_none());
        assert!(snap.camera.is_none());
        assert!(snap.time_in_days.is_none());
        assert_eq!(snap.viewing_distance, config.viewing_distance);
    }
}
