//! Headless recording backend.
//!
//! Implements the collaborator traits in memory so passes can run without a
//! GPU: programs remember features and uniforms, the graphics context keeps
//! a real matrix stack and a log of draws, and `SceneState` answers camera,
//! lighting and frustum queries.

use crate::camera::Camera;
use crate::frustum::Frustum;
use crate::gfx::GraphicsContext;
use crate::shader::{ShaderFeature, ShaderLibrary, ShaderProgram, Uniform};
use crate::world::WorldRenderer;
use blockview_common::Aabb;
use glam::{Mat4, Vec3};
use std::collections::{BTreeMap, BTreeSet};

/// A feature toggle as seen by a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureChange {
    Added(ShaderFeature),
    Removed(ShaderFeature),
}

/// In-memory shader program.
#[derive(Debug, Clone)]
pub struct DebugShaderProgram {
    name: String,
    available: BTreeSet<ShaderFeature>,
    active: BTreeSet<ShaderFeature>,
    uniforms: BTreeMap<String, Uniform>,
    feature_log: Vec<FeatureChange>,
    enable_count: u32,
}

impl DebugShaderProgram {
    pub fn new(name: impl Into<String>, available: impl IntoIterator<Item = ShaderFeature>) -> Self {
        Self {
            name: name.into(),
            available: available.into_iter().collect(),
            active: BTreeSet::new(),
            uniforms: BTreeMap::new(),
            feature_log: Vec::new(),
            enable_count: 0,
        }
    }

    pub fn with_all_features(name: impl Into<String>) -> Self {
        Self::new(
            name,
            [
                ShaderFeature::DeferredLighting,
                ShaderFeature::UseMatrixStack,
                ShaderFeature::AlphaReject,
            ],
        )
    }

    pub fn active_features(&self) -> &BTreeSet<ShaderFeature> {
        &self.active
    }

    /// Every effective add/remove, in order.
    pub fn feature_log(&self) -> &[FeatureChange] {
        &self.feature_log
    }

    pub fn enable_count(&self) -> u32 {
        self.enable_count
    }

    pub fn uniform(&self, name: &str) -> Option<Uniform> {
        self.uniforms.get(name).copied()
    }

    pub fn uniforms(&self) -> &BTreeMap<String, Uniform> {
        &self.uniforms
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.uniform(name).and_then(|u| u.as_float())
    }

    pub fn float3(&self, name: &str) -> Option<Vec3> {
        self.uniform(name).and_then(|u| u.as_float3())
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.uniform(name).and_then(|u| u.as_bool())
    }
}

impl ShaderProgram for DebugShaderProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_feature_if_available(&mut self, feature: ShaderFeature) -> bool {
        if !self.available.contains(&feature) {
            return false;
        }
        if self.active.insert(feature) {
            self.feature_log.push(FeatureChange::Added(feature));
        }
        true
    }

    fn remove_feature(&mut self, feature: ShaderFeature) {
        if self.active.remove(&feature) {
            self.feature_log.push(FeatureChange::Removed(feature));
        }
    }

    fn has_feature(&self, feature: ShaderFeature) -> bool {
        self.active.contains(&feature)
    }

    fn set_uniform(&mut self, name: &str, value: Uniform) {
        self.uniforms.insert(name.to_string(), value);
    }

    fn enable(&mut self) {
        self.enable_count += 1;
    }
}

/// Named collection of `DebugShaderProgram`s.
#[derive(Debug, Clone, Default)]
pub struct DebugShaderLibrary {
    programs: BTreeMap<String, DebugShaderProgram>,
}

impl DebugShaderLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the programs the built-in passes use.
    pub fn standard() -> Self {
        let mut library = Self::new();
        library.insert(DebugShaderProgram::with_all_features(crate::BLOCK_PROGRAM));
        library
    }

    pub fn insert(&mut self, program: DebugShaderProgram) {
        self.programs.insert(program.name.clone(), program);
    }

    pub fn get(&self, name: &str) -> Option<&DebugShaderProgram> {
        self.programs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DebugShaderProgram> {
        self.programs.get_mut(name)
    }
}

impl ShaderLibrary for DebugShaderLibrary {
    fn program_mut(&mut self, name: &str) -> Option<&mut dyn ShaderProgram> {
        self.programs
            .get_mut(name)
            .map(|p| p as &mut dyn ShaderProgram)
    }
}

/// One recorded draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub label: String,
    pub index_count: u32,
    /// Model-view matrix at the time of the draw.
    pub model_view: Mat4,
}

/// Graphics context that keeps a matrix stack and logs draws.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    current: Mat4,
    stack: Vec<Mat4>,
    max_depth: usize,
    underflows: usize,
    draws: Vec<DrawCall>,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self {
            current: Mat4::IDENTITY,
            stack: Vec::new(),
            max_depth: 0,
            underflows: 0,
            draws: Vec::new(),
        }
    }
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of pushes not yet popped.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Pops issued against an empty stack.
    pub fn underflows(&self) -> usize {
        self.underflows
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }

    /// Human-readable listing of recorded draws.
    pub fn summary(&self) -> String {
        let mut out = format!("=== Draws: {} ===\n", self.draws.len());
        for draw in &self.draws {
            let t = draw.model_view.w_axis;
            out.push_str(&format!(
                "  {} indices={} view_pos=({:.2}, {:.2}, {:.2})\n",
                draw.label, draw.index_count, t.x, t.y, t.z
            ));
        }
        out
    }
}

impl GraphicsContext for RecordingContext {
    fn push_matrix(&mut self) {
        self.stack.push(self.current);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn pop_matrix(&mut self) {
        match self.stack.pop() {
            Some(m) => self.current = m,
            None => {
                self.underflows += 1;
                tracing::warn!("matrix stack underflow");
            }
        }
    }

    fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    fn multiply_matrix(&mut self, matrix: &Mat4) {
        self.current *= *matrix;
    }

    fn draw_indexed(&mut self, label: &str, index_count: u32) {
        self.draws.push(DrawCall {
            label: label.to_string(),
            index_count,
            model_view: self.current,
        });
    }
}

/// Fixed world-renderer state with frustum culling against its camera.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub camera: Option<Camera>,
    pub daylight: f32,
    pub under_water: bool,
    pub tick: u64,
    pub sunlight: f32,
    pub sun_direction: Vec3,
    pub light_value: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            camera: Some(Camera::default()),
            daylight: 1.0,
            under_water: false,
            tick: 0,
            sunlight: 1.0,
            sun_direction: Vec3::new(0.0, 0.8, 0.6),
            light_value: 1.0,
        }
    }
}

impl WorldRenderer for SceneState {
    fn active_camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    fn daylight(&self) -> f32 {
        self.daylight
    }

    fn is_under_water(&self) -> bool {
        self.under_water
    }

    fn tick(&self) -> u64 {
        self.tick
    }

    fn smoothed_player_sunlight(&self) -> f32 {
        self.sunlight
    }

    fn sun_direction(&self) -> Vec3 {
        self.sun_direction
    }

    fn rendering_light_value(&self) -> f32 {
        self.light_value
    }

    fn is_aabb_visible(&self, aabb: &Aabb) -> bool {
        self.camera
            .as_ref()
            .is_some_and(|cam| Frustum::from_camera(cam).intersects_aabb(aabb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_logs_only_effective_changes() {
        let mut p = DebugShaderProgram::with_all_features("block");
        p.add_feature_if_available(ShaderFeature::AlphaReject);
        p.add_feature_if_available(ShaderFeature::AlphaReject);
        p.remove_feature(ShaderFeature::AlphaReject);
        p.remove_feature(ShaderFeature::AlphaReject);
        assert_eq!(
            p.feature_log(),
            &[
                FeatureChange::Added(ShaderFeature::AlphaReject),
                FeatureChange::Removed(ShaderFeature::AlphaReject),
            ]
        );
    }

    #[test]
    fn library_lookup() {
        let mut lib = DebugShaderLibrary::standard();
        assert!(lib.program_mut(crate::BLOCK_PROGRAM).is_some());
        assert!(lib.program_mut("missing").is_none());
    }

    #[test]
    fn recording_context_draws_with_current_matrix() {
        let mut gfx = RecordingContext::new();
        gfx.translate(Vec3::new(0.0, 0.0, -5.0));
        gfx.draw_indexed("thing", 6);
        assert_eq!(gfx.draws()[0].model_view.w_axis.truncate(), Vec3::new(0.0, 0.0, -5.0));
        assert!(gfx.summary().contains("thing indices=6"));
    }

    #[test]
    fn pop_on_empty_stack_is_counted() {
        let mut gfx = RecordingContext::new();
        gfx.pop_matrix();
        assert_eq!(gfx.underflows(), 1);
        assert_eq!(gfx.current(), Mat4::IDENTITY);
    }

    #[test]
    fn scene_without_camera_sees_nothing() {
        let scene = SceneState {
            camera: None,
            ..SceneState::default()
        };
        assert!(!scene.is_aabb_visible(&Aabb::new(Vec3::splat(-1.0), Vec3::ONE)));
    }
}
