use crate::config::RenderingConfig;
use crate::error::RenderError;
use crate::gfx::GraphicsContext;
use crate::mesh::MeshLibrary;
use crate::shader::ShaderLibrary;
use crate::world::{WorldRenderer, WorldTimeProvider};
use blockview_ecs::ComponentStore;
use serde::Serialize;

/// Read-only collaborators for one frame, injected by the host.
#[derive(Clone, Copy)]
pub struct RenderFrame<'a> {
    pub components: &'a ComponentStore,
    pub meshes: &'a dyn MeshLibrary,
    pub world_renderer: &'a dyn WorldRenderer,
    pub time: Option<&'a dyn WorldTimeProvider>,
    pub config: &'a RenderingConfig,
}

/// What a pass did with its candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    /// Registry members visited.
    pub candidates: usize,
    pub drawn: usize,
    /// Rejected by the visibility test.
    pub culled: usize,
    /// No location, no mesh, or an unresolvable mesh handle.
    pub skipped_missing: usize,
    pub skipped_disposed: usize,
}

impl std::fmt::Display for PassStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "candidates={} drawn={} culled={} missing={} disposed={}",
            self.candidates, self.drawn, self.culled, self.skipped_missing, self.skipped_disposed
        )
    }
}

/// A system that contributes to the frame's render passes.
///
/// Passes run in a fixed order on the render thread. A system overrides only
/// the passes it draws in; the rest are no-ops.
pub trait RenderSystem {
    fn render_opaque(
        &self,
        _frame: &RenderFrame<'_>,
        _shaders: &mut dyn ShaderLibrary,
        _gfx: &mut dyn GraphicsContext,
    ) -> Result<PassStats, RenderError> {
        Ok(PassStats::default())
    }

    fn render_alpha_blend(
        &self,
        _frame: &RenderFrame<'_>,
        _shaders: &mut dyn ShaderLibrary,
        _gfx: &mut dyn GraphicsContext,
    ) -> Result<PassStats, RenderError> {
        Ok(PassStats::default())
    }

    fn render_overlay(
        &self,
        _frame: &RenderFrame<'_>,
        _shaders: &mut dyn ShaderLibrary,
        _gfx: &mut dyn GraphicsContext,
    ) -> Result<PassStats, RenderError> {
        Ok(PassStats::default())
    }

    fn render_first_person(
        &self,
        _frame: &RenderFrame<'_>,
        _shaders: &mut dyn ShaderLibrary,
        _gfx: &mut dyn GraphicsContext,
    ) -> Result<PassStats, RenderError> {
        Ok(PassStats::default())
    }

    fn render_shadows(
        &self,
        _frame: &RenderFrame<'_>,
        _shaders: &mut dyn ShaderLibrary,
        _gfx: &mut dyn GraphicsContext,
    ) -> Result<PassStats, RenderError> {
        Ok(PassStats::default())
    }
}
