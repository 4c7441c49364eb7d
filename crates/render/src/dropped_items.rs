use crate::error::RenderError;
use crate::gfx::{GraphicsContext, MatrixScope};
use crate::params::{ShaderParameters, ShaderParametersBase, uniforms};
use crate::registry::DroppedItemRegistry;
use crate::renderer::{PassStats, RenderFrame, RenderSystem};
use crate::shader::{FeatureScope, ShaderFeature, ShaderLibrary, ShaderProgram};
use crate::transform;
use blockview_common::EntityId;
use blockview_ecs::{ComponentEvent, ComponentObserver, ComponentSet};

/// Shared program for untextured block geometry.
pub const BLOCK_PROGRAM: &str = "block";

const PASS_FEATURES: [ShaderFeature; 2] =
    [ShaderFeature::DeferredLighting, ShaderFeature::UseMatrixStack];

/// Draws dropped items in the opaque pass.
///
/// Registered with the host as a component observer; the registry it keeps
/// is what each pass iterates.
#[derive(Debug, Default)]
pub struct DroppedItemsRenderer {
    registry: DroppedItemRegistry,
}

impl DroppedItemsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &DroppedItemRegistry {
        &self.registry
    }

    fn draw_item(
        &self,
        entity: EntityId,
        frame: &RenderFrame<'_>,
        gfx: &mut dyn GraphicsContext,
        stats: &mut PassStats,
    ) {
        let Some(location) = frame.components.get_location(entity) else {
            stats.skipped_missing += 1;
            return;
        };
        let Some(mesh) = frame
            .components
            .get_mesh(entity)
            .and_then(|c| c.mesh)
            .and_then(|handle| frame.meshes.mesh(handle))
        else {
            stats.skipped_missing += 1;
            return;
        };
        if mesh.is_disposed() {
            tracing::error!(entity = %entity, "attempted to render disposed dropped item mesh");
            stats.skipped_disposed += 1;
            return;
        }

        let world = transform::location_matrix(location);
        let bounds = transform::transform_bounds(&mesh.bounds(), &world);
        if !frame.world_renderer.is_aabb_visible(&bounds) {
            stats.culled += 1;
            return;
        }

        let mut scope = MatrixScope::push(gfx);
        scope.multiply_matrix(&world);
        mesh.render(&mut *scope);
        stats.drawn += 1;
    }
}

impl RenderSystem for DroppedItemsRenderer {
    fn render_opaque(
        &self,
        frame: &RenderFrame<'_>,
        shaders: &mut dyn ShaderLibrary,
        gfx: &mut dyn GraphicsContext,
    ) -> Result<PassStats, RenderError> {
        let _span = tracing::debug_span!("dropped_items_opaque").entered();
        let mut stats = PassStats::default();

        let Some(camera) = frame.world_renderer.active_camera() else {
            tracing::debug!("no active camera, skipping pass");
            return Ok(stats);
        };
        let camera_position = camera.position;

        let program = shaders
            .program_mut(BLOCK_PROGRAM)
            .ok_or_else(|| RenderError::ShaderNotFound(BLOCK_PROGRAM.to_string()))?;
        let mut program = FeatureScope::enable(program, &PASS_FEATURES);

        ShaderParametersBase::new(frame.config, Some(frame.world_renderer), frame.time)
            .apply(&mut *program);
        program.set_bool(uniforms::TEXTURED, false);
        program.set_float(uniforms::LIGHT, frame.world_renderer.rendering_light_value());
        ShaderProgram::enable(&mut *program);

        let mut view = MatrixScope::push(gfx);
        view.translate(-camera_position);

        for entity in self.registry.iter() {
            stats.candidates += 1;
            self.draw_item(entity, frame, &mut *view, &mut stats);
        }

        tracing::debug!(%stats, "dropped items pass complete");
        Ok(stats)
    }
}

impl ComponentObserver for DroppedItemsRenderer {
    fn interest(&self) -> ComponentSet {
        self.registry.interest()
    }

    fn on_component_added(&mut self, event: &ComponentEvent) {
        self.registry.on_component_added(event);
    }

    fn on_component_removed(&mut self, event: &ComponentEvent) {
        self.registry.on_component_removed(event);
    }
}
