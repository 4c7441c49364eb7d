use blockview_common::EntityId;
use blockview_ecs::MeshHandle;
use blockview_kernel::World;
use blockview_render::DroppedItemRegistry;
use serde::Serialize;

/// Read-only queries over the world and the dropped-item registry.
pub struct WorldInspector;

impl WorldInspector {
    pub fn summary(world: &World, registry: &DroppedItemRegistry) -> SceneSummary {
        SceneSummary {
            tick: world.tick(),
            time_in_days: world.time_in_days(),
            entity_count: world.entity_count(),
            dropped_items: registry.len(),
            pending_events: world.events().len(),
        }
    }

    pub fn inspect_entity(
        world: &World,
        registry: &DroppedItemRegistry,
        id: EntityId,
    ) -> Option<EntityInfo> {
        if !world.contains(id) {
            return None;
        }
        let components = world.components();
        let location = components.get_location(id);
        Some(EntityInfo {
            id,
            name: components.get_name(id).map(|n| n.0.clone()),
            position: location.map(|l| l.position.to_array()),
            scale: location.map(|l| l.scale),
            mesh: components.get_mesh(id).and_then(|m| m.mesh),
            tagged: components.is_dropped_item(id),
            registered: registry.contains(id),
        })
    }

    /// Entity ids in ascending order.
    pub fn list_entities(world: &World) -> Vec<EntityId> {
        world.entities().iter().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub tick: u64,
    pub time_in_days: f32,
    pub entity_count: usize,
    pub dropped_items: usize,
    pub pending_events: usize,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: tick={} days={:.3} entities={} dropped_items={} pending_events={}",
            self.tick, self.time_in_days, self.entity_count, self.dropped_items, self.pending_events
        )
    }
}

/// Component view of a single entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityInfo {
    pub id: EntityId,
    pub name: Option<String>,
    pub position: Option<[f32; 3]>,
    pub scale: Option<f32>,
    pub mesh: Option<MeshHandle>,
    /// Carries the dropped-item tag.
    pub tagged: bool,
    /// Present in the render registry.
    pub registered: bool,
}

impl std::fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity [{}]", self.id.short())?;
        if let Some(name) = &self.name {
            write!(f, " \"{name}\"")?;
        }
        match self.position {
            Some(p) => write!(f, " pos=({:.2}, {:.2}, {:.2})", p[0], p[1], p[2])?,
            None => write!(f, " pos=-")?,
        }
        if let Some(scale) = self.scale {
            write!(f, " scale={scale:.2}")?;
        }
        match self.mesh {
            Some(mesh) => write!(f, " mesh={}", mesh.0)?,
            None => write!(f, " mesh=-")?,
        }
        write!(f, " tagged={} registered={}", self.tagged, self.registered)
    }
}
