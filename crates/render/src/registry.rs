use blockview_common::EntityId;
use blockview_ecs::{ComponentEvent, ComponentKind, ComponentObserver, ComponentSet};
use std::collections::HashSet;

/// Entities that carry both a mesh and the dropped-item tag.
///
/// Membership follows mesh add/remove notifications only. Removing the tag on
/// its own does not evict an entity; the next mesh removal does.
#[derive(Debug, Clone, Default)]
pub struct DroppedItemRegistry {
    members: HashSet<EntityId>,
}

impl DroppedItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mesh attached. `signature` is the entity's component set after the
    /// attachment. Returns true if the entity became a member.
    pub fn on_mesh_added(&mut self, entity: EntityId, signature: ComponentSet) -> bool {
        if !signature.contains(ComponentKind::DroppedItem) {
            return false;
        }
        let inserted = self.members.insert(entity);
        if inserted {
            tracing::debug!(entity = %entity, "dropped item registered");
        }
        inserted
    }

    /// Mesh detached. `signature` is the entity's component set just before
    /// the detachment. Returns true if the entity was a member.
    pub fn on_mesh_removed(&mut self, entity: EntityId, signature: ComponentSet) -> bool {
        let removed = self.members.remove(&entity);
        if removed {
            let tagged = signature.contains(ComponentKind::DroppedItem);
            tracing::debug!(entity = %entity, tagged, "dropped item unregistered");
        }
        removed
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.members.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.members.iter().copied()
    }

    /// Owned copy of the current members, in unspecified order.
    pub fn snapshot(&self) -> Vec<EntityId> {
        self.iter().collect()
    }
}

impl ComponentObserver for DroppedItemRegistry {
    fn interest(&self) -> ComponentSet {
        ComponentSet::of(&[ComponentKind::Mesh])
    }

    fn on_component_added(&mut self, event: &ComponentEvent) {
        self.on_mesh_added(event.entity, event.signature);
    }

    fn on_component_removed(&mut self, event: &ComponentEvent) {
        self.on_mesh_removed(event.entity, event.signature);
    }
}
