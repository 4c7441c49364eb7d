//! Minimal deterministic ECS-style component model.
//!
//! Components are stored in BTreeMap for deterministic iteration order.
//! Each component type has its own storage keyed by EntityId.
//!
//! # Invariants
//! - Every add, update and remove produces exactly one `ComponentEvent`.
//! - An event's `signature` is the entity's component set after the mutation
//!   for adds and updates, and before the mutation for removes.
//! - Iteration order is deterministic (BTreeMap).

mod observer;
mod signature;

pub use observer::{ComponentObserver, dispatch};
pub use signature::{ComponentKind, ComponentSet};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use blockview_common::{EntityId, Location};

/// A handle referencing a mesh asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Human-readable name component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Mesh component: the renderable mesh this entity displays, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshComponent {
    pub mesh: Option<MeshHandle>,
}

impl MeshComponent {
    pub fn new(mesh: MeshHandle) -> Self {
        Self { mesh: Some(mesh) }
    }
}

/// What happened to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentChange {
    Added,
    Updated,
    Removed,
}

/// Event produced by a component mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEvent {
    pub entity: EntityId,
    pub kind: ComponentKind,
    pub change: ComponentChange,
    pub signature: ComponentSet,
}

/// Deterministic component storage for all component types.
///
/// Uses BTreeMap for canonical iteration order. All mutations produce events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentStore {
    names: BTreeMap<EntityId, Name>,
    meshes: BTreeMap<EntityId, MeshComponent>,
    locations: BTreeMap<EntityId, Location>,
    dropped_items: BTreeSet<EntityId>,
    #[serde(skip)]
    events: Vec<ComponentEvent>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all pending component events.
    pub fn drain_events(&mut self) -> Vec<ComponentEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only access to pending events.
    pub fn events(&self) -> &[ComponentEvent] {
        &self.events
    }

    /// The set of component kinds the entity currently carries.
    pub fn signature(&self, entity: EntityId) -> ComponentSet {
        let mut set = ComponentSet::empty();
        if self.names.contains_key(&entity) {
            set.insert(ComponentKind::Name);
        }
        if self.meshes.contains_key(&entity) {
            set.insert(ComponentKind::Mesh);
        }
        if self.locations.contains_key(&entity) {
            set.insert(ComponentKind::Location);
        }
        if self.dropped_items.contains(&entity) {
            set.insert(ComponentKind::DroppedItem);
        }
        set
    }

    fn record(
        &mut self,
        entity: EntityId,
        kind: ComponentKind,
        change: ComponentChange,
        signature: ComponentSet,
    ) {
        tracing::trace!(entity = %entity, ?kind, ?change, "component event");
        self.events.push(ComponentEvent {
            entity,
            kind,
            change,
            signature,
        });
    }

    // --- Name ---
    pub fn set_name(&mut self, entity: EntityId, name: impl Into<String>) {
        let change = if self.names.contains_key(&entity) {
            ComponentChange::Updated
        } else {
            ComponentChange::Added
        };
        self.names.insert(entity, Name(name.into()));
        self.record(entity, ComponentKind::Name, change, self.signature(entity));
    }

    pub fn remove_name(&mut self, entity: EntityId) -> Option<Name> {
        let before = self.signature(entity);
        let removed = self.names.remove(&entity);
        if removed.is_some() {
            self.record(entity, ComponentKind::Name, ComponentChange::Removed, before);
        }
        removed
    }

    pub fn get_name(&self, entity: EntityId) -> Option<&Name> {
        self.names.get(&entity)
    }

    // --- Mesh ---
    pub fn set_mesh(&mut self, entity: EntityId, mesh: MeshComponent) {
        let change = if self.meshes.contains_key(&entity) {
            ComponentChange::Updated
        } else {
            ComponentChange::Added
        };
        self.meshes.insert(entity, mesh);
        self.record(entity, ComponentKind::Mesh, change, self.signature(entity));
    }

    pub fn remove_mesh(&mut self, entity: EntityId) -> Option<MeshComponent> {
        let before = self.signature(entity);
        let removed = self.meshes.remove(&entity);
        if removed.is_some() {
            self.record(entity, ComponentKind::Mesh, ComponentChange::Removed, before);
        }
        removed
    }

    pub fn get_mesh(&self, entity: EntityId) -> Option<&MeshComponent> {
        self.meshes.get(&entity)
    }

    pub fn meshes(&self) -> &BTreeMap<EntityId, MeshComponent> {
        &self.meshes
    }

    // --- Location ---
    pub fn set_location(&mut self, entity: EntityId, location: Location) {
        let change = if self.locations.contains_key(&entity) {
            ComponentChange::Updated
        } else {
            ComponentChange::Added
        };
        self.locations.insert(entity, location);
        self.record(entity, ComponentKind::Location, change, self.signature(entity));
    }

    pub fn remove_location(&mut self, entity: EntityId) -> Option<Location> {
        let before = self.signature(entity);
        let removed = self.locations.remove(&entity);
        if removed.is_some() {
            self.record(
                entity,
                ComponentKind::Location,
                ComponentChange::Removed,
                before,
            );
        }
        removed
    }

    pub fn get_location(&self, entity: EntityId) -> Option<&Location> {
        self.locations.get(&entity)
    }

    // --- DroppedItem tag ---
    /// Tag the entity as a dropped item. Re-tagging is a no-op.
    pub fn add_dropped_item(&mut self, entity: EntityId) {
        if self.dropped_items.insert(entity) {
            self.record(
                entity,
                ComponentKind::DroppedItem,
                ComponentChange::Added,
                self.signature(entity),
            );
        }
    }

    pub fn remove_dropped_item(&mut self, entity: EntityId) -> bool {
        let before = self.signature(entity);
        let removed = self.dropped_items.remove(&entity);
        if removed {
            self.record(
                entity,
                ComponentKind::DroppedItem,
                ComponentChange::Removed,
                before,
            );
        }
        removed
    }

    pub fn is_dropped_item(&self, entity: EntityId) -> bool {
        self.dropped_items.contains(&entity)
    }

    /// Remove all components for an entity.
    ///
    /// The mesh goes first so its removal event still sees every other
    /// component the entity carried.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.remove_mesh(entity);
        self.remove_location(entity);
        self.remove_dropped_item(entity);
        self.remove_name(entity);
    }
}

pub fn crate_info() -> &'static str {
    "blockview-ecs v0.1.0"
}
