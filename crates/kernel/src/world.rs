use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use blockview_common::{EntityId, Location};
use blockview_ecs::{ComponentEvent, ComponentStore};

/// Length of one in-world day in milliseconds of simulated time.
pub const DEFAULT_DAY_LENGTH_MS: u64 = 1_200_000;

/// An event record produced by every structural mutation to the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorldEvent {
    Spawned { id: EntityId },
    Despawned { id: EntityId },
    /// Simulation advanced one tick.
    Stepped { tick: u64, time_ms: u64 },
}

/// The authoritative world state.
///
/// Owns the entity set, the component store, the tick counter and the world
/// clock. Renderers read from it; simulation logic mutates it through the
/// explicit operations below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    entities: BTreeSet<EntityId>,
    components: ComponentStore,
    tick: u64,
    time_ms: u64,
    day_length_ms: u64,
    #[serde(skip)]
    event_log: Vec<WorldEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::with_day_length(DEFAULT_DAY_LENGTH_MS)
    }
}

impl World {
    /// Create an empty world at tick 0, time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world whose day lasts `day_length_ms` of simulated time.
    /// A zero length is clamped to one millisecond.
    pub fn with_day_length(day_length_ms: u64) -> Self {
        Self {
            entities: BTreeSet::new(),
            components: ComponentStore::new(),
            tick: 0,
            time_ms: 0,
            day_length_ms: day_length_ms.max(1),
            event_log: Vec::new(),
        }
    }

    /// Current simulation tick.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Elapsed simulated time in milliseconds.
    pub fn time_ms(&self) -> u64 {
        self.time_ms
    }

    pub fn day_length_ms(&self) -> u64 {
        self.day_length_ms
    }

    /// Elapsed simulated time measured in days.
    pub fn time_in_days(&self) -> f32 {
        (self.time_ms as f64 / self.day_length_ms as f64) as f32
    }

    /// Number of entities in the world.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &BTreeSet<EntityId> {
        &self.entities
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(&id)
    }

    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentStore {
        &mut self.components
    }

    /// Drain pending component events for delivery to observers.
    pub fn drain_component_events(&mut self) -> Vec<ComponentEvent> {
        self.components.drain_events()
    }

    /// Drain and return the world event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the world event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Spawn a new, component-less entity.
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId::new();
        self.entities.insert(id);
        self.event_log.push(WorldEvent::Spawned { id });
        id
    }

    /// Spawn an entity placed at `location`.
    pub fn spawn_at(&mut self, location: Location) -> EntityId {
        let id = self.spawn();
        self.components.set_location(id, location);
        id
    }

    /// Remove an entity and all of its components. Returns false if unknown.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        if !self.entities.remove(&id) {
            return false;
        }
        self.components.remove_entity(id);
        self.event_log.push(WorldEvent::Despawned { id });
        tracing::debug!(entity = %id, "despawned");
        true
    }

    /// Move an existing entity. Returns false if it has no location.
    pub fn set_location(&mut self, id: EntityId, location: Location) -> bool {
        if self.components.get_location(id).is_none() {
            return false;
        }
        self.components.set_location(id, location);
        true
    }

    /// Advance the simulation by one tick of `dt_ms` simulated milliseconds.
    pub fn step(&mut self, dt_ms: u64) {
        self.tick += 1;
        self.time_ms = self.time_ms.saturating_add(dt_ms);
        self.event_log.push(WorldEvent::Stepped {
            tick: self.tick,
            time_ms: self.time_ms,
        });
    }
}
