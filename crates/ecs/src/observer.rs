use crate::{ComponentChange, ComponentEvent, ComponentSet};

/// Receives component notifications from the host.
///
/// Observers declare the component kinds they care about; `dispatch` only
/// forwards events of those kinds. Callbacks run synchronously on the
/// dispatching thread and must not assume anything about store state beyond
/// what the event carries.
pub trait ComponentObserver {
    /// Component kinds this observer is notified about.
    fn interest(&self) -> ComponentSet;

    fn on_component_added(&mut self, _event: &ComponentEvent) {}

    fn on_component_updated(&mut self, _event: &ComponentEvent) {}

    fn on_component_removed(&mut self, _event: &ComponentEvent) {}
}

/// Deliver `events` in order to `observer`, filtered by its interest.
pub fn dispatch(events: &[ComponentEvent], observer: &mut dyn ComponentObserver) {
    let interest = observer.interest();
    for event in events.iter().filter(|e| interest.contains(e.kind)) {
        match event.change {
            ComponentChange::Added => observer.on_component_added(event),
            ComponentChange::Updated => observer.on_component_updated(event),
            ComponentChange::Removed => observer.on_component_removed(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentKind, ComponentStore, MeshComponent, MeshHandle};
    use blockview_common::{EntityId, Location};

    #[derive(Default)]
    struct Counter {
        added: usize,
        updated: usize,
        removed: usize,
    }

    impl ComponentObserver for Counter {
        fn interest(&self) -> ComponentSet {
            ComponentSet::of(&[ComponentKind::Mesh])
        }

        fn on_component_added(&mut self, _event: &ComponentEvent) {
            self.added += 1;
        }

        fn on_component_updated(&mut self, _event: &ComponentEvent) {
            self.updated += 1;
        }

        fn on_component_removed(&mut self, _event: &ComponentEvent) {
            self.removed += 1;
        }
    }

    #[test]
    fn dispatch_filters_by_interest() {
        let mut store = ComponentStore::new();
        let id = EntityId::new();
        store.set_location(id, Location::default());
        store.set_mesh(id, MeshComponent::new(MeshHandle(1)));
        store.set_mesh(id, MeshComponent::new(MeshHandle(2)));
        store.remove_location(id);
        store.remove_mesh(id);

        let mut counter = Counter::default();
        dispatch(&store.drain_events(), &mut counter);
        assert_eq!(counter.added, 1);
        assert_eq!(counter.updated, 1);
        assert_eq!(counter.removed, 1);
    }
}
