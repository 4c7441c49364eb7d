use serde::{Deserialize, Serialize};

/// Every component kind the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Name,
    Mesh,
    Location,
    DroppedItem,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Name,
        ComponentKind::Mesh,
        ComponentKind::Location,
        ComponentKind::DroppedItem,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Compact set of component kinds, used as an entity signature and as an
/// observer's subscription filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentSet(u8);

impl ComponentSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn of(kinds: &[ComponentKind]) -> Self {
        let mut set = Self::empty();
        for kind in kinds {
            set.insert(*kind);
        }
        set
    }

    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: ComponentKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True when every kind in `other` is also in `self`.
    pub fn contains_all(&self, other: ComponentSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl std::fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.iter().map(|k| format!("{k:?}")).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = ComponentSet::empty();
        assert!(set.is_empty());
        set.insert(ComponentKind::Mesh);
        set.insert(ComponentKind::DroppedItem);
        assert!(set.contains(ComponentKind::Mesh));
        assert!(!set.contains(ComponentKind::Location));
        set.remove(ComponentKind::Mesh);
        assert!(!set.contains(ComponentKind::Mesh));
        assert!(set.contains(ComponentKind::DroppedItem));
    }

    #[test]
    fn contains_all() {
        let both = ComponentSet::of(&[ComponentKind::Mesh, ComponentKind::DroppedItem]);
        let mesh = ComponentSet::of(&[ComponentKind::Mesh]);
        assert!(both.contains_all(mesh));
        assert!(!mesh.contains_all(both));
    }

    #[test]
    fn display_lists_kinds_in_order() {
        let set = ComponentSet::of(&[ComponentKind::DroppedItem, ComponentKind::Name]);
        assert_eq!(set.to_string(), "[Name, DroppedItem]");
    }
}
