use crate::gfx::GraphicsContext;
use blockview_assets::{Mesh, MeshStore};
use blockview_common::Aabb;
use blockview_ecs::MeshHandle;

/// A drawable mesh resource.
pub trait MeshResource {
    /// Object-space bounds.
    fn bounds(&self) -> Aabb;

    fn is_disposed(&self) -> bool;

    /// Draw with whatever matrix and program are currently bound.
    fn render(&self, gfx: &mut dyn GraphicsContext);
}

/// Resolves mesh handles held by components.
pub trait MeshLibrary {
    fn mesh(&self, handle: MeshHandle) -> Option<&dyn MeshResource>;
}

impl MeshResource for Mesh {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn is_disposed(&self) -> bool {
        Mesh::is_disposed(self)
    }

    fn render(&self, gfx: &mut dyn GraphicsContext) {
        gfx.draw_indexed(&self.name, self.index_count);
    }
}

impl MeshLibrary for MeshStore {
    fn mesh(&self, handle: MeshHandle) -> Option<&dyn MeshResource> {
        self.get(handle).map(|m| m as &dyn MeshResource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::RecordingContext;

    #[test]
    fn store_resolves_registered_meshes() {
        let mut store = MeshStore::new();
        let handle = store.register(Mesh::cube("item", 0.25));
        let mesh = store.mesh(handle).unwrap();
        assert!(!mesh.is_disposed());
        assert_eq!(mesh.bounds().extents(), glam::Vec3::splat(0.25));
        assert!(store.mesh(MeshHandle(handle.0 + 1)).is_none());
    }

    #[test]
    fn render_issues_one_indexed_draw() {
        let mut store = MeshStore::new();
        let handle = store.register(Mesh::cube("item", 0.25));
        let mut gfx = RecordingContext::new();
        store.mesh(handle).unwrap().render(&mut gfx);
        assert_eq!(gfx.draws().len(), 1);
        assert_eq!(gfx.draws()[0].label, "item");
        assert_eq!(gfx.draws()[0].index_count, 36);
    }
}
