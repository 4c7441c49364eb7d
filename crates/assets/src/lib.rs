//! Mesh asset registry.
//!
//! Meshes are registered once and referenced by `MeshHandle` from components.
//! The renderer consumes meshes by handle, never by owning them.
//!
//! # Invariants
//! - Handles are never reused within one store.
//! - A disposed mesh stays resolvable (so stale references can be detected)
//!   until it is explicitly removed.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use blockview_common::Aabb;
use blockview_ecs::MeshHandle;

/// A minimal mesh representation: geometry counts plus object-space bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub vertex_count: u32,
    pub index_count: u32,
    pub bounds: Aabb,
    disposed: bool,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertex_count: u32, index_count: u32, bounds: Aabb) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            index_count,
            bounds,
            disposed: false,
        }
    }

    /// Axis-aligned cube centered on the origin (24 vertices, 36 indices).
    pub fn cube(name: impl Into<String>, half_extent: f32) -> Self {
        Self::new(
            name,
            24,
            36,
            Aabb::from_center_extents(Vec3::ZERO, Vec3::splat(half_extent)),
        )
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("mesh not found: {0:?}")]
    NotFound(MeshHandle),
    #[error("mesh already disposed: {0:?}")]
    AlreadyDisposed(MeshHandle),
}

/// Handle-indexed mesh registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshStore {
    meshes: BTreeMap<MeshHandle, Mesh>,
    next_id: u64,
}

impl MeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh and return its handle.
    pub fn register(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.next_id);
        self.next_id += 1;
        tracing::debug!(?handle, name = %mesh.name, "registered mesh");
        self.meshes.insert(handle, mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(&handle)
    }

    /// Release the mesh's GPU-side data. The entry stays in the store.
    pub fn dispose(&mut self, handle: MeshHandle) -> Result<(), AssetError> {
        let mesh = self
            .meshes
            .get_mut(&handle)
            .ok_or(AssetError::NotFound(handle))?;
        if mesh.disposed {
            return Err(AssetError::AlreadyDisposed(handle));
        }
        mesh.disposed = true;
        tracing::debug!(?handle, name = %mesh.name, "disposed mesh");
        Ok(())
    }

    /// Drop the entry entirely.
    pub fn remove(&mut self, handle: MeshHandle) -> Option<Mesh> {
        self.meshes.remove(&handle)
    }

    /// Number of registered meshes, disposed ones included.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

pub fn crate_info() -> &'static str {
    "blockview-assets v0.1.0"
}
