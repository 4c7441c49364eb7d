//! Rendering adapter for dropped items.
//!
//! Keeps a reactive registry of dropped-item entities, culls them against the
//! active camera, composes their world transforms and draws them with the
//! shared block shader, whose global uniforms are bound once per pass.
//!
//! # Invariants
//! - The renderer never mutates world truth; the registry changes only
//!   through component notifications.
//! - Shader feature flags enabled by a pass are removed before the pass
//!   returns, on every exit path.
//! - Matrix-stack pushes made by a pass are popped before it returns.
//!
//! # Workaround
//! Collaborators (world renderer, shader library, graphics context) are
//! traits. The `debug` module provides a headless recording backend used by
//! the CLI and tests; a GPU backend implements the same traits.

mod camera;
pub mod config;
pub mod debug;
mod dropped_items;
mod error;
mod frustum;
mod gfx;
mod mesh;
pub mod params;
mod registry;
mod renderer;
mod shader;
pub mod transform;
mod world;

pub use camera::Camera;
pub use config::RenderingConfig;
pub use dropped_items::{BLOCK_PROGRAM, DroppedItemsRenderer};
pub use error::{ConfigError, RenderError};
pub use frustum::Frustum;
pub use gfx::{GraphicsContext, MatrixScope};
pub use mesh::{MeshLibrary, MeshResource};
pub use params::{FrameSnapshot, ShaderParameters, ShaderParametersBase, bind_globals};
pub use registry::DroppedItemRegistry;
pub use renderer::{PassStats, RenderFrame, RenderSystem};
pub use shader::{FeatureScope, ShaderFeature, ShaderLibrary, ShaderProgram, Uniform};
pub use world::{WorldRenderer, WorldTimeProvider};

pub fn crate_info() -> &'static str {
    "blockview-render v0.1.0"
}
