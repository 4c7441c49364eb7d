//! Developer tooling: scene inspector and tunable property listings.
//!
//! # Invariants
//! - Tools only read world and renderer state; nothing here mutates it.
//! - Property listings are ordered by provider, then by the order each
//!   provider appends.

mod inspector;
mod properties;

pub use inspector::{EntityInfo, SceneSummary, WorldInspector};
pub use properties::{Property, PropertyProvider, SceneProperties};

pub fn crate_info() -> &'static str {
    "blockview-tools v0.1.0"
}
