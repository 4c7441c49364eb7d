//! Shared types and utilities for the blockview engine.
//!
//! # Invariants
//! - `EntityId` is stable for the lifetime of an entity and usable as a set key.
//! - `Aabb::min` is component-wise less than or equal to `Aabb::max`.

mod aabb;
mod types;

pub use aabb::Aabb;
pub use types::{EntityId, Location};
