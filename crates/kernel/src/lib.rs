//! World Kernel: authoritative world state, entity lifecycle, tick and clock.
//!
//! # Invariants
//! - All state mutations flow through explicit operations.
//! - Despawning removes the mesh component before any other component.
//! - World time never decreases.

pub mod world;

pub use world::{DEFAULT_DAY_LENGTH_MS, World, WorldEvent};
