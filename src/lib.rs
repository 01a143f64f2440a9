/// Provides common definitions used across the crate
pub mod common;

/// Provides the read-only snapshots renderers draw from
pub mod snapshot;

/// Provides renderers for creeps, room objects, resource icons and rooms
pub mod objects;

/// Provides renderers for structures
pub mod structures;

/// Provides a single entry point that renders any snapshot
pub mod render;
