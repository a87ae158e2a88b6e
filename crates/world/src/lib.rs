//! World module - the location registry and its connection graph.
//!
//! Loading takes a loader-produced [`LocationDatabase`], validates every
//! record (required fields, layer range, cell-address legality), and builds
//! an immutable id-to-[`Location`] map. The graph layer answers coarse
//! queries: location-to-location paths, filters by layer and distance scale,
//! text search, and aggregate statistics.
//!
//! This crate never parses source documents; an external loader hands in the
//! already-shaped database.

pub mod graph;
pub mod location;

pub use gridatlas_types as types;

pub use graph::{LocationInfo, World, WorldStatistics};
pub use location::{Connection, Location, LocationDatabase, LocationMetadata, LocationRecord};
