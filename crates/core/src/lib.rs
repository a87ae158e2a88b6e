//! Core spatial logic - pure, deterministic, and testable
//!
//! This crate holds the simulation side of the system: address encoding,
//! the collision-aware sparse occupancy store, and cell-level pathfinding.
//! It has **zero dependencies** on rendering or I/O, making it:
//!
//! - **Deterministic**: fixed neighbor expansion order, sorted snapshots
//! - **Testable**: every rule has a unit test next to it
//! - **Portable**: usable from a terminal front end or a headless harness
//!
//! # Module Structure
//!
//! - [`address`]: cell address and location id codec (`AA10`, `L300-AA10`)
//! - [`sparse`]: sparse occupancy store with solid-collision rules and
//!   JSON snapshots
//! - [`path`]: breadth-first cell pathfinding over the occupancy store
//!
//! # Example
//!
//! ```
//! use gridatlas_core::{Pathfinder, PlacedTile, SparseWorld};
//!
//! let mut world = SparseWorld::new();
//! world
//!     .place(
//!         "L300-AB11",
//!         PlacedTile {
//!             id: "wall".into(),
//!             kind: "structure".into(),
//!             solid: true,
//!             footprint: vec![(0, 1)],
//!         },
//!     )
//!     .unwrap();
//!
//! let result = Pathfinder::new(&world)
//!     .find_path("L300-AA10", "L300-AC10")
//!     .unwrap();
//! assert!(result.found);
//! ```

pub mod address;
pub mod path;
pub mod sparse;

pub use gridatlas_types as types;

// Re-export commonly used types for convenience
pub use path::{PathResult, Pathfinder};
pub use sparse::{CellOccupant, PlaceError, PlacedTile, RemoveError, SparseWorld};
