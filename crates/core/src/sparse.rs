//! Sparse occupancy store - collision-aware tile placement, independent of
//! rendering.
//!
//! Placements are keyed by full location-id addresses (`L<layer>-<cell>`), so
//! every entry carries its effective layer. A placement claims its anchor
//! cell plus any footprint offsets; solid placements may never overlap
//! another solid occupant on any claimed cell. Placement is atomic: every
//! claimed cell is validated before any cell is touched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use gridatlas_types::{
    AddressError, CollisionError, NotFoundError, ValidationError, WorldPos, GRID_COLS, ROW_MAX,
    ROW_MIN,
};

use crate::address;

/// A placement request: id, type tag, solidity, and extra claimed offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub solid: bool,
    /// Extra cells claimed beyond the anchor, as (d_col, d_row) offsets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footprint: Vec<(i8, i8)>,
}

/// One occupant entry on a claimed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOccupant {
    pub id: String,
    pub kind: String,
    pub solid: bool,
    /// Anchor the occupant was placed at (a footprint cell points back here).
    pub anchor: WorldPos,
}

/// Why a placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Collision(#[from] CollisionError),
    #[error("footprint offset ({0}, {1}) falls outside the grid")]
    FootprintOutOfBounds(i8, i8),
}

/// Why a removal failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoveError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlacementRecord {
    address: String,
    #[serde(flatten)]
    tile: PlacedTile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    placements: Vec<PlacementRecord>,
}

const SNAPSHOT_VERSION: u32 = 1;

/// Collision-aware sparse occupancy table.
#[derive(Debug, Clone, Default)]
pub struct SparseWorld {
    /// Occupants per claimed cell, in placement order.
    cells: HashMap<WorldPos, Vec<CellOccupant>>,
    /// Full placement records per anchor, in placement order.
    anchors: HashMap<WorldPos, Vec<PlacedTile>>,
}

impl SparseWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements (anchors, not claimed cells).
    pub fn len(&self) -> usize {
        self.anchors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Place a tile at an address, claiming the anchor and footprint cells.
    ///
    /// Fails with [`CollisionError`] if the placement is solid and any
    /// claimed cell already holds a solid occupant. On failure nothing is
    /// changed.
    pub fn place(&mut self, address: &str, tile: PlacedTile) -> Result<(), PlaceError> {
        let anchor = address::parse_location_id(address)?;
        let claimed = Self::claimed_cells(anchor, &tile)?;

        // Validate every claimed cell before committing any of them.
        if tile.solid {
            for pos in &claimed {
                if let Some(occupants) = self.cells.get(pos) {
                    if let Some(other) = occupants.iter().find(|o| o.solid) {
                        return Err(CollisionError {
                            id: tile.id.clone(),
                            other: other.id.clone(),
                            address: address::format_location_id(pos.layer, pos.col, pos.row)
                                .expect("claimed cells are in range"),
                        }
                        .into());
                    }
                }
            }
        }

        for pos in &claimed {
            self.cells.entry(*pos).or_default().push(CellOccupant {
                id: tile.id.clone(),
                kind: tile.kind.clone(),
                solid: tile.solid,
                anchor,
            });
        }
        self.anchors.entry(anchor).or_default().push(tile);
        Ok(())
    }

    /// Remove a placement by anchor address and id, freeing every cell it
    /// claimed (the exact inverse of [`SparseWorld::place`]).
    pub fn remove(&mut self, address: &str, id: &str) -> Result<(), RemoveError> {
        let anchor = address::parse_location_id(address)?;
        let tiles = self
            .anchors
            .get_mut(&anchor)
            .ok_or_else(|| NotFoundError::placement(id))?;
        let index = tiles
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| NotFoundError::placement(id))?;
        let tile = tiles.remove(index);
        if tiles.is_empty() {
            self.anchors.remove(&anchor);
        }

        // Claimed cells were validated at place time, so this cannot fail.
        let claimed =
            Self::claimed_cells(anchor, &tile).expect("stored placement has a valid footprint");
        for pos in &claimed {
            if let Some(occupants) = self.cells.get_mut(pos) {
                if let Some(i) = occupants
                    .iter()
                    .position(|o| o.id == tile.id && o.anchor == anchor)
                {
                    occupants.remove(i);
                }
                if occupants.is_empty() {
                    self.cells.remove(pos);
                }
            }
        }
        Ok(())
    }

    /// True when any placement claims the addressed cell.
    pub fn is_occupied(&self, address: &str) -> Result<bool, AddressError> {
        let pos = address::parse_location_id(address)?;
        Ok(self.cells.contains_key(&pos))
    }

    /// Occupants claiming the addressed cell, in placement order.
    pub fn get_tiles(&self, address: &str) -> Result<&[CellOccupant], AddressError> {
        let pos = address::parse_location_id(address)?;
        Ok(self.cells.get(&pos).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// True when a solid occupant claims the cell. Traversability probe for
    /// the pathfinder.
    pub fn has_solid(&self, pos: &WorldPos) -> bool {
        self.cells
            .get(pos)
            .is_some_and(|occupants| occupants.iter().any(|o| o.solid))
    }

    /// Serialize the full occupancy table. Output is deterministic:
    /// placements are sorted by address, then id.
    pub fn to_json(&self) -> serde_json::Value {
        let mut placements: Vec<PlacementRecord> = self
            .anchors
            .iter()
            .flat_map(|(anchor, tiles)| {
                let address = address::format_location_id(anchor.layer, anchor.col, anchor.row)
                    .expect("stored anchors are in range");
                tiles.iter().map(move |tile| PlacementRecord {
                    address: address.clone(),
                    tile: tile.clone(),
                })
            })
            .collect();
        placements.sort_by(|a, b| (&a.address, &a.tile.id).cmp(&(&b.address, &b.tile.id)));

        serde_json::to_value(Snapshot {
            version: SNAPSHOT_VERSION,
            placements,
        })
        .expect("snapshot serialization cannot fail")
    }

    /// Rebuild a world from a snapshot by replaying every placement, so the
    /// collision invariants are re-checked. Malformed snapshots fail with
    /// [`ValidationError`] and nothing is loaded.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let snapshot: Snapshot = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::MalformedSnapshot(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ValidationError::MalformedSnapshot(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }

        let mut world = SparseWorld::new();
        for record in snapshot.placements {
            world
                .place(&record.address, record.tile)
                .map_err(|e| ValidationError::MalformedSnapshot(e.to_string()))?;
        }
        Ok(world)
    }

    /// Anchor + footprint offsets, bounds-checked.
    fn claimed_cells(anchor: WorldPos, tile: &PlacedTile) -> Result<Vec<WorldPos>, PlaceError> {
        let mut claimed = Vec::with_capacity(1 + tile.footprint.len());
        claimed.push(anchor);
        for &(d_col, d_row) in &tile.footprint {
            let col = anchor.col as i16 + d_col as i16;
            let row = anchor.row as i16 + d_row as i16;
            if !(0..GRID_COLS as i16).contains(&col)
                || !(ROW_MIN as i16..=ROW_MAX as i16).contains(&row)
            {
                return Err(PlaceError::FootprintOutOfBounds(d_col, d_row));
            }
            claimed.push(WorldPos::new(anchor.layer, col as u8, row as u8));
        }
        Ok(claimed)
    }
}
