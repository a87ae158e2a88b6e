//! Cell-level pathfinding over the sparse occupancy store.
//!
//! Breadth-first search over 4-connected neighbors, expanded in a fixed
//! N, E, S, W order so results are deterministic. The search never leaves
//! the endpoints' shared effective layer; endpoints on different layers
//! short-circuit to a not-found result without searching.

use std::collections::{HashMap, HashSet, VecDeque};

use arrayvec::ArrayVec;

use gridatlas_types::{
    AddressError, CellPos, LayerMismatchError, WorldPos, GRID_COLS, ROW_MAX, ROW_MIN,
};

use crate::address;
use crate::sparse::SparseWorld;

/// Outcome of a cell-level path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub found: bool,
    /// Location-id addresses from start to goal, inclusive. Empty when no
    /// path exists.
    pub path: Vec<String>,
}

impl PathResult {
    fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
        }
    }
}

/// BFS pathfinder over a borrowed occupancy store.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'a> {
    world: &'a SparseWorld,
}

impl<'a> Pathfinder<'a> {
    pub fn new(world: &'a SparseWorld) -> Self {
        Self { world }
    }

    /// The shared effective layer of two endpoints, or the mismatch error.
    pub fn require_same_layer(
        from: WorldPos,
        to: WorldPos,
    ) -> Result<u16, LayerMismatchError> {
        if from.layer == to.layer {
            Ok(from.layer)
        } else {
            Err(LayerMismatchError {
                from: from.layer,
                to: to.layer,
            })
        }
    }

    /// Shortest path (by edge count) between two location-id addresses.
    ///
    /// A cell is traversable iff no solid occupant claims it. Unreachable or
    /// blocked destinations, and endpoints on different effective layers,
    /// yield `found: false` with an empty path.
    pub fn find_path(&self, from: &str, to: &str) -> Result<PathResult, AddressError> {
        let start = address::parse_location_id(from)?;
        let goal = address::parse_location_id(to)?;

        let layer = match Self::require_same_layer(start, goal) {
            Ok(layer) => layer,
            Err(_) => return Ok(PathResult::not_found()),
        };
        if self.world.has_solid(&start) || self.world.has_solid(&goal) {
            return Ok(PathResult::not_found());
        }

        let start_cell = start.cell();
        let goal_cell = goal.cell();

        let mut visited: HashSet<CellPos> = HashSet::new();
        let mut came_from: HashMap<CellPos, CellPos> = HashMap::new();
        let mut queue: VecDeque<CellPos> = VecDeque::new();
        visited.insert(start_cell);
        queue.push_back(start_cell);

        while let Some(current) = queue.pop_front() {
            if current == goal_cell {
                return Ok(self.reconstruct(layer, start_cell, goal_cell, &came_from));
            }
            for next in neighbors(current) {
                if visited.contains(&next) {
                    continue;
                }
                let pos = WorldPos::new(layer, next.col, next.row);
                if self.world.has_solid(&pos) {
                    continue;
                }
                visited.insert(next);
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }

        Ok(PathResult::not_found())
    }

    fn reconstruct(
        &self,
        layer: u16,
        start: CellPos,
        goal: CellPos,
        came_from: &HashMap<CellPos, CellPos>,
    ) -> PathResult {
        let mut cells = vec![goal];
        let mut current = goal;
        while current != start {
            current = came_from[&current];
            cells.push(current);
        }
        cells.reverse();

        let path = cells
            .into_iter()
            .map(|cell| {
                address::format_location_id(layer, cell.col, cell.row)
                    .expect("search never leaves the grid")
            })
            .collect();
        PathResult { found: true, path }
    }
}

/// In-bounds 4-neighbors in fixed N, E, S, W order.
fn neighbors(cell: CellPos) -> ArrayVec<CellPos, 4> {
    let mut out = ArrayVec::new();
    if cell.row > ROW_MIN {
        out.push(CellPos::new(cell.col, cell.row - 1));
    }
    if cell.col + 1 < GRID_COLS {
        out.push(CellPos::new(cell.col + 1, cell.row));
    }
    if cell.row < ROW_MAX {
        out.push(CellPos::new(cell.col, cell.row + 1));
    }
    if cell.col > 0 {
        out.push(CellPos::new(cell.col - 1, cell.row));
    }
    out
}
