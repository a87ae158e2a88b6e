//! The location graph: validated locations plus coarse connectivity.
//!
//! This graph is distinct from cell-level pathfinding: nodes are whole
//! locations and edges are the loader-declared connections between them.
//! Loading is all-or-nothing; a database that fails validation leaves the
//! previous contents untouched.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, info};

use gridatlas_core::address::parse_cell_address;
use gridatlas_types::{
    layer_in_range, DistanceScale, NotFoundError, TileMap, ValidationError,
};

use crate::location::{Connection, Location, LocationDatabase, LocationRecord};

/// Summary line for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub name: String,
    pub scale: DistanceScale,
    pub unit: &'static str,
    pub connection_count: usize,
}

/// Aggregate counts over the whole graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldStatistics {
    pub total_locations: usize,
    pub locations_by_scale: HashMap<DistanceScale, usize>,
    /// Directed edge count: a bidirectional pair contributes 2.
    pub total_connections: usize,
}

/// Registry of validated locations and their connection graph.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: HashMap<String, Location>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and install a loader-produced database.
    ///
    /// Every record must carry a name, a layer inside `300..=899`, and a
    /// legal center cell; tile keys must be legal cell addresses. After
    /// validation, every `bidirectional` connection is expanded into both
    /// directed edges. On any error the previous contents are kept.
    pub fn load_database(&mut self, db: LocationDatabase) -> Result<(), ValidationError> {
        let mut locations = HashMap::with_capacity(db.locations.len());
        for (id, record) in db.locations {
            let location = validate_record(&id, record)?;
            debug!(id = %location.id, layer = location.layer, "validated location");
            locations.insert(id, location);
        }

        expand_bidirectional(&mut locations);

        info!(locations = locations.len(), "location database loaded");
        self.locations = locations;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get_location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Distance scale of a layer (pure lookup).
    pub fn distance_scale(layer: u16) -> Option<DistanceScale> {
        DistanceScale::for_layer(layer)
    }

    /// Measurement unit of a scale (pure lookup).
    pub fn distance_unit(scale: DistanceScale) -> &'static str {
        scale.unit()
    }

    /// Real distance one cell spans at a scale (pure lookup).
    pub fn cell_distance(scale: DistanceScale) -> f64 {
        scale.cell_distance()
    }

    /// Shortest location-to-location path by hop count.
    ///
    /// `find_path(x, x)` is `[x]`. Unreachable pairs yield `Ok(None)`;
    /// unknown endpoints are an error.
    pub fn find_path(&self, from: &str, to: &str) -> Result<Option<Vec<String>>, NotFoundError> {
        if !self.locations.contains_key(from) {
            return Err(NotFoundError::location(from));
        }
        if !self.locations.contains_key(to) {
            return Err(NotFoundError::location(to));
        }
        if from == to {
            return Ok(Some(vec![from.to_string()]));
        }

        let mut queue = VecDeque::from([from]);
        let mut visited: HashSet<&str> = HashSet::from([from]);
        let mut came_from: HashMap<&str, &str> = HashMap::new();

        while let Some(current) = queue.pop_front() {
            // Expand targets in sorted order so ties break deterministically.
            let mut targets: Vec<&str> = self.locations[current]
                .connections
                .iter()
                .map(|c| c.target.as_str())
                .collect();
            targets.sort_unstable();

            for target in targets {
                if !self.locations.contains_key(target) || !visited.insert(target) {
                    continue;
                }
                came_from.insert(target, current);
                if target == to {
                    let mut path = vec![to.to_string()];
                    let mut node = to;
                    while let Some(&prev) = came_from.get(node) {
                        path.push(prev.to_string());
                        node = prev;
                    }
                    path.reverse();
                    return Ok(Some(path));
                }
                queue.push_back(target);
            }
        }

        Ok(None)
    }

    /// Locations directly reachable from `id`, sorted by id.
    pub fn connected_locations(&self, id: &str) -> Result<Vec<&Location>, NotFoundError> {
        let location = self
            .locations
            .get(id)
            .ok_or_else(|| NotFoundError::location(id))?;
        let mut out: Vec<&Location> = location
            .connections
            .iter()
            .filter_map(|c| self.locations.get(c.target.as_str()))
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(out)
    }

    pub fn locations_by_layer(&self, layer: u16) -> Vec<&Location> {
        let mut out: Vec<&Location> = self
            .locations
            .values()
            .filter(|l| l.layer == layer)
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    pub fn locations_by_scale(&self, scale: DistanceScale) -> Vec<&Location> {
        let mut out: Vec<&Location> = self
            .locations
            .values()
            .filter(|l| DistanceScale::for_layer(l.layer) == Some(scale))
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// Case-insensitive substring search over name, description, and tags.
    pub fn search_locations(&self, query: &str) -> Vec<&Location> {
        let needle = query.to_lowercase();
        let mut out: Vec<&Location> = self
            .locations
            .values()
            .filter(|l| {
                l.metadata.name.to_lowercase().contains(&needle)
                    || l.metadata.description.to_lowercase().contains(&needle)
                    || l.metadata
                        .tags
                        .iter()
                        .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    pub fn location_info(&self, id: &str) -> Result<LocationInfo, NotFoundError> {
        let location = self
            .locations
            .get(id)
            .ok_or_else(|| NotFoundError::location(id))?;
        // Loaded locations always sit inside the valid layer range.
        let scale = DistanceScale::for_layer(location.layer)
            .unwrap_or(DistanceScale::Terrestrial);
        Ok(LocationInfo {
            name: location.metadata.name.clone(),
            scale,
            unit: scale.unit(),
            connection_count: location.connections.len(),
        })
    }

    pub fn statistics(&self) -> WorldStatistics {
        let mut stats = WorldStatistics {
            total_locations: self.locations.len(),
            ..WorldStatistics::default()
        };
        for location in self.locations.values() {
            if let Some(scale) = DistanceScale::for_layer(location.layer) {
                *stats.locations_by_scale.entry(scale).or_insert(0) += 1;
            }
            stats.total_connections += location.connections.len();
        }
        stats
    }
}

fn validate_record(id: &str, record: LocationRecord) -> Result<Location, ValidationError> {
    if record.metadata.name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    let layer = record.layer.ok_or(ValidationError::MissingField("layer"))?;
    if u16::try_from(layer).map_or(true, |l| !layer_in_range(l)) {
        return Err(ValidationError::LayerOutOfRange(layer));
    }
    let layer = layer as u16;

    let center = record
        .center_cell
        .ok_or(ValidationError::MissingField("centerCell"))?;
    let center_cell = parse_cell_address(&center).map_err(|source| ValidationError::BadAddress {
        id: id.to_string(),
        source,
    })?;

    let mut tiles = TileMap::with_capacity(record.tiles.len());
    for (address, content) in record.tiles {
        let cell = parse_cell_address(&address).map_err(|source| ValidationError::BadAddress {
            id: id.to_string(),
            source,
        })?;
        tiles.insert(cell, content);
    }

    Ok(Location {
        id: id.to_string(),
        layer,
        center_cell,
        metadata: record.metadata,
        connections: record.connections,
        tiles,
    })
}

/// Add the reverse edge for every bidirectional connection whose target
/// exists and does not already link back.
fn expand_bidirectional(locations: &mut HashMap<String, Location>) {
    let mut reverse: Vec<(String, Connection)> = Vec::new();
    for location in locations.values() {
        for conn in &location.connections {
            if !conn.bidirectional || !locations.contains_key(&conn.target) {
                continue;
            }
            let target = &locations[&conn.target];
            if target.connections.iter().any(|c| c.target == location.id) {
                continue;
            }
            reverse.push((
                conn.target.clone(),
                Connection {
                    target: location.id.clone(),
                    kind: conn.kind.clone(),
                    label: conn.label.clone(),
                    bidirectional: true,
                    requires: conn.requires.clone(),
                },
            ));
        }
    }
    for (id, conn) in reverse {
        if let Some(target) = locations.get_mut(&id) {
            // A pair of mutual bidirectional records can both queue the
            // same reverse edge; keep the first.
            if !target.connections.iter().any(|c| c.target == conn.target) {
                target.connections.push(conn);
            }
        }
    }
}
