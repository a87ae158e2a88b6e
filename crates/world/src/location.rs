//! Location records: the on-disk database shape and its validated form.
//!
//! The database DTOs are deliberately lenient (optional fields, defaults)
//! because they mirror whatever an external loader produced from source
//! documents. Validation happens once, at [`crate::World::load_database`]
//! time, and converts a record into a [`Location`] or rejects it with a
//! `ValidationError` naming the offending field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use gridatlas_types::{CellPos, TileMap};

/// The raw, loader-produced database: location id to record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationDatabase {
    #[serde(default)]
    pub locations: HashMap<String, LocationRecord>,
}

/// One unvalidated location entry as produced by an external loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRecord {
    pub layer: Option<i64>,
    #[serde(default, rename = "centerCell")]
    pub center_cell: Option<String>,
    #[serde(default)]
    pub metadata: LocationMetadata,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub tiles: HashMap<String, gridatlas_types::TileContent>,
}

/// Descriptive fields attached to a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A directed edge in the location graph. A `bidirectional` edge is
/// expanded into both directions at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub target: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub bidirectional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
}

/// A validated location. Immutable once loaded; the graph owns it.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: String,
    pub layer: u16,
    pub center_cell: CellPos,
    pub metadata: LocationMetadata,
    /// Outgoing edges only; bidirectional records were already expanded.
    pub connections: Vec<Connection>,
    pub tiles: TileMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_default_when_absent() {
        let json = r#"{"layer": 300}"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.layer, Some(300));
        assert!(record.center_cell.is_none());
        assert!(record.metadata.name.is_empty());
        assert!(record.connections.is_empty());
        assert!(record.tiles.is_empty());
    }

    #[test]
    fn connection_uses_wire_field_names() {
        let json = r#"{"target": "town", "type": "road", "bidirectional": true}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.target, "town");
        assert_eq!(conn.kind, "road");
        assert!(conn.bidirectional);
        assert!(conn.label.is_none());
        assert!(conn.requires.is_none());
    }
}
