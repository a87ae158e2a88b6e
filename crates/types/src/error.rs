//! Error taxonomy shared across the workspace.
//!
//! Every contract violation surfaces as one of these types; nothing in the
//! core silently corrects or defaults bad input. No operation retries.

use crate::{LAYER_MAX, LAYER_MIN, ROW_MAX, ROW_MIN};

/// A malformed cell address or location id string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("cell address '{0}' must be two letters followed by two digits")]
    MalformedCell(String),
    #[error("invalid column code '{0}'")]
    InvalidColumn(String),
    #[error("row {0} is outside the valid range {ROW_MIN}..={ROW_MAX}")]
    RowOutOfRange(u32),
    #[error("column index {0} is outside the valid range 0..=79")]
    ColumnIndexOutOfRange(u32),
    #[error("location id '{0}' must have the form L<layer>-<cell>")]
    MalformedLocationId(String),
    #[error("layer {0} is outside the valid range {LAYER_MIN}..={LAYER_MAX}")]
    LayerOutOfRange(u32),
}

/// A schema violation detected while loading external data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required '{0}' field")]
    MissingField(&'static str),
    #[error("Layer {0} is outside the valid range {LAYER_MIN}..={LAYER_MAX}")]
    LayerOutOfRange(i64),
    #[error("location '{id}': {source}")]
    BadAddress {
        id: String,
        #[source]
        source: AddressError,
    },
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

/// A solid placement overlapping an existing solid occupant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("solid placement '{id}' collides with '{other}' at {address}")]
pub struct CollisionError {
    /// Id of the placement that was rejected.
    pub id: String,
    /// Id of the solid occupant already claiming the cell.
    pub other: String,
    /// Address of the contested cell.
    pub address: String,
}

/// A reference to an unknown location or address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{id}'")]
pub struct NotFoundError {
    /// What kind of reference failed ("location", "placement", ...).
    pub kind: &'static str,
    pub id: String,
}

impl NotFoundError {
    pub fn location(id: impl Into<String>) -> Self {
        Self {
            kind: "location",
            id: id.into(),
        }
    }

    pub fn placement(id: impl Into<String>) -> Self {
        Self {
            kind: "placement",
            id: id.into(),
        }
    }
}

/// Cell-level pathfinding attempted across incompatible effective layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("effective layers differ: {from} vs {to}")]
pub struct LayerMismatchError {
    pub from: u16,
    pub to: u16,
}
