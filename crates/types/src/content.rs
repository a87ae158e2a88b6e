//! Tile content types: the per-cell payload the compositor resolves.
//!
//! A cell can hold static objects (terrain, scenery) and dynamic sprites.
//! Sprites always dominate objects when a cell is rendered; within a kind the
//! highest z wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CellPos, WorldPos};

/// All tile content of one location, keyed by cell position.
pub type TileMap = HashMap<CellPos, TileContent>;

/// A static occupant of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileObject {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub z: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
}

/// A dynamic occupant of a cell. Sprites render on top of objects and are
/// never sub-pixel blended: the winning sprite's char is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSprite {
    pub id: String,
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub z: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
}

/// Content of a single cell: ordered object and sprite lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileContent {
    #[serde(default)]
    pub objects: Vec<TileObject>,
    #[serde(default)]
    pub sprites: Vec<TileSprite>,
}

impl TileContent {
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.sprites.is_empty()
    }
}

/// A free-standing sprite carrying its own world position, as handed to the
/// viewport by the caller's update loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: String,
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub z: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    pub pos: WorldPos,
}

impl Sprite {
    /// View of this sprite as per-cell content, for compositing.
    pub fn as_tile_sprite(&self) -> TileSprite {
        TileSprite {
            id: self.id.clone(),
            ch: self.ch,
            label: self.label.clone(),
            z: self.z,
            fg: self.fg.clone(),
            bg: self.bg.clone(),
        }
    }
}
