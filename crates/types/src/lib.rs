//! Shared types module - grid constants, positions, scales, and tile content
//!
//! This module defines the fundamental types used throughout the renderer and
//! simulator. Everything here is plain data: no I/O, no global state, no
//! hidden lookups.
//!
//! # Grid Dimensions
//!
//! The world grid is a fixed 80x30 window of character cells:
//!
//! - **Columns**: 0-79, addressed by a two-letter code (`AA`..`DC`)
//! - **Rows**: 10-39, addressed by the literal two-digit row number
//!
//! A cell address is the column code followed by the row, e.g. `AA10` is the
//! top-left cell and `DC39` the bottom-right. A full location id prefixes the
//! layer: `L300-AA10`.
//!
//! # Layers
//!
//! Layers are integers in `300..=899`. A layer selects a vertical band
//! (surface / underground / substrate) and, independently, a distance scale
//! (terrestrial through cosmic) that fixes the real-world span of one cell.
//!
//! # Examples
//!
//! ```
//! use gridatlas_types::{DistanceScale, RenderQuality, LAYER_MIN};
//!
//! let scale = DistanceScale::for_layer(LAYER_MIN).unwrap();
//! assert_eq!(scale, DistanceScale::Terrestrial);
//! assert_eq!(scale.unit(), "m");
//! assert_eq!(scale.cell_distance(), 16.0);
//!
//! let quality = RenderQuality::from_str("teletext").unwrap();
//! assert_eq!(quality.fallback_chain().last(), Some(&RenderQuality::Ascii));
//! ```

pub mod content;
pub mod error;
pub mod scale;

pub use content::{Sprite, TileContent, TileMap, TileObject, TileSprite};
pub use error::{
    AddressError, CollisionError, LayerMismatchError, NotFoundError, ValidationError,
};
pub use scale::{Band, DistanceScale};

use serde::{Deserialize, Serialize};

/// Number of addressable columns (0..=79)
pub const GRID_COLS: u8 = 80;

/// First addressable row
pub const ROW_MIN: u8 = 10;

/// Last addressable row
pub const ROW_MAX: u8 = 39;

/// Number of addressable rows (30)
pub const GRID_ROWS: u8 = ROW_MAX - ROW_MIN + 1;

/// Lowest valid layer
pub const LAYER_MIN: u16 = 300;

/// Highest valid layer
pub const LAYER_MAX: u16 = 899;

/// Check that a layer lies inside the valid band range.
pub fn layer_in_range(layer: u16) -> bool {
    (LAYER_MIN..=LAYER_MAX).contains(&layer)
}

/// A column/row pair on the 80x30 grid.
///
/// Invariant: `col` in `0..=79`, `row` in `10..=39`. The address codec is the
/// only place that constructs these from untrusted input and it rejects
/// out-of-range values rather than clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub col: u8,
    pub row: u8,
}

impl CellPos {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// True when the position lies inside the addressable grid.
    pub fn in_bounds(&self) -> bool {
        self.col < GRID_COLS && (ROW_MIN..=ROW_MAX).contains(&self.row)
    }
}

/// A cell position qualified with its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPos {
    pub layer: u16,
    pub col: u8,
    pub row: u8,
}

impl WorldPos {
    pub const fn new(layer: u16, col: u8, row: u8) -> Self {
        Self { layer, col, row }
    }

    pub const fn cell(&self) -> CellPos {
        CellPos {
            col: self.col,
            row: self.row,
        }
    }
}

/// Rendering quality tiers, best first.
///
/// Every tier is a pure lookup from a 6-pixel pattern to one character; the
/// tiers differ only in how much of the pattern survives quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    /// All 64 patterns map 1:1 to Unicode sextant glyphs.
    Teletext,
    /// 16 quadrant glyphs; the bottom sub-row is quantized away.
    AsciiBlock,
    /// 5 shade glyphs selected by pixel population count.
    Shade,
    /// 5 plain ASCII characters, same population buckets as Shade.
    Ascii,
}

impl RenderQuality {
    /// Parse quality from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "teletext" => Some(RenderQuality::Teletext),
            "asciiblock" | "ascii-block" => Some(RenderQuality::AsciiBlock),
            "shade" => Some(RenderQuality::Shade),
            "ascii" => Some(RenderQuality::Ascii),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderQuality::Teletext => "teletext",
            RenderQuality::AsciiBlock => "asciiblock",
            RenderQuality::Shade => "shade",
            RenderQuality::Ascii => "ascii",
        }
    }

    /// Ordered degradation list from this tier down to plain ASCII.
    ///
    /// The first entry is always `self`, the last is always [`RenderQuality::Ascii`].
    pub fn fallback_chain(&self) -> &'static [RenderQuality] {
        match self {
            RenderQuality::Teletext => &[
                RenderQuality::Teletext,
                RenderQuality::AsciiBlock,
                RenderQuality::Shade,
                RenderQuality::Ascii,
            ],
            RenderQuality::AsciiBlock => &[
                RenderQuality::AsciiBlock,
                RenderQuality::Shade,
                RenderQuality::Ascii,
            ],
            RenderQuality::Shade => &[RenderQuality::Shade, RenderQuality::Ascii],
            RenderQuality::Ascii => &[RenderQuality::Ascii],
        }
    }
}

impl Default for RenderQuality {
    fn default() -> Self {
        RenderQuality::Teletext
    }
}
