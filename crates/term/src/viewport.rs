//! Viewport: a camera window over the world grid.
//!
//! The viewport owns the camera state (center, size, layer, quality) and
//! drives the tile compositor to produce final text output. Movement past a
//! grid edge stops at the edge; the derived visible rectangle is always a
//! valid, non-inverted rectangle inside `[0,79]` x `[10,39]`.

use gridatlas_types::{
    layer_in_range, CellPos, RenderQuality, Sprite, TileMap, ValidationError, WorldPos, GRID_COLS,
    ROW_MAX, ROW_MIN,
};

use crate::compose::{render_grid_to_string, ResolvedCell, TileCompositor};

/// The clamped visible rectangle, inclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewBounds {
    pub min_col: u8,
    pub max_col: u8,
    pub min_row: u8,
    pub max_row: u8,
}

/// Camera window over one layer of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    center: WorldPos,
    width: u8,
    height: u8,
    quality: RenderQuality,
    /// Passed through to the compositor for empty cells.
    pub show_terrain: bool,
    pub default_terrain: char,
}

impl Viewport {
    /// Create a viewport centered on the middle of the grid.
    pub fn new(layer: u16, width: u8, height: u8) -> Result<Self, ValidationError> {
        if !layer_in_range(layer) {
            return Err(ValidationError::LayerOutOfRange(layer as i64));
        }
        Ok(Self {
            center: WorldPos::new(layer, GRID_COLS / 2, (ROW_MIN + ROW_MAX) / 2),
            width,
            height,
            quality: RenderQuality::default(),
            show_terrain: false,
            default_terrain: '.',
        })
    }

    pub fn with_quality(mut self, quality: RenderQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn center(&self) -> WorldPos {
        self.center
    }

    pub fn layer(&self) -> u16 {
        self.center.layer
    }

    pub fn size(&self) -> (u8, u8) {
        (self.width, self.height)
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    /// Visible rectangle: `center +/- floor(size/2)` per axis, clamped to
    /// the grid. Always non-inverted, even at the edges.
    pub fn view_bounds(&self) -> ViewBounds {
        let half_w = (self.width / 2) as i16;
        let half_h = (self.height / 2) as i16;
        let col = self.center.col as i16;
        let row = self.center.row as i16;
        ViewBounds {
            min_col: (col - half_w).clamp(0, (GRID_COLS - 1) as i16) as u8,
            max_col: (col + half_w).clamp(0, (GRID_COLS - 1) as i16) as u8,
            min_row: (row - half_h).clamp(ROW_MIN as i16, ROW_MAX as i16) as u8,
            max_row: (row + half_h).clamp(ROW_MIN as i16, ROW_MAX as i16) as u8,
        }
    }

    /// Move the camera center, stopping at the grid edges.
    pub fn move_by(&mut self, d_col: i16, d_row: i16) {
        let col = (self.center.col as i16 + d_col).clamp(0, (GRID_COLS - 1) as i16);
        let row = (self.center.row as i16 + d_row).clamp(ROW_MIN as i16, ROW_MAX as i16);
        self.center.col = col as u8;
        self.center.row = row as u8;
    }

    /// Recenter the camera. Col/row are clamped into the grid; an invalid
    /// layer fails and leaves the state unchanged.
    pub fn set_center(&mut self, pos: WorldPos) -> Result<(), ValidationError> {
        if !layer_in_range(pos.layer) {
            return Err(ValidationError::LayerOutOfRange(pos.layer as i64));
        }
        self.center.layer = pos.layer;
        self.center.col = pos.col.min(GRID_COLS - 1);
        self.center.row = pos.row.clamp(ROW_MIN, ROW_MAX);
        Ok(())
    }

    /// Switch layers. An invalid layer fails and leaves the state unchanged.
    pub fn set_layer(&mut self, layer: u16) -> Result<(), ValidationError> {
        if !layer_in_range(layer) {
            return Err(ValidationError::LayerOutOfRange(layer as i64));
        }
        self.center.layer = layer;
        Ok(())
    }

    /// Every cell position inside the current bounds, row-major. The count
    /// shrinks near the grid edges.
    pub fn visible_tiles(&self) -> Vec<CellPos> {
        let bounds = self.view_bounds();
        let mut tiles = Vec::new();
        for row in bounds.min_row..=bounds.max_row {
            for col in bounds.min_col..=bounds.max_col {
                tiles.push(CellPos::new(col, row));
            }
        }
        tiles
    }

    /// Same layer and inside the current bounds.
    pub fn is_visible(&self, pos: WorldPos) -> bool {
        if pos.layer != self.center.layer {
            return false;
        }
        let bounds = self.view_bounds();
        (bounds.min_col..=bounds.max_col).contains(&pos.col)
            && (bounds.min_row..=bounds.max_row).contains(&pos.row)
    }

    /// Screen-space (x, y) of a world position, or `None` if not visible.
    pub fn screen_coordinates(&self, pos: WorldPos) -> Option<(u8, u8)> {
        if !self.is_visible(pos) {
            return None;
        }
        let bounds = self.view_bounds();
        Some((pos.col - bounds.min_col, pos.row - bounds.min_row))
    }

    /// Stable ascending sort by z: lowest drawn first, highest on top.
    pub fn sort_sprites<'a>(sprites: &'a [Sprite]) -> Vec<&'a Sprite> {
        let mut sorted: Vec<&Sprite> = sprites.iter().collect();
        sorted.sort_by_key(|s| s.z);
        sorted
    }

    /// Sprites inside the current bounds on the current layer.
    pub fn visible_sprites<'a>(&self, sprites: &'a [Sprite]) -> Vec<&'a Sprite> {
        sprites.iter().filter(|s| self.is_visible(s.pos)).collect()
    }

    /// Sprites at an exact world position.
    pub fn sprites_at<'a>(&self, sprites: &'a [Sprite], pos: WorldPos) -> Vec<&'a Sprite> {
        sprites.iter().filter(|s| s.pos == pos).collect()
    }

    /// Resolve every visible cell: location tiles overlaid with the dynamic
    /// sprites on this layer, composited at the current quality.
    pub fn compose(&self, tiles: &TileMap, sprites: &[Sprite]) -> Vec<Vec<ResolvedCell>> {
        let bounds = self.view_bounds();
        let compositor = TileCompositor {
            quality: self.quality,
            show_terrain: self.show_terrain,
            default_terrain: self.default_terrain,
        };

        let mut rows = Vec::with_capacity((bounds.max_row - bounds.min_row + 1) as usize);
        for row in bounds.min_row..=bounds.max_row {
            let mut out = Vec::with_capacity((bounds.max_col - bounds.min_col + 1) as usize);
            for col in bounds.min_col..=bounds.max_col {
                let cell = CellPos::new(col, row);
                let here = WorldPos::new(self.center.layer, col, row);
                let overlay = self.sprites_at(sprites, here);

                let resolved = if overlay.is_empty() {
                    compositor.composite_cell(tiles.get(&cell))
                } else {
                    let mut content = tiles.get(&cell).cloned().unwrap_or_default();
                    content
                        .sprites
                        .extend(overlay.into_iter().map(|s| s.as_tile_sprite()));
                    compositor.composite_tile(Some(&content))
                };
                out.push(resolved);
            }
            rows.push(out);
        }
        rows
    }

    /// Final text output: the composed window as a newline-joined block.
    pub fn render_to_string(&self, tiles: &TileMap, sprites: &[Sprite]) -> String {
        render_grid_to_string(&self.compose(tiles, sprites))
    }
}
