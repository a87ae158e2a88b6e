//! Tile compositor: resolves per-cell content into renderable characters.
//!
//! Resolution order for one cell:
//!
//! 1. Sprites win outright. The highest-z sprite's char is emitted verbatim
//!    (sprites are never sub-pixel blended).
//! 2. Otherwise objects contribute geometry: every object's pixel pattern is
//!    OR-merged and rendered through the glyph tables at the requested
//!    quality. Styling (fg/bg/z) comes from the topmost object only.
//! 3. An empty cell is a blank at z 0.

use gridatlas_types::{CellPos, RenderQuality, TileContent, TileMap, ROW_MIN};

use crate::glyph::{render_pixel_grid, PixelGrid};

/// A fully resolved cell: one character plus styling for an external
/// display layer. The compositor never emits escape sequences itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCell {
    pub ch: char,
    pub z: i32,
    pub fg: Option<String>,
    pub bg: Option<String>,
}

impl ResolvedCell {
    /// The empty-cell result: a space at z 0, unstyled.
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            z: 0,
            fg: None,
            bg: None,
        }
    }
}

/// Stateless compositing pipeline with its output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCompositor {
    pub quality: RenderQuality,
    /// Render `default_terrain` instead of space for empty cells.
    pub show_terrain: bool,
    pub default_terrain: char,
}

impl Default for TileCompositor {
    fn default() -> Self {
        Self {
            quality: RenderQuality::default(),
            show_terrain: false,
            default_terrain: '.',
        }
    }
}

impl TileCompositor {
    pub fn new(quality: RenderQuality) -> Self {
        Self {
            quality,
            ..Self::default()
        }
    }

    /// Resolve a single cell's content.
    pub fn composite_tile(&self, content: Option<&TileContent>) -> ResolvedCell {
        let Some(content) = content else {
            return ResolvedCell::blank();
        };

        // Sprites dominate objects regardless of z values.
        if let Some(top) = content.sprites.iter().max_by_key(|s| s.z) {
            return ResolvedCell {
                ch: top.ch,
                z: top.z,
                fg: top.fg.clone(),
                bg: top.bg.clone(),
            };
        }

        if let Some(top) = content.objects.iter().max_by_key(|o| o.z) {
            // Geometry comes from all objects, styling from the topmost.
            let merged = content
                .objects
                .iter()
                .fold(PixelGrid::empty(), |acc, o| acc.merge(&object_pattern(o.ch)));
            return ResolvedCell {
                ch: render_pixel_grid(merged, self.quality),
                z: top.z,
                fg: top.fg.clone(),
                bg: top.bg.clone(),
            };
        }

        ResolvedCell::blank()
    }

    /// Resolve one cell with the terrain fill applied: when `show_terrain`
    /// is set, empty cells render `default_terrain` instead of space.
    pub fn composite_cell(&self, content: Option<&TileContent>) -> ResolvedCell {
        let mut cell = self.composite_tile(content);
        if self.show_terrain && content.map_or(true, |c| c.is_empty()) {
            cell.ch = self.default_terrain;
        }
        cell
    }

    /// Resolve a width x height rectangle anchored at the grid origin
    /// (column 0, row 10).
    pub fn composite_grid(&self, tiles: &TileMap, width: u8, height: u8) -> Vec<Vec<ResolvedCell>> {
        let mut rows = Vec::with_capacity(height as usize);
        for row in ROW_MIN..ROW_MIN.saturating_add(height) {
            let mut out = Vec::with_capacity(width as usize);
            for col in 0..width {
                out.push(self.composite_cell(tiles.get(&CellPos::new(col, row))));
            }
            rows.push(out);
        }
        rows
    }
}

/// Join resolved rows into a newline-separated block. Each line is exactly
/// the row's width; no trailing padding is added.
pub fn render_grid_to_string(grid: &[Vec<ResolvedCell>]) -> String {
    grid.iter()
        .map(|row| row.iter().map(|cell| cell.ch).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pixel contribution of one object glyph. Glyphs outside the teletext
/// table have no sub-cell geometry and contribute a solid block.
fn object_pattern(ch: char) -> PixelGrid {
    PixelGrid::from_glyph(ch).unwrap_or_else(PixelGrid::full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridatlas_types::{TileObject, TileSprite};

    fn object(ch: char, z: i32) -> TileObject {
        TileObject {
            ch,
            label: String::new(),
            z,
            fg: None,
            bg: None,
        }
    }

    fn sprite(id: &str, ch: char, z: i32) -> TileSprite {
        TileSprite {
            id: id.to_string(),
            ch,
            label: String::new(),
            z,
            fg: None,
            bg: None,
        }
    }

    #[test]
    fn empty_cell_is_a_blank_at_z_zero() {
        let compositor = TileCompositor::default();
        let cell = compositor.composite_tile(None);
        assert_eq!(cell, ResolvedCell::blank());
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.z, 0);
    }

    #[test]
    fn max_z_sprite_wins_over_everything() {
        let compositor = TileCompositor::default();
        let content = TileContent {
            objects: vec![object('█', 99)],
            sprites: vec![sprite("a", '@', 1), sprite("b", '&', 5), sprite("c", '%', 3)],
        };

        let cell = compositor.composite_tile(Some(&content));
        // Sprite char verbatim, objects ignored, even at higher object z.
        assert_eq!(cell.ch, '&');
        assert_eq!(cell.z, 5);
    }

    #[test]
    fn objects_merge_geometry_and_take_topmost_styling() {
        let compositor = TileCompositor::default();
        let left = PixelGrid {
            top_left: true,
            middle_left: true,
            bottom_left: true,
            ..PixelGrid::empty()
        };
        let right = left.invert();
        let content = TileContent {
            objects: vec![
                TileObject {
                    fg: Some("gray".to_string()),
                    ..object(render_pixel_grid(left, RenderQuality::Teletext), 1)
                },
                TileObject {
                    fg: Some("green".to_string()),
                    ..object(render_pixel_grid(right, RenderQuality::Teletext), 2)
                },
            ],
            sprites: Vec::new(),
        };

        let cell = compositor.composite_tile(Some(&content));
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.z, 2);
        assert_eq!(cell.fg.as_deref(), Some("green"));
    }

    #[test]
    fn unknown_object_glyph_contributes_a_solid_block() {
        let compositor = TileCompositor::new(RenderQuality::Ascii);
        let content = TileContent {
            objects: vec![object('T', 0)],
            sprites: Vec::new(),
        };
        assert_eq!(compositor.composite_tile(Some(&content)).ch, '@');
    }

    #[test]
    fn five_by_one_sprite_row_renders_with_trailing_spaces() {
        let mut tiles = TileMap::new();
        for (i, ch) in ['A', 'B', 'C'].into_iter().enumerate() {
            tiles.insert(
                CellPos::new(i as u8, ROW_MIN),
                TileContent {
                    objects: Vec::new(),
                    sprites: vec![sprite(&format!("s{i}"), ch, 0)],
                },
            );
        }

        let compositor = TileCompositor::default();
        let grid = compositor.composite_grid(&tiles, 5, 1);
        assert_eq!(render_grid_to_string(&grid), "ABC  ");
    }

    #[test]
    fn show_terrain_fills_empty_cells_only() {
        let mut tiles = TileMap::new();
        tiles.insert(
            CellPos::new(1, ROW_MIN),
            TileContent {
                objects: Vec::new(),
                sprites: vec![sprite("s", 'X', 0)],
            },
        );

        let compositor = TileCompositor {
            show_terrain: true,
            ..TileCompositor::default()
        };
        let grid = compositor.composite_grid(&tiles, 3, 1);
        assert_eq!(render_grid_to_string(&grid), ".X.");
    }

    #[test]
    fn composite_cell_applies_the_terrain_fill() {
        let compositor = TileCompositor {
            show_terrain: true,
            default_terrain: ',',
            ..TileCompositor::default()
        };
        assert_eq!(compositor.composite_cell(None).ch, ',');
        assert_eq!(
            compositor.composite_cell(Some(&TileContent::default())).ch,
            ','
        );

        // Occupied cells are never overwritten by terrain.
        let content = TileContent {
            objects: Vec::new(),
            sprites: vec![sprite("s", 'X', 0)],
        };
        assert_eq!(compositor.composite_cell(Some(&content)).ch, 'X');
    }

    #[test]
    fn multi_row_output_joins_with_newlines() {
        let compositor = TileCompositor::default();
        let grid = compositor.composite_grid(&TileMap::new(), 2, 3);
        assert_eq!(render_grid_to_string(&grid), "  \n  \n  ");
    }
}
