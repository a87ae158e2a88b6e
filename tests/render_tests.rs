//! Rendering tests - glyph tables and the tile compositor

use gridatlas::term::{
    render_grid_to_string, render_pixel_grid, PixelGrid, ResolvedCell, TileCompositor,
    TELETEXT_GLYPHS,
};
use gridatlas::types::{CellPos, RenderQuality, TileContent, TileMap, TileObject, TileSprite, ROW_MIN};

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
fn test_pixel_grid_index_bijection() {
    for i in 0u8..64 {
        assert_eq!(PixelGrid::from_index(i).unwrap().index(), i);
    }
}

#[test]
fn test_every_quality_tier_is_total_over_all_patterns() {
    for i in 0u8..64 {
        let grid = PixelGrid::from_index(i).unwrap();
        for quality in [
            RenderQuality::Teletext,
            RenderQuality::AsciiBlock,
            RenderQuality::Shade,
            RenderQuality::Ascii,
        ] {
            // Rendering never panics and never produces a control char.
            let ch = render_pixel_grid(grid, quality);
            assert!(!ch.is_control());
        }
    }
}

#[test]
fn test_teletext_is_injective() {
    let mut seen = std::collections::HashSet::new();
    for &g in TELETEXT_GLYPHS.iter() {
        assert!(seen.insert(g), "glyph {g:?} appears twice");
    }
}

#[test]
fn test_ascii_tier_emits_only_ascii() {
    for i in 0u8..64 {
        let grid = PixelGrid::from_index(i).unwrap();
        assert!(render_pixel_grid(grid, RenderQuality::Ascii).is_ascii());
    }
}

#[test]
fn test_composite_empty_cell() {
    let compositor = TileCompositor::default();
    let cell = compositor.composite_tile(None);
    assert_eq!(cell, ResolvedCell::blank());

    let empty = TileContent::default();
    assert_eq!(compositor.composite_tile(Some(&empty)), ResolvedCell::blank());
}

#[test]
fn test_sprites_always_beat_objects() {
    let compositor = TileCompositor::default();
    let content = TileContent {
        objects: vec![TileObject {
            ch: '█',
            label: String::new(),
            z: 100,
            fg: None,
            bg: None,
        }],
        sprites: vec![sprite("a", '@', 0)],
    };
    assert_eq!(compositor.composite_tile(Some(&content)).ch, '@');
}

#[test]
fn test_scenario_abc_row_renders_with_trailing_spaces() {
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
    let grid = TileCompositor::default().composite_grid(&tiles, 5, 1);
    assert_eq!(render_grid_to_string(&grid), "ABC  ");
}

#[test]
fn test_quality_downgrade_of_the_same_scene() {
    // One pattern rendered through every tier of its fallback chain.
    let pattern = PixelGrid {
        top_left: true,
        top_right: true,
        middle_left: true,
        ..PixelGrid::empty()
    };
    let mut tiles = TileMap::new();
    tiles.insert(
        CellPos::new(0, ROW_MIN),
        TileContent {
            objects: vec![TileObject {
                ch: render_pixel_grid(pattern, RenderQuality::Teletext),
                label: String::new(),
                z: 0,
                fg: None,
                bg: None,
            }],
            sprites: Vec::new(),
        },
    );

    let mut outputs = Vec::new();
    for &quality in RenderQuality::Teletext.fallback_chain() {
        let grid = TileCompositor::new(quality).composite_grid(&tiles, 1, 1);
        outputs.push(render_grid_to_string(&grid));
    }
    // 3 of 6 pixels set: shade tier picks the medium glyph, ascii ':'.
    assert_eq!(outputs[2], "▒");
    assert_eq!(outputs[3], ":");
}
