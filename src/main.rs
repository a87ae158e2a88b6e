//! gridatlas demo runner (default binary).
//!
//! Builds a small in-memory world, routes through it, and renders one
//! viewport frame to stdout. The render quality comes from the terminal
//! capability probe; pass a quality name (`teletext`, `asciiblock`,
//! `shade`, `ascii`) as the first argument to override it.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridatlas::core::{PlacedTile, Pathfinder, SparseWorld};
use gridatlas::probe;
use gridatlas::term::Viewport;
use gridatlas::types::{RenderQuality, Sprite, TileContent, TileObject, WorldPos};
use gridatlas::world::{
    Connection, LocationDatabase, LocationMetadata, LocationRecord, World,
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let quality = match std::env::args().nth(1) {
        Some(name) => RenderQuality::from_str(&name)
            .ok_or_else(|| anyhow!("unknown render quality '{name}'"))?,
        None => probe::recommended_quality(),
    };

    let mut world = World::new();
    world
        .load_database(demo_database())
        .context("loading demo database")?;

    let mut occupancy = SparseWorld::new();
    occupancy.place(
        "L300-AB12",
        PlacedTile {
            id: "wall".into(),
            kind: "structure".into(),
            solid: true,
            footprint: vec![(0, 1), (0, 2)],
        },
    )?;

    let route = Pathfinder::new(&occupancy).find_path("L300-AA10", "L300-AD14")?;
    println!(
        "route L300-AA10 -> L300-AD14: {} ({} cells)",
        if route.found { "found" } else { "not found" },
        route.path.len()
    );

    let info = world.location_info("harbor")?;
    println!(
        "harbor: {} [{} scale, {}], {} connections",
        info.name,
        info.scale.as_str(),
        info.unit,
        info.connection_count
    );

    render_frame(&world, quality)
}

fn render_frame(world: &World, quality: RenderQuality) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let width = cols.clamp(8, 80) as u8;
    let height = rows.saturating_sub(4).clamp(4, 30) as u8;

    let mut viewport = Viewport::new(300, width, height)?.with_quality(quality);
    viewport.show_terrain = true;
    viewport.set_center(WorldPos::new(300, 2, 12))?;

    let harbor = world
        .get_location("harbor")
        .ok_or_else(|| anyhow!("demo database is missing 'harbor'"))?;
    let sprites = [Sprite {
        id: "ferry".into(),
        ch: '⛴',
        label: "Ferry".into(),
        z: 10,
        fg: None,
        bg: None,
        pos: WorldPos::new(300, 3, 12),
    }];

    println!("{}", viewport.render_to_string(&harbor.tiles, &sprites));
    Ok(())
}

fn demo_database() -> LocationDatabase {
    let mut tiles = HashMap::new();
    for (address, ch) in [("AA11", '▛'), ("AB11", '▀'), ("AC11", '▜'), ("AB12", '▌')] {
        tiles.insert(
            address.to_string(),
            TileContent {
                objects: vec![TileObject {
                    ch,
                    label: "pier".to_string(),
                    z: 1,
                    fg: None,
                    bg: None,
                }],
                sprites: Vec::new(),
            },
        );
    }

    let mut locations = HashMap::new();
    locations.insert(
        "harbor".to_string(),
        LocationRecord {
            layer: Some(300),
            center_cell: Some("AB12".to_string()),
            metadata: LocationMetadata {
                name: "Harbor".to_string(),
                description: "A sheltered quay on the surface layer".to_string(),
                kind: "settlement".to_string(),
                tags: vec!["coastal".to_string()],
            },
            connections: vec![Connection {
                target: "town".to_string(),
                kind: "road".to_string(),
                label: Some("Coast road".to_string()),
                bidirectional: true,
                requires: None,
            }],
            tiles,
        },
    );
    locations.insert(
        "town".to_string(),
        LocationRecord {
            layer: Some(300),
            center_cell: Some("AE12".to_string()),
            metadata: LocationMetadata {
                name: "Town".to_string(),
                ..LocationMetadata::default()
            },
            connections: Vec::new(),
            tiles: HashMap::new(),
        },
    );

    LocationDatabase { locations }
}
