//! Pathfinder tests - cell-level BFS over the occupancy store

use gridatlas::core::{PlacedTile, Pathfinder, SparseWorld};

fn wall(id: &str) -> PlacedTile {
    PlacedTile {
        id: id.to_string(),
        kind: "wall".to_string(),
        solid: true,
        footprint: Vec::new(),
    }
}

#[test]
fn test_bfs_finds_shortest_path_by_edge_count() {
    let world = SparseWorld::new();
    let result = Pathfinder::new(&world)
        .find_path("L300-AA10", "L300-AC12")
        .unwrap();
    assert!(result.found);
    // Manhattan distance 4, so 5 cells including both endpoints.
    assert_eq!(result.path.len(), 5);
    assert_eq!(result.path.first().map(String::as_str), Some("L300-AA10"));
    assert_eq!(result.path.last().map(String::as_str), Some("L300-AC12"));
}

#[test]
fn test_path_is_deterministic() {
    let mut world = SparseWorld::new();
    world.place("L300-AB11", wall("w")).unwrap();

    let finder = Pathfinder::new(&world);
    let a = finder.find_path("L300-AA10", "L300-AC12").unwrap();
    let b = finder.find_path("L300-AA10", "L300-AC12").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_path_avoids_solid_cells() {
    let mut world = SparseWorld::new();
    world.place("L300-AB10", wall("w1")).unwrap();
    world.place("L300-AB11", wall("w2")).unwrap();

    let result = Pathfinder::new(&world)
        .find_path("L300-AA10", "L300-AC10")
        .unwrap();
    assert!(result.found);
    for blocked in ["L300-AB10", "L300-AB11"] {
        assert!(!result.path.contains(&blocked.to_string()));
    }
}

#[test]
fn test_non_solid_occupants_are_traversable() {
    let mut world = SparseWorld::new();
    world
        .place(
            "L300-AB10",
            PlacedTile {
                id: "path-marker".to_string(),
                kind: "marker".to_string(),
                solid: false,
                footprint: Vec::new(),
            },
        )
        .unwrap();

    let result = Pathfinder::new(&world)
        .find_path("L300-AA10", "L300-AC10")
        .unwrap();
    assert!(result.found);
    assert!(result.path.contains(&"L300-AB10".to_string()));
}

#[test]
fn test_cross_layer_endpoints_are_not_found_without_error() {
    let world = SparseWorld::new();
    let result = Pathfinder::new(&world)
        .find_path("L300-AA10", "L450-AA10")
        .unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());
}

#[test]
fn test_removing_a_wall_reopens_the_route() {
    let mut world = SparseWorld::new();
    // Seal off the top-left corner cell.
    world.place("L300-AB10", wall("east")).unwrap();
    world.place("L300-AA11", wall("south")).unwrap();

    let finder = Pathfinder::new(&world);
    assert!(!finder.find_path("L300-AA10", "L300-AC10").unwrap().found);

    world.remove("L300-AB10", "east").unwrap();
    let result = Pathfinder::new(&world)
        .find_path("L300-AA10", "L300-AC10")
        .unwrap();
    assert!(result.found);
}
