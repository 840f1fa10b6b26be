//! Board and factory tests through the facade

use std::collections::HashMap;

use tui_memory::core::{BoardConfig, BoardFactory, ConfigError};
use tui_memory::types::{Direction, PairKey};

fn key_counts(keys: impl Iterator<Item = PairKey>) -> HashMap<PairKey, usize> {
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_every_key_appears_exactly_twice() {
    for seed in [1, 7, 42, 12345, u32::MAX] {
        let mut factory = BoardFactory::new(BoardConfig::default(), seed).unwrap();
        let board = factory.build();

        assert_eq!(board.len(), 20);
        assert_eq!(board.unsolved_count(), 20);

        let counts = key_counts(board.tiles().iter().map(|t| t.key()));
        assert_eq!(counts.len(), 10, "seed {}", seed);
        assert!(counts.values().all(|&n| n == 2), "seed {}", seed);
        assert!(counts.keys().all(|&k| (1..=20).contains(&k)));
    }
}

#[test]
fn test_ids_are_dense_and_row_major() {
    let config = BoardConfig {
        rows: 3,
        columns: 4,
        ..BoardConfig::default()
    };
    let board = BoardFactory::new(config, 3).unwrap().build();

    for (i, tile) in board.tiles().iter().enumerate() {
        assert_eq!(tile.id() as usize, i);
    }
    assert_eq!(board.tile_id_at(1, 1), Some(0));
    assert_eq!(board.tile_id_at(2, 1), Some(4));
    assert_eq!(board.tile_id_at(3, 4), Some(11));
    assert_eq!(board.tile_id_at(0, 1), None);
    assert_eq!(board.tile_id_at(4, 1), None);
    assert_eq!(board.tile_id_at(1, 5), None);
}

#[test]
fn test_neighbours_are_symmetric() {
    let board = BoardFactory::new(BoardConfig::default(), 9).unwrap().build();

    for tile in board.tiles() {
        for side in Direction::ALL {
            if let Some(other) = tile.neighbour(side) {
                assert_eq!(board.neighbour(other, side.opposite()), Some(tile.id()));
            }
        }
    }
    // Corners have exactly two neighbours.
    let corner = board.tile(0).unwrap();
    assert_eq!(corner.neighbour(Direction::Left), None);
    assert_eq!(corner.neighbour(Direction::Up), None);
    assert_eq!(corner.neighbour(Direction::Right), Some(1));
    assert_eq!(corner.neighbour(Direction::Down), Some(5));
}

#[test]
fn test_same_seed_same_board() {
    let keys = |seed| {
        let board = BoardFactory::new(BoardConfig::default(), seed).unwrap().build();
        board.tiles().iter().map(|t| t.key()).collect::<Vec<_>>()
    };
    assert_eq!(keys(2024), keys(2024));
    assert_ne!(keys(2024), keys(2025));
}

#[test]
fn test_invalid_configs_are_rejected() {
    let odd = BoardConfig {
        rows: 3,
        columns: 3,
        ..BoardConfig::default()
    };
    assert!(matches!(
        BoardFactory::new(odd, 1),
        Err(ConfigError::OddTileCount { rows: 3, columns: 3 })
    ));

    let large = BoardConfig {
        rows: 6,
        columns: 8,
        ..BoardConfig::default()
    };
    assert!(matches!(
        BoardFactory::new(large, 1),
        Err(ConfigError::TooManyTiles { tiles: 48, max: 40 })
    ));

    let small_pool = BoardConfig {
        key_pool_size: 4,
        ..BoardConfig::default()
    };
    assert!(matches!(
        BoardFactory::new(small_pool, 1),
        Err(ConfigError::KeyPoolTooSmall { .. })
    ));
}

#[test]
fn test_two_by_two_mismatch_then_match() {
    // A B
    // A B
    let mut board = BoardFactory::layout(2, 2, &[1, 2, 1, 2]).unwrap();

    assert_eq!(board.flip_tile(1, 1), Some(0));
    assert_eq!(board.flip_tile(1, 2), Some(1));
    assert!(board.has_two_flipped());
    assert!(!board.any_flipped_opened());
    assert!(!board.resolve_flipped_pair());
    board.mark_flipped_opened();
    board.clear_flipped();

    assert!(!board.tile(0).unwrap().is_flipped());
    assert!(!board.tile(1).unwrap().is_flipped());
    assert!(board.tile(0).unwrap().is_opened());
    assert!(board.tile(1).unwrap().is_opened());
    assert_eq!(board.unsolved_count(), 4);

    assert_eq!(board.flip_tile(1, 1), Some(0));
    assert_eq!(board.flip_tile(2, 1), Some(2));
    assert!(board.resolve_flipped_pair());
    board.clear_flipped();

    assert_eq!(board.unsolved_count(), 2);
    assert!(board.tile(0).unwrap().is_solved());
    assert!(board.tile(2).unwrap().is_solved());
    assert!(board.tile(2).unwrap().is_flipped());
    assert!(!board.is_solved());
}

#[test]
fn test_flipping_a_face_up_tile_is_refused() {
    let mut board = BoardFactory::layout(2, 2, &[1, 2, 1, 2]).unwrap();
    board.flip_tile(1, 1);

    assert!(board.cannot_flip(1, 1));
    assert!(!board.cannot_flip(1, 2));
    assert!(board.cannot_flip(3, 3));
    assert_eq!(board.flipped_ids(), &[0]);
}
