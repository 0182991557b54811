//! Expansion properties: range closure, mirror symmetry, periodic tiling.
//!
//! These run the full catalog → generator → expansion pipeline through the
//! public API only.

use woodwave_pattern::{
    generate_base_field, get_pattern_params, height_at, Board, BaseField, TilingMode, BASE_SIZE,
    NO_MIRROR_IDS,
};

fn field_for(pattern_id: i64) -> BaseField {
    generate_base_field(get_pattern_params(pattern_id))
}

// ============================================================================
// Range Tests
// ============================================================================

/// Every cell of every board size stays on the four-level lattice.
#[test]
fn test_board_heights_in_range() {
    for id in 1..=10 {
        for size in [5, 10, 17, 30] {
            let board = Board::for_pattern(id, size);
            assert!(
                board.as_slice().iter().all(|h| matches!(h, 0 | 2 | 4 | 6)),
                "pattern {} size {} left the lattice",
                id,
                size
            );
        }
    }
}

// ============================================================================
// Tiling Tests
// ============================================================================

/// Diagonal stripe patterns repeat without reflection.
#[test]
fn test_no_mirror_ids_tile_periodically() {
    for id in NO_MIRROR_IDS {
        let field = field_for(id);
        for i in 0..40 {
            for j in 0..40 {
                assert_eq!(
                    height_at(i, j, &field, id),
                    height_at(i % BASE_SIZE, j % BASE_SIZE, &field, id),
                    "pattern {} at ({}, {})",
                    id,
                    i,
                    j
                );
            }
        }
    }
}

/// Mirrored patterns read the reflected local index in odd tiles.
#[test]
fn test_mirrored_ids_reflect_odd_tiles() {
    for id in (1..=10).filter(|id| !NO_MIRROR_IDS.contains(id)) {
        assert_eq!(get_pattern_params(id).tiling, TilingMode::Mirrored);
        let field = field_for(id);
        for tile_x in [1usize, 3] {
            for k in 0..BASE_SIZE {
                for j in 0..BASE_SIZE {
                    assert_eq!(
                        height_at(tile_x * BASE_SIZE + k, j, &field, id),
                        field.get(BASE_SIZE - 1 - k, j),
                        "pattern {} tile {} k {} j {}",
                        id,
                        tile_x,
                        k,
                        j
                    );
                }
            }
        }
    }
}

/// Adjacent mirrored tiles share their boundary row, so there is no seam.
#[test]
fn test_mirrored_tiles_join_without_seam() {
    let board = Board::for_pattern(6, 30);
    for j in 0..30 {
        assert_eq!(board.get(9, j), board.get(10, j));
        assert_eq!(board.get(19, j), board.get(20, j));
        assert_eq!(board.get(j, 9), board.get(j, 10));
    }
}

#[test]
fn test_pattern_one_first_cell_of_second_tile_row() {
    let field = field_for(1);
    assert_eq!(height_at(10, 0, &field, 1), field.get(9, 0));
    assert_ne!(height_at(10, 0, &field, 1), field.get(0, 0));
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// A 10×10 board of pattern 1 is the base field itself.
#[test]
fn test_scenario_grid_ten_pattern_one() {
    let field = field_for(1);
    let board = Board::expand(&field, 1, 10);
    for i in 0..10 {
        for j in 0..10 {
            assert_eq!(board.get(i, j), field.get(i, j));
        }
    }
}

/// On a 20×20 board of pattern 1, tile (1, 0) mirrors tile (0, 0).
#[test]
fn test_scenario_grid_twenty_pattern_one() {
    let field = field_for(1);
    let board = Board::expand(&field, 1, 20);
    for i in 10..20 {
        for j in 0..10 {
            assert_eq!(board.get(i, j), field.get(19 - i, j));
        }
    }
}

/// Identical requests give identical boards.
#[test]
fn test_boards_are_deterministic() {
    for id in -3..14 {
        let a = Board::for_pattern(id, 23);
        let b = Board::for_pattern(id, 23);
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
    }
}
