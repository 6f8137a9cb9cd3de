//! Piece tests - spawn anchors, rotation and the factory

use blockfall::core::{spawn_mask, Piece, PieceFactory, SequenceRng, ShapeMask, SimpleRng};
use blockfall::types::{PieceKind, Rotation, BOARD_WIDTH};

#[test]
fn test_every_kind_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_mask(kind).cell_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_spawn_anchor_centered_left_biased() {
    let expected = [
        (PieceKind::I, 3),
        (PieceKind::O, 4),
        (PieceKind::T, 4),
        (PieceKind::S, 4),
        (PieceKind::Z, 4),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
    ];
    for (kind, x) in expected {
        let piece = Piece::spawn(kind, BOARD_WIDTH);
        assert_eq!((piece.x, piece.y), (x, 0), "{kind:?}");
        assert_eq!(piece.rotation(), Rotation::North);
    }
}

#[test]
fn test_t_rotates_clockwise() {
    let piece = Piece::new(PieceKind::T, 4, 0).rotated_cw();
    let pointing_left = ShapeMask::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]);
    assert_eq!(piece.shape(), pointing_left);
    assert_eq!(piece.rotation(), Rotation::East);
    // The anchor stays put.
    assert_eq!((piece.x, piece.y), (4, 0));
}

#[test]
fn test_i_rotation_swaps_bounding_box() {
    let vertical = Piece::new(PieceKind::I, 3, 0).rotated_cw();
    assert_eq!(vertical.shape().width(), 1);
    assert_eq!(vertical.shape().height(), 4);
    let cells: Vec<_> = vertical.cells().into_iter().collect();
    assert_eq!(cells, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let start = Piece::new(kind, 2, 5);
        let mut p = start;
        for _ in 0..4 {
            p = p.rotated_cw();
        }
        assert_eq!(p, start, "{kind:?}");
    }
}

#[test]
fn test_rotation_counter_tracks_mask() {
    for kind in PieceKind::ALL {
        let mut p = Piece::new(kind, 0, 0);
        for _ in 0..7 {
            p = p.rotated_cw();
            assert_eq!(p.shape(), spawn_mask(kind).rotated(p.rotation().turns()));
        }
    }
}

#[test]
fn test_piece_above_top() {
    let p = Piece::new(PieceKind::O, 4, -1);
    assert!(p.is_above_top());
    assert!(!p.translated(0, 1).is_above_top());
}

#[test]
fn test_factory_follows_script() {
    let script = [PieceKind::Z, PieceKind::L, PieceKind::I];
    let mut factory = PieceFactory::new(SequenceRng::kinds(&script), BOARD_WIDTH);
    for kind in script.iter().chain(script.iter()) {
        let piece = factory.next();
        assert_eq!(piece.kind, *kind);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_factory_is_deterministic_per_seed() {
    let mut a = PieceFactory::new(SimpleRng::new(42), BOARD_WIDTH);
    let mut b = PieceFactory::new(SimpleRng::new(42), BOARD_WIDTH);
    let kinds_a: Vec<_> = (0..50).map(|_| a.next().kind).collect();
    let kinds_b: Vec<_> = (0..50).map(|_| b.next().kind).collect();
    assert_eq!(kinds_a, kinds_b);
}

#[test]
fn test_factory_produces_every_kind() {
    let mut factory = PieceFactory::new(SimpleRng::new(7), BOARD_WIDTH);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let kind = factory.next().kind;
        seen[PieceKind::ALL.iter().position(|k| *k == kind).unwrap()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
