use blockfall::core::{Board, GameConfig, GameSnapshot, GameState, SequenceRng};
use blockfall::term::{encode_rows_into, FrameBuffer, GameView, Rgb, Viewport};
use blockfall::types::{Intent, PieceKind};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 tall.
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_two_columns_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19 * 10] = PieceKind::L.code();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let (x0, y0) = (1, 20);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Rgb::from(PieceKind::L.color()));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_below_piece() {
    let game = GameState::with_rng(GameConfig::default(), SequenceRng::kinds(&[PieceKind::O])).unwrap();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // O at columns 4..=5, i.e. screen x = 1 + 4 * 2 = 9.
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(fb.get(9, 19).unwrap().ch, '░');
    assert_eq!(fb.get(12, 20).unwrap().ch, '░');

    let fb = GameView::default()
        .with_ghost(false)
        .render(&game.snapshot(), Viewport::new(22, 22));
    assert_eq!(fb.get(9, 19).unwrap().ch, '·');
}

#[test]
fn term_view_hides_cells_above_top() {
    let rows = vec!["....##...."; 20];
    let game = GameState::with_board(
        GameConfig::default(),
        SequenceRng::kinds(&[PieceKind::O]),
        Board::from_rows(&rows),
    )
    .unwrap();
    assert!(game.current().y < 0);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    // The border row is untouched by the lifted piece.
    assert!(fb.row_text(0).chars().all(|c| c == '┌' || c == '─' || c == '┐'));
}

#[test]
fn term_view_side_panel_shows_counters() {
    let mut snap = GameSnapshot::default();
    snap.score = 1200;
    snap.lines = 12;
    let all = text(&GameView::default().render(&snap, Viewport::new(60, 24)));
    for needle in ["SCORE", "1200", "LINES", "12", "NEXT"] {
        assert!(all.contains(needle), "missing {needle}");
    }
}

#[test]
fn term_view_overlays_game_over() {
    let rows = vec!["...####..."; 20];
    let mut game = GameState::with_board(
        GameConfig::default(),
        SequenceRng::kinds(&[PieceKind::O]),
        Board::from_rows(&rows),
    )
    .unwrap();
    game.tick(0, &[Intent::HardDrop]);
    let all = text(&GameView::default().render(&game.snapshot(), Viewport::new(60, 24)));
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("PAUSED"));
}

#[test]
fn term_encode_skips_unchanged_frame() {
    let game = GameState::new(3);
    let view = GameView::default();
    let a = view.render(&game.snapshot(), Viewport::new(40, 24));
    let b = view.render(&game.snapshot(), Viewport::new(40, 24));
    let mut out = Vec::new();
    encode_rows_into(Some(&a), &b, &mut out).unwrap();
    assert!(out.is_empty());

    encode_rows_into(None, &b, &mut out).unwrap();
    assert!(!out.is_empty());
}
