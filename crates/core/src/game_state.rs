//! Game state module - the state machine that drives a game
//!
//! Ties together the board, the current and next piece, the piece factory and
//! the fall timer. The driver calls [`GameState::tick`] once per frame with
//! the current time and the intents decoded since the last frame.
//!
//! Every change to the current piece is computed as a candidate and checked
//! with [`fits`](crate::collision::fits) before it replaces the piece, so the
//! current piece always fits. A blocked downward move locks the piece.

use log::{debug, info, trace};

use crate::board::Board;
use crate::collision::{drop_row, piece_fits};
use crate::config::{ConfigError, GameConfig, PauseTimerPolicy};
use crate::factory::PieceFactory;
use crate::fall_timer::FallTimer;
use crate::pieces::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Intent, LockEvent, Phase};

#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    current: Piece,
    next: Piece,
    factory: PieceFactory<R>,
    fall_timer: FallTimer,
    phase: Phase,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    /// Increments on restart.
    episode_id: u32,
    /// Last lock attempt (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// New game with the default config and a seeded generator.
    pub fn new(seed: u32) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        let board = Board::new(config.width, config.height);
        Self::build(config, SimpleRng::new(seed), board)
    }

    /// New game from a config; the generator is seeded from `config.seed`
    /// (1 when unset).
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = SimpleRng::new(config.seed.unwrap_or(1));
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        Ok(Self::build(config, rng, board))
    }

    /// Start on a prepared board (puzzles, tests). The board must match the
    /// configured dimensions.
    pub fn with_board(config: GameConfig, rng: R, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardMismatch {
                expected_w: config.width,
                expected_h: config.height,
                actual_w: board.width(),
                actual_h: board.height(),
            });
        }
        Ok(Self::build(config, rng, board))
    }

    fn build(config: GameConfig, rng: R, board: Board) -> Self {
        let mut factory = PieceFactory::new(rng, config.width);
        let first = factory.next();
        let next = factory.next();
        let fall_timer = FallTimer::new(config.fall_interval_ms, 0);

        let mut game = Self {
            config,
            board,
            current: first,
            next,
            factory,
            fall_timer,
            phase: Phase::Running,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            episode_id: 0,
            last_event: None,
        };
        game.current = game.place_spawn(first);
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn fall_timer(&self) -> &FallTimer {
        &self.fall_timer
    }

    pub fn rng(&self) -> &R {
        self.factory.rng()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Process one frame: apply `intents` in order, then run the fall timer.
    ///
    /// Returns true if anything changed.
    pub fn tick(&mut self, now_ms: u64, intents: &[Intent]) -> bool {
        let mut changed = false;
        for &intent in intents {
            changed |= self.apply_intent(intent, now_ms);
        }

        if self.phase == Phase::Running && self.fall_timer.is_due(now_ms) {
            self.step_down();
            self.fall_timer.reset(now_ms);
            changed = true;
        }

        changed
    }

    /// Apply a single intent. Returns false when it was rejected or had no effect.
    pub fn apply_intent(&mut self, intent: Intent, now_ms: u64) -> bool {
        if intent == Intent::Restart {
            self.restart(now_ms);
            return true;
        }

        match self.phase {
            Phase::GameOver => false,
            Phase::Paused => {
                if intent == Intent::TogglePause {
                    self.resume(now_ms);
                    true
                } else {
                    false
                }
            }
            Phase::Running => match intent {
                Intent::MoveLeft => self.try_shift(-1),
                Intent::MoveRight => self.try_shift(1),
                Intent::RotateCw => self.try_rotate(),
                Intent::SoftDrop => {
                    self.step_down();
                    true
                }
                Intent::HardDrop => {
                    self.hard_drop();
                    true
                }
                Intent::TogglePause => {
                    self.phase = Phase::Paused;
                    debug!("paused at {now_ms}ms");
                    true
                }
                Intent::Restart => false,
            },
        }
    }

    fn resume(&mut self, now_ms: u64) {
        self.phase = Phase::Running;
        if self.config.pause_timer == PauseTimerPolicy::Discard {
            self.fall_timer.reset(now_ms);
        }
        debug!("resumed at {now_ms}ms ({:?})", self.config.pause_timer);
    }

    /// Re-initialise everything but the random source.
    pub fn restart(&mut self, now_ms: u64) {
        self.board = Board::new(self.config.width, self.config.height);
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.phase = Phase::Running;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.fall_timer = FallTimer::new(self.config.fall_interval_ms, now_ms);

        let first = self.factory.next();
        self.next = self.factory.next();
        self.current = self.place_spawn(first);
        info!("restart: episode {}", self.episode_id);
    }

    fn commit(&mut self, candidate: Piece) -> bool {
        if !piece_fits(&self.board, &candidate) {
            return false;
        }
        self.current = candidate;
        true
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        self.commit(self.current.translated(dx, 0))
    }

    fn try_rotate(&mut self) -> bool {
        let ok = self.commit(self.current.rotated_cw());
        if !ok {
            trace!(
                "rotation of {:?} at ({}, {}) rejected",
                self.current.kind,
                self.current.x,
                self.current.y
            );
        }
        ok
    }

    /// Move down one row, or lock if blocked.
    pub(crate) fn step_down(&mut self) -> Option<LockEvent> {
        if self.commit(self.current.translated(0, 1)) {
            None
        } else {
            Some(self.lock())
        }
    }

    /// Drop to the lowest fitting row and lock.
    pub(crate) fn hard_drop(&mut self) -> LockEvent {
        self.current.y = drop_row(&self.board, &self.current);
        self.lock()
    }

    fn lock(&mut self) -> LockEvent {
        let piece = self.current;
        let mut event = LockEvent {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            lines_cleared: 0,
            points: 0,
            topped_out: false,
        };

        if piece.is_above_top() {
            event.topped_out = true;
            self.phase = Phase::GameOver;
            self.last_event = Some(event);
            info!(
                "game over: {:?} locked above the top at ({}, {}), score {}",
                piece.kind, piece.x, piece.y, self.score
            );
            return event;
        }

        self.board.write_cells(piece.cells(), piece.kind);
        let cleared = self.board.clear_full_rows(self.config.clear_policy) as u32;
        let points = cleared.saturating_mul(self.config.points_per_line);
        self.score = self.score.saturating_add(points);
        self.lines += cleared;
        self.pieces_locked += 1;

        event.lines_cleared = cleared;
        event.points = points;
        self.last_event = Some(event);
        debug!(
            "lock {:?} at ({}, {}): {} line(s), +{}",
            piece.kind, piece.x, piece.y, cleared, points
        );

        let fresh = self.factory.next();
        let incoming = std::mem::replace(&mut self.next, fresh);
        self.current = self.place_spawn(incoming);
        event
    }

    /// Spawn row 0, raised until the piece fits. Rows above the top always
    /// fit, so a blocked spawn ends up (partly) above the visible grid.
    fn place_spawn(&self, mut piece: Piece) -> Piece {
        let ceiling = -(piece.shape().height() as i8);
        while piece.y > ceiling && !piece_fits(&self.board, &piece) {
            piece.y -= 1;
        }
        if piece.y < 0 {
            trace!("spawn of {:?} lifted to row {}", piece.kind, piece.y);
        }
        piece
    }

    /// Row the current piece would land on with a hard drop.
    pub fn ghost_y(&self) -> Option<i8> {
        if self.phase == Phase::GameOver {
            return None;
        }
        Some(drop_row(&self.board, &self.current))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_codes(&mut out.board);
        out.current = PieceSnapshot::from(self.current);
        out.ghost_y = self.ghost_y();
        out.next = PieceSnapshot::from(self.next);
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::types::PieceKind;

    fn scripted(kinds: &[PieceKind]) -> GameState<SequenceRng> {
        GameState::with_rng(GameConfig::default(), SequenceRng::kinds(kinds)).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.current.y, 0);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_first_two_draws_are_current_then_next() {
        let state = scripted(&[PieceKind::T, PieceKind::S]);
        assert_eq!(state.current.kind, PieceKind::T);
        assert_eq!(state.next.kind, PieceKind::S);
    }

    #[test]
    fn test_lock_promotes_next() {
        let mut state = scripted(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        state.hard_drop();
        assert_eq!(state.current.kind, PieceKind::S);
        assert_eq!(state.next.kind, PieceKind::Z);
        assert_eq!(state.pieces_locked, 1);
        assert_eq!(state.board.filled_count(), 4);
    }

    #[test]
    fn test_step_down_moves_then_locks() {
        let mut state = scripted(&[PieceKind::O]);
        for _ in 0..18 {
            assert!(state.step_down().is_none());
        }
        assert_eq!(state.current.y, 18);
        let ev = state.step_down().unwrap();
        assert_eq!((ev.x, ev.y), (4, 18));
        assert!(!ev.topped_out);
    }

    #[test]
    fn test_shift_stops_at_wall() {
        let mut state = scripted(&[PieceKind::O]);
        let mut moved = 0;
        while state.try_shift(-1) {
            moved += 1;
        }
        assert_eq!(moved, 4);
        assert_eq!(state.current.x, 0);
    }

    #[test]
    fn test_restart_resets_and_counts_episode() {
        let mut state = GameState::new(7);
        state.hard_drop();
        assert!(state.apply_intent(Intent::Restart, 900));
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.pieces_locked, 0);
        assert_eq!(state.fall_timer.last_fall_ms(), 900);
    }

    #[test]
    fn test_take_last_event_consumes() {
        let mut state = GameState::new(12345);
        state.apply_intent(Intent::HardDrop, 0);
        assert!(state.take_last_event().is_some());
        assert!(state.take_last_event().is_none());
    }
}
