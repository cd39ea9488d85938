//! Session module - the spawn → move → lock cycle
//!
//! A [`GameSession`] owns the board, the active piece, the next piece and the
//! randomizer. Every movement request is checked with
//! [`Board::is_possible_movement`] before the piece is updated, so the active
//! piece always sits at a legal position.
//!
//! A downward move that is rejected locks the piece: it is stored on the
//! board, full rows are deleted, and either the session ends (a block reached
//! the top row) or the next piece is promoted and a new next piece is drawn.

use log::{debug, info, trace, warn};

use crate::board::Board;
use crate::pieces::{initial_offset, occupied_cells};
use crate::rng::PieceRandomizer;
use crate::types::{
    BlockKind, GameAction, LockEvent, PieceKind, Rotation, SessionPhase, NEXT_PIECE_POSITION,
    SPAWN_COLUMN,
};

/// A piece instance: kind, rotation, and the board position of its mask's top-left block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub col: i32,
    pub row: i32,
}

impl Piece {
    /// Create a piece at its catalog spawn position
    pub fn spawn(kind: PieceKind, rotation: Rotation) -> Self {
        let (x, y) = initial_offset(kind, rotation);
        Self {
            kind,
            rotation,
            col: SPAWN_COLUMN + x,
            row: y,
        }
    }

    /// Create a piece at the fixed next-piece preview position
    pub fn preview(kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            col: NEXT_PIECE_POSITION.0,
            row: NEXT_PIECE_POSITION.1,
        }
    }

    /// Check if the board accepts this piece where it is
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_possible_movement(self.col, self.row, self.kind, self.rotation)
    }

    /// Occupied blocks as absolute `(col, row, kind)` coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, BlockKind)> {
        let (col, row) = (self.col, self.row);
        occupied_cells(self.kind, self.rotation).map(move |(dx, dy, b)| (col + dx, row + dy, b))
    }

    fn shifted(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
            ..*self
        }
    }

    fn rotated(&self, rotation: Rotation) -> Self {
        Self { rotation, ..*self }
    }
}

/// Result of a downward move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved one row down
    Moved,
    /// The piece could not move and was locked
    Locked(LockEvent),
    /// The session is over; nothing happened
    Ignored,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    piece: Piece,
    next: Piece,
    phase: SessionPhase,
    rng: PieceRandomizer,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Pieces spawned in this episode, including the first one.
    pieces_spawned: u32,
    /// Rows removed in this episode.
    lines_cleared: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Start a session with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self::with_randomizer(PieceRandomizer::new(seed))
    }

    /// Start a session seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_randomizer(PieceRandomizer::from_entropy())
    }

    /// Start a session drawing pieces from `rng`
    pub fn with_randomizer(mut rng: PieceRandomizer) -> Self {
        let (kind, rotation) = rng.next_piece();
        let (next_kind, next_rotation) = rng.next_piece();

        let session = Self {
            board: Board::new(),
            piece: Piece::spawn(kind, rotation),
            next: Piece::preview(next_kind, next_rotation),
            phase: SessionPhase::Spawned,
            rng,
            episode_id: 0,
            pieces_spawned: 1,
            lines_cleared: 0,
            last_event: None,
        };
        debug!(
            "session started: piece={} rotation={} next={}",
            kind.as_str(),
            rotation.as_str(),
            next_kind.as_str()
        );
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The next piece, placed at the preview position
    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.try_rotate(true)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Move the piece one row down, locking it if the row below is blocked
    pub fn move_down(&mut self) -> MoveOutcome {
        if !self.begin_request() {
            return MoveOutcome::Ignored;
        }

        let candidate = self.piece.shifted(0, 1);
        if candidate.is_valid(&self.board) {
            self.piece = candidate;
            return MoveOutcome::Moved;
        }

        MoveOutcome::Locked(self.lock_piece())
    }

    /// Drop the piece to the lowest legal row and lock it
    ///
    /// Returns `None` when the session is already over.
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if !self.begin_request() {
            return None;
        }

        let mut distance = 0;
        loop {
            let candidate = self.piece.shifted(0, 1);
            if !candidate.is_valid(&self.board) {
                break;
            }
            self.piece = candidate;
            distance += 1;
        }
        trace!("hard drop: {} rows", distance);

        Some(self.lock_piece())
    }

    /// Begin a fresh episode: empty board, new current and next pieces
    ///
    /// The randomizer keeps its state, so a restarted session continues the
    /// same seeded sequence rather than replaying it.
    pub fn restart(&mut self) {
        let (kind, rotation) = self.rng.next_piece();
        let (next_kind, next_rotation) = self.rng.next_piece();

        self.board.initialize();
        self.piece = Piece::spawn(kind, rotation);
        self.next = Piece::preview(next_kind, next_rotation);
        self.phase = SessionPhase::Spawned;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.pieces_spawned = 1;
        self.lines_cleared = 0;
        self.last_event = None;

        info!("session restarted: episode={}", self.episode_id);
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => !matches!(self.move_down(), MoveOutcome::Ignored),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Check if the piece could move by (dcol, drow) without changing anything
    pub fn can_move(&self, dcol: i32, drow: i32) -> bool {
        !self.is_game_over() && self.piece.shifted(dcol, drow).is_valid(&self.board)
    }

    /// Gate for movement requests; moves a fresh spawn into the falling phase.
    fn begin_request(&mut self) -> bool {
        match self.phase {
            SessionPhase::GameOver => false,
            SessionPhase::Spawned => {
                self.phase = SessionPhase::Falling;
                true
            }
            _ => true,
        }
    }

    /// Try to move the active piece sideways
    pub(crate) fn try_move(&mut self, dcol: i32, drow: i32) -> bool {
        if !self.begin_request() {
            return false;
        }

        let candidate = self.piece.shifted(dcol, drow);
        if candidate.is_valid(&self.board) {
            self.piece = candidate;
            return true;
        }

        trace!(
            "move ({}, {}) rejected at ({}, {})",
            dcol,
            drow,
            self.piece.col,
            self.piece.row
        );
        false
    }

    /// Try to rotate the active piece in place
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.begin_request() {
            return false;
        }

        let rotation = if clockwise {
            self.piece.rotation.rotate_cw()
        } else {
            self.piece.rotation.rotate_ccw()
        };

        let candidate = self.piece.rotated(rotation);
        if candidate.is_valid(&self.board) {
            self.piece = candidate;
            return true;
        }

        trace!("rotation to {} rejected", rotation.as_str());
        false
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_piece(&mut self) -> LockEvent {
        self.phase = SessionPhase::Locked;

        let piece = self.piece;
        self.board
            .store_piece(piece.col, piece.row, piece.kind, piece.rotation);

        let cleared = self.board.delete_possible_lines();
        let lines = cleared.len() as u32;
        self.lines_cleared += lines;

        debug!(
            "locked {} at ({}, {}), cleared rows {:?}",
            piece.kind.as_str(),
            piece.col,
            piece.row,
            cleared.as_slice()
        );

        let game_over = self.board.is_game_over();
        if game_over {
            self.phase = SessionPhase::GameOver;
            info!(
                "game over: episode={} pieces={} lines={}",
                self.episode_id, self.pieces_spawned, self.lines_cleared
            );
        } else {
            self.create_new_piece();
        }

        let event = LockEvent {
            lines_cleared: lines,
            game_over: self.is_game_over(),
        };
        self.last_event = Some(event);
        event
    }

    /// Promote the next piece and draw a new one
    fn create_new_piece(&mut self) {
        self.piece = Piece::spawn(self.next.kind, self.next.rotation);

        let (kind, rotation) = self.rng.next_piece();
        self.next = Piece::preview(kind, rotation);

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.phase = SessionPhase::Spawned;

        // Spawns only collide when row 0 is filled, which already ended the game.
        if !self.piece.is_valid(&self.board) {
            warn!(
                "spawn of {} at ({}, {}) collides, ending session",
                self.piece.kind.as_str(),
                self.piece.col,
                self.piece.row
            );
            self.phase = SessionPhase::GameOver;
            return;
        }

        debug!(
            "spawned {} {} at ({}, {}), next={}",
            self.piece.kind.as_str(),
            self.piece.rotation.as_str(),
            self.piece.col,
            self.piece.row,
            kind.as_str()
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
