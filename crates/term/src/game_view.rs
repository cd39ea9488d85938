//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and only reads the session: board occupancy
//! through `Board::is_free_block`, and the active and next pieces.

use crate::core::{Board, GameSession, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SETTLED: Rgb = Rgb::new(220, 80, 80);
const BODY: Rgb = Rgb::new(100, 220, 120);
const PIVOT: Rgb = Rgb::new(80, 120, 220);
const WALL: Rgb = Rgb::new(80, 120, 220);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the board frame (side walls and floor) in terminal cells.
    ///
    /// The top is open: pieces enter from above.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 1,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = 0;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_walls(fb, start_x, start_y, frame_w, frame_h);
        self.draw_board(fb, session.board(), start_x, start_y);
        self.draw_piece(fb, &session.piece(), start_x, start_y, true);
        self.draw_side_panel(fb, session, start_x, start_y, frame_w);
        // The preview position lies right of the board, in board coordinates.
        self.draw_piece(fb, &session.next_piece(), start_x, start_y, false);

        if session.is_game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_walls(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(WALL);

        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, board: &Board, start_x: u16, start_y: u16) {
        let settled = CellStyle {
            fg: SETTLED,
            bg: PLAY_BG,
            bold: true,
        };
        let empty = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAY_BG,
            bold: false,
        };

        for row in 0..BOARD_HEIGHT as i32 {
            for col in 0..BOARD_WIDTH as i32 {
                if board.is_free_block(col, row) {
                    self.fill_cell_rect(fb, start_x, start_y, col as u16, row as u16, '·', empty);
                } else {
                    self.fill_cell_rect(fb, start_x, start_y, col as u16, row as u16, '█', settled);
                }
            }
        }
    }

    /// Draw a piece at its own position. Blocks above the board are skipped;
    /// `clip` also drops anything outside the play area.
    fn draw_piece(&self, fb: &mut FrameBuffer, piece: &Piece, start_x: u16, start_y: u16, clip: bool) {
        for (col, row, block) in piece.cells() {
            if col < 0 || row < 0 {
                continue;
            }
            if clip && (col >= BOARD_WIDTH as i32 || row >= BOARD_HEIGHT as i32) {
                continue;
            }
            let fg = match block {
                BlockKind::Pivot => PIVOT,
                _ => BODY,
            };
            let style = CellStyle {
                fg,
                bg: if clip { PLAY_BG } else { Rgb::new(0, 0, 0) },
                bold: true,
            };
            self.fill_cell_rect(fb, start_x, start_y, col as u16, row as u16, '█', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= fb.width() {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.put_str(panel_x, start_y, "LINES", label);
        fb.put_u32(panel_x + 8, start_y, session.lines_cleared(), value);
        fb.put_str(panel_x, start_y + 1, "PIECES", label);
        fb.put_u32(panel_x + 8, start_y + 1, session.pieces_spawned(), value);

        let next_label_y = start_y + 3;
        fb.put_str(panel_x, next_label_y, "NEXT", label);

        let help = CellStyle::fg(Rgb::new(140, 140, 150));
        let mut y = start_y + 12;
        for line in [
            "←/→  move",
            "↓    down",
            "↑/z  rotate",
            "spc  drop",
            "r    restart",
            "q    quit",
        ] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
