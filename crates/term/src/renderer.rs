//! Terminal output: raw-mode setup and frame flushing.
//!
//! A frame is written whole when there is no previous frame of the same size,
//! otherwise only the runs of cells that differ from the previous frame.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Redraw everything on the next frame, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown frame in its place.
    ///
    /// Callers render into the returned buffer for the next frame, so two
    /// buffers are reused for the whole game.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut previous = match self.shown.take() {
            Some(shown) if (shown.width(), shown.height()) == (fb.width(), fb.height()) => {
                encode_diff_into(&shown, fb, &mut self.out)?;
                shown
            }
            _ => {
                encode_full_into(fb, &mut self.out)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut previous, fb);
        self.shown = Some(previous);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.out)
            .and_then(|_| self.stdout.flush())
            .context("failed to write frame to terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue commands that paint every cell of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        if let Some(row) = fb.row(y) {
            pen.move_to(0, y)?;
            pen.cells(row)?;
        }
    }
    pen.finish()
}

/// Queue commands that repaint the cells where `next` differs from `prev`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::new(out);
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            continue;
        };
        for run in changed_runs(old, new) {
            pen.move_to(run.start as u16, y)?;
            pen.cells(&new[run])?;
        }
    }
    pen.finish()
}

/// Writes cells, emitting style changes only when the style differs.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                let weight = if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                self.out
                    .queue(SetColors(Colors::new(color(cell.style.fg), color(cell.style.bg))))?
                    .queue(SetAttribute(weight))?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Index ranges where two equally long rows differ.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = Range<usize>> + 'a {
    let len = old.len().min(new.len());
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && old[x] == new[x] {
            x += 1;
        }
        if x == len {
            return None;
        }
        let start = x;
        while x < len && old[x] != new[x] {
            x += 1;
        }
        Some(start..x)
    })
}
