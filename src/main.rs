//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, then runs a crossterm loop:
//! render, poll keys until the next tick, apply gravity.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tetra_grid::config::GameConfig;
use tetra_grid::core::GameSession;
use tetra_grid::gravity::GravityTimer;
use tetra_grid::input::{handle_key_event, should_quit};
use tetra_grid::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetra_grid::types::TICK_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route log output to the configured file; stderr would corrupt the screen.
///
/// Without a log path no logger is installed and every log call is a no-op.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file =
        File::create(path).with_context(|| format!("failed to open log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = match config.seed {
        Some(seed) => GameSession::new(seed),
        None => GameSession::from_entropy(),
    };
    info!(
        "starting: seed={:?} gravity_ms={}",
        config.seed, config.gravity_ms
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut gravity = GravityTimer::new(config.gravity_ms);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            "quit: pieces={} lines={}",
                            session.pieces_spawned(),
                            session.lines_cleared()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                        gravity.on_action(action, session.take_last_event());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if gravity.tick(elapsed_ms) && !session.is_game_over() {
                session.move_down();
                session.take_last_event();
            }
        }
    }
}
