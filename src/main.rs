//! Terminal memory game runner.
//!
//! One loop drives everything: poll crossterm input until the next frame,
//! advance the reveal pause by the real elapsed time, issue a countdown tick
//! every `tick_ms`, and redraw from a fresh snapshot whenever the session
//! emitted events.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_memory::config::Config;
use tui_memory::core::{GameSession, GameSnapshot};
use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameCommand, FRAME_MS};

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(config.log_path.as_deref())?;

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut session = GameSession::new(&config.game_config(), seed).with_context(|| {
        format!(
            "cannot start a {}x{} game",
            config.rows, config.columns
        )
    })?;
    info!("seed {}", seed);
    session.start();

    let view = GameView::new(config.layout(), config.labels());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &view, config.tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession,
    view: &GameView,
    tick_ms: u32,
) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);
    let tick = Duration::from_millis(tick_ms.max(1) as u64);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();
    let mut last_tick = Instant::now();

    // Redraw only when the session reported a change or the terminal resized.
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Reveal pause.
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;
        session.advance(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));

        // Countdown.
        while last_tick.elapsed() >= tick {
            last_tick += tick;
            session.apply(GameCommand::Tick);
        }

        for event in session.drain_events() {
            debug!("{:?}", event);
            dirty = true;
        }
    }
}

/// Send `log` output to `path`; the terminal itself is owned by the game.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to open log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
