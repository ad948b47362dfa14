//! Terminal runner (default binary).
//!
//! Hosts the frame loop: read keys, step the flow (which drives the engine),
//! draw. Logging goes to a file because the terminal belongs to the renderer.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::core::{Engine, EngineConfig};
use blockfall::input::{should_quit, IntentTracker};
use blockfall::term::{FrameBuffer, FrameClock, Flow, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameMode, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

const FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(name = "blockfall")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game mode: `normal` or `sprint`.
    #[arg(long, default_value = "normal", value_parser = parse_mode)]
    mode: GameMode,

    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u16,

    /// Seed for a reproducible piece sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show the measured frame rate below the side panel.
    #[arg(long)]
    show_fps: bool,
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    GameMode::from_str(s).ok_or_else(|| format!("unknown mode `{}` (expected normal or sprint)", s))
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let mut config = EngineConfig::default()
        .with_mode(args.mode)
        .with_size(args.width, args.height);
    config.seed = args.seed;
    let mut engine = Engine::new(config).context("invalid board configuration")?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, args.show_fps);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, show_fps: bool) -> Result<()> {
    let view = GameView::default();
    let mut flow = Flow::new();
    let mut tracker = IntentTracker::new();
    let mut clock = FrameClock::new();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let mut frame_start = Instant::now();
    clock.tick();

    loop {
        let timeout = frame.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    tracker.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                Event::FocusLost => tracker.reset(),
                _ => {}
            }
            continue;
        }

        frame_start = Instant::now();
        let dt = clock.tick();

        tracker.update(dt);
        flow.step(engine, dt, tracker.intents_mut());
        tracker.end_step();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut screen = flow.state();
        if show_fps {
            screen = screen.with_fps(clock.fps_estimate().round() as u32);
        }
        view.render_into(&engine.snapshot(), screen, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
