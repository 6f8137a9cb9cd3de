//! Terminal runner (default binary).
//!
//! Owns the clock, the keyboard and the screen. Each frame it polls keys
//! until the frame deadline, hands the decoded intents to the engine with
//! the elapsed milliseconds, then redraws.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use blockfall::core::{GameConfig, GameSnapshot, GameState};
use blockfall::input::{intent_for_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Intent, FRAME_MS};

const ENV_CONFIG: &str = "BLOCKFALL_CONFIG";
const ENV_LOG: &str = "BLOCKFALL_LOG";

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        "starting {}x{} board, fall {}ms, seed {seed}",
        config.width, config.height, config.fall_interval_ms
    );
    let mut game = GameState::with_config(GameConfig {
        seed: Some(seed),
        ..config
    })
    .context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("open log file {}", path.to_string_lossy()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    let base = match std::env::var_os(ENV_CONFIG) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read config {}", path.to_string_lossy()))?;
            GameConfig::from_json_str(&text)
                .with_context(|| format!("parse config {}", path.to_string_lossy()))?
        }
        None => GameConfig::default(),
    };
    Ok(base.with_env(|key| std::env::var(key).ok())?)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let start = Instant::now();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut intents: Vec<Intent> = Vec::with_capacity(8);
    let mut deadline = start + frame;

    loop {
        intents.clear();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit after {} pieces, score {}", game.pieces_locked(), game.score());
                        return Ok(());
                    }
                    intents.extend(intent_for_key(key));
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        deadline = (deadline + frame).max(Instant::now());

        game.tick(start.elapsed().as_millis() as u64, &intents);

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}
