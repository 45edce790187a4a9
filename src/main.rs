//! Terminal 2048 runner (default binary).
//!
//! Interactive mode is event-driven: it blocks on the next terminal event,
//! applies at most one action, and redraws. There is no timer.
//! `tui-2048 headless` drives the same game from stdin instead.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_2048::config::{AppConfig, Mode};
use tui_2048::core::{GameEvent, GameSnapshot, GameState};
use tui_2048::headless::run_headless;
use tui_2048::input::{handle_key_event, handle_mouse_event, should_quit, DragTracker};
use tui_2048::logging::init_logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = AppConfig::from_env();
    config.apply_args(&args)?;
    init_logging(&config)?;

    let seed = config.resolve_seed();
    info!("tui-2048 starting ({:?}, seed {})", config.mode, seed);

    let mut game = GameState::new(seed);
    game.start_game();

    match config.mode {
        Mode::Headless => run_headless(&mut game, io::stdin().lock(), io::stdout().lock()),
        Mode::Interactive => {
            let mut term = TerminalRenderer::new();
            if !config.mouse {
                term = term.without_mouse();
            }
            term.enter()?;

            let result = run(&mut term, &mut game);

            // Always try to restore terminal state.
            let _ = term.exit();
            if let Err(e) = &result {
                error!("terminal loop failed: {:#}", e);
            }
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut drag = DragTracker::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit (score {}, best {})", game.score(), game.best_score());
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => handle_mouse_event(&mut drag, mouse),
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            Event::FocusLost => {
                drag.cancel();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            game.apply_action(action);
        }

        // The status line is drawn from the phase; the event itself is just logged.
        if let Some(GameEvent::NoMovesLeft { score }) = game.take_event() {
            info!("no moves left notice shown (score {})", score);
        }
    }
}
