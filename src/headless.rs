//! Headless driver: line-delimited commands in, JSON observations out.
//!
//! Each non-blank input line is one command (`up`, `down`, `left`, `right`,
//! `restart`, or `quit`). After every command one JSON object is written:
//!
//! ```text
//! -> left
//! <- {"type":"observation","board":[[4,0,0,0],...],"score":4,"best_score":4,
//!     "phase":"playing","moves":1,"changed":true,"score_gained":4,"event":null}
//! -> jump
//! <- {"type":"error","message":"unknown command: jump"}
//! ```
//!
//! Each object is one line; it is wrapped above for reading. An observation
//! is written once before the first command, and `restart` reports
//! `"changed":true`.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use crate::core::{GameEvent, GameSnapshot, GameState, SwipeOutcome};
use crate::types::{GameAction, TileValue, COLS, ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HeadlessMessage {
    Observation(ObservationMessage),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationMessage {
    pub board: [[TileValue; COLS]; ROWS],
    pub score: u32,
    pub best_score: u32,
    pub phase: &'static str,
    pub moves: u32,
    pub changed: bool,
    pub score_gained: u32,
    pub event: Option<&'static str>,
}

impl ObservationMessage {
    pub fn new(snap: &GameSnapshot, outcome: SwipeOutcome, event: Option<GameEvent>) -> Self {
        Self {
            board: snap.board,
            score: snap.score,
            best_score: snap.best_score,
            phase: snap.phase.as_str(),
            moves: snap.moves,
            changed: outcome.changed(),
            score_gained: outcome.score_gained(),
            event: event.map(event_name),
        }
    }
}

fn event_name(event: GameEvent) -> &'static str {
    match event {
        GameEvent::NoMovesLeft { .. } => "no_moves_left",
    }
}

/// Drive `game` from `input` until EOF or `quit`, writing to `output`.
pub fn run_headless<R: BufRead, W: Write>(
    game: &mut GameState,
    input: R,
    mut output: W,
) -> Result<()> {
    if game.phase() == crate::types::Phase::Idle {
        game.start_game();
    }
    write_observation(game, SwipeOutcome::Ignored, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("quit") {
            break;
        }

        match GameAction::from_str(command) {
            Some(action) => {
                let outcome = game.apply_action(action);
                debug!("headless {} -> {:?}", action.as_str(), outcome);
                write_observation(game, outcome, &mut output)?;
            }
            None => {
                let message = HeadlessMessage::Error {
                    message: format!("unknown command: {}", command),
                };
                write_message(&message, &mut output)?;
            }
        }
    }

    info!(
        "headless session ended (score {}, best {})",
        game.score(),
        game.best_score()
    );
    Ok(())
}

fn write_observation<W: Write>(
    game: &mut GameState,
    outcome: SwipeOutcome,
    output: &mut W,
) -> Result<()> {
    let event = game.take_event();
    let obs = ObservationMessage::new(&game.snapshot(), outcome, event);
    write_message(&HeadlessMessage::Observation(obs), output)
}

fn write_message<W: Write>(message: &HeadlessMessage, output: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *output, message)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
