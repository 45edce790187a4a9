//! Runtime configuration from environment variables and command-line flags.
//!
//! Environment:
//!
//! - `TUI_2048_SEED`: RNG seed (u64). Absent, empty, or `0` picks a random seed.
//! - `TUI_2048_LOG_PATH`: write logs to this file. No logging when unset.
//! - `TUI_2048_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`, `off`.
//!
//! Flags override the environment: `--seed <n>`, `--no-mouse`, and an
//! optional leading `headless` subcommand.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::LevelFilter;

/// How the binary drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen terminal game
    Interactive,
    /// One command per stdin line, one JSON observation per stdout line
    Headless,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: Mode,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("TUI_2048_SEED")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&s| s != 0);

        let log_path = non_empty("TUI_2048_LOG_PATH").map(PathBuf::from);

        let log_level = non_empty("TUI_2048_LOG_LEVEL")
            .and_then(|s| s.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            seed,
            log_path,
            log_level,
            ..Self::default()
        }
    }

    /// Apply command-line arguments (without the program name).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        if args.first().map(String::as_str) == Some("headless") {
            self.mode = Mode::Headless;
            i = 1;
        }

        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = if seed == 0 { None } else { Some(seed) };
                }
                "--no-mouse" => {
                    self.mouse = false;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::random::<u64>().max(1))
    }
}
