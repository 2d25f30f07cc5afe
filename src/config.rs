//! Runtime configuration: environment variables, then command-line overrides.
//!
//! Environment variables:
//!
//! - `TETRIS_STACK_SEED`: RNG seed (u32). Unset or invalid: derived from the clock.
//! - `TETRIS_STACK_VARIANT`: `basic`, `reserve` or `full` (default `full`).
//! - `TETRIS_STACK_LOG_PATH`: JSONL action journal path (unset or empty: disabled).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::Variant;

pub const USAGE: &str = "\
Usage: tetris-stack [--plain] [--seed N] [--variant basic|reserve|full] [--log PATH]

  --plain          line-oriented menu on stdin/stdout instead of the full-screen view
  --seed N         seed for piece shapes (default: TETRIS_STACK_SEED or the clock)
  --variant NAME   capability level (default: TETRIS_STACK_VARIANT or full)
  --log PATH       append a JSON-lines action journal (default: TETRIS_STACK_LOG_PATH)
  -h, --help       show this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub variant: Variant,
    pub log_path: Option<String>,
    pub plain: bool,
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            variant: Variant::Full,
            log_path: None,
            plain: false,
            show_help: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_STACK_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let variant = lookup("TETRIS_STACK_VARIANT")
            .and_then(|s| Variant::from_str(&s))
            .unwrap_or_default();

        let log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            variant,
            log_path,
            ..Self::default()
        }
    }

    /// Apply command-line arguments (program name excluded) on top of `self`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--plain" => self.plain = true,
                "-h" | "--help" => self.show_help = true,
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--variant" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --variant"))?;
                    self.variant = Variant::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --variant value: {}", v))?;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
