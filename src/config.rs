//! Loading arena configuration (simulated latencies + optional problem bank) from TOML.
//!
//! Example:
//! ```toml
//! [timings]
//! run_delay_ms = 2000
//! submit_delay_ms = 3000
//! reply_delay_ms = 1500
//!
//! [[problems]]
//! id = 42
//! title = "Climbing Stairs"
//! difficulty = "easy"
//! tags = ["Dynamic Programming"]
//! ```

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::Problem;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ArenaConfig {
  #[serde(default)]
  pub timings: Timings,
  #[serde(default)]
  pub problems: Vec<Problem>,
}

/// Fixed latencies of the simulated actions, in milliseconds.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
  pub run_delay_ms: u64,
  pub submit_delay_ms: u64,
  pub reply_delay_ms: u64,
}

impl Default for Timings {
  fn default() -> Self {
    Self { run_delay_ms: 2000, submit_delay_ms: 3000, reply_delay_ms: 1500 }
  }
}

impl Timings {
  pub fn run_delay(&self) -> Duration { Duration::from_millis(self.run_delay_ms) }
  pub fn submit_delay(&self) -> Duration { Duration::from_millis(self.submit_delay_ms) }
  pub fn reply_delay(&self) -> Duration { Duration::from_millis(self.reply_delay_ms) }

  /// Submit must take longer than run; otherwise the defaults are used.
  pub fn checked(self) -> Self {
    if self.submit_delay_ms <= self.run_delay_ms {
      warn!(
        target: "codearena",
        run_ms = self.run_delay_ms,
        submit_ms = self.submit_delay_ms,
        "submit_delay_ms must exceed run_delay_ms; using default timings"
      );
      return Self::default();
    }
    self
  }
}

pub fn parse_arena_config(s: &str) -> Result<ArenaConfig, toml::de::Error> {
  let mut cfg = toml::from_str::<ArenaConfig>(s)?;
  cfg.timings = cfg.timings.checked();
  Ok(cfg)
}

/// Attempt to load `ArenaConfig` from ARENA_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_arena_config_from_env() -> Option<ArenaConfig> {
  let path = std::env::var("ARENA_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_arena_config(&s) {
      Ok(cfg) => {
        info!(target: "codearena", %path, problems = cfg.problems.len(), "Loaded arena config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "codearena", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "codearena", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
