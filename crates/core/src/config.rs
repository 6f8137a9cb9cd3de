//! Game configuration.
//!
//! Defaults come from the shared constants. A config can be read from JSON
//! (missing fields keep their defaults) and then overridden from the
//! environment. Environment access goes through a lookup closure so callers
//! and tests decide where values come from.
//!
//! ```
//! use blockfall_core::{GameConfig, PauseTimerPolicy};
//!
//! let cfg = GameConfig::from_json_str(r#"{ "fall_interval_ms": 250, "pause_timer": "carry" }"#).unwrap();
//! assert_eq!(cfg.fall_interval_ms, 250);
//! assert_eq!(cfg.pause_timer, PauseTimerPolicy::Carry);
//! assert_eq!(cfg.width, 10);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clear::ClearPolicy;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, POINTS_PER_LINE};

/// Smallest board side; an I piece must fit flat.
pub const MIN_BOARD_DIM: u8 = 4;
/// Largest board side.
pub const MAX_BOARD_DIM: u8 = 40;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_FALL_MS: &str = "BLOCKFALL_FALL_MS";
pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board {axis} {value} is outside {min}..={max}", min = MIN_BOARD_DIM, max = MAX_BOARD_DIM)]
    Dimension { axis: &'static str, value: u8 },
    #[error("fall interval must be at least 1ms")]
    ZeroFallInterval,
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {key}")]
    Env { key: &'static str, value: String },
    #[error("board is {actual_w}x{actual_h}, config expects {expected_w}x{expected_h}")]
    BoardMismatch {
        expected_w: u8,
        expected_h: u8,
        actual_w: u8,
        actual_h: u8,
    },
}

/// How time spent paused is treated by the fall timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseTimerPolicy {
    /// Resuming rebases the fall timer, so paused time never causes a fall.
    #[default]
    Discard,
    /// Paused time still counts: a pause longer than the interval makes the
    /// piece fall on the first tick after resuming.
    Carry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub fall_interval_ms: u32,
    pub points_per_line: u32,
    pub clear_policy: ClearPolicy,
    pub pause_timer: PauseTimerPolicy,
    /// Seed for the default random source; `None` lets the driver choose.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
            points_per_line: POINTS_PER_LINE,
            clear_policy: ClearPolicy::Compact,
            pause_timer: PauseTimerPolicy::Discard,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `BLOCKFALL_*` overrides read through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_FALL_MS) {
            self.fall_interval_ms = parse_env(ENV_FALL_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_WIDTH) {
            self.width = parse_env(ENV_WIDTH, &v)?;
        }
        if let Some(v) = lookup(ENV_HEIGHT) {
            self.height = parse_env(ENV_HEIGHT, &v)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&value) {
                return Err(ConfigError::Dimension { axis, value });
            }
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_validate() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.width, cfg.height), (10, 20));
        assert_eq!(cfg.fall_interval_ms, 500);
        assert_eq!(cfg.points_per_line, 100);
    }

    #[test]
    fn json_rejects_unknown_policy() {
        let err = GameConfig::from_json_str(r#"{ "clear_policy": "gravity" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn json_rejects_tiny_board() {
        let err = GameConfig::from_json_str(r#"{ "width": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Dimension { axis: "width", value: 3 }));
    }

    #[test]
    fn env_overrides_apply() {
        let cfg = GameConfig::default()
            .with_env(env(&[(ENV_SEED, "42"), (ENV_FALL_MS, " 300 ")]))
            .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.fall_interval_ms, 300);
        assert_eq!(cfg.width, 10);
    }

    #[test]
    fn env_rejects_garbage() {
        let err = GameConfig::default()
            .with_env(env(&[(ENV_WIDTH, "wide")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { key: ENV_WIDTH, .. }));
    }

    #[test]
    fn env_zero_interval_fails_validation() {
        let err = GameConfig::default()
            .with_env(env(&[(ENV_FALL_MS, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroFallInterval));
    }
}
