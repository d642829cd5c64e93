//! Round configuration.
//!
//! Countdown length, tick size and the word list are plain values handed to
//! [`GameState`](super::game::GameState) so tests can run short rounds.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::words::CANONICAL_WORDS;

/// Default length of a round (10 seconds).
pub const DEFAULT_COUNTDOWN_MS: u64 = 10_000;

/// Default tick interval (1 second).
pub const DEFAULT_TICK_MS: u64 = 1_000;

/// Number of whole ticks left at which the panic buzz starts.
pub const DEFAULT_PANIC_TICKS: u64 = 3;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroTick,
    #[error("countdown must be greater than zero")]
    ZeroCountdown,
    #[error("word list is empty")]
    EmptyWordList,
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for one game round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Total countdown in milliseconds
    pub countdown_ms: u64,

    /// Interval between ticks in milliseconds
    pub tick_ms: u64,

    /// Panic buzz fires while `remaining / tick < panic_ticks`
    pub panic_ticks: u64,

    /// Words dealt to the player, reshuffled on every refill
    pub words: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_ms: DEFAULT_COUNTDOWN_MS,
            tick_ms: DEFAULT_TICK_MS,
            panic_ticks: DEFAULT_PANIC_TICKS,
            words: CANONICAL_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown_ms = countdown.as_millis() as u64;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick_ms = tick.as_millis() as u64;
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn countdown(&self) -> Duration {
        Duration::from_millis(self.countdown_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check the config can drive a round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.countdown_ms == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(())
    }

    /// Whether a tick carrying `remaining` falls inside the panic window.
    pub fn is_panic(&self, remaining: Duration) -> bool {
        (remaining.as_millis() as u64)
            .checked_div(self.tick_ms)
            .is_some_and(|ticks| ticks < self.panic_ticks)
    }
}
