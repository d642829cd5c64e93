//! State holders for the word-guessing game.
//!
//! - `game` - One round: word, score, countdown, finish and buzz events
//! - `score` - Score screen: final score and play-again request
//! - `config` - Round settings (countdown, tick, words)
//! - `words` - Shuffled word queue with automatic refill
//! - `timer` - Countdown state machine and timer implementations
//! - `event` - One-shot events with explicit acknowledgment
//! - `buzz` - Haptic cues and the vibration sink
//! - `format` - `MM:SS` formatting
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        GameState                          │
//! │                                                           │
//! │  ┌─────────────┐   ┌──────────────────┐   ┌───────────┐  │
//! │  │  WordQueue  │   │  CountdownTimer  │   │  OneShot  │  │
//! │  │             │   │                  │   │  events   │  │
//! │  │ front → word│   │ poll → Tick(n)   │──▶│ finished  │  │
//! │  │ empty →     │   │        Finish    │   │ buzz      │  │
//! │  │   reshuffle │   │ drop → cancel    │   │           │  │
//! │  └─────────────┘   └──────────────────┘   └───────────┘  │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ final score (read by host)
//!                              ▼
//!                      ┌───────────────┐
//!                      │  ScoreState   │
//!                      │ play_again    │
//!                      └───────────────┘
//! ```

pub mod buzz;
pub mod config;
pub mod event;
pub mod format;
pub mod game;
pub mod score;
pub mod timer;
pub mod words;

// Re-export commonly used types
pub use buzz::{BuzzType, Haptics, RecordingHaptics};
pub use config::{ConfigError, GameConfig, DEFAULT_COUNTDOWN_MS, DEFAULT_TICK_MS};
pub use event::OneShot;
pub use format::format_elapsed;
pub use game::GameState;
pub use score::ScoreState;
pub use timer::{
    Countdown, CountdownPhase, CountdownTimer, ManualTimer, SystemTimer, TimerEvent,
};
pub use words::{WordQueue, CANONICAL_WORDS};
