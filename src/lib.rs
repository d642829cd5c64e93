//! Guess-the-word State Library
//!
//! This crate provides the screen state for a timed word-guessing game.
//!
//! # Overview
//!
//! - **Game State** - One round: a shuffled word queue that never runs dry,
//!   a score that moves by one per guess, and a countdown that publishes the
//!   time left on every tick and finishes the round at zero.
//!
//! - **Score State** - The final score and a play-again request.
//!
//! - **Events** - Round-finished, buzz and play-again are one-shot events:
//!   emitted once, pending until the consumer acknowledges them.
//!
//! # Design Principles
//!
//! 1. **Timers are injected** - The countdown runs behind `CountdownTimer`, so
//!    tests drive it with `ManualTimer` instead of waiting on real time.
//!
//! 2. **Randomness is injected** - Pass a seeded RNG for reproducible shuffles.
//!
//! 3. **No presentation** - This crate is pure state, no UI or navigation.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use guess_word_state::{BuzzType, GameConfig, GameState, ManualTimer, ScoreState};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let timer = ManualTimer::new();
//! let config = GameConfig::default().with_countdown(Duration::from_secs(5));
//! let mut game = GameState::with_rng(config, timer.clone(), StdRng::seed_from_u64(1)).unwrap();
//!
//! game.on_correct();
//! assert_eq!(game.buzz(), BuzzType::Correct);
//! game.on_buzz_acknowledged();
//!
//! // Run out the clock
//! timer.advance(Duration::from_secs(5));
//! game.pump();
//! assert!(game.event_game_finished());
//! game.on_game_finish_acknowledged();
//!
//! let score = ScoreState::new(game.score());
//! assert_eq!(score.score(), 1);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
