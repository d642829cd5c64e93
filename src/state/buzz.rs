//! Haptic feedback cues.

use serde::Serialize;

const CORRECT_BUZZ_PATTERN: &[u64] = &[100, 100, 100, 100, 100, 100];
const PANIC_BUZZ_PATTERN: &[u64] = &[0, 200];
const GAME_OVER_BUZZ_PATTERN: &[u64] = &[0, 2000];
const NO_BUZZ_PATTERN: &[u64] = &[0];

/// Buzz cue, each with a fixed vibration pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuzzType {
    Correct,
    GameOver,
    CountdownPanic,
    #[default]
    NoBuzz,
}

impl BuzzType {
    /// Pulse pattern in milliseconds, alternating off/on.
    pub fn pattern(&self) -> &'static [u64] {
        match self {
            Self::Correct => CORRECT_BUZZ_PATTERN,
            Self::GameOver => GAME_OVER_BUZZ_PATTERN,
            Self::CountdownPanic => PANIC_BUZZ_PATTERN,
            Self::NoBuzz => NO_BUZZ_PATTERN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::GameOver => "game_over",
            Self::CountdownPanic => "countdown_panic",
            Self::NoBuzz => "no_buzz",
        }
    }
}

/// Sink that plays vibration patterns. Fire and forget.
pub trait Haptics {
    fn vibrate(&mut self, pattern: &[u64]);
}

/// Records every pattern played. Handy for hosts without a vibrator.
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    pub played: Vec<Vec<u64>>,
}

impl Haptics for RecordingHaptics {
    fn vibrate(&mut self, pattern: &[u64]) {
        self.played.push(pattern.to_vec());
    }
}
