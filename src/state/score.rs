//! Score screen state.

use chrono::{DateTime, Utc};

use super::event::OneShot;

/// Final score of a finished round plus the play-again request.
#[derive(Debug, Clone)]
pub struct ScoreState {
    score: i32,
    event_play_again: OneShot<()>,
    pub created_at: DateTime<Utc>,
}

impl ScoreState {
    /// Any score is accepted, including negative ones.
    pub fn new(final_score: i32) -> Self {
        tracing::info!("ScoreState created! Score: {}", final_score);
        Self {
            score: final_score,
            event_play_again: OneShot::new(),
            created_at: Utc::now(),
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Whether a play-again request is waiting to be handled.
    pub fn event_play_again(&self) -> bool {
        self.event_play_again.is_pending()
    }

    pub fn on_play_again(&mut self) {
        tracing::debug!("Play again requested");
        self.event_play_again.emit(());
    }

    pub fn on_play_again_acknowledged(&mut self) {
        self.event_play_again.acknowledge();
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "score": self.score,
            "event_play_again": self.event_play_again(),
            "created_at": self.created_at.to_rfc3339()
        })
    }
}
