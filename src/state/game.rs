//! Game round state.
//!
//! A [`GameState`] owns one round: the word being guessed, the score, the
//! countdown and the one-shot events the game screen reacts to (round
//! finished, buzz cues). The countdown starts on construction and is
//! cancelled when the state is dropped.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::buzz::{BuzzType, Haptics};
use super::config::{ConfigError, GameConfig};
use super::event::OneShot;
use super::format::format_elapsed;
use super::timer::{CountdownTimer, SystemTimer, TimerEvent};
use super::words::WordQueue;

/// State for a single game round.
#[derive(Debug)]
pub struct GameState<T: CountdownTimer = SystemTimer, R: Rng = StdRng> {
    config: GameConfig,

    /// Remaining words, front is next
    words: WordQueue<R>,

    /// Word currently being guessed
    word: String,

    score: i32,

    /// Time left as of the last tick
    time_remaining: Duration,

    /// Set once the countdown has finished
    finished: bool,

    event_game_finished: OneShot<()>,

    buzz: OneShot<BuzzType>,

    timer: T,

    /// When the round was created
    pub created_at: DateTime<Utc>,

    /// When the countdown finished
    pub finished_at: Option<DateTime<Utc>>,
}

impl<T: CountdownTimer> GameState<T, StdRng> {
    /// Create a round shuffled from OS entropy and start its countdown.
    pub fn new(config: GameConfig, timer: T) -> Result<Self, ConfigError> {
        Self::with_rng(config, timer, StdRng::from_os_rng())
    }
}

impl<T: CountdownTimer, R: Rng> GameState<T, R> {
    /// Create a round with an explicit random source and start its countdown.
    pub fn with_rng(config: GameConfig, mut timer: T, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut words = WordQueue::new(config.words.clone(), rng);
        let word = words.next_word().unwrap_or_default();

        timer.start(config.countdown(), config.tick());

        tracing::info!(
            "GameState created! countdown={:?} tick={:?}",
            config.countdown(),
            config.tick()
        );

        Ok(Self {
            time_remaining: config.countdown(),
            config,
            words,
            word,
            score: 0,
            finished: false,
            event_game_finished: OneShot::new(),
            buzz: OneShot::new(),
            timer,
            created_at: Utc::now(),
            finished_at: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    /// Remaining time as `MM:SS`.
    pub fn time_remaining_string(&self) -> String {
        format_elapsed(self.time_remaining)
    }

    /// Check if the countdown has run out.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Words left before the queue reshuffles.
    pub fn words_remaining(&self) -> usize {
        self.words.remaining()
    }

    /// The player passed on the current word.
    pub fn on_skip(&mut self) {
        self.score = self.score.saturating_sub(1);
        self.next_word();
    }

    /// The player guessed the current word.
    pub fn on_correct(&mut self) {
        self.score = self.score.saturating_add(1);
        self.buzz.emit(BuzzType::Correct);
        self.next_word();
    }

    fn next_word(&mut self) {
        if let Some(word) = self.words.next_word() {
            tracing::debug!("Next word: {} ({} left)", word, self.words.remaining());
            self.word = word;
        }
    }

    // Events

    /// Whether the round-finished event is waiting to be handled.
    pub fn event_game_finished(&self) -> bool {
        self.event_game_finished.is_pending()
    }

    /// The screen has reacted to the round finishing.
    pub fn on_game_finish_acknowledged(&mut self) {
        self.event_game_finished.acknowledge();
    }

    /// Pending buzz cue, `NoBuzz` when none.
    pub fn buzz(&self) -> BuzzType {
        self.buzz.pending().copied().unwrap_or_default()
    }

    /// Number of buzz cues emitted this round.
    pub fn buzz_emissions(&self) -> u64 {
        self.buzz.emissions()
    }

    pub fn on_buzz_acknowledged(&mut self) {
        self.buzz.acknowledge();
    }

    /// Play the pending buzz, if any, and acknowledge it.
    pub fn dispatch_buzz<H: Haptics + ?Sized>(&mut self, haptics: &mut H) -> Option<BuzzType> {
        let buzz = self.buzz.acknowledge()?;
        haptics.vibrate(buzz.pattern());
        Some(buzz)
    }

    // Timer

    /// Deliver every timer event that is due. Returns what was applied.
    pub fn pump(&mut self) -> Vec<TimerEvent> {
        let events = self.timer.poll();
        for event in &events {
            match *event {
                TimerEvent::Tick(remaining) => self.on_tick(remaining),
                TimerEvent::Finish => self.on_finish(),
            }
        }
        events
    }

    /// Apply a countdown tick.
    pub fn on_tick(&mut self, remaining: Duration) {
        if self.finished {
            return;
        }

        tracing::debug!("timer tick!: {}", remaining.as_millis());
        self.time_remaining = remaining;

        if self.config.is_panic(remaining) {
            self.buzz.emit(BuzzType::CountdownPanic);
        }
    }

    /// Apply countdown completion. Only the first call has any effect.
    pub fn on_finish(&mut self) {
        if self.finished {
            return;
        }

        tracing::info!("timer FINISHED! final score {}", self.score);
        self.finished = true;
        self.time_remaining = Duration::ZERO;
        self.finished_at = Some(Utc::now());
        self.event_game_finished.emit(());
        self.buzz.emit(BuzzType::GameOver);
    }

    /// Convert to a JSON snapshot for the game screen.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "word": self.word,
            "score": self.score,
            "time_remaining_ms": self.time_remaining.as_millis() as u64,
            "time_remaining": self.time_remaining_string(),
            "finished": self.finished,
            "event_game_finished": self.event_game_finished(),
            "buzz": self.buzz(),
            "created_at": self.created_at.to_rfc3339(),
            "finished_at": self.finished_at.map(|t| t.to_rfc3339())
        })
    }
}

impl<T: CountdownTimer, R: Rng> Drop for GameState<T, R> {
    fn drop(&mut self) {
        self.timer.cancel();
        tracing::info!("GameState destroyed!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::buzz::RecordingHaptics;
    use crate::state::timer::ManualTimer;
    use crate::state::words::CANONICAL_WORDS;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const SECOND: Duration = Duration::from_secs(1);

    fn make_game(config: GameConfig) -> (GameState<ManualTimer, StdRng>, ManualTimer) {
        let timer = ManualTimer::new();
        let game = GameState::with_rng(config, timer.clone(), StdRng::seed_from_u64(11)).unwrap();
        (game, timer)
    }

    #[test]
    fn test_game_new() {
        let (game, timer) = make_game(GameConfig::default());

        assert_eq!(game.score(), 0);
        assert!(CANONICAL_WORDS.contains(&game.word()));
        assert_eq!(game.words_remaining(), 20);
        assert_eq!(game.time_remaining(), Duration::from_secs(10));
        assert_eq!(game.time_remaining_string(), "00:10");
        assert!(!game.is_finished());
        assert!(!game.event_game_finished());
        assert_eq!(game.buzz(), BuzzType::NoBuzz);
        assert!(timer.is_running());
    }

    #[test]
    fn test_game_rejects_invalid_config() {
        let config = GameConfig::default().with_words(Vec::<String>::new());
        let result = GameState::with_rng(config, ManualTimer::new(), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(ConfigError::EmptyWordList)));
    }

    #[test]
    fn test_game_new_with_os_rng() {
        let game = GameState::new(GameConfig::default(), ManualTimer::new()).unwrap();
        assert!(CANONICAL_WORDS.contains(&game.word()));
    }

    #[test]
    fn test_score_is_correct_minus_skip() {
        let (mut game, _timer) = make_game(GameConfig::default());

        for _ in 0..3 {
            game.on_correct();
        }
        for _ in 0..7 {
            game.on_skip();
        }
        game.on_correct();

        // No floor at zero
        assert_eq!(game.score(), 4 - 7);
    }

    #[test]
    fn test_skip_does_not_buzz() {
        let (mut game, _timer) = make_game(GameConfig::default());
        game.on_skip();
        assert_eq!(game.buzz(), BuzzType::NoBuzz);
        assert_eq!(game.buzz_emissions(), 0);
    }

    #[test]
    fn test_words_cycle_through_full_list() {
        let (mut game, _timer) = make_game(GameConfig::default());

        let mut seen = HashSet::new();
        seen.insert(game.word().to_string());
        for _ in 0..20 {
            game.on_skip();
            seen.insert(game.word().to_string());
        }
        assert_eq!(seen.len(), 21);
        assert_eq!(game.words_remaining(), 0);

        // Exhausted queue refills before dealing
        game.on_correct();
        assert!(CANONICAL_WORDS.contains(&game.word()));
        assert_eq!(game.words_remaining(), 20);
    }

    #[test]
    fn test_countdown_ticks_then_finishes() {
        let (mut game, timer) = make_game(GameConfig::default());

        let mut remaining = Vec::new();
        for _ in 0..10 {
            assert!(!game.is_finished());
            timer.advance(SECOND);
            game.pump();
            remaining.push(game.time_remaining().as_millis() as u64);
        }

        assert_eq!(
            remaining,
            vec![9000, 8000, 7000, 6000, 5000, 4000, 3000, 2000, 1000, 0]
        );
        assert!(game.is_finished());
        assert!(game.event_game_finished());
        assert!(game.finished_at.is_some());
        assert_eq!(game.time_remaining_string(), "00:00");
    }

    #[test]
    fn test_countdown_single_pump_delivers_all() {
        let (mut game, timer) = make_game(GameConfig::default());

        timer.advance(Duration::from_secs(30));
        let events = game.pump();

        let ticks = events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Tick(_)))
            .count();
        assert_eq!(ticks, 10);
        assert_eq!(events.last(), Some(&TimerEvent::Finish));
        assert_eq!(game.buzz(), BuzzType::GameOver);
    }

    #[test]
    fn test_finished_event_fires_once() {
        let (mut game, timer) = make_game(GameConfig::default().with_countdown(2 * SECOND));

        timer.advance(2 * SECOND);
        game.pump();
        assert!(game.event_game_finished());

        game.on_game_finish_acknowledged();
        assert!(!game.event_game_finished());

        // Timer does not restart
        timer.advance(10 * SECOND);
        assert!(game.pump().is_empty());
        game.on_finish();
        assert!(!game.event_game_finished());
    }

    #[test]
    fn test_panic_buzz_window() {
        let (mut game, timer) = make_game(GameConfig::default());

        for step in 1..=7 {
            timer.advance(SECOND);
            game.pump();
            assert_eq!(game.buzz(), BuzzType::NoBuzz, "step {}", step);
        }

        // 2000 and 1000 remaining
        for _ in 0..2 {
            timer.advance(SECOND);
            game.pump();
            assert_eq!(game.buzz(), BuzzType::CountdownPanic);
            game.on_buzz_acknowledged();
        }

        // Tick(0) panics, then game over replaces it
        let before = game.buzz_emissions();
        timer.advance(SECOND);
        game.pump();
        assert_eq!(game.buzz_emissions(), before + 2);
        assert_eq!(game.buzz(), BuzzType::GameOver);
    }

    #[test]
    fn test_panic_reemitted_each_tick() {
        let (mut game, timer) = make_game(GameConfig::default());

        timer.advance(8 * SECOND);
        game.pump();
        let emissions = game.buzz_emissions();

        // Unacknowledged panic is still re-emitted
        timer.advance(SECOND);
        game.pump();
        assert_eq!(game.buzz_emissions(), emissions + 1);
    }

    #[test]
    fn test_correct_buzz_dispatch() {
        let (mut game, _timer) = make_game(GameConfig::default());
        let mut haptics = RecordingHaptics::default();

        assert_eq!(game.dispatch_buzz(&mut haptics), None);

        game.on_correct();
        assert_eq!(game.buzz(), BuzzType::Correct);
        assert_eq!(game.dispatch_buzz(&mut haptics), Some(BuzzType::Correct));
        assert_eq!(game.buzz(), BuzzType::NoBuzz);
        assert_eq!(haptics.played, vec![vec![100, 100, 100, 100, 100, 100]]);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (mut game, timer) = make_game(GameConfig::default());

        timer.advance(3 * SECOND);
        game.pump();
        drop(game);

        assert!(timer.is_cancelled());
        timer.advance(20 * SECOND);
        let mut handle = timer.clone();
        assert!(handle.poll().is_empty());
    }

    #[test]
    fn test_short_round_panics_from_first_tick() {
        let config = GameConfig::default()
            .with_countdown(3 * SECOND)
            .with_tick(SECOND);
        let (mut game, timer) = make_game(config);

        timer.advance(SECOND);
        game.pump();
        assert_eq!(game.time_remaining(), 2 * SECOND);
        assert_eq!(game.buzz(), BuzzType::CountdownPanic);
    }

    #[test]
    fn test_custom_words() {
        let config = GameConfig::default().with_words(["alpha"]);
        let (mut game, _timer) = make_game(config);

        assert_eq!(game.word(), "alpha");
        game.on_correct();
        assert_eq!(game.word(), "alpha");
    }

    #[test]
    fn test_to_json() {
        let (mut game, _timer) = make_game(GameConfig::default());
        game.on_correct();

        let json = game.to_json();
        assert_eq!(json["score"], 1);
        assert_eq!(json["time_remaining"], "00:10");
        assert_eq!(json["time_remaining_ms"], 10_000);
        assert_eq!(json["finished"], false);
        assert_eq!(json["buzz"], "correct");
        assert!(json["finished_at"].is_null());
    }
}
