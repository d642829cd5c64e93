//! Word supply.
//!
//! Words are dealt from the front of a queue. An empty queue is refilled
//! with the full list and reshuffled before the next word is taken, so the
//! supply never runs out.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

/// The built-in word list.
pub const CANONICAL_WORDS: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// Shuffled queue of words, front is the next word to guess.
#[derive(Debug, Clone)]
pub struct WordQueue<R> {
    words: Vec<String>,
    queue: VecDeque<String>,
    rng: R,
    refills: u64,
}

impl<R: Rng> WordQueue<R> {
    /// Create a queue over `words`, already filled and shuffled.
    pub fn new(words: Vec<String>, rng: R) -> Self {
        let mut queue = Self {
            words,
            queue: VecDeque::new(),
            rng,
            refills: 0,
        };
        queue.refill();
        queue
    }

    /// Refill with the full list and shuffle.
    pub fn refill(&mut self) {
        let mut fresh = self.words.clone();
        fresh.shuffle(&mut self.rng);
        self.queue = fresh.into();
        self.refills += 1;
        tracing::debug!("Word queue refilled ({} words)", self.queue.len());
    }

    /// Take the next word, refilling first if the queue is empty.
    ///
    /// Returns `None` only when the configured word list itself is empty.
    pub fn next_word(&mut self) -> Option<String> {
        if self.queue.is_empty() {
            self.refill();
        }
        self.queue.pop_front()
    }

    /// Words left before the next refill.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// How many times the queue has been filled, including the initial fill.
    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// The full list the queue refills from.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
