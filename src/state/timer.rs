//! Countdown timers.
//!
//! [`Countdown`] is the pure state machine: given how much time has elapsed
//! since start, it yields the ticks that are due. The [`CountdownTimer`]
//! implementations only differ in where elapsed time comes from.
//!
//! # State Diagram
//!
//! ```text
//! ┌──────┐ start ┌─────────┐ tick(0) ┌──────────┐
//! │ Idle │──────▶│ Running │────────▶│ Finished │
//! └──┬───┘       └────┬────┘         └──────────┘
//!    │                │ cancel
//!    │ cancel         ▼
//!    └──────────▶┌───────────┐
//!                │ Cancelled │
//!                └───────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Notification delivered by a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One interval passed, carrying the time still remaining
    Tick(Duration),
    /// Countdown reached zero. Always follows `Tick(Duration::ZERO)`.
    Finish,
}

/// Countdown phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    #[default]
    Idle,
    Running,
    Finished,
    Cancelled,
}

impl CountdownPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    /// Check if the countdown can no longer produce events.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

/// Fixed-interval countdown over virtual elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
    interval: Duration,
    ticks_fired: u64,
    phase: CountdownPhase,
}

impl Countdown {
    pub fn new(total: Duration, interval: Duration) -> Self {
        Self {
            total,
            interval,
            ticks_fired: 0,
            phase: CountdownPhase::Idle,
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start counting. Only valid from `Idle`.
    pub fn start(&mut self) {
        if self.phase == CountdownPhase::Idle {
            self.phase = CountdownPhase::Running;
        }
    }

    /// Stop without finishing. No-op once terminal.
    pub fn cancel(&mut self) {
        if !self.phase.is_terminal() {
            self.phase = CountdownPhase::Cancelled;
        }
    }

    /// Time left as of the last delivered tick.
    pub fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.tick_at(self.ticks_fired))
    }

    /// Elapsed time at which tick `n` (1-based) is due, clamped to the total.
    fn tick_at(&self, n: u64) -> Duration {
        if n == 0 {
            return Duration::ZERO;
        }
        if self.interval.is_zero() {
            return self.total;
        }
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        self.interval.saturating_mul(n).min(self.total)
    }

    /// Collect every event due at `elapsed` since start, in order.
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        while self.phase == CountdownPhase::Running {
            let due = self.tick_at(self.ticks_fired + 1);
            if elapsed < due {
                break;
            }

            self.ticks_fired += 1;
            let remaining = self.total - due;
            events.push(TimerEvent::Tick(remaining));

            if remaining.is_zero() {
                events.push(TimerEvent::Finish);
                self.phase = CountdownPhase::Finished;
            }
        }

        events
    }
}

/// A countdown facility the game can start, poll and cancel.
pub trait CountdownTimer {
    /// Start a countdown of `total`, ticking every `interval`.
    fn start(&mut self, total: Duration, interval: Duration);

    /// Stop the countdown. Nothing is delivered afterwards.
    fn cancel(&mut self);

    /// Events that became due since the last poll.
    fn poll(&mut self) -> Vec<TimerEvent>;

    fn is_running(&self) -> bool;
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    started_at: Duration,
    countdown: Option<Countdown>,
}

/// Timer driven by an explicit virtual clock.
///
/// Clones share the same clock, so a test can keep a handle after giving
/// one to a [`GameState`](super::game::GameState).
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    inner: Rc<RefCell<ManualClock>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the virtual clock forward.
    pub fn advance(&self, by: Duration) {
        self.inner.borrow_mut().now += by;
    }

    /// Virtual time since the countdown started.
    pub fn elapsed(&self) -> Duration {
        let clock = self.inner.borrow();
        clock.now.saturating_sub(clock.started_at)
    }

    pub fn phase(&self) -> CountdownPhase {
        self.inner
            .borrow()
            .countdown
            .as_ref()
            .map(Countdown::phase)
            .unwrap_or_default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase() == CountdownPhase::Cancelled
    }
}

impl CountdownTimer for ManualTimer {
    fn start(&mut self, total: Duration, interval: Duration) {
        let mut clock = self.inner.borrow_mut();
        let mut countdown = Countdown::new(total, interval);
        countdown.start();
        let now = clock.now;
        clock.started_at = now;
        clock.countdown = Some(countdown);
    }

    fn cancel(&mut self) {
        if let Some(countdown) = self.inner.borrow_mut().countdown.as_mut() {
            countdown.cancel();
        }
    }

    fn poll(&mut self) -> Vec<TimerEvent> {
        let mut clock = self.inner.borrow_mut();
        let elapsed = clock.now.saturating_sub(clock.started_at);
        match clock.countdown.as_mut() {
            Some(countdown) => countdown.advance_to(elapsed),
            None => Vec::new(),
        }
    }

    fn is_running(&self) -> bool {
        self.phase() == CountdownPhase::Running
    }
}

/// Timer backed by the monotonic wall clock. Must be polled by the host loop.
#[derive(Debug, Default)]
pub struct SystemTimer {
    started: Option<Instant>,
    countdown: Option<Countdown>,
}

impl SystemTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountdownTimer for SystemTimer {
    fn start(&mut self, total: Duration, interval: Duration) {
        let mut countdown = Countdown::new(total, interval);
        countdown.start();
        self.started = Some(Instant::now());
        self.countdown = Some(countdown);
    }

    fn cancel(&mut self) {
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
    }

    fn poll(&mut self) -> Vec<TimerEvent> {
        match (self.started, self.countdown.as_mut()) {
            (Some(started), Some(countdown)) => countdown.advance_to(started.elapsed()),
            _ => Vec::new(),
        }
    }

    fn is_running(&self) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|c| c.phase() == CountdownPhase::Running)
    }
}
