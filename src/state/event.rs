//! One-shot events.
//!
//! A value is emitted once and stays pending until its consumer acknowledges
//! it. Every emission bumps a counter, so re-emitting an equal value is still
//! visible to a consumer that compares counters.

/// An event cell with explicit acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot<T> {
    value: Option<T>,
    emissions: u64,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self {
            value: None,
            emissions: 0,
        }
    }
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a value, replacing any unacknowledged one.
    pub fn emit(&mut self, value: T) {
        self.value = Some(value);
        self.emissions += 1;
    }

    /// The pending value, if any.
    pub fn pending(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.value.is_some()
    }

    /// Clear the pending value, returning it.
    pub fn acknowledge(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Total number of emissions so far.
    pub fn emissions(&self) -> u64 {
        self.emissions
    }
}
