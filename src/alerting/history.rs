//! Bounded record of emitted warnings.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default maximum number of retained warnings.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// A fired alert, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub timestamp_ms: u64,
    /// Normalized volume at fire time.
    pub volume: f32,
    /// Threshold in effect at fire time.
    pub threshold: f32,
}

/// Append-only log of warnings with first-in-first-out eviction.
///
/// Insertion order is preserved. Once the capacity is reached the oldest
/// entry is evicted; the newest entry is never dropped.
#[derive(Debug, Clone)]
pub struct WarningHistory {
    events: VecDeque<WarningEvent>,
    capacity: usize,
}

impl WarningHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, event: WarningEvent) {
        self.events.push_back(event);
        while self.events.len() > self.capacity {
            self.events.pop_front();
        }
    }

    /// Events with `timestamp_ms >= now_ms - window_ms`, oldest first.
    pub fn recent(&self, window_ms: u64, now_ms: u64) -> Vec<WarningEvent> {
        let cutoff = now_ms.saturating_sub(window_ms);
        self.events
            .iter()
            .filter(|event| event.timestamp_ms >= cutoff)
            .copied()
            .collect()
    }

    /// Defensive copy of the full log, oldest first.
    pub fn all(&self) -> Vec<WarningEvent> {
        self.events.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for WarningHistory {
    fn default() -> Self {
        Self::new()
    }
}
