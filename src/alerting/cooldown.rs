//! Minimum-gap throttling between emitted warnings.

/// Enforces a minimum time gap between warning emissions, independent of
/// which alerting policy produced them.
///
/// All time values are caller-supplied millisecond readings; the gate never
/// consults a clock of its own.
#[derive(Debug, Clone, Default)]
pub struct CooldownGate {
    cooldown_ms: u64,
    last_fire_ms: Option<u64>,
}

impl CooldownGate {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_fire_ms: None,
        }
    }

    /// True when no fire has been recorded yet, or the configured gap has
    /// fully elapsed.
    pub fn can_fire(&self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.cooldown_ms,
        }
    }

    pub fn record_fired(&mut self, now_ms: u64) {
        self.last_fire_ms = Some(now_ms);
    }

    pub fn last_fired_ms(&self) -> Option<u64> {
        self.last_fire_ms
    }

    /// Milliseconds until the gate opens again; zero when it is already
    /// open.
    pub fn time_until_next_fire(&self, now_ms: u64) -> u64 {
        match self.last_fire_ms {
            None => 0,
            Some(last) => self
                .cooldown_ms
                .saturating_sub(now_ms.saturating_sub(last)),
        }
    }

    pub fn set_cooldown(&mut self, cooldown_ms: u64) {
        self.cooldown_ms = cooldown_ms;
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Forget the last fire so the next candidate emission passes
    /// immediately.
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}
