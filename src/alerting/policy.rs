//! Alerting policies deciding when loudness becomes a warning.
//!
//! Two policies with genuinely different behavior live behind one trait:
//! edge-plus-cooldown warns repeatedly while the user stays loud, spaced by
//! the cooldown gate; sustained-duration warns once per uninterrupted loud
//! period, after the loudness has lasted long enough. A session picks one at
//! construction time.

use super::cooldown::CooldownGate;
use clap::ValueEnum;

/// Which alerting policy governs a monitoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlertPolicyKind {
    /// Warn on every over-threshold frame, rate limited by the cooldown
    /// gate.
    EdgeCooldown,
    /// Warn once per uninterrupted over-threshold period lasting at least
    /// the configured duration.
    SustainedDuration,
}

/// Decides, frame by frame, whether a warning should fire.
///
/// Implementations keep their own progress state; `on_sample` must be called
/// exactly once per frame with the classifier verdict and the caller's clock
/// reading for that frame.
pub trait AlertPolicy {
    /// Returns true when a warning should be emitted for this frame. A
    /// policy that decides to fire must record the fire on `gate` itself.
    fn on_sample(&mut self, exceeds: bool, now_ms: u64, gate: &mut CooldownGate) -> bool;

    /// Return to the initial state, discarding any accumulated progress.
    fn reset(&mut self);

    fn name(&self) -> &'static str {
        "unknown_policy"
    }
}

/// Fires on the rising edge and keeps attempting while loud; the cooldown
/// gate spaces the actual emissions.
#[derive(Debug, Clone, Default)]
pub struct EdgeCooldownPolicy {
    above_threshold: bool,
}

impl EdgeCooldownPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertPolicy for EdgeCooldownPolicy {
    fn on_sample(&mut self, exceeds: bool, now_ms: u64, gate: &mut CooldownGate) -> bool {
        if !exceeds {
            // The falling edge carries no warning.
            self.above_threshold = false;
            return false;
        }
        if !self.above_threshold {
            tracing::debug!(now_ms, "loudness crossed threshold");
        }
        self.above_threshold = true;
        if gate.can_fire(now_ms) {
            gate.record_fired(now_ms);
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.above_threshold = false;
    }

    fn name(&self) -> &'static str {
        "edge_cooldown"
    }
}

/// Accumulation progress for [`SustainedDurationPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SustainState {
    #[default]
    Idle,
    Accumulating {
        start_ms: u64,
    },
    Notified {
        start_ms: u64,
    },
}

/// Fires once per continuous over-threshold period, after the loudness has
/// been sustained for the configured duration.
///
/// The duration is purely external configuration; the crate ships no default
/// for it.
#[derive(Debug, Clone)]
pub struct SustainedDurationPolicy {
    duration_ms: u64,
    state: SustainState,
}

impl SustainedDurationPolicy {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            state: SustainState::Idle,
        }
    }

    /// Start of the current over-threshold period, if one is in progress.
    pub fn period_start_ms(&self) -> Option<u64> {
        match self.state {
            SustainState::Idle => None,
            SustainState::Accumulating { start_ms } | SustainState::Notified { start_ms } => {
                Some(start_ms)
            }
        }
    }
}

impl AlertPolicy for SustainedDurationPolicy {
    fn on_sample(&mut self, exceeds: bool, now_ms: u64, gate: &mut CooldownGate) -> bool {
        if !exceeds {
            // Any dip below threshold restarts accumulation from scratch,
            // even after a notification already went out for this period.
            self.state = SustainState::Idle;
            return false;
        }
        if let SustainState::Idle = self.state {
            self.state = SustainState::Accumulating { start_ms: now_ms };
        }
        match self.state {
            SustainState::Accumulating { start_ms }
                if now_ms.saturating_sub(start_ms) >= self.duration_ms =>
            {
                // The gate is still consulted so rapid quiet/loud cycling
                // cannot retrigger faster than the cooldown allows.
                if gate.can_fire(now_ms) {
                    gate.record_fired(now_ms);
                    self.state = SustainState::Notified { start_ms };
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.state = SustainState::Idle;
    }

    fn name(&self) -> &'static str {
        "sustained_duration"
    }
}

/// Build the policy a session was configured with.
pub fn policy_from_kind(kind: AlertPolicyKind, duration_threshold_ms: u64) -> Box<dyn AlertPolicy> {
    match kind {
        AlertPolicyKind::EdgeCooldown => Box::new(EdgeCooldownPolicy::new()),
        AlertPolicyKind::SustainedDuration => {
            Box::new(SustainedDurationPolicy::new(duration_threshold_ms))
        }
    }
}
