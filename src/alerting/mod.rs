//! Alerting policy, rate limiting, and warning bookkeeping.
//!
//! Consumes the per-frame classifier verdict and decides when loudness
//! becomes a warning. Two interchangeable policies exist: edge-triggered
//! warnings spaced by a cooldown, and a single notification per sustained
//! loud period. Both are gated by the same cooldown throttle, and every
//! emitted warning lands in a bounded history for diagnostics.

mod cooldown;
mod history;
mod policy;
#[cfg(test)]
mod tests;

pub use cooldown::CooldownGate;
pub use history::{WarningEvent, WarningHistory, DEFAULT_HISTORY_CAPACITY};
pub use policy::{
    policy_from_kind, AlertPolicy, AlertPolicyKind, EdgeCooldownPolicy, SustainedDurationPolicy,
};
