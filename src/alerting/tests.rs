use super::{
    policy_from_kind, AlertPolicy, AlertPolicyKind, CooldownGate, EdgeCooldownPolicy,
    SustainedDurationPolicy, WarningEvent, WarningHistory,
};

fn event(timestamp_ms: u64) -> WarningEvent {
    WarningEvent {
        timestamp_ms,
        volume: 0.9,
        threshold: 0.7,
    }
}

#[test]
fn gate_opens_before_any_fire() {
    let gate = CooldownGate::new(3_000);
    assert!(gate.can_fire(0));
    assert!(gate.can_fire(u64::MAX));
}

#[test]
fn gate_closes_immediately_after_fire() {
    let mut gate = CooldownGate::new(3_000);
    gate.record_fired(1_000);
    assert!(!gate.can_fire(1_000));
    assert!(!gate.can_fire(3_999));
}

#[test]
fn gate_reopens_exactly_at_cooldown() {
    let mut gate = CooldownGate::new(3_000);
    gate.record_fired(1_000);
    assert!(gate.can_fire(4_000));
}

#[test]
fn zero_cooldown_never_blocks() {
    let mut gate = CooldownGate::new(0);
    gate.record_fired(500);
    assert!(gate.can_fire(500));
}

#[test]
fn time_until_next_fire_counts_down() {
    let mut gate = CooldownGate::new(3_000);
    assert_eq!(gate.time_until_next_fire(0), 0);
    gate.record_fired(1_000);
    assert_eq!(gate.time_until_next_fire(1_000), 3_000);
    assert_eq!(gate.time_until_next_fire(2_500), 1_500);
    assert_eq!(gate.time_until_next_fire(4_000), 0);
    assert_eq!(gate.time_until_next_fire(9_000), 0);
}

#[test]
fn gate_reset_forgets_last_fire() {
    let mut gate = CooldownGate::new(3_000);
    gate.record_fired(1_000);
    assert!(!gate.can_fire(1_500));
    gate.reset();
    assert!(gate.can_fire(1_500));
    assert_eq!(gate.last_fired_ms(), None);
}

#[test]
fn set_cooldown_applies_to_next_check() {
    let mut gate = CooldownGate::new(3_000);
    gate.record_fired(0);
    assert!(!gate.can_fire(1_000));
    gate.set_cooldown(500);
    assert!(gate.can_fire(1_000));
    assert_eq!(gate.cooldown_ms(), 500);
}

#[test]
fn edge_policy_fires_on_rising_edge() {
    let mut policy = EdgeCooldownPolicy::new();
    let mut gate = CooldownGate::new(3_000);
    assert!(policy.on_sample(true, 0, &mut gate));
}

#[test]
fn edge_policy_respects_cooldown_while_loud() {
    let mut policy = EdgeCooldownPolicy::new();
    let mut gate = CooldownGate::new(3_000);

    assert!(policy.on_sample(true, 0, &mut gate));
    for now_ms in (100..3_000).step_by(100) {
        assert!(
            !policy.on_sample(true, now_ms, &mut gate),
            "fired inside cooldown at {now_ms}"
        );
    }
    assert!(policy.on_sample(true, 3_000, &mut gate));
}

#[test]
fn edge_policy_falling_edge_fires_nothing() {
    let mut policy = EdgeCooldownPolicy::new();
    let mut gate = CooldownGate::new(0);
    assert!(policy.on_sample(true, 0, &mut gate));
    assert!(!policy.on_sample(false, 100, &mut gate));
}

#[test]
fn edge_policy_new_edge_is_still_gated() {
    let mut policy = EdgeCooldownPolicy::new();
    let mut gate = CooldownGate::new(3_000);

    assert!(policy.on_sample(true, 0, &mut gate));
    assert!(!policy.on_sample(false, 500, &mut gate));
    // Crossing again before the cooldown elapsed must not fire.
    assert!(!policy.on_sample(true, 1_000, &mut gate));
    assert!(policy.on_sample(true, 3_000, &mut gate));
}

#[test]
fn edge_policy_reset_returns_to_below_state() {
    let mut policy = EdgeCooldownPolicy::new();
    let mut gate = CooldownGate::new(0);
    assert!(policy.on_sample(true, 0, &mut gate));
    policy.reset();
    gate.reset();
    assert!(policy.on_sample(true, 1, &mut gate));
}

#[test]
fn sustained_policy_waits_for_full_duration() {
    let mut policy = SustainedDurationPolicy::new(500);
    let mut gate = CooldownGate::new(0);

    for now_ms in (0..500).step_by(50) {
        assert!(
            !policy.on_sample(true, now_ms, &mut gate),
            "fired early at {now_ms}"
        );
    }
    assert!(!policy.on_sample(true, 499, &mut gate));
    assert!(policy.on_sample(true, 500, &mut gate));
}

#[test]
fn sustained_policy_notifies_once_per_period() {
    let mut policy = SustainedDurationPolicy::new(500);
    let mut gate = CooldownGate::new(0);

    policy.on_sample(true, 0, &mut gate);
    assert!(policy.on_sample(true, 500, &mut gate));
    // Still loud: the same period never notifies twice.
    assert!(!policy.on_sample(true, 600, &mut gate));
    assert!(!policy.on_sample(true, 10_000, &mut gate));
}

#[test]
fn sustained_policy_fires_again_after_new_period() {
    let mut policy = SustainedDurationPolicy::new(500);
    let mut gate = CooldownGate::new(0);
    let mut fired = 0usize;

    for now_ms in (0..=700).step_by(100) {
        if policy.on_sample(true, now_ms, &mut gate) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);

    // Quiet frame ends the period, then a full new accumulation follows.
    assert!(!policy.on_sample(false, 800, &mut gate));
    for now_ms in (900..1_400).step_by(100) {
        if policy.on_sample(true, now_ms, &mut gate) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1, "fired before the new period completed");
    assert!(policy.on_sample(true, 1_400, &mut gate));
}

#[test]
fn sustained_policy_interruption_restarts_accumulation() {
    let mut policy = SustainedDurationPolicy::new(1_000);
    let mut gate = CooldownGate::new(0);
    let mut fired = 0usize;

    // Half the required duration, then one quiet frame.
    for now_ms in (0..500).step_by(100) {
        if policy.on_sample(true, now_ms, &mut gate) {
            fired += 1;
        }
    }
    policy.on_sample(false, 500, &mut gate);

    // The earlier half earns no credit: timing restarts at 600.
    for now_ms in (600..1_600).step_by(100) {
        if policy.on_sample(true, now_ms, &mut gate) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
    assert!(policy.on_sample(true, 1_600, &mut gate));
    assert_eq!(policy.period_start_ms(), Some(600));
}

#[test]
fn sustained_policy_zero_duration_fires_on_first_frame() {
    let mut policy = SustainedDurationPolicy::new(0);
    let mut gate = CooldownGate::new(0);
    assert!(policy.on_sample(true, 42, &mut gate));
    assert!(!policy.on_sample(true, 43, &mut gate));
}

#[test]
fn sustained_policy_is_capped_by_the_gate() {
    let mut policy = SustainedDurationPolicy::new(100);
    let mut gate = CooldownGate::new(10_000);

    policy.on_sample(true, 0, &mut gate);
    assert!(policy.on_sample(true, 100, &mut gate));

    // Rapid quiet/loud cycling completes another period, but the gate is
    // still closed.
    policy.on_sample(false, 200, &mut gate);
    policy.on_sample(true, 300, &mut gate);
    assert!(!policy.on_sample(true, 400, &mut gate));

    // Once the cooldown elapses the completed period may notify.
    assert!(policy.on_sample(true, 10_100, &mut gate));
}

#[test]
fn sustained_policy_reset_discards_progress() {
    let mut policy = SustainedDurationPolicy::new(500);
    let mut gate = CooldownGate::new(0);
    policy.on_sample(true, 0, &mut gate);
    assert_eq!(policy.period_start_ms(), Some(0));
    policy.reset();
    assert_eq!(policy.period_start_ms(), None);
    assert!(!policy.on_sample(true, 500, &mut gate));
    assert!(policy.on_sample(true, 1_000, &mut gate));
}

#[test]
fn factory_builds_the_configured_policy() {
    let edge = policy_from_kind(AlertPolicyKind::EdgeCooldown, 0);
    assert_eq!(edge.name(), "edge_cooldown");
    let sustained = policy_from_kind(AlertPolicyKind::SustainedDuration, 60_000);
    assert_eq!(sustained.name(), "sustained_duration");
}

#[test]
fn history_preserves_insertion_order() {
    let mut history = WarningHistory::new();
    for timestamp in [10, 20, 30] {
        history.record(event(timestamp));
    }
    let all = history.all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].timestamp_ms, 10);
    assert_eq!(all[2].timestamp_ms, 30);
}

#[test]
fn history_evicts_oldest_beyond_capacity() {
    let mut history = WarningHistory::new();
    for timestamp in 0..101 {
        history.record(event(timestamp));
    }
    let all = history.all();
    assert_eq!(all.len(), 100);
    assert!(all.iter().all(|e| e.timestamp_ms != 0), "first event kept");
    assert_eq!(all.last().map(|e| e.timestamp_ms), Some(100));
}

#[test]
fn history_recent_filters_by_window() {
    let mut history = WarningHistory::new();
    for timestamp in [100, 2_000, 5_000, 9_000] {
        history.record(event(timestamp));
    }
    let recent = history.recent(5_000, 10_000);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].timestamp_ms, 5_000);
    assert_eq!(recent[1].timestamp_ms, 9_000);
}

#[test]
fn history_recent_window_larger_than_now_keeps_everything() {
    let mut history = WarningHistory::new();
    history.record(event(5));
    let recent = history.recent(10_000, 100);
    assert_eq!(recent.len(), 1);
}

#[test]
fn history_clear_empties_the_log() {
    let mut history = WarningHistory::new();
    history.record(event(1));
    assert!(!history.is_empty());
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
}

#[test]
fn history_custom_capacity_evicts_sooner() {
    let mut history = WarningHistory::with_capacity(2);
    history.record(event(1));
    history.record(event(2));
    history.record(event(3));
    let all = history.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].timestamp_ms, 2);
}

#[test]
fn all_returns_a_defensive_copy() {
    let mut history = WarningHistory::new();
    history.record(event(1));
    let mut copy = history.all();
    copy.clear();
    assert_eq!(history.len(), 1);
}
