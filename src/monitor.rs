//! Monitoring session: composition root for measurement and alerting.
//!
//! A session owns every piece of per-session mutable state (smoothing
//! accumulator, alerting policy progress, cooldown bookkeeping, warning
//! history) and is driven frame by frame from a single callback context.
//! There are no globals: hosts construct one session per microphone stream,
//! and any number of sessions coexist without interference.
//!
//! Time never comes from inside the session. The caller reads its clock once
//! per frame and passes the reading in, so behavior is deterministic under a
//! simulated clock.

use crate::alerting::{policy_from_kind, AlertPolicy, CooldownGate, WarningEvent, WarningHistory};
use crate::config::MonitorConfig;
use crate::level::{AudioFrame, VolumeProcessor};
use crate::threshold::{ThresholdDetector, VolumeSample};
use anyhow::Result;

/// Result of feeding one frame through the pipeline: the loudness reading
/// for display, plus at most one warning.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutcome {
    pub sample: VolumeSample,
    pub warning: Option<WarningEvent>,
}

pub struct MonitorSession {
    processor: VolumeProcessor,
    detector: ThresholdDetector,
    policy: Box<dyn AlertPolicy>,
    gate: CooldownGate,
    history: WarningHistory,
    current_volume: f32,
    warning_count: u64,
    active: bool,
}

impl MonitorSession {
    /// Build a session from monitoring configuration. Fails when the
    /// threshold or smoothing factor is out of range.
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        let processor = if config.smoothing {
            VolumeProcessor::with_smoothing(config.smoothing_factor)?
        } else {
            VolumeProcessor::new()
        };
        Ok(Self {
            processor,
            detector: ThresholdDetector::new(config.threshold)?,
            policy: policy_from_kind(config.alert_policy, config.duration_threshold_ms),
            gate: CooldownGate::new(config.cooldown_ms),
            history: WarningHistory::new(),
            current_volume: 0.0,
            warning_count: 0,
            active: false,
        })
    }

    /// Begin (or restart) monitoring. All transient state from any prior run
    /// is discarded before new frames are accepted.
    pub fn start(&mut self) {
        self.reset_transient();
        self.active = true;
        tracing::debug!(
            policy = self.policy.name(),
            threshold = self.detector.threshold(),
            "monitoring started"
        );
    }

    /// Stop immediately and synchronously. No further warnings are emitted
    /// until [`MonitorSession::start`] is called again; the threshold and
    /// warning history survive.
    pub fn stop(&mut self) {
        self.active = false;
        self.reset_transient();
        tracing::debug!("monitoring stopped");
    }

    fn reset_transient(&mut self) {
        self.policy.reset();
        self.gate.reset();
        self.processor.reset();
        self.current_volume = 0.0;
    }

    /// Feed one captured frame through the pipeline.
    ///
    /// `now_ms` is the caller's clock reading for this frame; the session
    /// performs no timekeeping of its own. A stopped session reports silence
    /// and never warns.
    pub fn process_frame(&mut self, frame: &AudioFrame<'_>, now_ms: u64) -> FrameOutcome {
        if !self.active {
            return FrameOutcome {
                sample: VolumeSample::silence(),
                warning: None,
            };
        }

        let reading = self.processor.process(frame);
        let sample = self.detector.sample(reading.normalized, reading.decibels);
        self.current_volume = sample.normalized;

        let fired = self
            .policy
            .on_sample(sample.exceeds_threshold, now_ms, &mut self.gate);
        let warning = if fired {
            let event = WarningEvent {
                timestamp_ms: now_ms,
                volume: sample.normalized,
                threshold: self.detector.threshold(),
            };
            self.history.record(event);
            self.warning_count += 1;
            tracing::info!(
                volume = event.volume,
                threshold = event.threshold,
                "loudness warning fired"
            );
            Some(event)
        } else {
            None
        };

        FrameOutcome { sample, warning }
    }

    /// Replace the threshold mid-session; an out-of-range value fails and
    /// keeps the previous one.
    pub fn set_threshold(&mut self, value: f32) -> Result<()> {
        self.detector.set_threshold(value)
    }

    pub fn threshold(&self) -> f32 {
        self.detector.threshold()
    }

    pub fn set_cooldown(&mut self, cooldown_ms: u64) {
        self.gate.set_cooldown(cooldown_ms);
    }

    /// Most recent normalized volume; zero while stopped.
    pub fn current_volume(&self) -> f32 {
        self.current_volume
    }

    pub fn warning_count(&self) -> u64 {
        self.warning_count
    }

    pub fn reset_warning_count(&mut self) {
        self.warning_count = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn history(&self) -> &WarningHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
