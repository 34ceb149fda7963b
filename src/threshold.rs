//! Threshold classification of normalized loudness.
//!
//! Stateless apart from the configured threshold itself: each reading is
//! tiered low/medium/high and checked against the user's limit. The medium
//! tier starts at 80% of the threshold so the UI can warn before the alert
//! actually fires.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VOLUME_THRESHOLD: f32 = 0.7;
pub const MIN_VOLUME_THRESHOLD: f32 = 0.3;
pub const MAX_VOLUME_THRESHOLD: f32 = 1.0;

/// Fraction of the threshold where the medium tier begins.
const MEDIUM_TIER_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeLevel {
    Low,
    Medium,
    High,
}

/// One normalized loudness reading with threshold context attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeSample {
    pub normalized: f32,
    pub decibels: f32,
    pub level: VolumeLevel,
    pub exceeds_threshold: bool,
}

impl VolumeSample {
    /// Zero-loudness reading, used for stopped sessions and empty frames.
    pub fn silence() -> Self {
        Self {
            normalized: 0.0,
            decibels: f32::NEG_INFINITY,
            level: VolumeLevel::Low,
            exceeds_threshold: false,
        }
    }
}

/// Validate a candidate threshold without constructing a detector, so user
/// input can be checked before it reaches a live session.
pub fn is_valid_threshold(value: f32) -> bool {
    (MIN_VOLUME_THRESHOLD..=MAX_VOLUME_THRESHOLD).contains(&value)
}

/// Compares normalized loudness against the user threshold and assigns a
/// tier.
#[derive(Debug, Clone)]
pub struct ThresholdDetector {
    threshold: f32,
}

impl ThresholdDetector {
    pub fn new(threshold: f32) -> Result<Self> {
        let mut detector = Self {
            threshold: DEFAULT_VOLUME_THRESHOLD,
        };
        detector.set_threshold(threshold)?;
        Ok(detector)
    }

    /// Replace the threshold; an out-of-range value fails and keeps the
    /// previous one.
    pub fn set_threshold(&mut self, value: f32) -> Result<()> {
        if !is_valid_threshold(value) {
            bail!(
                "threshold must be between {MIN_VOLUME_THRESHOLD} and {MAX_VOLUME_THRESHOLD}, got {value}"
            );
        }
        self.threshold = value;
        Ok(())
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Strict comparison: a reading exactly at the threshold does not exceed
    /// it.
    pub fn exceeds(&self, normalized: f32) -> bool {
        normalized > self.threshold
    }

    /// Tier a reading. Boundaries are half-open: exactly 0.8·threshold is
    /// still low, exactly the threshold is still medium.
    pub fn classify(&self, normalized: f32) -> VolumeLevel {
        if normalized > self.threshold {
            VolumeLevel::High
        } else if normalized > self.threshold * MEDIUM_TIER_RATIO {
            VolumeLevel::Medium
        } else {
            VolumeLevel::Low
        }
    }

    /// Attach threshold context to a loudness reading.
    pub fn sample(&self, normalized: f32, decibels: f32) -> VolumeSample {
        VolumeSample {
            normalized,
            decibels,
            level: self.classify(normalized),
            exceeds_threshold: self.exceeds(normalized),
        }
    }
}

impl Default for ThresholdDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VOLUME_THRESHOLD,
        }
    }
}
