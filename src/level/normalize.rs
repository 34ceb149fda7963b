//! Maps RMS energy onto the normalized [0, 1] loudness scale.

use super::reduce::rms_to_decibels;
use anyhow::{bail, Result};

/// Reference level for normalization. Shifts [-50, 0] dBFS onto [0, 1],
/// matching the native desktop implementation.
pub const RMS_REFERENCE_DB: f32 = 50.0;

/// Normalize an RMS reading against the default reference level.
pub fn normalize(rms: f32) -> f32 {
    normalize_with_reference(rms, RMS_REFERENCE_DB)
}

/// Normalize an RMS reading against an explicit reference level.
///
/// Silence (non-finite decibels) maps to 0.0; everything else is clamped
/// into [0, 1].
pub fn normalize_with_reference(rms: f32, reference_db: f32) -> f32 {
    let decibels = rms_to_decibels(rms);
    if !decibels.is_finite() {
        return 0.0;
    }
    ((decibels + reference_db) / reference_db).clamp(0.0, 1.0)
}

/// Linear interpolation between an explicit dB range, for callers that need
/// an asymmetric window instead of the fixed reference.
pub fn normalize_with_range(rms: f32, min_db: f32, max_db: f32) -> f32 {
    let decibels = rms_to_decibels(rms);
    if !decibels.is_finite() {
        return 0.0;
    }
    ((decibels - min_db) / (max_db - min_db)).clamp(0.0, 1.0)
}

/// Exponential moving average over successive volume readings.
///
/// The accumulator lives on the instance so a restarted session can wipe it
/// with [`VolumeSmoother::reset`] instead of carrying stale state across
/// runs. A higher factor keeps more of the previous reading.
#[derive(Debug, Clone)]
pub struct VolumeSmoother {
    factor: f32,
    previous: f32,
}

impl VolumeSmoother {
    pub fn new(factor: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&factor) {
            bail!("smoothing factor must be between 0.0 and 1.0, got {factor}");
        }
        Ok(Self {
            factor,
            previous: 0.0,
        })
    }

    /// Replace the factor; an out-of-range value fails and keeps the
    /// previous one.
    pub fn set_factor(&mut self, factor: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&factor) {
            bail!("smoothing factor must be between 0.0 and 1.0, got {factor}");
        }
        self.factor = factor;
        Ok(())
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Blend the new reading against the running accumulator.
    pub fn smooth(&mut self, current: f32) -> f32 {
        let smoothed = self.factor * self.previous + (1.0 - self.factor) * current;
        self.previous = smoothed;
        smoothed
    }

    /// Zero the accumulator so restarted sessions behave deterministically.
    pub fn reset(&mut self) {
        self.previous = 0.0;
    }
}
