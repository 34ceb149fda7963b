//! RMS energy reduction and decibel conversion.
//!
//! Pure functions with no side effects. Silence (zero energy) converts to
//! negative infinity rather than NaN so downstream math can clamp it away.

/// Root-mean-square amplitude of a frame.
///
/// An empty frame is treated as silence and yields 0.0.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let energy: f32 = samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32;
    energy.sqrt()
}

/// Approximate RMS that visits every `stride`-th sample.
///
/// Cheaper than [`rms`] on large frames where an estimate is good enough.
/// A stride of zero yields 0.0.
pub fn rms_with_stride(samples: &[f32], stride: usize) -> f32 {
    if samples.is_empty() || stride == 0 {
        return 0.0;
    }
    let mut sum_of_squares = 0.0f32;
    let mut count = 0usize;
    for sample in samples.iter().step_by(stride) {
        sum_of_squares += sample * sample;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    (sum_of_squares / count as f32).sqrt()
}

/// Convert RMS amplitude to decibels; RMS ≤ 0 is silence (-inf), never NaN.
pub fn rms_to_decibels(rms: f32) -> f32 {
    if rms <= 0.0 {
        return f32::NEG_INFINITY;
    }
    20.0 * rms.log10()
}

/// Inverse of [`rms_to_decibels`]; non-finite input maps back to zero energy.
pub fn decibels_to_rms(decibels: f32) -> f32 {
    if !decibels.is_finite() {
        return 0.0;
    }
    10.0f32.powf(decibels / 20.0)
}
