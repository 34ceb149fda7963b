//! Per-frame measurement: downmix, reduce, normalize, smooth.

use super::normalize::{normalize, VolumeSmoother};
use super::reduce::{rms, rms_to_decibels};
use super::AudioFrame;
use anyhow::Result;

/// One frame reduced to its loudness numbers, before threshold context is
/// attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoudnessReading {
    pub rms: f32,
    pub decibels: f32,
    pub normalized: f32,
}

/// Turns raw capture frames into loudness readings.
///
/// Owns the optional smoothing accumulator, so each monitoring session can
/// reset its measurement state independently of any other session.
#[derive(Debug, Clone)]
pub struct VolumeProcessor {
    smoother: Option<VolumeSmoother>,
    scratch: Vec<f32>,
}

impl VolumeProcessor {
    pub fn new() -> Self {
        Self {
            smoother: None,
            scratch: Vec::new(),
        }
    }

    /// Processor with exponential smoothing enabled. Fails when the factor
    /// is outside [0, 1].
    pub fn with_smoothing(factor: f32) -> Result<Self> {
        Ok(Self {
            smoother: Some(VolumeSmoother::new(factor)?),
            scratch: Vec::new(),
        })
    }

    /// Enable or disable smoothing at runtime.
    pub fn set_smoothing(&mut self, enabled: bool, factor: Option<f32>) -> Result<()> {
        if !enabled {
            self.smoother = None;
            return Ok(());
        }
        match (&mut self.smoother, factor) {
            (Some(smoother), Some(factor)) => smoother.set_factor(factor)?,
            (Some(_), None) => {}
            (None, Some(factor)) => self.smoother = Some(VolumeSmoother::new(factor)?),
            (None, None) => {
                anyhow::bail!("smoothing factor required when enabling smoothing for the first time")
            }
        }
        Ok(())
    }

    /// Reduce one frame to a loudness reading.
    ///
    /// Multi-channel frames are averaged down to mono first so loudness
    /// reflects all channels equally. Decibels always describe the raw frame;
    /// smoothing only applies to the normalized value.
    pub fn process(&mut self, frame: &AudioFrame<'_>) -> LoudnessReading {
        let raw_rms = if frame.channels > 1 {
            self.scratch.clear();
            append_downmixed_samples(
                &mut self.scratch,
                frame.samples,
                usize::from(frame.channels),
                |sample| sample,
            );
            rms(&self.scratch)
        } else {
            rms(frame.samples)
        };
        let decibels = rms_to_decibels(raw_rms);
        let mut normalized = normalize(raw_rms);
        if let Some(smoother) = self.smoother.as_mut() {
            normalized = smoother.smooth(normalized);
        }
        LoudnessReading {
            rms: raw_rms,
            decibels,
            normalized,
        }
    }

    /// Discard the smoothing accumulator.
    pub fn reset(&mut self) {
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
    }
}

impl Default for VolumeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Downmix multi-channel input to mono while applying the provided converter,
/// averaging each interleaved frame into a single sample.
pub(crate) fn append_downmixed_samples<T, F>(
    buf: &mut Vec<f32>,
    data: &[T],
    channels: usize,
    mut convert: F,
) where
    T: Copy,
    F: FnMut(T) -> f32,
{
    if channels <= 1 {
        buf.extend(data.iter().copied().map(&mut convert));
        return;
    }

    let mut acc = 0.0f32;
    let mut count = 0usize;
    for sample in data.iter().copied() {
        acc += convert(sample);
        count += 1;
        if count == channels {
            buf.push(acc / channels as f32);
            acc = 0.0;
            count = 0;
        }
    }
    if count > 0 {
        buf.push(acc / count as f32);
    }
}
