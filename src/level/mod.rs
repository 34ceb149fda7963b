//! Loudness measurement pipeline.
//!
//! Reduces raw audio frames to RMS energy, converts the result to decibels,
//! and maps it onto the normalized [0, 1] scale shared by every front end.
//! The numeric conventions match the desktop reference implementation: an
//! RMS of zero is -inf dB (silence), and [-50, 0] dBFS spans the normalized
//! range so all platforms agree on loudness feel.

mod meter;
mod normalize;
mod processor;
mod reduce;

pub use meter::LiveMeter;
pub use normalize::{
    normalize, normalize_with_range, normalize_with_reference, VolumeSmoother, RMS_REFERENCE_DB,
};
pub use processor::{LoudnessReading, VolumeProcessor};
pub(crate) use processor::append_downmixed_samples;
pub use reduce::{decibels_to_rms, rms, rms_to_decibels, rms_with_stride};

/// One batch of captured samples, borrowed from the capture collaborator for
/// the duration of a single processing call.
#[derive(Debug, Clone, Copy)]
pub struct AudioFrame<'a> {
    /// Interleaved samples normalized to [-1, 1].
    pub samples: &'a [f32],
    pub sample_rate: u32,
    pub channels: u16,
}

impl<'a> AudioFrame<'a> {
    /// Mono frame at the given sample rate.
    pub fn mono(samples: &'a [f32], sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            channels: 1,
        }
    }
}
