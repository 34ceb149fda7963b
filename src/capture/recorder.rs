//! System microphone capture via CPAL.
//!
//! Handles device enumeration and format conversion. Whatever sample format
//! the device offers is converted to f32 up front so the rest of the
//! pipeline stays format-agnostic.

use super::dispatch::FrameDispatcher;
use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, StreamConfig};
use crossbeam_channel::{bounded, Receiver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Audio input device wrapper.
pub struct Recorder {
    device: cpal::Device,
}

impl Recorder {
    /// List microphone names so the CLI can expose a human-friendly
    /// selector.
    pub fn list_devices() -> Result<Vec<String>> {
        let host = cpal::default_host();
        let devices = host.input_devices().context("no input devices available")?;
        let mut names = Vec::new();
        for device in devices {
            if let Ok(name) = device.name() {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Create a recorder, optionally forcing a specific device so users can
    /// pick the right microphone when a laptop exposes multiple inputs.
    pub fn new(preferred_device: Option<&str>) -> Result<Self> {
        let host = cpal::default_host();
        let device = match preferred_device {
            Some(name) => {
                let mut devices = host.input_devices().context("no input devices available")?;
                devices
                    .find(|d| d.name().map(|n| n == name).unwrap_or(false))
                    .ok_or_else(|| anyhow!("input device '{name}' not found"))?
            }
            None => host
                .default_input_device()
                .context("no default input device available")?,
        };
        Ok(Self { device })
    }

    /// Get the name of the active recording device.
    pub fn device_name(&self) -> String {
        self.device
            .name()
            .unwrap_or_else(|_| "Unknown Device".to_string())
    }

    /// Start streaming mono f32 frames of roughly `frame_ms` at the device's
    /// native rate.
    ///
    /// Capture continues for as long as the returned [`FrameStream`] is kept
    /// alive; dropping it tears the stream down.
    pub fn stream_frames(&self, frame_ms: u64, channel_capacity: usize) -> Result<FrameStream> {
        let default_config = self.device.default_input_config()?;
        let format = default_config.sample_format();
        let device_config: StreamConfig = default_config.into();
        let sample_rate = device_config.sample_rate.0;
        let channels = usize::from(device_config.channels.max(1));
        let frame_samples = ((u64::from(sample_rate) * frame_ms.max(1)) / 1000).max(1) as usize;

        let (sender, receiver) = bounded::<Vec<f32>>(channel_capacity.max(1));
        let dropped = Arc::new(AtomicUsize::new(0));
        let dispatcher = Arc::new(Mutex::new(FrameDispatcher::new(
            frame_samples,
            sender,
            dropped.clone(),
        )));

        tracing::debug!(?format, sample_rate, channels, frame_samples, "capture stream opening");
        let err_fn = |err| tracing::warn!("audio_stream_error: {err}");

        let stream = match format {
            SampleFormat::F32 => {
                let dispatcher = dispatcher.clone();
                self.device.build_input_stream(
                    &device_config,
                    move |data: &[f32], _| {
                        if let Ok(mut pump) = dispatcher.lock() {
                            pump.push(data, channels, |sample| sample);
                        }
                    },
                    err_fn,
                    None,
                )?
            }
            SampleFormat::I16 => {
                let dispatcher = dispatcher.clone();
                self.device.build_input_stream(
                    &device_config,
                    move |data: &[i16], _| {
                        if let Ok(mut pump) = dispatcher.lock() {
                            pump.push(data, channels, |sample| sample as f32 / 32_768.0);
                        }
                    },
                    err_fn,
                    None,
                )?
            }
            SampleFormat::U16 => {
                let dispatcher = dispatcher.clone();
                self.device.build_input_stream(
                    &device_config,
                    move |data: &[u16], _| {
                        if let Ok(mut pump) = dispatcher.lock() {
                            pump.push(data, channels, |sample| {
                                (sample as f32 - 32_768.0) / 32_768.0
                            });
                        }
                    },
                    err_fn,
                    None,
                )?
            }
            other => return Err(anyhow!("unsupported sample format: {other:?}")),
        };

        stream.play()?;

        Ok(FrameStream {
            stream,
            receiver,
            sample_rate,
            dropped,
        })
    }
}

/// Live capture handle: mono frames arrive on the receiver while the stream
/// is alive.
pub struct FrameStream {
    stream: cpal::Stream,
    receiver: Receiver<Vec<f32>>,
    sample_rate: u32,
    dropped: Arc<AtomicUsize>,
}

impl FrameStream {
    pub fn receiver(&self) -> &Receiver<Vec<f32>> {
        &self.receiver
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Frames discarded because the monitor loop fell behind.
    pub fn frames_dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Stop capture explicitly instead of waiting for drop.
    pub fn stop(self) {
        if let Err(err) = self.stream.pause() {
            tracing::debug!("failed to pause audio stream: {err}");
        }
    }
}
