//! Microphone capture adapter feeding the monitoring core.
//!
//! The engine itself never touches the sound card; this module implements
//! the frame-source side of the ports-and-adapters split. Audio is captured
//! via CPAL on a callback thread, converted to f32, downmixed to mono, and
//! handed to the monitor loop as fixed-size frames over a bounded channel.

mod dispatch;
mod recorder;

pub use recorder::{FrameStream, Recorder};
