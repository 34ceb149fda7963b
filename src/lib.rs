//! Core engine for warning users that they are speaking too loudly.
//!
//! Raw microphone frames come in from a capture collaborator, get reduced to
//! a normalized loudness, are tiered against a user threshold, and a
//! per-session alerting policy decides when a rate-limited warning fires.
//! Notification delivery and UI belong to the host; the engine only consumes
//! frames and emits warning events.

pub mod alerting;
pub mod capture;
pub mod config;
pub mod level;
pub mod monitor;
pub mod telemetry;
pub mod threshold;

pub use alerting::{AlertPolicyKind, CooldownGate, WarningEvent, WarningHistory};
pub use config::{AppConfig, MonitorConfig};
pub use level::AudioFrame;
pub use monitor::{FrameOutcome, MonitorSession};
pub use threshold::{ThresholdDetector, VolumeLevel, VolumeSample};
