//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use crate::alerting::AlertPolicyKind;
use crate::threshold::DEFAULT_VOLUME_THRESHOLD;
use clap::Parser;

pub use defaults::{
    DEFAULT_CHANNEL_CAPACITY, DEFAULT_COOLDOWN_MS, DEFAULT_FRAME_MS, DEFAULT_HISTORY_WINDOW_MS,
    DEFAULT_SAMPLE_RATE, DEFAULT_SMOOTHING_FACTOR,
};

/// CLI options for the loudwatch monitor. Validated values keep the capture
/// pipeline within safe bounds.
#[derive(Debug, Parser, Clone)]
#[command(
    about = "Loudwatch: warns you when you are talking too loud",
    author,
    version
)]
pub struct AppConfig {
    /// Normalized loudness above which audio counts as too loud (0.3 - 1.0)
    #[arg(long, default_value_t = DEFAULT_VOLUME_THRESHOLD)]
    pub threshold: f32,

    /// Minimum gap between warnings (milliseconds)
    #[arg(long = "cooldown-ms", default_value_t = DEFAULT_COOLDOWN_MS)]
    pub cooldown_ms: u64,

    /// Alerting policy governing when warnings fire
    #[arg(long = "alert-policy", value_enum, default_value_t = AlertPolicyKind::EdgeCooldown)]
    pub alert_policy: AlertPolicyKind,

    /// Continuous over-threshold time required before the sustained policy
    /// warns (milliseconds; required with --alert-policy sustained-duration)
    #[arg(long = "duration-threshold-ms")]
    pub duration_threshold_ms: Option<u64>,

    /// Smooth the normalized volume with an exponential moving average
    #[arg(long, default_value_t = false)]
    pub smoothing: bool,

    /// Smoothing factor (0.0 - 1.0; higher keeps more of the previous value)
    #[arg(long = "smoothing-factor", allow_negative_numbers = true, default_value_t = DEFAULT_SMOOTHING_FACTOR)]
    pub smoothing_factor: f32,

    /// Preferred audio input device name
    #[arg(long)]
    pub input_device: Option<String>,

    /// Print detected audio input devices and exit
    #[arg(long = "list-input-devices", default_value_t = false)]
    pub list_input_devices: bool,

    /// Capture frame size (milliseconds)
    #[arg(long = "frame-ms", default_value_t = DEFAULT_FRAME_MS)]
    pub frame_ms: u64,

    /// Capture sample rate (Hz)
    #[arg(long = "sample-rate", default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Frame channel capacity between the capture thread and the monitor loop
    #[arg(long = "channel-capacity", default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: usize,

    /// Window used when summarizing recent warnings on exit (milliseconds)
    #[arg(long = "history-window-ms", default_value_t = DEFAULT_HISTORY_WINDOW_MS)]
    pub history_window_ms: u64,

    /// Stop after this long; 0 runs until the capture stream ends
    #[arg(long = "run-for-ms", default_value_t = 0)]
    pub run_for_ms: u64,

    /// Emit warnings as JSON lines instead of log text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Ring the terminal bell when a warning fires
    #[arg(long = "sounds", default_value_t = false)]
    pub sounds: bool,

    /// Enable trace logging to a file
    #[arg(long = "logs", env = "LOUDWATCH_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "LOUDWATCH_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Enable verbose per-frame timing logs
    #[arg(long)]
    pub log_timings: bool,
}

/// Snapshot of the session-facing monitoring settings.
///
/// This is the library surface: hosts that embed the engine fill one of
/// these directly instead of going through the CLI parser.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub threshold: f32,
    pub cooldown_ms: u64,
    /// Only meaningful for the sustained-duration policy. There is no
    /// embedded default; hosts must supply their own value.
    pub duration_threshold_ms: u64,
    pub smoothing: bool,
    pub smoothing_factor: f32,
    pub alert_policy: AlertPolicyKind,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VOLUME_THRESHOLD,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            duration_threshold_ms: 0,
            smoothing: false,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            alert_policy: AlertPolicyKind::EdgeCooldown,
        }
    }
}

impl AppConfig {
    /// Snapshot the monitoring-relevant settings for the session.
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            threshold: self.threshold,
            cooldown_ms: self.cooldown_ms,
            duration_threshold_ms: self.duration_threshold_ms.unwrap_or(0),
            smoothing: self.smoothing,
            smoothing_factor: self.smoothing_factor,
            alert_policy: self.alert_policy,
        }
    }
}
