//! Default values and bounds for the CLI configuration.

pub const DEFAULT_COOLDOWN_MS: u64 = 3_000;
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.3;
pub const DEFAULT_FRAME_MS: u64 = 100;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
pub const DEFAULT_HISTORY_WINDOW_MS: u64 = 60_000;

pub(super) const MIN_FRAME_MS: u64 = 10;
pub(super) const MAX_FRAME_MS: u64 = 1_000;
pub(super) const MIN_SAMPLE_RATE: u32 = 8_000;
pub(super) const MAX_SAMPLE_RATE: u32 = 96_000;
pub(super) const MIN_CHANNEL_CAPACITY: usize = 8;
pub(super) const MAX_CHANNEL_CAPACITY: usize = 1_024;
pub(super) const MAX_COOLDOWN_MS: u64 = 600_000;
pub(super) const MAX_DURATION_THRESHOLD_MS: u64 = 3_600_000;
