use super::defaults::{
    MAX_CHANNEL_CAPACITY, MAX_COOLDOWN_MS, MAX_DURATION_THRESHOLD_MS, MAX_FRAME_MS,
    MAX_SAMPLE_RATE, MIN_CHANNEL_CAPACITY, MIN_FRAME_MS, MIN_SAMPLE_RATE,
};
use super::AppConfig;
use crate::alerting::AlertPolicyKind;
use crate::threshold::{is_valid_threshold, MAX_VOLUME_THRESHOLD, MIN_VOLUME_THRESHOLD};
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values against the documented bounds.
    pub fn validate(&mut self) -> Result<()> {
        if !is_valid_threshold(self.threshold) {
            bail!(
                "--threshold must be between {MIN_VOLUME_THRESHOLD} and {MAX_VOLUME_THRESHOLD}, got {}",
                self.threshold
            );
        }
        if self.cooldown_ms > MAX_COOLDOWN_MS {
            bail!(
                "--cooldown-ms must be at most {MAX_COOLDOWN_MS}, got {}",
                self.cooldown_ms
            );
        }
        if !(0.0..=1.0).contains(&self.smoothing_factor) {
            bail!(
                "--smoothing-factor must be between 0.0 and 1.0, got {}",
                self.smoothing_factor
            );
        }
        match self.alert_policy {
            AlertPolicyKind::SustainedDuration => {
                let Some(duration) = self.duration_threshold_ms else {
                    bail!("--duration-threshold-ms is required with --alert-policy sustained-duration");
                };
                if duration > MAX_DURATION_THRESHOLD_MS {
                    bail!(
                        "--duration-threshold-ms must be at most {MAX_DURATION_THRESHOLD_MS}, got {duration}"
                    );
                }
            }
            AlertPolicyKind::EdgeCooldown => {}
        }
        if !(MIN_FRAME_MS..=MAX_FRAME_MS).contains(&self.frame_ms) {
            bail!(
                "--frame-ms must be between {MIN_FRAME_MS} and {MAX_FRAME_MS}, got {}",
                self.frame_ms
            );
        }
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            bail!(
                "--sample-rate must be between {MIN_SAMPLE_RATE} and {MAX_SAMPLE_RATE} Hz, got {}",
                self.sample_rate
            );
        }
        if !(MIN_CHANNEL_CAPACITY..=MAX_CHANNEL_CAPACITY).contains(&self.channel_capacity) {
            bail!(
                "--channel-capacity must be between {MIN_CHANNEL_CAPACITY} and {MAX_CHANNEL_CAPACITY}, got {}",
                self.channel_capacity
            );
        }
        Ok(())
    }
}
