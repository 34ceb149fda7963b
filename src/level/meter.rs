//! Lock-free cell publishing the latest normalized volume for display.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shares the most recent normalized volume between the monitor loop and a
/// display thread without locking.
#[derive(Clone, Debug)]
pub struct LiveMeter {
    level_bits: Arc<AtomicU32>,
}

impl LiveMeter {
    pub fn new() -> Self {
        Self {
            level_bits: Arc::new(AtomicU32::new(0.0f32.to_bits())),
        }
    }

    pub fn set_level(&self, normalized: f32) {
        self.level_bits.store(normalized.to_bits(), Ordering::Relaxed);
    }

    pub fn level(&self) -> f32 {
        f32::from_bits(self.level_bits.load(Ordering::Relaxed))
    }
}

impl Default for LiveMeter {
    fn default() -> Self {
        Self::new()
    }
}
