//! The motion subsystem's feed-override setter.

use pendant_core::FeedOverrideSink;
use portable_atomic::{AtomicU32, Ordering};

/// Latest feed-override factor, shared with the motion planner.
///
/// Stores the factor as raw f32 bits so the override tick can publish it
/// without locking.
pub struct FeedOverrideCell(AtomicU32);

impl FeedOverrideCell {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(f32::to_bits(1.0)))
    }

    /// The most recently pushed factor.
    #[must_use]
    pub fn factor(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }
}

impl Default for FeedOverrideCell {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedOverrideSink for &FeedOverrideCell {
    fn set_feed_override(&mut self, factor: f32) {
        self.0.store(factor.to_bits(), Ordering::Release);
    }
}
