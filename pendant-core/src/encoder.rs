//! Interrupt-to-loop handoff for the hand-wheel encoder.
//!
//! The interrupt handler observes only the falling edge of channel A and
//! samples channel B to pick a direction, giving half-resolution quadrature
//! decoding. That is deliberate: the hand wheel detents on every A fall, and
//! one count per detent is the wanted behavior.
//!
//! [`EncoderCounter`] is the single-writer side, safe to call from interrupt
//! context; [`EncoderReader`] is the single-reader side for the cooperative
//! main loop. The counter write is published with `Release` ordering before
//! the updated flag, and the reader loads with `Acquire`, so an observed
//! flag always comes with a visible counter value.

use portable_atomic::{AtomicBool, AtomicI16, Ordering};

/// Interrupt-written running position counter plus updated flag.
///
/// Designed to live in a `static`; all producer-side methods take `&self`
/// and complete in bounded time with no blocking.
pub struct EncoderCounter {
    position: AtomicI16,
    updated: AtomicBool,
}

impl EncoderCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: AtomicI16::new(0),
            updated: AtomicBool::new(false),
        }
    }

    /// Record one falling edge of channel A with the instantaneous level of
    /// channel B: B high counts up, B low counts down.
    ///
    /// Safe to call from interrupt context; wraps at the i16 boundaries.
    pub fn record_edge(&self, b_high: bool) {
        let step = if b_high { 1 } else { -1 };
        self.position.fetch_add(step, Ordering::Relaxed);
        self.updated.store(true, Ordering::Release);
    }

    /// The raw running position, for diagnostics.
    #[must_use]
    pub fn position(&self) -> i16 {
        self.position.load(Ordering::Acquire)
    }

    #[cfg(test)]
    fn force(&self, position: i16) {
        self.position.store(position, Ordering::Release);
        self.updated.store(true, Ordering::Release);
    }
}

impl Default for EncoderCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// One consumed encoder observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderUpdate {
    /// Raw running position at consumption time.
    pub position: i16,
    /// Unconsumed motion since the previous consumption, wrap-tolerant.
    pub delta: i16,
}

/// Consumer side of the encoder handoff.
///
/// Tracks the last consumed position so the unconsumed delta is always
/// `position - last_consumed`, computed once per main-loop pass.
pub struct EncoderReader<'a> {
    counter: &'a EncoderCounter,
    last_consumed: i16,
}

impl<'a> EncoderReader<'a> {
    #[must_use]
    pub fn new(counter: &'a EncoderCounter) -> Self {
        Self {
            counter,
            last_consumed: 0,
        }
    }

    /// Consume any pending motion.
    ///
    /// Returns `None` when no edge has been recorded since the last call.
    /// An edge that lands between the position load and the flag clear keeps
    /// its count in the position and is picked up when the next edge raises
    /// the flag again.
    pub fn take(&mut self) -> Option<EncoderUpdate> {
        if !self.counter.updated.load(Ordering::Acquire) {
            return None;
        }

        let position = self.counter.position.load(Ordering::Acquire);
        let delta = position.wrapping_sub(self.last_consumed);
        self.last_consumed = self.last_consumed.wrapping_add(delta);
        self.counter.updated.store(false, Ordering::Release);

        Some(EncoderUpdate { position, delta })
    }

    /// The last consumed position.
    #[must_use]
    pub fn last_consumed(&self) -> i16 {
        self.last_consumed
    }
}
