//! Joystick-driven feed-rate override scaling.
//!
//! An independent periodic task, on its own cadence, maps a named analog
//! data source to a feed-rate scaling factor and pushes it to the motion
//! subsystem on every tick, neutral or not. The factor carries no history;
//! it is fully recomputed each tick.

use crate::config::OverrideConfig;
use crate::input::AnalogSource;
use crate::output::FeedOverrideSink;

/// The factor applied when the data source is missing or disconnected.
pub const NEUTRAL_FACTOR: f32 = 1.0;

/// Linear mapping from a joystick position in `[-1, 1]` to `[min, max]`.
///
/// The bounds come from configuration and are not validated; an inverted
/// `min > max` range inverts the scaling direction, which is the caller's
/// responsibility.
pub struct FeedOverrideScaler {
    data_source: &'static str,
    min: f32,
    max: f32,
}

impl FeedOverrideScaler {
    /// Build the scaler, or `None` when the override module is disabled.
    #[must_use]
    pub fn from_config(config: &OverrideConfig) -> Option<Self> {
        if !config.enable {
            return None;
        }

        Some(Self {
            data_source: config.data_source,
            min: config.min,
            max: config.max,
        })
    }

    /// The factor for a joystick position in `[-1, 1]`.
    ///
    /// Bounded by construction for in-range input: -1 maps to `min`, 1 to
    /// `max`, 0 to their midpoint.
    #[must_use]
    pub fn factor_for(&self, position: f32) -> f32 {
        (self.max - self.min) * (position * 0.5 + 0.5) + self.min
    }

    /// Run one override tick: sample, map, push.
    ///
    /// A missing or disconnected source yields [`NEUTRAL_FACTOR`]; the
    /// factor is pushed to the sink unconditionally either way.
    pub fn tick<R, S>(&mut self, registry: &mut R, motion: &mut S) -> f32
    where
        R: AnalogSource,
        S: FeedOverrideSink,
    {
        let factor = match registry.sample(self.data_source) {
            Some(sample) if sample.connected => self.factor_for(sample.position),
            _ => NEUTRAL_FACTOR,
        };

        motion.set_feed_override(factor);
        factor
    }
}
