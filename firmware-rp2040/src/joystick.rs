//! ADC joystick registered as a named analog data source.

use embassy_rp::adc::{Adc, Blocking, Channel};
use pendant_core::{AnalogSample, AnalogSource};

/// A joystick axis on one ADC channel, addressable by a string key.
///
/// Reports `connected: true` whenever a conversion succeeds; a failed
/// conversion or an unknown key yields `None` and the consumer falls back
/// to its neutral value.
pub struct AdcJoystick<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    key: &'static str,
}

impl<'d> AdcJoystick<'d> {
    #[must_use]
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>, key: &'static str) -> Self {
        Self { adc, channel, key }
    }
}

impl AnalogSource for AdcJoystick<'_> {
    fn sample(&mut self, key: &str) -> Option<AnalogSample> {
        if key != self.key {
            return None;
        }

        let raw = self.adc.blocking_read(&mut self.channel).ok()?;

        // 12-bit conversion, centered on half scale
        let position = (f32::from(raw) / 2047.5 - 1.0).clamp(-1.0, 1.0);

        Some(AnalogSample {
            position,
            raw,
            connected: true,
        })
    }
}
