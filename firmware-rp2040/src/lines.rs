//! Open-drain selector lines over `Flex` pins.

use embassy_rp::gpio::{Flex, Pull};
use pendant_core::SelectorLine;

/// One shared sense/indicate selector line.
///
/// Open-drain with pull-up, inverted: driving the line low asserts the
/// indicator, releasing it lets the pull-up float the line high, and a
/// closed switch reads as low.
pub struct OpenDrainLine<'d> {
    pin: Flex<'d>,
}

impl<'d> OpenDrainLine<'d> {
    #[must_use]
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl SelectorLine for OpenDrainLine<'_> {
    fn drive(&mut self, level: bool) {
        if level {
            // Sink the line to light the indicator
            self.pin.set_as_output();
        } else {
            // Release; the pull-up takes the line high
            self.pin.set_as_input();
        }
    }

    fn sense(&mut self) -> bool {
        // Inverted: a closed switch pulls the line low
        self.pin.is_low()
    }
}
