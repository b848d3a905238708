//! Hardware-facing input traits.
//!
//! These traits abstract the pendant's sense side so different hardware
//! backends (and host-side mocks) can be used interchangeably. All
//! implementations must be `no_std` compatible with no heap allocation.

/// A selector switch line with a shared sense/indicate wire.
///
/// Each physical switch shares one open-drain, pulled-up, inverted line
/// between its contact and its indicator LED. The scanner drives the line
/// low before sensing so the indicator cannot mask the contact, then
/// re-drives the selected line high after the scan.
pub trait SelectorLine {
    /// Drive the indicator side of the line.
    fn drive(&mut self, level: bool);

    /// Read the sensed (debounced, inverted) contact value.
    fn sense(&mut self) -> bool;
}

/// One sample from a named analog data source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample {
    /// Normalized position in `[-1, 1]`.
    pub position: f32,
    /// Raw converter reading, for diagnostics.
    pub raw: u16,
    /// Whether the source considers itself attached.
    pub connected: bool,
}

/// A registry of named analog data sources (joysticks and the like).
///
/// `None` for an unknown key is not an error; the consumer substitutes a
/// neutral value.
pub trait AnalogSource {
    /// Sample the source registered under `key`.
    fn sample(&mut self, key: &str) -> Option<AnalogSample>;
}
