//! Axis identifiers used by the jog command grammar.

/// A linear machine axis addressable by a jog command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in selector-switch order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The single-letter axis name used on the wire.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        match self {
            Self::X => b'X',
            Self::Y => b'Y',
            Self::Z => b'Z',
        }
    }
}
