//! Selector group membership: axes and feed tiers.

pub use jog_proto::Axis;

/// A member of a mutually-exclusive selector switch group.
///
/// The switch scanner and selection cell work on raw member indices; this
/// trait maps them back to typed values at the edges.
pub trait GroupMember: Copy + Eq {
    /// Number of members in the group.
    const COUNT: usize;

    /// Map a selector index to a member, `None` if out of range.
    fn from_index(index: u8) -> Option<Self>;

    /// The member's selector index.
    fn index(self) -> u8;
}

impl GroupMember for Axis {
    const COUNT: usize = 3;

    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// A feed-rate tier selectable from the pendant.
///
/// The tier selection is scanned, debounced, and indicated like the axis
/// group, but nothing consumes it yet; it is tracked for diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedTier {
    Min,
    Mid,
    Max,
}

impl GroupMember for FeedTier {
    const COUNT: usize = 3;

    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Min),
            1 => Some(Self::Mid),
            2 => Some(Self::Max),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Min => 0,
            Self::Mid => 1,
            Self::Max => 2,
        }
    }
}
