//! Bounded jog command line construction.
//!
//! A [`JogCommand`] holds one complete `$J <AXIS><distance>` line in a fixed
//! buffer. The controller's console intake accepts lines of at most
//! [`MAX_COMMAND_LENGTH`] characters; anything longer is truncated at that
//! bound with no error signal, which is the accepted contract for this
//! grammar (callers keep distances within range).

use crate::fmt::{write_f32, MAX_F32_LEN};
use crate::types::Axis;

/// Maximum printable characters in a jog command line.
pub const MAX_COMMAND_LENGTH: usize = 31;

/// One formatted jog command line.
///
/// Cheap to copy and safe to hand across task boundaries; the line is plain
/// ASCII by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JogCommand {
    buf: [u8; MAX_COMMAND_LENGTH],
    len: usize,
}

impl JogCommand {
    /// Build a relative jog command: `$J <axis><distance>`.
    ///
    /// The distance is rendered with six fractional digits. A distance whose
    /// rendering would overflow the line bound is truncated, not rejected.
    #[must_use]
    pub fn relative(axis: Axis, distance: f32) -> Self {
        let mut cmd = Self {
            buf: [0; MAX_COMMAND_LENGTH],
            len: 0,
        };

        cmd.push_bytes(b"$J ");
        cmd.push_bytes(&[axis.letter()]);

        let mut number = [0u8; MAX_F32_LEN];
        let written = write_f32(&mut number, distance);
        cmd.push_bytes(&number[..written]);

        cmd
    }

    /// Append bytes, silently dropping anything past the line bound.
    fn push_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if self.len == MAX_COMMAND_LENGTH {
                return;
            }
            self.buf[self.len] = b;
            self.len += 1;
        }
    }

    /// The command text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // The buffer only ever holds ASCII written by `relative`.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// The command text as raw bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Length of the command text in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the line is empty (never true for a built command).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
