//! Jog command grammar and bounded formatting for the pendant bridge.
//!
//! This crate owns the text protocol the pendant speaks to the motion
//! controller's console intake:
//!
//! ```text
//! $J <AXIS><signed-decimal-distance>
//! ```
//!
//! - `$J ` - Jog command prefix (with trailing space)
//! - `AXIS` - One of `X`, `Y`, `Z`
//! - `distance` - Signed decimal with six fractional digits, e.g. `120.000000`
//!
//! A complete line is at most [`MAX_COMMAND_LENGTH`] (31) characters. Content
//! beyond that bound is truncated deterministically rather than reported as an
//! error; callers are expected to keep distances within range.
//!
//! # Example
//!
//! ```
//! use jog_proto::{Axis, JogCommand};
//!
//! let cmd = JogCommand::relative(Axis::X, 50.0);
//! assert_eq!(cmd.as_str(), "$J X50.000000");
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod command;
mod fmt;
pub mod types;

pub use command::{JogCommand, MAX_COMMAND_LENGTH};
pub use types::Axis;
