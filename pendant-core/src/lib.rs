//! Platform-agnostic jog pendant logic.
//!
//! This crate turns a quadrature hand-wheel plus two banks of selector
//! switches into relative jog commands for a motion controller, and scales
//! the programmed feed rate from an analog joystick. It carries no
//! platform-specific dependencies and can be used both in embedded `no_std`
//! environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Selector group membership ([`Axis`], [`FeedTier`], [`GroupMember`])
//! - [`encoder`]: Interrupt-to-loop position handoff ([`EncoderCounter`], [`EncoderReader`])
//! - [`switches`]: Debounced exclusive-selection scanning ([`SwitchGroup`], [`SelectionCell`])
//! - [`jog`]: The main-loop pass that emits jog commands ([`JogPendant`])
//! - [`feed_override`]: Joystick-to-feed-factor scaling ([`FeedOverrideScaler`])
//! - [`input`]: Hardware-facing input traits ([`SelectorLine`], [`AnalogSource`])
//! - [`output`]: Hardware-facing output traits ([`CommandSink`], [`FeedOverrideSink`])
//! - [`config`]: Module configuration ([`PendantConfig`], [`OverrideConfig`])
//!
//! # Data Flow
//!
//! ```text
//! encoder edges -> EncoderCounter -> EncoderReader ---+
//! scan ticks    -> SwitchGroup    -> SelectionCell ---+-> JogPendant -> CommandSink
//! scan ticks    -> AnalogSource   -> FeedOverrideScaler -> FeedOverrideSink
//! ```
//!
//! The encoder counter is written from interrupt context and consumed by a
//! cooperative main-loop pass; the handoff uses publish/acquire ordering so
//! the consumer never observes the updated flag without the counter write
//! that triggered it. Rapid edges coalesce into one delta per pass, which is
//! the pipeline's only flow control.
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

pub mod config;
pub mod encoder;
pub mod feed_override;
pub mod input;
pub mod jog;
pub mod output;
pub mod switches;
pub mod types;

// Re-export main types at crate root
pub use config::{OverrideConfig, PendantConfig};
pub use encoder::{EncoderCounter, EncoderReader, EncoderUpdate};
pub use feed_override::{FeedOverrideScaler, NEUTRAL_FACTOR};
pub use input::{AnalogSample, AnalogSource, SelectorLine};
pub use jog::{JogPendant, PendantReport};
pub use output::{CommandSink, FeedOverrideSink};
pub use switches::{SelectionCell, SwitchGroup};
pub use types::{Axis, FeedTier, GroupMember};

// The command grammar lives in jog-proto; re-exported for convenience.
pub use jog_proto::{JogCommand, MAX_COMMAND_LENGTH};
