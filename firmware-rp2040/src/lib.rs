//! RP2040 jog pendant firmware.
//!
//! Reads a quadrature hand wheel and two banks of selector switches, and
//! submits relative jog commands to the motion controller's console intake;
//! a joystick on the ADC scales the programmed feed rate.
//!
//! # Hardware Configuration
//!
//! | Function        | GPIO | Description |
//! |-----------------|------|-------------|
//! | Encoder A       | 10   | Hand-wheel channel A (falling-edge counted) |
//! | Encoder B       | 11   | Hand-wheel channel B (direction sample) |
//! | Axis X/Y/Z      | 2-4  | Axis selectors, shared sense/indicator lines |
//! | Feed min/mid/max| 5-7  | Feed-tier selectors, shared sense/indicator lines |
//! | Joystick        | 26   | ADC0, feed-override input |
//!
//! Selector lines are open-drain with pull-ups and inverted sense: a closed
//! switch pulls the line low, and driving the line low lights its indicator.
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with five concurrent tasks:
//!
//! - **Encoder task**: awaits falling edges on channel A, samples channel B
//! - **Scan task**: 20 Hz tick scanning both selector groups
//! - **Pendant task**: the cooperative main loop emitting jog commands
//! - **Override task**: 10 Hz tick mapping the joystick to a feed factor
//! - **Console task**: drains the command intake (the controller's stand-in)
//!
//! The encoder and the selection cells are shared through the
//! single-writer/single-reader handoffs in [`pendant_core`]; no task blocks
//! another.
//!
//! # Features
//!
//! - **`dev-panic`** (default): `panic-probe`, prints panic info via RTT
//! - **`prod-panic`**: `panic-reset`, silent watchdog reset

#![no_std]

// Re-export core types for convenience
pub use pendant_core::{
    AnalogSample, AnalogSource, Axis, CommandSink, EncoderCounter, EncoderReader, EncoderUpdate,
    FeedOverrideScaler, FeedOverrideSink, FeedTier, JogCommand, JogPendant, OverrideConfig,
    PendantConfig, PendantReport, SelectionCell, SelectorLine, SwitchGroup, NEUTRAL_FACTOR,
};

pub mod console;
pub mod joystick;
pub mod lines;
pub mod motion;

pub use console::{ConsoleCommandSink, ConsoleIntake, COMMAND_QUEUE_DEPTH};
pub use joystick::AdcJoystick;
pub use lines::OpenDrainLine;
pub use motion::FeedOverrideCell;
