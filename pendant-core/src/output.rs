//! Hardware-facing output traits.

use jog_proto::JogCommand;

/// The motion controller's command-line intake.
///
/// Submission is fire-and-forget: no acknowledgement is observed and there
/// is no retry. Implementations direct the command's reply stream to a
/// discard destination and are expected to mirror the raw text to their
/// diagnostic log.
pub trait CommandSink {
    /// Submit one command line.
    fn submit(&mut self, command: &JogCommand);
}

/// The motion subsystem's feed-override setter.
pub trait FeedOverrideSink {
    /// Apply a feed-rate scaling factor.
    fn set_feed_override(&mut self, factor: f32);
}
