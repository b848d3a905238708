//! The main-loop pass: selections plus encoder motion in, jog commands out.

use jog_proto::JogCommand;

use crate::config::PendantConfig;
use crate::encoder::{EncoderCounter, EncoderReader, EncoderUpdate};
use crate::output::CommandSink;
use crate::switches::SelectionCell;
use crate::types::{Axis, FeedTier};

/// Distance units commanded per encoder count.
pub const DISTANCE_PER_COUNT: f32 = 10.0;

/// What one main-loop pass observed, for the caller's diagnostic log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendantReport {
    /// New axis selection, if it changed this pass.
    pub axis_changed: Option<Option<Axis>>,
    /// New feed-tier selection, if it changed this pass.
    pub feed_changed: Option<Option<FeedTier>>,
    /// Encoder motion consumed this pass.
    pub encoder: Option<EncoderUpdate>,
    /// Whether a jog command was submitted.
    pub command_sent: bool,
}

impl PendantReport {
    /// Whether the pass observed nothing at all.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.axis_changed.is_none() && self.feed_changed.is_none() && self.encoder.is_none()
    }
}

/// The jog pipeline's consumer side, driven once per cooperative main-loop
/// pass.
///
/// There is no explicit state machine: the pendant's state is the current
/// axis selection plus the encoder's pending flag. Encoder motion observed
/// with no axis selected is consumed and dropped, never replayed against a
/// later selection.
pub struct JogPendant<'a> {
    encoder: EncoderReader<'a>,
    axis: &'a SelectionCell,
    feed: &'a SelectionCell,
}

impl<'a> JogPendant<'a> {
    /// Build the pendant, or `None` when the module is disabled.
    ///
    /// A disabled module allocates nothing and never reaches a partially
    /// constructed state.
    #[must_use]
    pub fn build(
        config: &PendantConfig,
        counter: &'a EncoderCounter,
        axis: &'a SelectionCell,
        feed: &'a SelectionCell,
    ) -> Option<Self> {
        if !config.enable {
            return None;
        }

        Some(Self {
            encoder: EncoderReader::new(counter),
            axis,
            feed,
        })
    }

    /// Run one main-loop pass.
    ///
    /// At most one command is submitted per pass: edges that arrived since
    /// the previous pass coalesce into a single delta.
    pub fn poll<S: CommandSink>(&mut self, sink: &mut S) -> PendantReport {
        let mut report = PendantReport::default();

        if self.axis.take_changed() {
            report.axis_changed = Some(self.axis.selected());
        }

        if self.feed.take_changed() {
            // Tracked for diagnostics only; no consumer yet
            report.feed_changed = Some(self.feed.selected());
        }

        if let Some(update) = self.encoder.take() {
            if let Some(axis) = self.axis.selected::<Axis>() {
                let distance = f32::from(update.delta) * DISTANCE_PER_COUNT;
                sink.submit(&JogCommand::relative(axis, distance));
                report.command_sent = true;
            }
            // The delta is consumed either way; motion observed without an
            // axis selected must not accumulate into a later selection.
            report.encoder = Some(update);
        }

        report
    }

    /// The last consumed encoder position.
    #[must_use]
    pub fn last_consumed(&self) -> i16 {
        self.encoder.last_consumed()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::types::GroupMember;
    use std::string::String;
    use std::vec::Vec;

    /// Command sink mock collecting submitted lines.
    #[derive(Default)]
    struct MockSink {
        lines: Vec<String>,
    }

    impl CommandSink for MockSink {
        fn submit(&mut self, command: &JogCommand) {
            self.lines.push(String::from(command.as_str()));
        }
    }

    fn enabled() -> PendantConfig {
        PendantConfig {
            enable: true,
            ..PendantConfig::default()
        }
    }

    fn select(cell: &SelectionCell, axis: Axis) {
        // Stand-in for a scan tick: publish then let the pass drain the flag
        cell_publish(cell, Some(axis.index()));
    }

    fn cell_publish(cell: &SelectionCell, index: Option<u8>) {
        // Test-only path through the public scanner API: a line that reads
        // idle on the first scan and pressed on the second
        struct PressLine {
            pressed: bool,
            scans: u8,
        }
        impl crate::input::SelectorLine for PressLine {
            fn drive(&mut self, _level: bool) {}
            fn sense(&mut self) -> bool {
                self.scans += 1;
                self.pressed && self.scans >= 2
            }
        }

        let line = |i: u8| {
            Some(PressLine {
                pressed: index == Some(i),
                scans: 0,
            })
        };
        let mut group: crate::switches::SwitchGroup<PressLine, 3> =
            crate::switches::SwitchGroup::new([line(0), line(1), line(2)]);
        // First scan syncs idle toggles, second sees the press
        group.scan(cell);
        group.scan(cell);
    }

    #[test]
    fn test_disabled_module_is_not_built() {
        let counter = EncoderCounter::new();
        let axis = SelectionCell::new();
        let feed = SelectionCell::new();

        assert!(
            JogPendant::build(&PendantConfig::default(), &counter, &axis, &feed).is_none()
        );
    }

    #[test]
    fn test_selected_axis_jogs() {
        let counter = EncoderCounter::new();
        let axis = SelectionCell::new();
        let feed = SelectionCell::new();
        let mut pendant = JogPendant::build(&enabled(), &counter, &axis, &feed).unwrap();
        let mut sink = MockSink::default();

        select(&axis, Axis::X);
        for _ in 0..5 {
            counter.record_edge(true);
        }

        let report = pendant.poll(&mut sink);
        assert_eq!(report.axis_changed, Some(Some(Axis::X)));
        assert!(report.command_sent);
        assert_eq!(sink.lines, ["$J X50.000000"]);
        assert_eq!(pendant.last_consumed(), 5);
    }

    #[test]
    fn test_no_axis_consumes_without_command() {
        let counter = EncoderCounter::new();
        let axis = SelectionCell::new();
        let feed = SelectionCell::new();
        let mut pendant = JogPendant::build(&enabled(), &counter, &axis, &feed).unwrap();
        let mut sink = MockSink::default();

        for _ in 0..5 {
            counter.record_edge(true);
        }

        let report = pendant.poll(&mut sink);
        assert!(!report.command_sent);
        assert_eq!(report.encoder.unwrap().delta, 5);
        assert!(sink.lines.is_empty());
        // Motion is consumed even with no axis selected
        assert_eq!(pendant.last_consumed(), 5);

        // Selecting an axis afterwards must not replay the stale motion
        select(&axis, Axis::Z);
        let report = pendant.poll(&mut sink);
        assert!(!report.command_sent);
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn test_edges_coalesce_into_one_command_per_pass() {
        let counter = EncoderCounter::new();
        let axis = SelectionCell::new();
        let feed = SelectionCell::new();
        let mut pendant = JogPendant::build(&enabled(), &counter, &axis, &feed).unwrap();
        let mut sink = MockSink::default();

        select(&axis, Axis::Y);
        pendant.poll(&mut sink);

        counter.record_edge(false);
        counter.record_edge(false);
        counter.record_edge(false);
        pendant.poll(&mut sink);

        assert_eq!(sink.lines, ["$J Y-30.000000"]);
    }

    #[test]
    fn test_feed_tier_is_reported_but_unconsumed() {
        let counter = EncoderCounter::new();
        let axis = SelectionCell::new();
        let feed = SelectionCell::new();
        let mut pendant = JogPendant::build(&enabled(), &counter, &axis, &feed).unwrap();
        let mut sink = MockSink::default();

        cell_publish(&feed, Some(FeedTier::Max.index()));
        counter.record_edge(true);

        let report = pendant.poll(&mut sink);
        assert_eq!(report.feed_changed, Some(Some(FeedTier::Max)));
        // Feed tier never produces a command on its own
        assert!(!report.command_sent);

        // Quiet pass reports nothing
        let report = pendant.poll(&mut sink);
        assert!(report.is_quiet());
    }
}
