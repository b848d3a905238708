//! The motion controller's console command intake.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use jog_proto::JogCommand;
use pendant_core::CommandSink;

/// Depth of the command intake channel.
///
/// The pendant submits at most one command per main-loop pass, so a shallow
/// queue is plenty.
pub const COMMAND_QUEUE_DEPTH: usize = 4;

/// The command-intake channel type shared with the consuming task.
pub type ConsoleIntake = Channel<CriticalSectionRawMutex, JogCommand, COMMAND_QUEUE_DEPTH>;

/// Submits jog commands to the console intake, replies discarded.
///
/// Submission is fire-and-forget: a full intake drops the line with no
/// retry, and the raw text is mirrored to the defmt log either way.
pub struct ConsoleCommandSink {
    intake: &'static ConsoleIntake,
}

impl ConsoleCommandSink {
    #[must_use]
    pub fn new(intake: &'static ConsoleIntake) -> Self {
        Self { intake }
    }
}

impl CommandSink for ConsoleCommandSink {
    fn submit(&mut self, command: &JogCommand) {
        let _ = self.intake.try_send(*command);
        defmt::info!("jog: {=str}", command.as_str());
    }
}
