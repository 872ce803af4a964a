use std::collections::VecDeque;

use super::{Command, CommandError, CommandSource, QueueSource};

/// Replay queue plus the append-only record of issued commands.
///
/// While `replay_input` holds commands it is the active source; the live
/// source is only consulted once it runs dry. Whatever source answered, the
/// command is appended to `saved_input`, so a replayed session records the
/// same history as the one it reproduces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandLog {
    replay_input: QueueSource,
    saved_input: VecDeque<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that will first play back `commands`.
    pub fn replaying(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            replay_input: commands.into_iter().collect(),
            saved_input: VecDeque::new(),
        }
    }

    /// Appends `commands` to the pending replay queue.
    pub fn queue_replay(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.replay_input.extend(commands);
    }

    pub fn is_replaying(&self) -> bool {
        !self.replay_input.is_empty()
    }

    pub fn pending_replay(&self) -> usize {
        self.replay_input.len()
    }

    /// Every command handed out so far, in issue order.
    pub fn saved_input(&self) -> &VecDeque<Command> {
        &self.saved_input
    }

    /// Copy of the record, ready to be fed to [`CommandLog::replaying`].
    pub fn recording(&self) -> Vec<Command> {
        self.saved_input.iter().copied().collect()
    }

    /// Next command from the replay queue, or from `live` when the queue is empty.
    ///
    /// # Errors
    ///
    /// Propagates the live source's error; nothing is recorded in that case.
    pub fn next_command(&mut self, live: &mut dyn CommandSource) -> Result<Command, CommandError> {
        let replaying = self.is_replaying();
        let source: &mut dyn CommandSource = if replaying {
            &mut self.replay_input
        } else {
            live
        };
        let command = source.next_command()?;
        if replaying {
            tracing::debug!(%command, remaining = self.replay_input.len(), "replayed command");
        }
        self.saved_input.push_back(command);
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ConsoleSource;

    #[test]
    fn records_live_commands_in_order() {
        let mut log = CommandLog::new();
        let mut live = ConsoleSource::new("1\n9\n4\n".as_bytes());
        for _ in 0..3 {
            log.next_command(&mut live).unwrap();
        }
        assert_eq!(
            log.recording(),
            vec![Command::Move, Command::Unknown, Command::Attack]
        );
    }

    #[test]
    fn replay_queue_overrides_live_input() {
        let mut log = CommandLog::replaying([Command::UsePotion, Command::Attack]);
        let mut live = ConsoleSource::new("1\n".as_bytes());

        assert!(log.is_replaying());
        assert_eq!(log.next_command(&mut live).unwrap(), Command::UsePotion);
        assert_eq!(log.next_command(&mut live).unwrap(), Command::Attack);
        assert!(!log.is_replaying());
        assert_eq!(log.next_command(&mut live).unwrap(), Command::Move);
        assert_eq!(
            log.recording(),
            vec![Command::UsePotion, Command::Attack, Command::Move]
        );
    }

    #[test]
    fn closed_input_records_nothing() {
        let mut log = CommandLog::new();
        let mut live = QueueSource::new();
        assert!(matches!(
            log.next_command(&mut live),
            Err(CommandError::InputClosed)
        ));
        assert!(log.saved_input().is_empty());
    }

    #[test]
    fn queue_replay_appends() {
        let mut log = CommandLog::replaying([Command::Move]);
        log.queue_replay([Command::Attack]);
        assert_eq!(log.pending_replay(), 2);
    }
}
