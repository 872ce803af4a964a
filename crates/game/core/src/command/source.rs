use std::collections::VecDeque;
use std::io::{self, BufRead};

use super::Command;
use crate::error::{ErrorSeverity, GameError};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command input closed")]
    InputClosed,

    #[error("failed to read command input")]
    Io(#[from] io::Error),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputClosed => ErrorSeverity::Recoverable,
            Self::Io(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InputClosed => "COMMAND_INPUT_CLOSED",
            Self::Io(_) => "COMMAND_IO",
        }
    }
}

/// Anything that can hand out the next player command.
///
/// Implementations may be interactive (reading a terminal), scripted, or
/// replaying a recorded session.
pub trait CommandSource {
    /// Returns the next command.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InputClosed` when the source is exhausted.
    fn next_command(&mut self) -> Result<Command, CommandError>;
}

/// Live source reading one command per line.
pub struct ConsoleSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> ConsoleSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl ConsoleSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CommandSource for ConsoleSource<R> {
    fn next_command(&mut self) -> Result<Command, CommandError> {
        tracing::info!("enter user input");
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(CommandError::InputClosed);
        }
        Ok(Command::parse(&self.line))
    }
}

/// FIFO of pre-recorded commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSource {
    queue: VecDeque<Command>,
}

impl QueueSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.queue.iter()
    }
}

impl FromIterator<Command> for QueueSource {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl Extend<Command> for QueueSource {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

impl CommandSource for QueueSource {
    fn next_command(&mut self) -> Result<Command, CommandError> {
        self.queue.pop_front().ok_or(CommandError::InputClosed)
    }
}
