//! Player commands, their sources, and the replay log.
//!
//! A [`Command`] is the only input the simulation takes from the player.
//! Commands come from a [`CommandSource`]; [`CommandLog`] decides which
//! source to consult (replay queue first, live input otherwise) and records
//! every command handed out, so a finished session can be replayed exactly.
mod log;
mod root;
mod source;

pub use log::CommandLog;
pub use root::compute_commands_root;
pub use source::{CommandError, CommandSource, ConsoleSource, QueueSource};

/// Integer-coded player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// 1: one hop toward the current zone's bridge, or the exit in the last zone.
    Move,
    /// 2: use a magic crystal from the bag.
    UseCrystal,
    /// 3: use a healing potion from the bag.
    UsePotion,
    /// 4: attack a pack on the player's node.
    Attack,
    /// 5: recognised but unassigned.
    Reserved5,
    /// 6: recognised but unassigned.
    Reserved6,
    /// Anything else, including non-numeric input.
    Unknown,
}

impl Command {
    pub const UNKNOWN_CODE: i32 = -1;

    pub const fn code(self) -> i32 {
        match self {
            Self::Move => 1,
            Self::UseCrystal => 2,
            Self::UsePotion => 3,
            Self::Attack => 4,
            Self::Reserved5 => 5,
            Self::Reserved6 => 6,
            Self::Unknown => Self::UNKNOWN_CODE,
        }
    }

    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Move,
            2 => Self::UseCrystal,
            3 => Self::UsePotion,
            4 => Self::Attack,
            5 => Self::Reserved5,
            6 => Self::Reserved6,
            _ => Self::Unknown,
        }
    }

    /// Parses one line of player input. Never fails: bad input is `Unknown`.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i32>() {
            Ok(code) => {
                let command = Self::from_code(code);
                if command == Self::Unknown {
                    tracing::info!("Unknown command");
                }
                command
            }
            Err(_) => {
                tracing::info!("Input should be an integer.");
                Self::Unknown
            }
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for code in 1..=6 {
            assert_eq!(Command::from_code(code).code(), code);
        }
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(Command::parse("7"), Command::Unknown);
        assert_eq!(Command::parse("0"), Command::Unknown);
        assert_eq!(Command::parse("-1"), Command::Unknown);
        assert_eq!(Command::parse("attack"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::Unknown.code(), -1);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        assert_eq!(Command::parse(" 4\n"), Command::Attack);
        assert_eq!(Command::parse("1\r\n"), Command::Move);
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(Command::UseCrystal.to_string(), "use_crystal");
        assert_eq!(Command::Attack.as_ref(), "attack");
    }
}
