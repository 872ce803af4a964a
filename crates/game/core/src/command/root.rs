//! Commitment over a recorded command sequence.

use sha2::{Digest, Sha256};

use super::Command;

/// SHA-256 over the command codes, in order.
///
/// Two sessions that recorded the same commands share a root, so a replay
/// can be matched to the run it came from without comparing the lists.
pub fn compute_commands_root<'a>(commands: impl IntoIterator<Item = &'a Command>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for command in commands {
        hasher.update(command.code().to_le_bytes());
    }
    hasher.finalize().into()
}
