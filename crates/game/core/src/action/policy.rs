//! Pack decision making.
//!
//! The engine asks a [`PackPolicy`] what each pack sharing the player's node
//! should do. Only aggressive behavior exists today.

use crate::env::GameEnv;
use crate::state::{GameState, Pack};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PackDecision {
    Attack,
    Flee,
    Hold,
}

pub trait PackPolicy {
    fn decide(&self, pack: &Pack, state: &GameState, env: &GameEnv<'_>) -> PackDecision;
}

/// Always attacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggressivePolicy;

impl PackPolicy for AggressivePolicy {
    fn decide(&self, _pack: &Pack, _state: &GameState, _env: &GameEnv<'_>) -> PackDecision {
        PackDecision::Attack
    }
}
