use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::GameState;

/// Defines how a concrete action mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks receive
/// read-only access to the dungeon and RNG via `Env` and must stay
/// side-effect free.
///
/// A rejected-but-legal request (a pack bouncing off a full node, a cornered
/// flee) is an `Ok` result; `Err` means the request itself was invalid and
/// nothing was mutated.
pub trait ActionTransition {
    type Error: GameError;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations should
    /// assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
