//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in `ActionResult`.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::PlayerMove(transition) => drive_transition(transition, state, env)
            .map(ActionResult::PlayerMove)
            .map_err(ExecuteError::PlayerMove),
        Action::PlayerFlee(transition) => drive_transition(transition, state, env)
            .map(ActionResult::PlayerFlee)
            .map_err(ExecuteError::PlayerFlee),
        Action::PlayerAttack(transition) => drive_transition(transition, state, env)
            .map(ActionResult::PlayerAttack)
            .map_err(ExecuteError::PlayerAttack),
        Action::UseItem(transition) => drive_transition(transition, state, env)
            .map(ActionResult::UseItem)
            .map_err(ExecuteError::UseItem),
        Action::PackMove(transition) => drive_transition(transition, state, env)
            .map(ActionResult::PackMove)
            .map_err(ExecuteError::PackMove),
        Action::PackMoveTowards(transition) => drive_transition(transition, state, env)
            .map(ActionResult::PackMove)
            .map_err(ExecuteError::PackMoveTowards),
        Action::PackAttack(transition) => drive_transition(transition, state, env)
            .map(ActionResult::PackAttack)
            .map_err(ExecuteError::PackAttack),
        Action::PackFlee(transition) => drive_transition(transition, state, env)
            .map(|()| ActionResult::PackFlee)
            .map_err(ExecuteError::PackFlee),
    }
}
