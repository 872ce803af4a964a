use crate::action::ActionTransition;
use crate::action::movement::{MoveError, collect_items};
use crate::env::GameEnv;
use crate::state::{GameState, ItemId, NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FleeOutcome {
    Fled {
        from: NodeId,
        to: NodeId,
        collected: Vec<ItemId>,
    },
    /// Every neighbor hosts a pack. The player did not move.
    Cornered { at: NodeId },
}

/// Player escapes to the first neighbor without packs, regardless of zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerFleeAction;

impl ActionTransition for PlayerFleeAction {
    type Error = MoveError;
    type Result = FleeOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let from = state.player.location.ok_or(MoveError::Unplaced)?;
        if !env.dungeon().contains(from) {
            return Err(MoveError::NodeNotFound(from));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<FleeOutcome, Self::Error> {
        let from = state.player.location.ok_or(MoveError::Unplaced)?;
        let refuge = env
            .dungeon()
            .neighbors(from)
            .iter()
            .copied()
            .find(|&node| !state.is_contested(node));

        let Some(to) = refuge else {
            tracing::info!("Player could not flee from {}, every neighbor is occupied", from);
            return Ok(FleeOutcome::Cornered { at: from });
        };

        state.player.location = Some(to);
        tracing::info!("Player fled from {} to {}", from, to);
        let collected = collect_items(state, to);
        Ok(FleeOutcome::Fled {
            from,
            to,
            collected,
        })
    }
}
