use crate::action::ActionTransition;
use crate::env::{DungeonOracle, GameEnv};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, ItemId, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("player has not been placed in the dungeon")]
    Unplaced,

    #[error("node {0} is not part of the dungeon")]
    NodeNotFound(NodeId),

    #[error("zone {level} has no bridge")]
    BridgeMissing { level: u32 },

    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unplaced => ErrorSeverity::Internal,
            Self::NodeNotFound(_) => ErrorSeverity::Validation,
            Self::BridgeMissing { .. } | Self::Unreachable { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unplaced => "MOVE_UNPLACED",
            Self::NodeNotFound(_) => "MOVE_NODE_NOT_FOUND",
            Self::BridgeMissing { .. } => "MOVE_BRIDGE_MISSING",
            Self::Unreachable { .. } => "MOVE_UNREACHABLE",
        }
    }
}

/// A change of zone during a single hop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneCrossing {
    pub from_level: u32,
    pub to_level: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerMoveOutcome {
    Moved {
        from: NodeId,
        to: NodeId,
        /// Set when the hop left the zone the player started in.
        crossing: Option<ZoneCrossing>,
        /// Items picked up on arrival, in node order.
        collected: Vec<ItemId>,
    },
    /// The player already stands on the node it was heading for.
    Stay { at: NodeId },
}

/// Advances the player one hop toward the current goal.
///
/// Below the difficulty level the goal is the bridge of the player's zone;
/// from there on it is the exit. A player standing on its zone's bridge
/// heads for the next zone's bridge instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerMoveAction;

impl PlayerMoveAction {
    pub fn new() -> Self {
        Self
    }

    /// Node the player is currently heading for.
    pub fn goal(dungeon: &dyn DungeonOracle, from: NodeId) -> Result<NodeId, MoveError> {
        let level = dungeon.level(from).ok_or(MoveError::NodeNotFound(from))?;
        let difficulty = dungeon.difficulty_level();
        if level >= difficulty {
            return Ok(dungeon.exit_node());
        }

        let bridge = dungeon
            .bridge(level)
            .ok_or(MoveError::BridgeMissing { level })?;
        if bridge != from {
            return Ok(bridge);
        }

        let next = level + 1;
        if next >= difficulty {
            Ok(dungeon.exit_node())
        } else {
            dungeon
                .bridge(next)
                .ok_or(MoveError::BridgeMissing { level: next })
        }
    }
}

impl ActionTransition for PlayerMoveAction {
    type Error = MoveError;
    type Result = PlayerMoveOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let from = state.player.location.ok_or(MoveError::Unplaced)?;
        Self::goal(env.dungeon(), from)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayerMoveOutcome, Self::Error> {
        let dungeon = env.dungeon();
        let from = state.player.location.ok_or(MoveError::Unplaced)?;
        let goal = Self::goal(dungeon, from)?;
        let path = dungeon
            .shortest_path(from, goal)
            .ok_or(MoveError::Unreachable { from, to: goal })?;

        let Some(&to) = path.get(1) else {
            tracing::debug!(at = %from, "player already at its goal");
            return Ok(PlayerMoveOutcome::Stay { at: from });
        };

        let from_level = dungeon.level(from).ok_or(MoveError::NodeNotFound(from))?;
        let to_level = dungeon.level(to).ok_or(MoveError::NodeNotFound(to))?;
        let crossing = (from_level != to_level).then_some(ZoneCrossing {
            from_level,
            to_level,
        });
        if crossing.is_some() {
            tracing::info!("Player moved from level {} to {}", from_level, to_level);
        }

        state.player.location = Some(to);
        tracing::info!("Player moved from {} to {}", from, to);
        let collected = collect_items(state, to);

        Ok(PlayerMoveOutcome::Moved {
            from,
            to,
            crossing,
            collected,
        })
    }
}

/// Moves every item lying on `node` into the player's bag.
pub(crate) fn collect_items(state: &mut GameState, node: NodeId) -> Vec<ItemId> {
    state
        .world
        .take_items(node)
        .into_iter()
        .map(|item| {
            let id = item.id;
            tracing::info!("Collected item {}", id);
            state.player.bag.push(item);
            id
        })
        .collect()
}
