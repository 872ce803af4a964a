//! Turn resolution and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Single
//! actions go through [`GameEngine::execute`]; a full turn (player command,
//! cleanup of defeated packs, pack retaliation, end-of-game check) goes
//! through [`GameEngine::play_turn`].

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError, TurnError};

use crate::action::{
    Action, ActionResult, AggressivePolicy, PackAttackAction, PackAttackOutcome, PackDecision,
    PackFleeAction, PackMoveAction, PackMoveOutcome, PackPolicy, PlayerAttackAction,
    PlayerMoveAction, UseItemAction,
};
use crate::command::{Command, CommandError, CommandSource};
use crate::env::GameEnv;
use crate::state::{Creature, GameState, Item, MonsterId, NodeId, PackId};

/// Where the session stands after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    PlayerDied,
    ReachedExit,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What the player's command amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerTurn {
    Acted(ActionResult),
    /// A use command found no matching unused item in the bag.
    NothingToUse(Command),
    /// Attack with no live monster on the player's node.
    NoTarget,
    /// Reserved or unknown command.
    Ignored(Command),
}

/// Everything that happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Index of this turn, starting at 0.
    pub turn: u64,
    pub command: Command,
    pub player: PlayerTurn,
    /// Packs removed from the player's node after the player acted.
    pub defeated_packs: Vec<PackId>,
    /// Attacks the packs on the player's node made in response.
    pub retaliation: Vec<PackAttackOutcome>,
    pub status: GameStatus,
}

/// Game engine that resolves actions and turns against a borrowed state.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a, P = AggressivePolicy> {
    state: &'a mut GameState,
    policy: P,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine whose packs always attack.
    pub fn new(state: &'a mut GameState) -> Self {
        Self::with_policy(state, AggressivePolicy)
    }
}

impl<'a, P: PackPolicy> GameEngine<'a, P> {
    pub fn with_policy(state: &'a mut GameState, policy: P) -> Self {
        Self { state, policy }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes a single action through the transition pipeline.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        tracing::debug!(action = action.as_snake_case(), "executing action");
        transition::execute_transition(action, self.state, &env)
    }

    /// Moves a pack and drops its listing at the node it left.
    pub fn relocate_pack(
        &mut self,
        env: GameEnv<'_>,
        pack: PackId,
        target: NodeId,
    ) -> Result<PackMoveOutcome, ExecuteError> {
        let action = PackMoveAction::new(pack, target);
        let outcome = transition::drive_transition(&action, self.state, &env)
            .map_err(ExecuteError::PackMove)?;
        if let PackMoveOutcome::Moved { from, .. } = outcome {
            self.state.world.remove_pack(from, pack);
        }
        Ok(outcome)
    }

    pub fn status(&self, env: &GameEnv<'_>) -> GameStatus {
        let player = &self.state.player;
        if !player.is_alive() {
            GameStatus::PlayerDied
        } else if player.location == Some(env.dungeon().exit_node()) {
            GameStatus::ReachedExit
        } else {
            GameStatus::InProgress
        }
    }

    /// Resolves one player command and the packs' response to it.
    ///
    /// # Errors
    ///
    /// `TurnError::GameOver` if the session has already ended; otherwise any
    /// error raised by an executed action, including a pack decision the
    /// engine cannot carry out (pack flee). Ordinary outcomes (nothing to use,
    /// no target, unknown command) are reported in the [`TurnReport`].
    pub fn play_turn(
        &mut self,
        env: GameEnv<'_>,
        command: Command,
    ) -> Result<TurnReport, TurnError> {
        let status = self.status(&env);
        if status.is_over() {
            return Err(TurnError::GameOver(status));
        }

        let player = self.player_turn(env, command)?;

        let mut defeated_packs = Vec::new();
        let mut retaliation = Vec::new();
        if let Some(node) = self.state.player.location {
            defeated_packs = self.state.remove_defeated_packs(node);
            retaliation = self.retaliate(env, node)?;
        }

        let turn = self.state.turn;
        self.state.turn += 1;

        let status = self.status(&env);
        let kill_points = self.state.player.kill_points;
        match status {
            GameStatus::PlayerDied => tracing::info!("Player died with {} kill points", kill_points),
            GameStatus::ReachedExit => {
                tracing::info!("Player reached the exit with {} kill points", kill_points)
            }
            GameStatus::InProgress => {}
        }

        Ok(TurnReport {
            turn,
            command,
            player,
            defeated_packs,
            retaliation,
            status,
        })
    }

    /// Plays turns until the game ends or the command input closes.
    ///
    /// Commands come from the player's replay queue first, then from `live`.
    pub fn run(
        &mut self,
        env: GameEnv<'_>,
        live: &mut dyn CommandSource,
    ) -> Result<Vec<TurnReport>, TurnError> {
        let mut reports = Vec::new();
        while !self.status(&env).is_over() {
            let command = match self.state.player.commands.next_command(live) {
                Ok(command) => command,
                Err(CommandError::InputClosed) => {
                    tracing::info!("command input closed, stopping");
                    break;
                }
                Err(error) => return Err(error.into()),
            };
            reports.push(self.play_turn(env, command)?);
        }
        Ok(reports)
    }

    fn player_turn(
        &mut self,
        env: GameEnv<'_>,
        command: Command,
    ) -> Result<PlayerTurn, ExecuteError> {
        let action: Action = match command {
            Command::Move => PlayerMoveAction::new().into(),
            Command::UseCrystal => match self.state.player.bag.first_usable(Item::is_magic_crystal) {
                Some(item) => UseItemAction::new(item).into(),
                None => return Ok(PlayerTurn::NothingToUse(command)),
            },
            Command::UsePotion => match self.state.player.bag.first_usable(Item::is_healing_potion) {
                Some(item) => UseItemAction::new(item).into(),
                None => return Ok(PlayerTurn::NothingToUse(command)),
            },
            Command::Attack => match self.attack_target() {
                Some(target) => PlayerAttackAction::new(target).into(),
                None => {
                    tracing::info!("Nothing to attack here");
                    return Ok(PlayerTurn::NoTarget);
                }
            },
            Command::Reserved5 | Command::Reserved6 | Command::Unknown => {
                tracing::debug!(%command, "command ignored");
                return Ok(PlayerTurn::Ignored(command));
            }
        };
        self.execute(env, &action).map(PlayerTurn::Acted)
    }

    /// First live monster of the first pack on the player's node.
    fn attack_target(&self) -> Option<MonsterId> {
        let node = self.state.player.location?;
        self.state
            .packs_present(node)
            .find_map(|pack| pack.get_monster().ok())
            .map(|monster| monster.id)
    }

    fn retaliate(
        &mut self,
        env: GameEnv<'_>,
        node: NodeId,
    ) -> Result<Vec<PackAttackOutcome>, ExecuteError> {
        let packs: Vec<PackId> = self.state.packs_present(node).map(|pack| pack.id()).collect();
        let mut outcomes = Vec::new();

        for id in packs {
            if !self.state.player.is_alive() {
                break;
            }
            let Some(pack) = self.state.pack(id) else {
                continue;
            };
            match self.policy.decide(pack, self.state, &env) {
                PackDecision::Attack => {
                    let action = PackAttackAction::new(id);
                    let outcome = transition::drive_transition(&action, self.state, &env)
                        .map_err(ExecuteError::PackAttack)?;
                    outcomes.push(outcome);
                }
                PackDecision::Flee => {
                    let action = PackFleeAction::new(id);
                    transition::drive_transition(&action, self.state, &env)
                        .map_err(ExecuteError::PackFlee)
                        .inspect_err(|error| {
                            tracing::warn!(pack = %id, %error, "pack could not flee")
                        })?;
                }
                PackDecision::Hold => {
                    tracing::debug!(pack = %id, "pack holds its ground");
                }
            }
        }
        Ok(outcomes)
    }
}
