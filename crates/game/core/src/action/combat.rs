use crate::action::ActionTransition;
use crate::combat::{Strike, strike};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CreatureId, GameState, MonsterId, PackId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("{0} is not a valid attack target")]
    InvalidAttackTarget(CreatureId),

    #[error("monster {0} not found")]
    MonsterNotFound(MonsterId),
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAttackTarget(_) => "ATTACK_INVALID_TARGET",
            Self::MonsterNotFound(_) => "ATTACK_MONSTER_NOT_FOUND",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackMode {
    /// One hit on the chosen monster.
    Single,
    /// One hit on every live member of the chosen monster's pack.
    Accelerated,
}

/// Result of a player attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub mode: AttackMode,
    pub pack: PackId,
    /// Hits in resolution order.
    pub strikes: Vec<Strike>,
    /// Monsters that died and were removed from the pack.
    pub killed: Vec<MonsterId>,
    /// True when the pack has no members left. The pack is still listed at
    /// its node; removing it is up to the caller.
    pub pack_defeated: bool,
}

/// Player attacks `target`, which must be a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerAttackAction {
    pub target: CreatureId,
}

impl PlayerAttackAction {
    pub fn new(target: impl Into<CreatureId>) -> Self {
        Self {
            target: target.into(),
        }
    }

    fn monster_target(&self) -> Result<MonsterId, AttackError> {
        self.target
            .as_monster()
            .ok_or(AttackError::InvalidAttackTarget(self.target))
    }
}

impl ActionTransition for PlayerAttackAction {
    type Error = AttackError;
    type Result = AttackOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let target = self.monster_target()?;
        state
            .monster(target)
            .ok_or(AttackError::MonsterNotFound(target))?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<AttackOutcome, Self::Error> {
        let target = self.monster_target()?;
        let GameState {
            packs,
            player,
            world,
            ..
        } = state;
        let pack = packs
            .get_mut(&target.pack)
            .ok_or(AttackError::MonsterNotFound(target))?;

        if let Some(location) = pack.location() {
            tracing::debug!(
                pack = %pack.id(),
                %location,
                members = ?pack.live_member_ids(),
                packs_here = ?world.packs_at(location),
                "player engages pack"
            );
        }

        let mode = if player.accelerated {
            AttackMode::Accelerated
        } else {
            AttackMode::Single
        };
        let mut strikes = Vec::new();
        let mut killed = Vec::new();

        match mode {
            AttackMode::Single => {
                let monster = pack
                    .member_mut(target)
                    .ok_or(AttackError::MonsterNotFound(target))?;
                let hit = strike(&*player, monster);
                if hit.killed() {
                    pack.remove_member(target);
                    player.kill_points += 1;
                    killed.push(target);
                }
                strikes.push(hit);
            }
            AttackMode::Accelerated => {
                // snapshot: members are removed while we walk the list
                for id in pack.live_member_ids() {
                    let Some(monster) = pack.member_mut(id) else {
                        continue;
                    };
                    let hit = strike(&*player, monster);
                    if hit.killed() {
                        pack.remove_member(id);
                        player.kill_points += 1;
                        killed.push(id);
                    }
                    strikes.push(hit);
                }
                player.accelerated = false;
            }
        }

        let pack_defeated = pack.is_defeated();
        if pack_defeated {
            tracing::info!("Pack {} is now empty, it will be removed", pack.id());
        }

        Ok(AttackOutcome {
            mode,
            pack: pack.id(),
            strikes,
            killed,
            pack_defeated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{DungeonGraph, Env, PcgRng};
    use crate::state::{Creature, Monster, NodeId, Pack, Player};

    fn fixture(hps: &[u32]) -> (GameState, DungeonGraph) {
        let graph = DungeonGraph::builder()
            .node(NodeId(0), 0)
            .exit(NodeId(0))
            .build()
            .unwrap();
        let mut state = GameState::new(Player::new(&GameConfig::default()));
        state.place_player(NodeId(0));
        let members = hps
            .iter()
            .enumerate()
            .map(|(i, &hp)| Monster::new(MonsterId::new(PackId(1), i as u32), hp, 1))
            .collect();
        state.spawn_pack(Pack::new(PackId(1), members), NodeId(0));
        (state, graph)
    }

    fn run(action: PlayerAttackAction, state: &mut GameState, graph: &DungeonGraph) -> Result<AttackOutcome, AttackError> {
        let rng = PcgRng;
        let env = Env::new(graph, &rng, 0);
        let env = env.as_game_env();
        action.pre_validate(state, &env)?;
        action.apply(state, &env)
    }

    fn monster(index: u32) -> MonsterId {
        MonsterId::new(PackId(1), index)
    }

    #[test]
    fn single_attack_wounds_only_the_target() {
        let (mut state, graph) = fixture(&[8, 8]);
        let outcome = run(PlayerAttackAction::new(monster(1)), &mut state, &graph).unwrap();

        assert_eq!(outcome.mode, AttackMode::Single);
        assert_eq!(outcome.strikes.len(), 1);
        assert!(outcome.killed.is_empty());
        assert_eq!(state.monster(monster(0)).unwrap().hp(), 8);
        assert_eq!(state.monster(monster(1)).unwrap().hp(), 3);
        assert_eq!(state.player.kill_points, 0);
    }

    #[test]
    fn single_kill_removes_member_but_keeps_pack() {
        let (mut state, graph) = fixture(&[4]);
        let outcome = run(PlayerAttackAction::new(monster(0)), &mut state, &graph).unwrap();

        assert_eq!(outcome.killed, vec![monster(0)]);
        assert!(outcome.pack_defeated);
        assert_eq!(state.player.kill_points, 1);
        assert!(state.pack(PackId(1)).unwrap().is_defeated());
        assert_eq!(state.world.packs_at(NodeId(0)), &[PackId(1)]);
    }

    #[test]
    fn accelerated_attack_hits_whole_pack_and_resets() {
        let (mut state, graph) = fixture(&[2, 1, 3]);
        state.player.accelerated = true;
        let outcome = run(PlayerAttackAction::new(monster(1)), &mut state, &graph).unwrap();

        assert_eq!(outcome.mode, AttackMode::Accelerated);
        assert_eq!(outcome.killed, vec![monster(0), monster(1), monster(2)]);
        assert_eq!(state.player.kill_points, 3);
        assert!(!state.player.accelerated);
        assert!(state.pack(PackId(1)).unwrap().members().is_empty());
    }

    #[test]
    fn accelerated_attack_resets_even_without_kills() {
        let (mut state, graph) = fixture(&[9, 9]);
        state.player.accelerated = true;
        let outcome = run(PlayerAttackAction::new(monster(0)), &mut state, &graph).unwrap();

        assert!(outcome.killed.is_empty());
        assert_eq!(outcome.strikes.len(), 2);
        assert!(!state.player.accelerated);
        assert!(state.pack(PackId(1)).unwrap().members().iter().all(|m| m.hp() == 4));
    }

    #[test]
    fn attacking_the_player_is_rejected() {
        let (mut state, graph) = fixture(&[3]);
        let before = state.clone();
        let result = run(PlayerAttackAction::new(CreatureId::PLAYER), &mut state, &graph);

        assert_eq!(
            result,
            Err(AttackError::InvalidAttackTarget(CreatureId::PLAYER))
        );
        assert_eq!(result.unwrap_err().error_code(), "ATTACK_INVALID_TARGET");
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_monster_is_rejected() {
        let (mut state, graph) = fixture(&[3]);
        let result = run(PlayerAttackAction::new(monster(7)), &mut state, &graph);
        assert_eq!(result, Err(AttackError::MonsterNotFound(monster(7))));
    }
}
