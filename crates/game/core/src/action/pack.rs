use crate::action::ActionTransition;
use crate::combat::{Strike, strike};
use crate::env::GameEnv;
use crate::state::{Creature, GameState, NodeId, Pack, PackError, PackId};

/// What happened to a pack that was asked to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackMoveOutcome {
    Moved { from: NodeId, to: NodeId },
    /// The target could not host every member. Nothing changed.
    Rejected {
        target: NodeId,
        capacity: u32,
        occupied: u32,
    },
    /// The pack was already standing on its destination.
    AlreadyThere { at: NodeId },
}

fn placed_pack(state: &GameState, id: PackId) -> Result<(&Pack, NodeId), PackError> {
    let pack = state.pack(id).ok_or(PackError::PackNotFound(id))?;
    let location = pack.location().ok_or(PackError::Unplaced(id))?;
    Ok((pack, location))
}

/// Moves a whole pack to an adjacent node, if the node has room for it.
///
/// The pack is listed at `target` but stays listed at its origin as well;
/// pruning the origin is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackMoveAction {
    pub pack: PackId,
    pub target: NodeId,
}

impl PackMoveAction {
    pub fn new(pack: PackId, target: NodeId) -> Self {
        Self { pack, target }
    }
}

impl ActionTransition for PackMoveAction {
    type Error = PackError;
    type Result = PackMoveOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (_, from) = placed_pack(state, self.pack)?;
        let dungeon = env.dungeon();
        if !dungeon.contains(self.target) {
            return Err(PackError::NodeNotFound(self.target));
        }
        if !dungeon.is_neighbor(from, self.target) {
            return Err(PackError::InvalidMoveTarget {
                pack: self.pack,
                from,
                target: self.target,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PackMoveOutcome, Self::Error> {
        let (pack, from) = placed_pack(state, self.pack)?;
        let capacity = env
            .dungeon()
            .capacity(self.target)
            .ok_or(PackError::NodeNotFound(self.target))?;
        let occupied = state.occupancy(self.target) as u32;
        let incoming = pack.member_count() as u32;

        if incoming > capacity.saturating_sub(occupied) {
            tracing::warn!(
                "Pack {} is trying to move to a full node {}, but this would cause the node to exceed its capacity. Rejected.",
                self.pack,
                self.target
            );
            return Ok(PackMoveOutcome::Rejected {
                target: self.target,
                capacity,
                occupied,
            });
        }

        let pack = state
            .pack_mut(self.pack)
            .ok_or(PackError::PackNotFound(self.pack))?;
        pack.place(self.target);
        state.world.add_pack(self.target, self.pack);

        tracing::info!("Pack {} moves to {}", self.pack, self.target);
        Ok(PackMoveOutcome::Moved {
            from,
            to: self.target,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (_, node) = placed_pack(state, self.pack)?;
        if state.world.packs_at(node).contains(&self.pack) {
            Ok(())
        } else {
            Err(PackError::OccupancyDesync {
                pack: self.pack,
                node,
            })
        }
    }
}

/// One hop along the shortest path toward `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackMoveTowardsAction {
    pub pack: PackId,
    pub destination: NodeId,
}

impl PackMoveTowardsAction {
    pub fn new(pack: PackId, destination: NodeId) -> Self {
        Self { pack, destination }
    }

    /// The hop this action would take, `None` when already there.
    fn next_hop(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Option<NodeId>, PackError> {
        let (_, from) = placed_pack(state, self.pack)?;
        if from == self.destination {
            return Ok(None);
        }
        let path = env
            .dungeon()
            .shortest_path(from, self.destination)
            .ok_or(PackError::Unreachable {
                pack: self.pack,
                from,
                to: self.destination,
            })?;
        // path[0] is the current node
        Ok(path.get(1).copied())
    }
}

impl ActionTransition for PackMoveTowardsAction {
    type Error = PackError;
    type Result = PackMoveOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !env.dungeon().contains(self.destination) {
            return Err(PackError::NodeNotFound(self.destination));
        }
        match self.next_hop(state, env)? {
            Some(hop) => PackMoveAction::new(self.pack, hop).pre_validate(state, env),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PackMoveOutcome, Self::Error> {
        match self.next_hop(state, env)? {
            Some(hop) => PackMoveAction::new(self.pack, hop).apply(state, env),
            None => {
                tracing::debug!(pack = %self.pack, at = %self.destination, "pack already at destination");
                Ok(PackMoveOutcome::AlreadyThere {
                    at: self.destination,
                })
            }
        }
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        PackMoveAction::new(self.pack, self.destination).post_validate(state, env)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackAttackOutcome {
    pub pack: PackId,
    pub strikes: Vec<Strike>,
    pub player_killed: bool,
}

/// Every live member hits the player once, in pack order, until the player dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackAttackAction {
    pub pack: PackId,
}

impl PackAttackAction {
    pub fn new(pack: PackId) -> Self {
        Self { pack }
    }
}

impl ActionTransition for PackAttackAction {
    type Error = PackError;
    type Result = PackAttackOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let pack = state
            .pack(self.pack)
            .ok_or(PackError::PackNotFound(self.pack))?;
        pack.get_monster()?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<PackAttackOutcome, Self::Error> {
        let GameState { packs, player, .. } = state;
        let pack = packs
            .get(&self.pack)
            .ok_or(PackError::PackNotFound(self.pack))?;

        let mut strikes = Vec::new();
        for monster in pack.members().iter().filter(|m| m.is_alive()) {
            strikes.push(strike(monster, &mut *player));
            if !player.is_alive() {
                break;
            }
        }

        Ok(PackAttackOutcome {
            pack: self.pack,
            strikes,
            player_killed: !player.is_alive(),
        })
    }
}

/// Pack retreat. Reserved; always fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackFleeAction {
    pub pack: PackId,
}

impl PackFleeAction {
    pub fn new(pack: PackId) -> Self {
        Self { pack }
    }
}

impl ActionTransition for PackFleeAction {
    type Error = PackError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        placed_pack(state, self.pack).map(|_| ())
    }

    fn apply(&self, _state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Err(PackError::NotImplemented("pack flee"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{DungeonGraph, Env, PcgRng};
    use crate::error::GameError;
    use crate::state::{CreatureId, Monster, MonsterId, Player};

    // N0 (level 0) - N1 (level 0) - N2 (level 1) - N3 (level 1, exit), N4 isolated
    fn graph(density: f64) -> DungeonGraph {
        DungeonGraph::builder()
            .node(NodeId(0), 0)
            .node(NodeId(1), 0)
            .node(NodeId(2), 1)
            .node(NodeId(3), 1)
            .node(NodeId(4), 1)
            .connect(NodeId(0), NodeId(1))
            .connect(NodeId(1), NodeId(2))
            .connect(NodeId(2), NodeId(3))
            .bridge(0, NodeId(1))
            .exit(NodeId(3))
            .density(density)
            .build()
            .unwrap()
    }

    fn pack(id: u32, hps: &[u32]) -> Pack {
        let members = hps
            .iter()
            .enumerate()
            .map(|(i, &hp)| Monster::new(MonsterId::new(PackId(id), i as u32), hp, 1))
            .collect();
        Pack::new(PackId(id), members)
    }

    fn state() -> GameState {
        GameState::new(Player::new(&GameConfig::default()))
    }

    fn run<T: ActionTransition>(
        action: &T,
        state: &mut GameState,
        graph: &DungeonGraph,
    ) -> Result<T::Result, T::Error> {
        let rng = PcgRng;
        let env = Env::new(graph, &rng, 0);
        let env = env.as_game_env();
        action.pre_validate(state, &env)?;
        let result = action.apply(state, &env)?;
        action.post_validate(state, &env)?;
        Ok(result)
    }

    #[test]
    fn move_into_room_relocates_pack_and_members() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[2, 2]), NodeId(0));

        let outcome = run(&PackMoveAction::new(PackId(1), NodeId(1)), &mut state, &graph).unwrap();

        assert_eq!(
            outcome,
            PackMoveOutcome::Moved {
                from: NodeId(0),
                to: NodeId(1)
            }
        );
        let moved = state.pack(PackId(1)).unwrap();
        assert_eq!(moved.location(), Some(NodeId(1)));
        assert!(moved.members().iter().all(|m| m.location == Some(NodeId(1))));
        assert_eq!(state.world.packs_at(NodeId(1)), &[PackId(1)]);
        // origin keeps its listing
        assert_eq!(state.world.packs_at(NodeId(0)), &[PackId(1)]);
    }

    #[test]
    fn full_node_rejects_and_changes_nothing() {
        // M = 2 at level 0: capacity 2, already hosting 2
        let graph = graph(2.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[3]), NodeId(0));
        state.spawn_pack(pack(2, &[1, 1]), NodeId(1));
        let before = state.clone();

        let outcome = run(&PackMoveAction::new(PackId(1), NodeId(1)), &mut state, &graph).unwrap();

        assert_eq!(
            outcome,
            PackMoveOutcome::Rejected {
                target: NodeId(1),
                capacity: 2,
                occupied: 2
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn non_adjacent_target_is_invalid() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[1]), NodeId(0));
        let before = state.clone();

        let err = run(&PackMoveAction::new(PackId(1), NodeId(3)), &mut state, &graph).unwrap_err();

        assert_eq!(
            err,
            PackError::InvalidMoveTarget {
                pack: PackId(1),
                from: NodeId(0),
                target: NodeId(3)
            }
        );
        assert_eq!(err.error_code(), "PACK_INVALID_MOVE_TARGET");
        assert_eq!(state, before);
    }

    #[test]
    fn move_towards_takes_one_hop() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[1]), NodeId(0));

        let outcome = run(
            &PackMoveTowardsAction::new(PackId(1), NodeId(3)),
            &mut state,
            &graph,
        )
        .unwrap();

        assert_eq!(
            outcome,
            PackMoveOutcome::Moved {
                from: NodeId(0),
                to: NodeId(1)
            }
        );
    }

    #[test]
    fn move_towards_own_node_is_a_no_op() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[1]), NodeId(2));
        let before = state.clone();

        let outcome = run(
            &PackMoveTowardsAction::new(PackId(1), NodeId(2)),
            &mut state,
            &graph,
        )
        .unwrap();

        assert_eq!(outcome, PackMoveOutcome::AlreadyThere { at: NodeId(2) });
        assert_eq!(state, before);
    }

    #[test]
    fn move_towards_unreachable_node_fails() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[1]), NodeId(0));

        let err = run(
            &PackMoveTowardsAction::new(PackId(1), NodeId(4)),
            &mut state,
            &graph,
        )
        .unwrap_err();

        assert_eq!(
            err,
            PackError::Unreachable {
                pack: PackId(1),
                from: NodeId(0),
                to: NodeId(4)
            }
        );
    }

    #[test]
    fn pack_attack_hits_in_member_order() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[2, 5, 1]), NodeId(0));

        let outcome = run(&PackAttackAction::new(PackId(1)), &mut state, &graph).unwrap();

        let attackers: Vec<_> = outcome.strikes.iter().map(|s| s.attacker).collect();
        assert_eq!(
            attackers,
            vec![
                CreatureId::Monster(MonsterId::new(PackId(1), 0)),
                CreatureId::Monster(MonsterId::new(PackId(1), 1)),
                CreatureId::Monster(MonsterId::new(PackId(1), 2)),
            ]
        );
        assert_eq!(state.player.hp(), 97);
        assert!(!outcome.player_killed);
    }

    #[test]
    fn pack_attack_stops_when_player_dies() {
        let graph = graph(3.0);
        let mut state = state();
        state.player.vitals.hp = 2;
        state.spawn_pack(pack(1, &[1, 1, 1, 1]), NodeId(0));

        let outcome = run(&PackAttackAction::new(PackId(1)), &mut state, &graph).unwrap();

        assert_eq!(outcome.strikes.len(), 2);
        assert!(outcome.player_killed);
        assert_eq!(state.player.hp(), 0);
    }

    #[test]
    fn pack_flee_is_not_implemented() {
        let graph = graph(3.0);
        let mut state = state();
        state.spawn_pack(pack(1, &[1]), NodeId(0));

        let err = run(&PackFleeAction::new(PackId(1)), &mut state, &graph).unwrap_err();
        assert_eq!(err, PackError::NotImplemented("pack flee"));
    }
}
