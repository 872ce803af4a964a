mod common;

use common::{pack, player_at};
use proptest::prelude::*;
use rogue_core::{
    ActionResult, ActionTransition, Creature, DungeonGraph, DungeonOracle, Env, GameEngine,
    MonsterId, NodeId, PackId, PackMoveAction, PackMoveOutcome, PcgRng, PlayerAttackAction,
    FleeOutcome, PlayerFleeAction, apply_damage,
};

fn line(density: f64) -> DungeonGraph {
    DungeonGraph::builder()
        .node(NodeId(0), 0)
        .node(NodeId(1), 1)
        .connect(NodeId(0), NodeId(1))
        .exit(NodeId(1))
        .density(density)
        .build()
        .unwrap()
}

/// N0 in the middle of three leaves.
fn star() -> DungeonGraph {
    DungeonGraph::builder()
        .node(NodeId(0), 0)
        .node(NodeId(1), 0)
        .node(NodeId(2), 0)
        .node(NodeId(3), 0)
        .connect(NodeId(0), NodeId(1))
        .connect(NodeId(0), NodeId(2))
        .connect(NodeId(0), NodeId(3))
        .exit(NodeId(3))
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_damage_clamps_at_zero(hp in 0u32..1_000, rating in 0u32..1_000) {
        let after = apply_damage(hp, rating);
        prop_assert!(after <= hp);
        prop_assert_eq!(after, if rating >= hp { 0 } else { hp - rating });
    }

    #[test]
    fn prop_pack_move_never_overfills(
        density in 1u32..5,
        hosted in prop::collection::vec(1u32..7, 0..6),
        incoming in prop::collection::vec(1u32..7, 1..6),
    ) {
        let graph = line(f64::from(density));
        let rng = PcgRng;
        let env = Env::new(&graph, &rng, 0);
        let mut state = player_at(NodeId(0));
        if !hosted.is_empty() {
            state.spawn_pack(pack(1, &hosted), NodeId(1));
        }
        state.spawn_pack(pack(2, &incoming), NodeId(0));
        let before = state.clone();
        let capacity = graph.capacity(NodeId(1)).unwrap() as usize;

        let result = GameEngine::new(&mut state)
            .execute(env.as_game_env(), &PackMoveAction::new(PackId(2), NodeId(1)).into())
            .unwrap();

        match result {
            ActionResult::PackMove(PackMoveOutcome::Moved { .. }) => {
                prop_assert!(state.occupancy(NodeId(1)) <= capacity);
                prop_assert!(hosted.len() + incoming.len() <= capacity);
            }
            ActionResult::PackMove(PackMoveOutcome::Rejected { .. }) => {
                prop_assert!(hosted.len() + incoming.len() > capacity);
                prop_assert_eq!(&state, &before);
            }
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }

    #[test]
    fn prop_accelerated_attack_kills_exactly_the_fragile(
        hps in prop::collection::vec(1u32..12, 1..8),
        target in 0usize..8,
    ) {
        let graph = line(3.0);
        let rng = PcgRng;
        let env = Env::new(&graph, &rng, 0);
        let env = env.as_game_env();
        let mut state = player_at(NodeId(0));
        state.spawn_pack(pack(1, &hps), NodeId(0));
        state.player.accelerated = true;

        let target = MonsterId::new(PackId(1), (target % hps.len()) as u32);
        let action = PlayerAttackAction::new(target);
        action.pre_validate(&state, &env).unwrap();
        let outcome = action.apply(&mut state, &env).unwrap();

        let rating = state.player.attack_rating();
        let fragile = hps.iter().filter(|&&hp| hp <= rating).count();
        prop_assert_eq!(outcome.killed.len(), fragile);
        prop_assert_eq!(state.player.kill_points as usize, fragile);
        prop_assert!(!state.player.accelerated);
        let survivors = state.pack(PackId(1)).unwrap().members();
        prop_assert_eq!(survivors.len(), hps.len() - fragile);
        prop_assert!(survivors.iter().all(|m| m.hp() > 0));
    }

    #[test]
    fn prop_flee_succeeds_iff_a_neighbor_is_free(guarded in prop::collection::vec(any::<bool>(), 3)) {
        let graph = star();
        let rng = PcgRng;
        let env = Env::new(&graph, &rng, 0);
        let mut state = player_at(NodeId(0));
        for (i, &guard) in guarded.iter().enumerate() {
            if guard {
                let id = i as u32 + 1;
                state.spawn_pack(pack(id, &[3]), NodeId(id));
            }
        }

        let result = GameEngine::new(&mut state)
            .execute(env.as_game_env(), &PlayerFleeAction.into())
            .unwrap();

        let first_free = guarded.iter().position(|&g| !g).map(|i| NodeId(i as u32 + 1));
        match (result, first_free) {
            (ActionResult::PlayerFlee(FleeOutcome::Fled { to, .. }), Some(free)) => {
                prop_assert_eq!(to, free);
                prop_assert_eq!(state.player.location, Some(free));
            }
            (ActionResult::PlayerFlee(FleeOutcome::Cornered { at }), None) => {
                prop_assert_eq!(at, NodeId(0));
            }
            (other, expected) => prop_assert!(false, "got {:?}, expected refuge {:?}", other, expected),
        }
    }
}
