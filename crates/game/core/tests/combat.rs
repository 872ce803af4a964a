mod common;

use common::{dungeon, pack, player_at};
use rogue_core::{
    Action, ActionResult, Command, Creature, Env, GameEngine, Item, ItemId, NodeId,
    PackAttackAction, PackId, PackMoveAction, PackMoveOutcome, PcgRng, PlayerTurn,
};

#[test]
fn crystal_then_attack_wipes_a_fragile_pack() {
    let graph = dungeon();
    let rng = PcgRng;
    let env = Env::new(&graph, &rng, 0);
    let mut state = player_at(NodeId(0));
    state.player.bag.push(Item::magic_crystal(ItemId(1)));
    state.spawn_pack(pack(1, &[2, 1, 3]), NodeId(0));

    let mut engine = GameEngine::new(&mut state);
    let crystal = engine
        .play_turn(env.as_game_env(), Command::UseCrystal)
        .unwrap();
    let attack = engine.play_turn(env.as_game_env(), Command::Attack).unwrap();

    // the pack answers the crystal turn but is gone before it can answer the attack
    assert_eq!(crystal.retaliation[0].strikes.len(), 3);
    let PlayerTurn::Acted(ActionResult::PlayerAttack(outcome)) = &attack.player else {
        panic!("expected an attack, got {:?}", attack.player);
    };
    assert_eq!(outcome.killed.len(), 3);
    assert!(outcome.pack_defeated);
    assert_eq!(attack.defeated_packs, vec![PackId(1)]);
    assert!(attack.retaliation.is_empty());

    assert_eq!(state.player.kill_points, 3);
    assert!(!state.player.accelerated);
    assert_eq!(state.player.hp(), 97);
    assert!(state.pack(PackId(1)).is_none());
}

#[test]
fn pack_move_into_a_full_node_is_rejected() {
    // density 2 at level 0 gives capacity 2
    let graph = rogue_core::DungeonGraph::builder()
        .node(NodeId(0), 0)
        .node(NodeId(1), 0)
        .connect(NodeId(0), NodeId(1))
        .exit(NodeId(1))
        .density(2.0)
        .build()
        .unwrap();
    let rng = PcgRng;
    let env = Env::new(&graph, &rng, 0);
    let mut state = player_at(NodeId(0));
    state.spawn_pack(pack(1, &[4, 4]), NodeId(1));
    state.spawn_pack(pack(2, &[4]), NodeId(0));
    let before = state.clone();

    let result = GameEngine::new(&mut state)
        .execute(
            env.as_game_env(),
            &Action::from(PackMoveAction::new(PackId(2), NodeId(1))),
        )
        .unwrap();

    assert_eq!(
        result,
        ActionResult::PackMove(PackMoveOutcome::Rejected {
            target: NodeId(1),
            capacity: 2,
            occupied: 2
        })
    );
    assert_eq!(state, before);
}

#[test]
fn retaliation_stops_once_the_player_is_dead() {
    let graph = dungeon();
    let rng = PcgRng;
    let env = Env::new(&graph, &rng, 0);
    let mut state = player_at(NodeId(0));
    state.player.vitals.hp = 3;
    state.spawn_pack(pack(1, &[6, 6]), NodeId(0));
    state.spawn_pack(pack(2, &[6, 6]), NodeId(0));

    let mut engine = GameEngine::new(&mut state);
    let report = engine.play_turn(env.as_game_env(), Command::Attack).unwrap();

    assert_eq!(report.status, rogue_core::GameStatus::PlayerDied);
    let strikes: usize = report.retaliation.iter().map(|r| r.strikes.len()).sum();
    assert_eq!(strikes, 3);
    assert!(report.retaliation.last().unwrap().player_killed);
    assert_eq!(state.player.hp(), 0);
}

#[test]
fn pack_attack_on_an_exhausted_pack_is_refused() {
    let graph = dungeon();
    let rng = PcgRng;
    let env = Env::new(&graph, &rng, 0);
    let mut state = player_at(NodeId(0));
    let mut empty = pack(1, &[1]);
    empty.remove_member(rogue_core::MonsterId::new(PackId(1), 0));
    state.spawn_pack(empty, NodeId(0));

    let err = GameEngine::new(&mut state)
        .execute(env.as_game_env(), &PackAttackAction::new(PackId(1)).into())
        .unwrap_err();

    assert_eq!(rogue_core::GameError::error_code(&err), "PACK_NO_LIVE_MEMBER");
    assert_eq!(err.phase(), rogue_core::TransitionPhase::PreValidate);
}
