#![allow(dead_code)]

use rogue_core::{
    DungeonGraph, Env, GameConfig, GameState, Item, ItemId, Monster, MonsterId, NodeId, Pack,
    PackId, PcgRng, Player,
};

pub const SEED: u64 = 0x5eed_2024;

/// Three zones:
///
/// ```text
///   level 0            level 1                level 2
///   N0 - N1 - N3(b0) - N4 - N5(b1) ---------- N7(exit)
///    \       /          \     /
///     N2 ---             N6 --
/// ```
pub fn dungeon() -> DungeonGraph {
    DungeonGraph::builder()
        .node(NodeId(0), 0)
        .node(NodeId(1), 0)
        .node(NodeId(2), 0)
        .node(NodeId(3), 0)
        .node(NodeId(4), 1)
        .node(NodeId(5), 1)
        .node(NodeId(6), 1)
        .node(NodeId(7), 2)
        .connect(NodeId(0), NodeId(1))
        .connect(NodeId(0), NodeId(2))
        .connect(NodeId(1), NodeId(3))
        .connect(NodeId(2), NodeId(3))
        .connect(NodeId(3), NodeId(4))
        .connect(NodeId(3), NodeId(6))
        .connect(NodeId(4), NodeId(5))
        .connect(NodeId(6), NodeId(5))
        .connect(NodeId(5), NodeId(7))
        .bridge(0, NodeId(3))
        .bridge(1, NodeId(5))
        .exit(NodeId(7))
        .build()
        .expect("fixture dungeon is valid")
}

pub fn player_at(node: NodeId) -> GameState {
    let mut state = GameState::new(Player::new(&GameConfig::default()));
    state.place_player(node);
    state
}

/// Pack whose members have exactly the given HP values.
pub fn pack(id: u32, hps: &[u32]) -> Pack {
    let members = hps
        .iter()
        .enumerate()
        .map(|(i, &hp)| Monster::new(MonsterId::new(PackId(id), i as u32), hp, 1))
        .collect();
    Pack::new(PackId(id), members)
}

/// A populated session: seeded packs on the way to the exit and a few items.
pub fn seeded_session(graph: &DungeonGraph, seed: u64) -> GameState {
    let rng = PcgRng;
    let env = Env::new(graph, &rng, seed);
    let env = env.as_game_env();
    let config = GameConfig::default();

    let mut state = player_at(NodeId(0));
    state.spawn_pack(Pack::spawn(PackId(1), 2, &config, &env), NodeId(1));
    state.spawn_pack(Pack::spawn(PackId(2), 3, &config, &env), NodeId(4));
    state.spawn_pack(Pack::spawn(PackId(3), 2, &config, &env), NodeId(5));
    state
        .world
        .drop_item(NodeId(1), Item::healing_potion(ItemId(1), 20));
    state.world.drop_item(NodeId(3), Item::magic_crystal(ItemId(2)));
    state
}
