//! Demo dungeon used by the `rogue` binary.
//!
//! Every zone is a diamond of four nodes; the last node of a zone is its
//! bridge and links to the first node of the next zone. The final zone ends
//! in the exit instead of a bridge.
//!
//! ```text
//!      b           b
//!     / \         / \
//!    a   d ----- a   d ...
//!     \ /         \ /
//!      c           c
//! ```

use rogue_core::{
    DungeonGraph, GameConfig, GameEnv, GameState, GraphError, Item, ItemId, ItemKind, NodeId,
    Pack, PackId, Player, compute_seed,
};

const NODES_PER_ZONE: u32 = 4;

// seed streams, kept apart from the pack ids used by `Pack::spawn`
const STREAM_PACK_SIZE: u64 = 1 << 32;
const STREAM_ITEM: u64 = (1 << 32) + 1;

/// Builds zones `0..=difficulty`; the exit is the last node of the final zone.
pub fn build_dungeon(difficulty: u32, density: f64) -> Result<DungeonGraph, GraphError> {
    let mut builder = DungeonGraph::builder();

    for level in 0..=difficulty {
        let [a, b, c, d] = zone_nodes(level);
        builder = builder
            .node(a, level)
            .node(b, level)
            .node(c, level)
            .node(d, level)
            .connect(a, b)
            .connect(a, c)
            .connect(b, d)
            .connect(c, d);

        if level > 0 {
            let [_, _, _, previous_bridge] = zone_nodes(level - 1);
            builder = builder.connect(previous_bridge, a);
        }
        if level < difficulty {
            builder = builder.bridge(level, d);
        } else {
            builder = builder.exit(d);
        }
    }

    builder
        .difficulty_level(difficulty)
        .density(density)
        .build()
}

/// Creates the session state: the player on the first node, one pack on each
/// side room, and an item in most side rooms.
pub fn populate(env: &GameEnv<'_>, config: &GameConfig) -> GameState {
    let dungeon = env.dungeon();
    let rng = env.rng();

    let mut state = GameState::new(Player::new(config));
    let [start, ..] = zone_nodes(0);
    state.place_player(start);

    let mut next_pack = 1;
    let mut next_item = 1;
    for level in 0..=dungeon.difficulty_level() {
        let [_, b, c, _] = zone_nodes(level);
        for node in [b, c] {
            let capacity = dungeon.capacity(node).unwrap_or(1).max(1);
            let size_seed = compute_seed(env.seed(), STREAM_PACK_SIZE, node.0, 0);
            let size = rng.range(size_seed, 1, capacity.min(level + 2));

            let pack = Pack::spawn(PackId(next_pack), size, config, env);
            tracing::debug!(pack = %pack.id(), %node, members = pack.member_count(), "spawned pack");
            state.spawn_pack(pack, node);
            next_pack += 1;

            let item_seed = compute_seed(env.seed(), STREAM_ITEM, node.0, 0);
            let kind = match rng.roll_die(item_seed, 4) {
                1 => ItemKind::MagicCrystal,
                2 | 3 => ItemKind::HealingPotion {
                    hp_value: rng.range(item_seed ^ 1, 5, 25),
                },
                _ => continue,
            };
            state
                .world
                .drop_item(node, Item::new(ItemId(next_item), kind));
            next_item += 1;
        }
    }

    state
}

fn zone_nodes(level: u32) -> [NodeId; 4] {
    let base = level * NODES_PER_ZONE;
    [
        NodeId(base),
        NodeId(base + 1),
        NodeId(base + 2),
        NodeId(base + 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::{DungeonOracle, Env, PcgRng};

    #[test]
    fn zones_chain_bridge_to_entry() {
        let graph = build_dungeon(2, 3.0).unwrap();

        assert_eq!(graph.node_count(), 12);
        assert_eq!(graph.bridge(0), Some(NodeId(3)));
        assert_eq!(graph.bridge(1), Some(NodeId(7)));
        assert_eq!(graph.exit_node(), NodeId(11));
        assert_eq!(graph.difficulty_level(), 2);
        assert!(graph.is_neighbor(NodeId(3), NodeId(4)));

        let path = graph.shortest_path(NodeId(0), NodeId(11)).unwrap();
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn population_is_seeded_and_within_capacity() {
        let graph = build_dungeon(3, 2.0).unwrap();
        let rng = PcgRng;
        let env = Env::new(&graph, &rng, 99);
        let config = GameConfig::default();

        let first = populate(&env.as_game_env(), &config);
        let second = populate(&env.as_game_env(), &config);
        assert_eq!(first, second);

        assert_eq!(first.player.location, Some(NodeId(0)));
        assert_eq!(first.packs.len(), 8);
        for node in graph.node_ids() {
            let capacity = graph.capacity(node).unwrap() as usize;
            assert!(first.occupancy(node) <= capacity);
        }
    }
}
