//! Mutable simulation state.
//!
//! [`GameState`] owns the pack roster (packs own their monsters), the player
//! and the per-node occupancy in [`WorldState`]. Cross references are plain
//! ids: a monster names its pack, a node lists pack ids, nobody holds a
//! pointer to anybody else.
mod common;
mod creature;
mod inventory;
mod item;
mod monster;
mod pack;
mod player;
mod world;

use std::collections::BTreeMap;

pub use common::{CreatureId, ItemId, MonsterId, NodeId, PackId};
pub use creature::{Creature, Vitals};
pub use inventory::Bag;
pub use item::{Item, ItemEffect, ItemKind};
pub use monster::Monster;
pub use pack::{Pack, PackError};
pub use player::Player;
pub use world::{NodeState, WorldState};

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub world: WorldState,
    pub packs: BTreeMap<PackId, Pack>,
    pub player: Player,
    /// Number of turns resolved so far.
    pub turn: u64,
}

impl GameState {
    pub fn new(player: Player) -> Self {
        Self {
            world: WorldState::new(),
            packs: BTreeMap::new(),
            player,
            turn: 0,
        }
    }

    /// Sets the player's node without collecting anything there.
    pub fn place_player(&mut self, node: NodeId) {
        self.player.location = Some(node);
    }

    /// Puts `pack` on `node` and adds it to the roster.
    ///
    /// Capacity is not checked: this is dungeon setup, not movement. A pack
    /// with the same id is replaced and unlisted from its old node.
    pub fn spawn_pack(&mut self, mut pack: Pack, node: NodeId) {
        pack.place(node);
        let id = pack.id();
        if let Some(old) = self.packs.insert(id, pack) {
            if let Some(old_node) = old.location() {
                self.world.remove_pack(old_node, id);
            }
        }
        self.world.add_pack(node, id);
    }

    pub fn pack(&self, id: PackId) -> Option<&Pack> {
        self.packs.get(&id)
    }

    pub fn pack_mut(&mut self, id: PackId) -> Option<&mut Pack> {
        self.packs.get_mut(&id)
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.packs.get(&id.pack)?.member(id)
    }

    /// Packs listed at `node` that actually stand there, in listing order.
    pub fn packs_present(&self, node: NodeId) -> impl Iterator<Item = &Pack> + '_ {
        self.world
            .packs_at(node)
            .iter()
            .filter_map(|id| self.packs.get(id))
            .filter(move |pack| pack.location() == Some(node))
    }

    /// Number of monsters currently on `node`. Recomputed on every call.
    pub fn occupancy(&self, node: NodeId) -> usize {
        self.packs_present(node).map(Pack::member_count).sum()
    }

    /// True if at least one pack stands on `node`.
    pub fn is_contested(&self, node: NodeId) -> bool {
        self.packs_present(node).next().is_some()
    }

    /// Drops defeated packs listed at `node` from the node and the roster.
    pub fn remove_defeated_packs(&mut self, node: NodeId) -> Vec<PackId> {
        let defeated: Vec<PackId> = self
            .world
            .packs_at(node)
            .iter()
            .copied()
            .filter(|id| self.packs.get(id).is_none_or(Pack::is_defeated))
            .collect();
        for &id in &defeated {
            self.world.remove_pack(node, id);
            self.packs.remove(&id);
            tracing::info!("Pack {} is defeated and leaves {}", id, node);
        }
        defeated
    }
}
