use std::collections::BTreeMap;

use super::{Item, NodeId, PackId};

/// Mutable facts about a single node: who is here and what lies here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    /// Packs listed at this node. The node tracks them, it does not own them.
    pub packs: Vec<PackId>,
    /// Items lying here, in drop order.
    pub items: Vec<Item>,
}

/// Per-node occupancy for the whole dungeon.
///
/// Nodes without any recorded pack or item have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    nodes: BTreeMap<NodeId, NodeState>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeState {
        self.nodes.entry(id).or_default()
    }

    /// Pack ids listed at `node`, in arrival order.
    pub fn packs_at(&self, node: NodeId) -> &[PackId] {
        self.nodes
            .get(&node)
            .map(|n| n.packs.as_slice())
            .unwrap_or(&[])
    }

    /// Lists `pack` at `node`. Returns false if it was already listed there.
    pub fn add_pack(&mut self, node: NodeId, pack: PackId) -> bool {
        let packs = &mut self.node_mut(node).packs;
        if packs.contains(&pack) {
            return false;
        }
        packs.push(pack);
        true
    }

    /// Removes `pack` from `node`'s listing. Returns false if it was not listed.
    pub fn remove_pack(&mut self, node: NodeId, pack: PackId) -> bool {
        let Some(state) = self.nodes.get_mut(&node) else {
            return false;
        };
        let Some(index) = state.packs.iter().position(|&p| p == pack) else {
            return false;
        };
        state.packs.remove(index);
        true
    }

    pub fn items_at(&self, node: NodeId) -> &[Item] {
        self.nodes
            .get(&node)
            .map(|n| n.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn drop_item(&mut self, node: NodeId, item: Item) {
        self.node_mut(node).items.push(item);
    }

    /// Takes every item lying on `node`, preserving node order.
    pub fn take_items(&mut self, node: NodeId) -> Vec<Item> {
        self.nodes
            .get_mut(&node)
            .map(|n| std::mem::take(&mut n.items))
            .unwrap_or_default()
    }
}
