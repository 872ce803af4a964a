use crate::state::NodeId;

/// Read-only view of the dungeon graph.
///
/// The graph is built elsewhere; the simulation only queries topology,
/// zoning and routes through this trait. Mutable per-node facts (which packs
/// and items sit on a node) live in [`WorldState`](crate::state::WorldState).
pub trait DungeonOracle: Send + Sync {
    /// Zone level of `node`, or `None` if the node is not part of the graph.
    fn level(&self, node: NodeId) -> Option<u32>;

    /// Adjacent nodes in their stored order. Unknown nodes have no neighbors.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    /// Shortest route from `from` to `to`, both endpoints included.
    ///
    /// The first element is always `from`. Returns `None` when `to` cannot be
    /// reached.
    fn shortest_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>>;

    /// The designated bridge leading out of zone `level`.
    fn bridge(&self, level: u32) -> Option<NodeId>;

    fn exit_node(&self) -> NodeId;

    /// Index of the final zone.
    fn difficulty_level(&self) -> u32;

    /// Monster density constant `M` used by [`capacity`](Self::capacity).
    fn density(&self) -> f64;

    fn contains(&self, node: NodeId) -> bool {
        self.level(node).is_some()
    }

    fn is_neighbor(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Maximum number of monsters `node` may host: `floor(M * (level + 1))`.
    fn capacity(&self, node: NodeId) -> Option<u32> {
        let level = self.level(node)?;
        Some((self.density() * (f64::from(level) + 1.0)).floor() as u32)
    }
}
