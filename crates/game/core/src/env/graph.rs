//! In-memory dungeon graph with BFS routing.
//!
//! `DungeonGraph` is the stock [`DungeonOracle`]: an adjacency list keyed by
//! [`NodeId`], a zone level per node, one bridge per zone and an exit. Routes
//! are computed with breadth-first search over neighbors in stored order, so
//! ties between equally short routes always resolve the same way.

use std::collections::{BTreeMap, VecDeque};

use super::DungeonOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::NodeId;

/// Errors raised while assembling a [`DungeonGraph`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("node {0} referenced before it was declared")]
    UnknownNode(NodeId),

    #[error("node {0} declared twice")]
    DuplicateNode(NodeId),

    #[error("dungeon has no exit node")]
    MissingExit,

    #[error("density {0} must be a positive finite number")]
    InvalidDensity(f64),
}

impl GameError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode(_) => "GRAPH_UNKNOWN_NODE",
            Self::DuplicateNode(_) => "GRAPH_DUPLICATE_NODE",
            Self::MissingExit => "GRAPH_MISSING_EXIT",
            Self::InvalidDensity(_) => "GRAPH_INVALID_DENSITY",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct GraphNode {
    level: u32,
    neighbors: Vec<NodeId>,
}

/// Zoned, undirected dungeon graph.
#[derive(Clone, Debug, PartialEq)]
pub struct DungeonGraph {
    nodes: BTreeMap<NodeId, GraphNode>,
    bridges: BTreeMap<u32, NodeId>,
    exit: NodeId,
    difficulty_level: u32,
    density: f64,
}

impl DungeonGraph {
    pub fn builder() -> DungeonGraphBuilder {
        DungeonGraphBuilder::default()
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn bfs(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let mut parents: BTreeMap<NodeId, NodeId> = BTreeMap::new();
        let mut queue = VecDeque::from([from]);
        parents.insert(from, from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut path = vec![to];
                let mut cursor = to;
                while cursor != from {
                    cursor = parents[&cursor];
                    path.push(cursor);
                }
                path.reverse();
                return Some(path);
            }
            for &next in self.neighbors(current) {
                if !parents.contains_key(&next) {
                    parents.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

impl DungeonOracle for DungeonGraph {
    fn level(&self, node: NodeId) -> Option<u32> {
        self.nodes.get(&node).map(|n| n.level)
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.neighbors.as_slice())
            .unwrap_or(&[])
    }

    fn shortest_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.bfs(from, to)
    }

    fn bridge(&self, level: u32) -> Option<NodeId> {
        self.bridges.get(&level).copied()
    }

    fn exit_node(&self) -> NodeId {
        self.exit
    }

    fn difficulty_level(&self) -> u32 {
        self.difficulty_level
    }

    fn density(&self) -> f64 {
        self.density
    }
}

/// Incremental builder for [`DungeonGraph`].
///
/// Nodes must be declared before they are connected, bridged or used as
/// the exit. Connections are undirected and keep insertion order on both
/// endpoints.
#[derive(Clone, Debug, Default)]
pub struct DungeonGraphBuilder {
    nodes: BTreeMap<NodeId, GraphNode>,
    bridges: BTreeMap<u32, NodeId>,
    exit: Option<NodeId>,
    difficulty_level: Option<u32>,
    density: Option<f64>,
    error: Option<GraphError>,
}

impl DungeonGraphBuilder {
    pub const DEFAULT_DENSITY: f64 = 3.0;

    pub fn node(mut self, id: NodeId, level: u32) -> Self {
        if self.nodes.contains_key(&id) {
            self.fail(GraphError::DuplicateNode(id));
        } else {
            self.nodes.insert(
                id,
                GraphNode {
                    level,
                    neighbors: Vec::new(),
                },
            );
        }
        self
    }

    pub fn connect(mut self, a: NodeId, b: NodeId) -> Self {
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                self.fail(GraphError::UnknownNode(id));
                return self;
            }
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(node) = self.nodes.get_mut(&from) {
                if !node.neighbors.contains(&to) {
                    node.neighbors.push(to);
                }
            }
        }
        self
    }

    /// Marks `node` as the bridge leading out of zone `level`.
    pub fn bridge(mut self, level: u32, node: NodeId) -> Self {
        if self.nodes.contains_key(&node) {
            self.bridges.insert(level, node);
        } else {
            self.fail(GraphError::UnknownNode(node));
        }
        self
    }

    pub fn exit(mut self, node: NodeId) -> Self {
        if self.nodes.contains_key(&node) {
            self.exit = Some(node);
        } else {
            self.fail(GraphError::UnknownNode(node));
        }
        self
    }

    /// Overrides the final zone index. Defaults to the exit node's level.
    pub fn difficulty_level(mut self, level: u32) -> Self {
        self.difficulty_level = Some(level);
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn build(self) -> Result<DungeonGraph, GraphError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let exit = self.exit.ok_or(GraphError::MissingExit)?;
        let density = self.density.unwrap_or(Self::DEFAULT_DENSITY);
        if !density.is_finite() || density <= 0.0 {
            return Err(GraphError::InvalidDensity(density));
        }
        let difficulty_level = self
            .difficulty_level
            .unwrap_or_else(|| self.nodes.get(&exit).map_or(0, |n| n.level));

        Ok(DungeonGraph {
            nodes: self.nodes,
            bridges: self.bridges,
            exit,
            difficulty_level,
            density,
        })
    }

    fn fail(&mut self, error: GraphError) {
        // first failure wins
        self.error.get_or_insert(error);
    }
}
