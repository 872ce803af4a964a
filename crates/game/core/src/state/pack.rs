use super::{Creature, Monster, MonsterId, NodeId, PackId};
use crate::config::GameConfig;
use crate::env::{GameEnv, compute_seed};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised by pack queries and pack actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("pack {0} not found")]
    PackNotFound(PackId),

    #[error("pack {0} has not been placed on a node")]
    Unplaced(PackId),

    #[error("node {0} is not part of the dungeon")]
    NodeNotFound(NodeId),

    #[error("pack {pack} cannot move from {from} to non-adjacent node {target}")]
    InvalidMoveTarget {
        pack: PackId,
        from: NodeId,
        target: NodeId,
    },

    #[error("pack {pack} has no route from {from} to {to}")]
    Unreachable {
        pack: PackId,
        from: NodeId,
        to: NodeId,
    },

    #[error("pack {0} has no live member")]
    NoLiveMember(PackId),

    #[error("pack {pack} is not listed at its node {node}")]
    OccupancyDesync { pack: PackId, node: NodeId },

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl GameError for PackError {
    fn severity(&self) -> ErrorSeverity {
        use PackError::*;
        match self {
            PackNotFound(_) | NodeNotFound(_) | InvalidMoveTarget { .. } => {
                ErrorSeverity::Validation
            }
            NoLiveMember(_) | Unreachable { .. } => ErrorSeverity::Recoverable,
            Unplaced(_) | OccupancyDesync { .. } | NotImplemented(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use PackError::*;
        match self {
            PackNotFound(_) => "PACK_NOT_FOUND",
            Unplaced(_) => "PACK_UNPLACED",
            NodeNotFound(_) => "PACK_NODE_NOT_FOUND",
            InvalidMoveTarget { .. } => "PACK_INVALID_MOVE_TARGET",
            Unreachable { .. } => "PACK_UNREACHABLE",
            NoLiveMember(_) => "PACK_NO_LIVE_MEMBER",
            OccupancyDesync { .. } => "PACK_OCCUPANCY_DESYNC",
            NotImplemented(_) => "PACK_NOT_IMPLEMENTED",
        }
    }
}

/// A group of monsters sharing one node and acting as a unit.
///
/// # Invariants
///
/// - `members` holds only monsters with HP > 0; insertion order is attack order
/// - once placed, every member's location equals the pack's location
/// - `starting_hp` is fixed at construction
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pack {
    id: PackId,
    members: Vec<Monster>,
    location: Option<NodeId>,
    starting_hp: u32,
}

impl Pack {
    /// Builds a pack from already constructed monsters.
    ///
    /// Members must carry this pack's id; members with zero HP are dropped.
    pub fn new(id: PackId, members: Vec<Monster>) -> Self {
        let members: Vec<Monster> = members
            .into_iter()
            .filter(|m| m.id.pack == id && m.is_alive())
            .collect();
        let starting_hp = members.iter().map(Creature::hp).sum();
        Self {
            id,
            members,
            location: None,
            starting_hp,
        }
    }

    /// Spawns `size` monsters with HP rolled from the session seed.
    pub fn spawn(id: PackId, size: u32, config: &GameConfig, env: &GameEnv<'_>) -> Self {
        let rng = env.rng();
        let members = (0..size)
            .map(|index| {
                let seed = compute_seed(env.seed(), u64::from(id.0), index, 0);
                let hp = rng.range(seed, config.monster_hp_min, config.monster_hp_max);
                Monster::new(
                    MonsterId::new(id, index),
                    hp,
                    config.monster_attack_rating,
                )
            })
            .collect();
        Self::new(id, members)
    }

    pub fn id(&self) -> PackId {
        self.id
    }

    pub fn members(&self) -> &[Monster] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn member(&self, id: MonsterId) -> Option<&Monster> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn member_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// Ids of members with HP > 0, in pack order.
    ///
    /// Returned as an owned snapshot so callers may remove members while
    /// walking it.
    pub fn live_member_ids(&self) -> Vec<MonsterId> {
        self.members
            .iter()
            .filter(|m| m.is_alive())
            .map(|m| m.id)
            .collect()
    }

    /// Removes a member, returning it. Removal is the monster's destruction.
    pub fn remove_member(&mut self, id: MonsterId) -> Option<Monster> {
        let index = self.members.iter().position(|m| m.id == id)?;
        Some(self.members.remove(index))
    }

    /// A pack without members is defeated and should leave its node.
    pub fn is_defeated(&self) -> bool {
        self.members.is_empty()
    }

    pub fn location(&self) -> Option<NodeId> {
        self.location
    }

    /// Puts the pack and every member on `node`.
    pub fn place(&mut self, node: NodeId) {
        self.location = Some(node);
        for member in &mut self.members {
            member.location = Some(node);
        }
    }

    /// Sum of member HP at construction.
    pub fn starting_hp(&self) -> u32 {
        self.starting_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.members.iter().map(Creature::hp).sum()
    }

    /// First member with HP > 0 in pack order.
    ///
    /// # Errors
    ///
    /// Returns `PackError::NoLiveMember` once the pack is exhausted.
    pub fn get_monster(&self) -> Result<&Monster, PackError> {
        self.members
            .iter()
            .find(|m| m.is_alive())
            .ok_or(PackError::NoLiveMember(self.id))
    }
}
