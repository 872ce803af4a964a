use std::fmt;

/// Handle to a node of the dungeon graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Handle to a pack in the [`GameState`](super::GameState) roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackId(pub u32);

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pack{}", self.0)
    }
}

/// Unique identifier of an item, wherever it currently lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item{}", self.0)
    }
}

/// A monster is addressed through its owning pack plus its spawn index.
///
/// The index is assigned once at spawn and never reused, so it stays valid
/// while earlier members of the pack die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId {
    pub pack: PackId,
    pub index: u32,
}

impl MonsterId {
    pub const fn new(pack: PackId, index: u32) -> Self {
        Self { pack, index }
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.pack, self.index)
    }
}

/// Identifier for any creature taking part in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreatureId {
    /// Reserved identifier for the controllable player character.
    Player,
    Monster(MonsterId),
}

impl CreatureId {
    pub const PLAYER: Self = Self::Player;

    /// Returns true if this identifier denotes the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }

    pub const fn as_monster(self) -> Option<MonsterId> {
        match self {
            Self::Monster(id) => Some(id),
            Self::Player => None,
        }
    }
}

impl From<MonsterId> for CreatureId {
    fn from(id: MonsterId) -> Self {
        Self::Monster(id)
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Monster(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creature_ids_render_like_log_lines() {
        let monster = MonsterId::new(PackId(3), 1);
        assert_eq!(CreatureId::PLAYER.to_string(), "player");
        assert_eq!(CreatureId::from(monster).to_string(), "pack3_1");
        assert_eq!(NodeId(12).to_string(), "N12");
    }
}
