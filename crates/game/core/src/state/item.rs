use super::{ItemId, Player};

/// Item categories the simulation distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Restores up to `hp_value` HP, never above the player's base HP.
    HealingPotion { hp_value: u32 },
    /// Arms the player's one-shot accelerated attack.
    MagicCrystal,
    /// Collectable with no use effect.
    Trinket,
}

/// What using an item did to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    Healed { amount: u32 },
    Accelerated,
    Nothing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    /// Set once the item has been used; used items are never usable again.
    pub used: bool,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            used: false,
        }
    }

    pub fn healing_potion(id: ItemId, hp_value: u32) -> Self {
        Self::new(id, ItemKind::HealingPotion { hp_value })
    }

    pub fn magic_crystal(id: ItemId) -> Self {
        Self::new(id, ItemKind::MagicCrystal)
    }

    pub fn is_magic_crystal(&self) -> bool {
        matches!(self.kind, ItemKind::MagicCrystal)
    }

    pub fn is_healing_potion(&self) -> bool {
        matches!(self.kind, ItemKind::HealingPotion { .. })
    }

    /// Healing value for potions, zero for everything else.
    pub fn hp_value(&self) -> u32 {
        match self.kind {
            ItemKind::HealingPotion { hp_value } => hp_value,
            _ => 0,
        }
    }

    /// Applies the item's effect to `player` and marks it used.
    pub fn apply_to(&mut self, player: &mut Player) -> ItemEffect {
        self.used = true;
        match self.kind {
            ItemKind::HealingPotion { hp_value } => ItemEffect::Healed {
                amount: player.heal(hp_value),
            },
            ItemKind::MagicCrystal => {
                player.accelerated = true;
                ItemEffect::Accelerated
            }
            ItemKind::Trinket => ItemEffect::Nothing,
        }
    }
}
