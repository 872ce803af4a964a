use super::{CreatureId, NodeId};

/// Combat-relevant numbers shared by every creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    /// Current hit points. Clamped at zero, never negative.
    pub hp: u32,
    /// Damage dealt per hit.
    pub attack_rating: u32,
}

impl Vitals {
    pub const fn new(hp: u32, attack_rating: u32) -> Self {
        Self { hp, attack_rating }
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Anything that can attack and be attacked.
///
/// Implemented by [`Player`](super::Player) and [`Monster`](super::Monster);
/// the combat rules in [`crate::combat`] only talk to this trait.
pub trait Creature {
    fn id(&self) -> CreatureId;

    fn name(&self) -> &str;

    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Node the creature stands on, `None` before it is placed.
    fn location(&self) -> Option<NodeId>;

    fn hp(&self) -> u32 {
        self.vitals().hp
    }

    fn attack_rating(&self) -> u32 {
        self.vitals().attack_rating
    }

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }
}
