use super::{Creature, CreatureId, MonsterId, NodeId, PackId, Vitals};

/// A single pack member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub vitals: Vitals,
    pub location: Option<NodeId>,
}

impl Monster {
    pub const DEFAULT_NAME: &'static str = "Orc";

    pub fn new(id: MonsterId, hp: u32, attack_rating: u32) -> Self {
        Self {
            id,
            name: Self::DEFAULT_NAME.to_owned(),
            vitals: Vitals::new(hp, attack_rating),
            location: None,
        }
    }

    /// The pack this monster belongs to for its whole lifetime.
    pub fn pack(&self) -> PackId {
        self.id.pack
    }

    pub fn set_hp(&mut self, hp: u32) {
        self.vitals.hp = hp;
    }
}

impl Creature for Monster {
    fn id(&self) -> CreatureId {
        CreatureId::Monster(self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn location(&self) -> Option<NodeId> {
        self.location
    }
}
