use super::{Bag, Creature, CreatureId, NodeId, Vitals};
use crate::command::CommandLog;
use crate::config::GameConfig;

/// The sole human-controlled creature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub vitals: Vitals,
    /// Maximum HP; healing never goes above it.
    pub hp_base: u32,
    pub location: Option<NodeId>,
    /// One-shot: set by a magic crystal, cleared by the next attack.
    pub accelerated: bool,
    /// Monsters defeated so far. Only ever increases.
    pub kill_points: u32,
    pub bag: Bag,
    /// Replay queue and record of every command issued.
    pub commands: CommandLog,
}

impl Player {
    pub const DEFAULT_NAME: &'static str = "Player";

    pub fn new(config: &GameConfig) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_owned(),
            vitals: Vitals::new(config.player_hp_base, config.player_attack_rating),
            hp_base: config.player_hp_base,
            location: None,
            accelerated: false,
            kill_points: 0,
            bag: Bag::new(),
            commands: CommandLog::new(),
        }
    }

    /// Restores up to `amount` HP, capped at `hp_base`. Returns HP gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.vitals.hp;
        self.vitals.hp = before.saturating_add(amount).min(self.hp_base);
        self.vitals.hp.saturating_sub(before)
    }
}

impl Creature for Player {
    fn id(&self) -> CreatureId {
        CreatureId::PLAYER
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
