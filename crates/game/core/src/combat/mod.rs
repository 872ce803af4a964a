//! Combat resolution.
//!
//! A hit always subtracts the attacker's rating from the defender's HP and
//! clamps at zero. Everything else (which monsters get hit, what happens to
//! the dead) is decided by the attack actions built on top of [`strike`].

use crate::state::{Creature, CreatureId};

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0. Never raises HP.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Record of a single resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub attacker: CreatureId,
    pub defender: CreatureId,
    /// HP actually removed (less than the rating when the defender had less left).
    pub damage: u32,
    pub remaining_hp: u32,
}

impl Strike {
    pub fn killed(&self) -> bool {
        self.remaining_hp == 0
    }
}

/// `attacker` hits `defender` once.
pub fn strike<A, D>(attacker: &A, defender: &mut D) -> Strike
where
    A: Creature + ?Sized,
    D: Creature + ?Sized,
{
    let before = defender.hp();
    let after = apply_damage(before, attacker.attack_rating());
    defender.vitals_mut().hp = after;

    let strike = Strike {
        attacker: attacker.id(),
        defender: defender.id(),
        damage: before - after,
        remaining_hp: after,
    };

    let kill_msg = if strike.killed() { ", KILLING it" } else { "" };
    tracing::info!(
        "Creature {} attacks {}{}.",
        strike.attacker,
        strike.defender,
        kill_msg
    );

    strike
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Monster, MonsterId, PackId, Player};

    #[test]
    fn damage_is_clamped_at_zero() {
        assert_eq!(apply_damage(10, 3), 7);
        assert_eq!(apply_damage(2, 5), 0);
        assert_eq!(apply_damage(0, 1), 0);
    }

    #[test]
    fn monster_hits_player_for_its_rating() {
        let monster = Monster::new(MonsterId::new(PackId(1), 0), 3, 1);
        let mut player = Player::new(&GameConfig::default());

        let strike = strike(&monster, &mut player);
        assert_eq!(player.hp(), 99);
        assert_eq!(strike.damage, 1);
        assert_eq!(strike.defender, CreatureId::PLAYER);
        assert!(!strike.killed());
    }

    #[test]
    fn overkill_reports_actual_damage() {
        let player = Player::new(&GameConfig::default());
        let mut monster = Monster::new(MonsterId::new(PackId(1), 0), 2, 1);

        let strike = strike(&player, &mut monster);
        assert_eq!(monster.hp(), 0);
        assert_eq!(strike.damage, 2);
        assert!(strike.killed());
    }
}
