/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Maximum (and starting) HP of the player.
    pub player_hp_base: u32,
    /// Damage the player deals per hit. Must exceed the monster rating.
    pub player_attack_rating: u32,
    /// Damage a monster deals per hit.
    pub monster_attack_rating: u32,
    /// Inclusive lower bound of a freshly spawned monster's HP.
    pub monster_hp_min: u32,
    /// Inclusive upper bound of a freshly spawned monster's HP.
    pub monster_hp_max: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_HP_BASE: u32 = 100;
    pub const DEFAULT_PLAYER_ATTACK_RATING: u32 = 5;
    pub const DEFAULT_MONSTER_ATTACK_RATING: u32 = 1;
    pub const DEFAULT_MONSTER_HP_MIN: u32 = 1;
    pub const DEFAULT_MONSTER_HP_MAX: u32 = 6;

    pub fn new() -> Self {
        Self {
            player_hp_base: Self::DEFAULT_PLAYER_HP_BASE,
            player_attack_rating: Self::DEFAULT_PLAYER_ATTACK_RATING,
            monster_attack_rating: Self::DEFAULT_MONSTER_ATTACK_RATING,
            monster_hp_min: Self::DEFAULT_MONSTER_HP_MIN,
            monster_hp_max: Self::DEFAULT_MONSTER_HP_MAX,
        }
    }

    pub fn with_player_hp_base(mut self, hp_base: u32) -> Self {
        self.player_hp_base = hp_base;
        self
    }

    pub fn with_monster_hp_range(mut self, min: u32, max: u32) -> Self {
        self.monster_hp_min = min;
        self.monster_hp_max = max.max(min);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
