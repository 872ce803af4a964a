//! Traits describing read-only world data.
//!
//! Oracles expose the dungeon topology and the deterministic RNG. The
//! [`Env`] aggregate bundles them with the session seed so actions can read
//! everything they need without hard coupling to concrete implementations.
mod dungeon;
mod graph;
mod rng;

pub use dungeon::DungeonOracle;
pub use graph::{DungeonGraph, DungeonGraphBuilder, GraphError};
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates the read-only oracles required by actions and the engine.
pub struct Env<'a, D, R>
where
    D: DungeonOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    dungeon: &'a D,
    rng: &'a R,
    seed: u64,
}

impl<D, R> Clone for Env<'_, D, R>
where
    D: DungeonOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// `D` and `R` may be trait objects; only the references are copied.
impl<D, R> Copy for Env<'_, D, R>
where
    D: DungeonOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn DungeonOracle + 'a, dyn RngOracle + 'a>;

impl<'a, D, R> Env<'a, D, R>
where
    D: DungeonOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(dungeon: &'a D, rng: &'a R, seed: u64) -> Self {
        Self { dungeon, rng, seed }
    }

    pub fn dungeon(&self) -> &'a D {
        self.dungeon
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }

    /// Session seed every random roll is derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<'a, D, R> Env<'a, D, R>
where
    D: DungeonOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let dungeon: &'a dyn DungeonOracle = self.dungeon;
        let rng: &'a dyn RngOracle = self.rng;
        Env::new(dungeon, rng, self.seed)
    }
}
