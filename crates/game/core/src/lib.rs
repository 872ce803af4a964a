//! Deterministic rules for a turn-based dungeon crawl.
//!
//! `rogue-core` simulates a player fighting its way through a zoned dungeon
//! graph populated by monster packs. It defines the canonical rules (combat,
//! capacity-constrained movement, item use, command replay) and exposes pure
//! APIs; the only I/O is the generic line reader behind
//! [`command::ConsoleSource`]. All state mutation flows through
//! [`engine::GameEngine`] or the [`action::ActionTransition`] hooks.
pub mod action;
pub mod combat;
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, AggressivePolicy, AttackError, AttackMode,
    AttackOutcome, FleeOutcome, ItemError, ItemUseOutcome, MoveError, PackAttackAction,
    PackAttackOutcome, PackDecision, PackFleeAction, PackMoveAction, PackMoveOutcome,
    PackMoveTowardsAction, PackPolicy, PlayerAttackAction, PlayerFleeAction, PlayerMoveAction,
    PlayerMoveOutcome, UseItemAction, ZoneCrossing,
};
pub use combat::{Strike, apply_damage, strike};
pub use command::{
    Command, CommandError, CommandLog, CommandSource, ConsoleSource, QueueSource,
    compute_commands_root,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, GameStatus, PlayerTurn, TransitionPhase, TransitionPhaseError,
    TurnError, TurnReport,
};
pub use env::{
    DungeonGraph, DungeonGraphBuilder, DungeonOracle, Env, GameEnv, GraphError, PcgRng,
    RngOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Bag, Creature, CreatureId, GameState, Item, ItemEffect, ItemId, ItemKind, Monster, MonsterId,
    NodeId, NodeState, Pack, PackError, PackId, Player, Vitals, WorldState,
};
