//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, PackAttackAction, PackFleeAction, PackMoveAction, PackMoveTowardsAction,
    PlayerAttackAction, PlayerFleeAction, PlayerMoveAction, UseItemAction,
};
use crate::command::CommandError;
use crate::error::{ErrorSeverity, GameError};

use super::GameStatus;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

type PhaseError<T> = TransitionPhaseError<<T as ActionTransition>::Error>;

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("player move failed: {0}")]
    PlayerMove(PhaseError<PlayerMoveAction>),

    #[error("player flee failed: {0}")]
    PlayerFlee(PhaseError<PlayerFleeAction>),

    #[error("player attack failed: {0}")]
    PlayerAttack(PhaseError<PlayerAttackAction>),

    #[error("use item failed: {0}")]
    UseItem(PhaseError<UseItemAction>),

    #[error("pack move failed: {0}")]
    PackMove(PhaseError<PackMoveAction>),

    #[error("pack move towards failed: {0}")]
    PackMoveTowards(PhaseError<PackMoveTowardsAction>),

    #[error("pack attack failed: {0}")]
    PackAttack(PhaseError<PackAttackAction>),

    #[error("pack flee failed: {0}")]
    PackFlee(PhaseError<PackFleeAction>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::PlayerMove(e) => e.phase,
            Self::PlayerFlee(e) => e.phase,
            Self::PlayerAttack(e) => e.phase,
            Self::UseItem(e) => e.phase,
            Self::PackMove(e) => e.phase,
            Self::PackMoveTowards(e) => e.phase,
            Self::PackAttack(e) => e.phase,
            Self::PackFlee(e) => e.phase,
        }
    }

    fn inner(&self) -> &dyn GameError {
        match self {
            Self::PlayerMove(e) => &e.error,
            Self::PlayerFlee(e) => &e.error,
            Self::PlayerAttack(e) => &e.error,
            Self::UseItem(e) => &e.error,
            Self::PackMove(e) => &e.error,
            Self::PackMoveTowards(e) => &e.error,
            Self::PackAttack(e) => &e.error,
            Self::PackFlee(e) => &e.error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        // a broken post-condition means state was already mutated
        if self.phase() == TransitionPhase::PostValidate {
            return ErrorSeverity::Internal;
        }
        self.inner().severity()
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}

/// Errors that end or interrupt a turn.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("game is already over: {0}")]
    GameOver(GameStatus),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameOver(_) => ErrorSeverity::Validation,
            Self::Execute(e) => e.severity(),
            Self::Command(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver(_) => "TURN_GAME_OVER",
            Self::Execute(e) => e.error_code(),
            Self::Command(e) => e.error_code(),
        }
    }
}
