//! Actions the player and packs can take.
//!
//! Each action is a small value type implementing [`ActionTransition`]. The
//! engine drives it through `pre_validate`, `apply` and `post_validate`;
//! callers that do not need the engine can run the hooks directly.
//!
//! # Module Structure
//!
//! - `combat`: player attacks, normal and accelerated
//! - `pack`: pack movement, pack attack, pack flee
//! - `movement`: player movement toward the bridge or exit
//! - `flee`: player escape to an uncontested neighbor
//! - `inventory`: item use
//! - `policy`: pack decision making
mod combat;
mod flee;
mod inventory;
mod movement;
mod pack;
mod policy;
mod transition;

pub use combat::{AttackError, AttackMode, AttackOutcome, PlayerAttackAction};
pub use flee::{FleeOutcome, PlayerFleeAction};
pub use inventory::{ItemError, ItemUseOutcome, UseItemAction};
pub use movement::{MoveError, PlayerMoveAction, PlayerMoveOutcome, ZoneCrossing};
pub use pack::{
    PackAttackAction, PackAttackOutcome, PackFleeAction, PackMoveAction, PackMoveOutcome,
    PackMoveTowardsAction,
};
pub use policy::{AggressivePolicy, PackDecision, PackPolicy};
pub use transition::ActionTransition;

/// Any action the engine can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    PlayerMove(PlayerMoveAction),
    PlayerFlee(PlayerFleeAction),
    PlayerAttack(PlayerAttackAction),
    UseItem(UseItemAction),
    PackMove(PackMoveAction),
    PackMoveTowards(PackMoveTowardsAction),
    PackAttack(PackAttackAction),
    PackFlee(PackFleeAction),
}

impl Action {
    /// Returns the snake_case name of the action, for logs.
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }

    pub fn is_player_action(&self) -> bool {
        matches!(
            self,
            Action::PlayerMove(_)
                | Action::PlayerFlee(_)
                | Action::PlayerAttack(_)
                | Action::UseItem(_)
        )
    }
}

macro_rules! impl_from_action {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Self::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    PlayerMove(PlayerMoveAction),
    PlayerFlee(PlayerFleeAction),
    PlayerAttack(PlayerAttackAction),
    UseItem(UseItemAction),
    PackMove(PackMoveAction),
    PackMoveTowards(PackMoveTowardsAction),
    PackAttack(PackAttackAction),
    PackFlee(PackFleeAction),
);

/// Typed outcome of an executed [`Action`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    PlayerMove(PlayerMoveOutcome),
    PlayerFlee(FleeOutcome),
    PlayerAttack(AttackOutcome),
    UseItem(ItemUseOutcome),
    PackMove(PackMoveOutcome),
    PackAttack(PackAttackOutcome),
    PackFlee,
}
