use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, ItemEffect, ItemId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemError {
    #[error("item {0} is not in the bag or was already used")]
    ItemNotUsable(ItemId),
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotUsable(_) => "ITEM_NOT_USABLE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUseOutcome {
    pub item: ItemId,
    pub effect: ItemEffect,
}

/// Consumes an item from the player's bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub item: ItemId,
}

impl UseItemAction {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }

    fn check(&self, state: &GameState) -> Result<(), ItemError> {
        match state.player.bag.get(self.item) {
            Some(item) if !item.used => Ok(()),
            _ => Err(ItemError::ItemNotUsable(self.item)),
        }
    }
}

impl ActionTransition for UseItemAction {
    type Error = ItemError;
    type Result = ItemUseOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.check(state)
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ItemUseOutcome, Self::Error> {
        self.check(state)?;
        let mut item = state
            .player
            .bag
            .remove(self.item)
            .ok_or(ItemError::ItemNotUsable(self.item))?;
        let effect = item.apply_to(&mut state.player);
        tracing::info!("Player uses {} {}", item.kind, item.id);
        tracing::debug!(?effect, hp = state.player.vitals.hp, "item effect applied");

        Ok(ItemUseOutcome {
            item: self.item,
            effect,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.player.bag.contains(self.item) {
            return Err(ItemError::ItemNotUsable(self.item));
        }
        Ok(())
    }
}
