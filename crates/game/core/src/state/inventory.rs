use super::{Item, ItemId};

/// The player's bag. Items keep pickup order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag {
    items: Vec<Item>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Removes exactly the item with `id`, leaving every other item in place.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_magic_crystal(&self) -> bool {
        self.items.iter().any(Item::is_magic_crystal)
    }

    pub fn contains_healing_potion(&self) -> bool {
        self.items.iter().any(Item::is_healing_potion)
    }

    /// Total HP the potions in the bag could restore.
    pub fn healing_value(&self) -> u32 {
        self.items
            .iter()
            .filter(|item| item.is_healing_potion())
            .map(Item::hp_value)
            .sum()
    }

    /// First unused item matching `predicate`, in pickup order.
    pub fn first_usable(&self, predicate: impl Fn(&Item) -> bool) -> Option<ItemId> {
        self.items
            .iter()
            .find(|item| !item.used && predicate(item))
            .map(|item| item.id)
    }
}
