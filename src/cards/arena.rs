//! Storage for every card instance in a game.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;
use super::instance::Card;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Card instances by entity id, plus the id allocator.
#[derive(Clone, Debug)]
pub struct CardArena {
    cards: FxHashMap<EntityId, Card>,
    next_id: EntityId,
}

impl Default for CardArena {
    fn default() -> Self {
        Self {
            cards: FxHashMap::default(),
            next_id: EntityId::FIRST,
        }
    }
}

impl CardArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id and create a card outside any zone.
    pub fn create(&mut self, definition: Arc<CardDefinition>, owner: PlayerId) -> EntityId {
        let id = self.next_id;
        self.next_id = id.next();
        self.cards.insert(id, Card::new(id, definition, owner));
        id
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card, panicking on an unknown id.
    ///
    /// Ids only come from this arena, so a miss is a programming error.
    #[must_use]
    pub fn card(&self, id: EntityId) -> &Card {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("{id} does not exist in this game"))
    }

    pub(crate) fn card_mut(&mut self, id: EntityId) -> &mut Card {
        self.cards
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{id} does not exist in this game"))
    }

    /// Detach the most recently attached DON!! card from `host` and rest it.
    ///
    /// Returns `None` when nothing is attached.
    pub(crate) fn detach_token(&mut self, host: EntityId) -> Option<EntityId> {
        let token = self.card_mut(host).pop_token()?;
        let don = self.card_mut(token);
        don.rest();
        don.set_attached(false);
        Some(token)
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(move |id| &self.cards[&id])
    }
}
