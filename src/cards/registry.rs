//! Card registry for definition lookup.
//!
//! The `CardRegistry` is the engine's view of the card database: it stores
//! every known `CardDefinition` and hands out shared `Arc`s for card creation.
//! Looking up an id that was never registered is a data/setup bug, so
//! `get_unchecked` fails loudly instead of returning a default card.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::definition::{CardDefinition, CardId, CardType};
use crate::core::error::EngineError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use optcg_engine::cards::{CardRegistry, CardDefinition, CardId, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("OP01-001", "Roronoa Zoro", CardType::Leader).with_life(5));
///
/// let zoro = registry.get(&CardId::new("OP01-001")).unwrap();
/// assert_eq!(zoro.life, 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load definitions from a JSON array of card records.
    ///
    /// Entries that don't parse, or have an empty id, are skipped with a
    /// warning. Only a document that isn't a JSON array is an error.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| EngineError::CardData(e.to_string()))?;

        let mut registry = Self::new();
        for entry in entries {
            match serde_json::from_value::<CardDefinition>(entry) {
                Ok(card) if !card.id.as_str().is_empty() => {
                    // Later printings of the same id replace earlier ones
                    registry.cards.insert(card.id.clone(), Arc::new(card));
                }
                Ok(_) => warn!("skipping card entry without an id"),
                Err(e) => warn!(error = %e, "skipping malformed card entry"),
            }
        }

        debug!(cards = registry.len(), "loaded card registry");
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) -> Arc<CardDefinition> {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        let card = Arc::new(card);
        self.cards.insert(card.id.clone(), Arc::clone(&card));
        card
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<Arc<CardDefinition>> {
        self.cards.get(id).cloned()
    }

    /// Get a card definition by ID, panicking if not found.
    #[must_use]
    pub fn get_unchecked(&self, id: &CardId) -> Arc<CardDefinition> {
        self.get(id)
            .unwrap_or_else(|| panic!("Card with ID {id} not found in registry"))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(|card| card.as_ref())
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.card_type == card_type)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new("C-1", "Test Card", CardType::Character));

        let found = registry.get(&CardId::new("C-1"));
        assert_eq!(found.unwrap().name, "Test Card");
        assert!(registry.get(&CardId::new("C-99")).is_none());
    }

    #[test]
    fn test_register_returns_shared_definition() {
        let mut registry = CardRegistry::new();
        let card = registry.register(CardDefinition::new("C-1", "A", CardType::Event));

        assert!(Arc::ptr_eq(&card, &registry.get_unchecked(&CardId::new("C-1"))));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new("C-1", "A", CardType::Character));
        registry.register(CardDefinition::new("C-1", "B", CardType::Character));
    }

    #[test]
    #[should_panic(expected = "not found in registry")]
    fn test_unknown_id_fails_fast() {
        let registry = CardRegistry::new();
        let _ = registry.get_unchecked(&CardId::new("OP99-999"));
    }

    #[test]
    fn test_find_by_type() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new("C-1", "Goblin", CardType::Character));
        registry.register(CardDefinition::new("E-1", "Bolt", CardType::Event));
        registry.register(CardDefinition::new("C-2", "Orc", CardType::Character));

        assert_eq!(registry.find_by_type(CardType::Character).count(), 2);
        assert_eq!(registry.find_by_type(CardType::Event).count(), 1);
    }

    #[test]
    fn test_find_with_predicate() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new("C-1", "Cheap", CardType::Character).with_cost(1));
        registry.register(CardDefinition::new("C-2", "Expensive", CardType::Character).with_cost(5));

        let cheap: Vec<_> = registry.find(|c| c.cost <= 2).collect();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].name, "Cheap");
    }

    #[test]
    fn test_from_json_skips_bad_entries() {
        let json = r#"[
            {"card_set_id": "OP01-001", "card_name": "Zoro", "card_type": "Leader", "card_power": "5000", "life": "5"},
            {"card_name": "No id at all"},
            {"card_set_id": "", "card_name": "Empty id"},
            {"card_set_id": "OP01-016", "card_name": "Nami", "card_type": "Character", "card_cost": 1}
        ]"#;

        let registry = CardRegistry::from_json(json).unwrap();

        assert_eq!(registry.len(), 2);
        let zoro = registry.get_unchecked(&CardId::new("OP01-001"));
        assert_eq!(zoro.power, 5000);
        assert_eq!(zoro.life, 5);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = CardRegistry::from_json(r#"{"card_set_id": "X"}"#).unwrap_err();
        assert!(matches!(err, EngineError::CardData(_)));
    }
}
