//! Card instances - runtime card state.
//!
//! `Card` represents one physical card in a game. It tracks mutable state:
//! location, rest status, summon sickness and attached DON!! cards. Leaders and
//! DON!! cards carry extra state in `CardKind`.
//!
//! Mutators are crate-private. Outside the crate, card state only changes
//! through `GameState`, so zone membership and flags can't drift apart.

use std::sync::Arc;

use smallvec::SmallVec;

use super::definition::{CardDefinition, CardType};
use crate::core::entity::EntityId;
use crate::core::error::EngineError;
use crate::core::player::PlayerId;
use crate::zones::ZoneRef;

/// Power added by each attached DON!! card.
pub const DON_POWER_BOOST: u32 = 1000;

/// Variant-specific card state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    /// Characters, events and stages.
    Standard,
    /// Leader with its life counter.
    Leader { life_points: u32 },
    /// DON!! card; `attached` while given to a leader or character.
    Don { attached: bool },
}

/// A card instance in a game.
#[derive(Clone, Debug)]
pub struct Card {
    entity_id: EntityId,
    definition: Arc<CardDefinition>,

    /// Who started with this card.
    owner: PlayerId,

    /// Who currently controls it. Equal to `owner` until control-changing
    /// effects exist.
    controller: PlayerId,

    /// `None` while in transit, attached, or in the leader area.
    zone: Option<ZoneRef>,

    rested: bool,
    summon_sick: bool,

    /// Attached DON!! cards, oldest first.
    attached: SmallVec<[EntityId; 4]>,

    kind: CardKind,
}

impl Card {
    /// Create a card instance. The variant follows the definition's type.
    #[must_use]
    pub fn new(entity_id: EntityId, definition: Arc<CardDefinition>, owner: PlayerId) -> Self {
        let kind = match definition.card_type {
            CardType::Leader => CardKind::Leader {
                life_points: definition.life,
            },
            CardType::Don => CardKind::Don { attached: false },
            _ => CardKind::Standard,
        };

        Self {
            entity_id,
            definition,
            owner,
            controller: owner,
            zone: None,
            rested: false,
            summon_sick: false,
            attached: SmallVec::new(),
            kind,
        }
    }

    // === Identity ===

    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.definition.card_type
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn controller(&self) -> PlayerId {
        self.controller
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn is_leader(&self) -> bool {
        matches!(self.kind, CardKind::Leader { .. })
    }

    #[must_use]
    pub fn is_don(&self) -> bool {
        matches!(self.kind, CardKind::Don { .. })
    }

    #[must_use]
    pub fn zone(&self) -> Option<ZoneRef> {
        self.zone
    }

    // === Status ===

    #[must_use]
    pub fn is_rested(&self) -> bool {
        self.rested
    }

    #[must_use]
    pub fn is_summon_sick(&self) -> bool {
        self.summon_sick
    }

    /// The single attack-eligibility rule: active and not summon-sick.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.rested && !self.summon_sick
    }

    /// Is this DON!! card currently attached? Always false for other cards.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self.kind, CardKind::Don { attached: true })
    }

    // === Power ===

    /// Printed power, ignoring attachments.
    #[must_use]
    pub fn base_power(&self) -> u32 {
        self.definition.power
    }

    /// Printed power plus `DON_POWER_BOOST` per attached DON!!.
    #[must_use]
    pub fn total_power(&self) -> u32 {
        let boost = DON_POWER_BOOST.saturating_mul(self.attached.len() as u32);
        self.base_power().saturating_add(boost)
    }

    /// Attached DON!! cards, oldest first.
    #[must_use]
    pub fn attached_tokens(&self) -> &[EntityId] {
        &self.attached
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    // === Leader life ===

    /// Current life counter; `None` for non-leaders.
    #[must_use]
    pub fn life_points(&self) -> Option<u32> {
        match self.kind {
            CardKind::Leader { life_points } => Some(life_points),
            _ => None,
        }
    }

    // === Crate-private mutators ===

    pub(crate) fn set_zone(&mut self, zone: Option<ZoneRef>) {
        self.zone = zone;
    }

    pub(crate) fn rest(&mut self) {
        self.rested = true;
    }

    pub(crate) fn activate(&mut self) {
        self.rested = false;
    }

    pub(crate) fn set_summon_sick(&mut self, sick: bool) {
        self.summon_sick = sick;
    }

    #[allow(dead_code)]
    pub(crate) fn set_controller(&mut self, controller: PlayerId) {
        self.controller = controller;
    }

    /// Append a DON!! card. DON!! cards can't host attachments.
    pub(crate) fn attach_token(&mut self, token: EntityId) -> Result<(), EngineError> {
        if self.is_don() {
            return Err(EngineError::DonCannotHost(self.entity_id));
        }
        self.attached.push(token);
        Ok(())
    }

    /// Remove the most recently attached DON!! card.
    pub(crate) fn pop_token(&mut self) -> Option<EntityId> {
        self.attached.pop()
    }

    /// Remove a specific attached DON!! card. Returns false if it isn't attached here.
    pub(crate) fn remove_token(&mut self, token: EntityId) -> bool {
        match self.attached.iter().position(|&t| t == token) {
            Some(index) => {
                self.attached.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        if let CardKind::Don { attached: flag } = &mut self.kind {
            *flag = attached;
        }
    }

    /// Lose `amount` life, clamped at zero. No-op for non-leaders.
    pub(crate) fn take_life(&mut self, amount: u32) {
        if let CardKind::Leader { life_points } = &mut self.kind {
            *life_points = life_points.saturating_sub(amount);
        }
    }

    /// Gain `amount` life. No-op for non-leaders.
    pub(crate) fn gain_life(&mut self, amount: u32) {
        if let CardKind::Leader { life_points } = &mut self.kind {
            *life_points += amount;
        }
    }

    /// Clear rest and summon sickness (e.g., when the card leaves play).
    pub(crate) fn reset_status(&mut self) {
        self.rested = false;
        self.summon_sick = false;
    }
}
