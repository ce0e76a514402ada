//! Engine errors.
//!
//! Only illegal requests are errors. Running out of deck or life ends the
//! game instead, and contract violations (unknown entity ids, a card in two
//! zones at once) panic.

use super::entity::EntityId;
use super::player::PlayerId;
use crate::cards::CardType;
use crate::zones::ZoneRef;

/// A rejected engine request. The game state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Card is not in the acting player's hand.
    #[error("{card} is not in {player}'s hand")]
    NotInHand { player: PlayerId, card: EntityId },

    /// Card type has no destination when played.
    #[error("{card} has card type {card_type:?}, which cannot be played")]
    UnplayableCardType { card: EntityId, card_type: CardType },

    /// DON!! cards can't host attachments.
    #[error("{0} is a DON!! card and cannot host attachments")]
    DonCannotHost(EntityId),

    /// Token isn't an active, unattached DON!! in its owner's cost area.
    #[error("{token} is not an available DON!! card (in: {zone:?})")]
    TokenUnavailable {
        token: EntityId,
        zone: Option<ZoneRef>,
    },

    /// Host is neither a leader nor a character on the field.
    #[error("{0} cannot receive DON!! cards")]
    InvalidAttachTarget(EntityId),

    /// Not enough active DON!! to pay a cost.
    #[error("{player} needs {required} active DON!! but has {available}")]
    InsufficientDon {
        player: PlayerId,
        required: usize,
        available: usize,
    },

    /// Attacker isn't one of the player's valid attackers.
    #[error("{0} cannot attack")]
    IllegalAttacker(EntityId),

    /// Target isn't one of the opponent's valid targets.
    #[error("{0} cannot be attacked")]
    IllegalTarget(EntityId),

    /// Player has no leader assigned.
    #[error("{0} has no leader")]
    MissingLeader(PlayerId),

    /// Card data could not be loaded.
    #[error("Invalid card data: {0}")]
    CardData(String),
}
