//! Game state: both players, every card, and the win/loss flags.
//!
//! `GameState` is the only authority that mutates card location and status.
//! Every location change goes through `move_card`, which keeps a card's zone
//! reference and the zones' contents in agreement. `Player` and `Zone` expose
//! read accessors only.
//!
//! ## Failure policy
//!
//! - Illegal requests (playing a card that isn't in hand, attaching a rested
//!   DON!!) return `Err(EngineError)`, log a warning, and change nothing.
//! - Running out of deck or life ends the game. It is not an error.
//! - Unknown entity ids and double zone membership panic.
//!
//! The engine does not refuse mutations after the game ends; callers stop
//! driving it once `is_game_over` is true. The winner is never overwritten.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::entity::EntityId;
use super::error::EngineError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardArena, CardDefinition, CardType};
use crate::zones::{Zone, ZoneKind, ZonePosition, ZoneRef};

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,
    cards: CardArena,
    rng: GameRng,
    game_over: bool,
    winner: Option<PlayerId>,
}

impl GameState {
    /// Create a game with two empty players and a seeded RNG.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(first, second, GameRng::new(seed))
    }

    /// Create a game with two empty players and the given RNG.
    #[must_use]
    pub fn with_rng(first: impl Into<String>, second: impl Into<String>, rng: GameRng) -> Self {
        Self {
            players: PlayerMap::from_pair(
                Player::new(PlayerId::ONE, first),
                Player::new(PlayerId::TWO, second),
            ),
            cards: CardArena::new(),
            rng,
            game_over: false,
            winner: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Both players, player one first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, player)| player)
    }

    /// Get a card. Panics on an id this game never created.
    #[must_use]
    pub fn card(&self, card: EntityId) -> &Card {
        self.cards.card(card)
    }

    #[must_use]
    pub fn cards(&self) -> &CardArena {
        &self.cards
    }

    #[must_use]
    pub fn zone(&self, zone: ZoneRef) -> &Zone {
        self.players[zone.owner].zone(zone.kind)
    }

    #[must_use]
    pub fn leader(&self, player: PlayerId) -> Option<EntityId> {
        self.players[player].leader()
    }

    /// The leader's life counter; 0 before a leader is assigned.
    #[must_use]
    pub fn life_points(&self, player: PlayerId) -> u32 {
        self.leader(player)
            .and_then(|leader| self.cards.card(leader).life_points())
            .unwrap_or(0)
    }

    /// Active DON!! cards in the player's cost area.
    #[must_use]
    pub fn active_don_count(&self, player: PlayerId) -> usize {
        self.players[player]
            .cost()
            .iter()
            .filter(|&don| !self.cards.card(don).is_rested())
            .count()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Seed of the game RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Setup ===

    /// Create a card outside any zone.
    pub fn create_card(&mut self, definition: Arc<CardDefinition>, owner: PlayerId) -> EntityId {
        self.cards.create(definition, owner)
    }

    /// Create a card directly in one of its owner's zones (at the front).
    pub fn create_card_in(
        &mut self,
        definition: Arc<CardDefinition>,
        owner: PlayerId,
        kind: ZoneKind,
    ) -> EntityId {
        let card = self.cards.create(definition, owner);
        self.players[owner]
            .zone_mut(kind)
            .push_front(card, &mut self.cards);
        card
    }

    /// Put a leader card in the player's leader area.
    ///
    /// Panics if the card isn't a leader owned by `player`.
    pub fn set_leader(&mut self, player: PlayerId, card: EntityId) {
        let leader = self.cards.card(card);
        assert!(leader.is_leader(), "{card} is not a leader card");
        assert_eq!(leader.owner(), player, "{card} is not owned by {player}");

        self.take_out(card);
        self.players[player].set_leader(card);
        debug!(%player, %card, name = self.cards.card(card).name(), "leader assigned");
    }

    /// Move up to `count` cards from the top of the deck into the life zone
    /// without touching the leader's life counter.
    pub(crate) fn deal_life(&mut self, player: PlayerId, count: usize) -> usize {
        let dealt = self.move_from_draw_end(player, ZoneKind::Deck, ZoneKind::Life, count);
        debug!(%player, count = dealt.len(), "life dealt");
        dealt.len()
    }

    // === Movement ===

    /// Move a card to the front of `to`, removing it from wherever it was.
    ///
    /// This is the one sanctioned way to change a card's location. An attached
    /// DON!! card is released from its host first, a leader leaves its
    /// leader slot, and a card leaving play returns its DON!! cards to the
    /// cost area rested.
    pub fn move_card(&mut self, card: EntityId, to: ZoneRef) {
        self.move_card_to(card, to, ZonePosition::Front);
    }

    /// Move a card to the given end of `to`.
    pub fn move_card_to(&mut self, card: EntityId, to: ZoneRef, position: ZonePosition) {
        if to.kind != ZoneKind::Field {
            self.detach_all_tokens(card);
        }
        let from = self.take_out(card);
        self.players[to.owner]
            .zone_mut(to.kind)
            .insert(card, position, &mut self.cards);
        debug!(%card, from = ?from, to = %to, "card moved");
    }

    /// Detach a card from its current zone or host. Returns the zone it left.
    fn take_out(&mut self, card: EntityId) -> Option<ZoneRef> {
        let instance = self.cards.card(card);
        let (zone, attached, owner) = (instance.zone(), instance.is_attached(), instance.owner());
        if let Some(from) = zone {
            self.players[from.owner]
                .zone_mut(from.kind)
                .remove(card, &mut self.cards);
            return Some(from);
        }

        if self.players[owner].leader() == Some(card) {
            self.players[owner].clear_leader();
            debug!(player = %owner, %card, "leader slot cleared");
        }

        if attached {
            let host = self
                .cards
                .iter()
                .find(|host| host.attached_tokens().contains(&card))
                .map(Card::entity_id);
            if let Some(host) = host {
                self.cards.card_mut(host).remove_token(card);
            }
            self.cards.card_mut(card).set_attached(false);
        }
        None
    }

    /// Move up to `count` cards, one at a time, from the draw end of one of
    /// `player`'s zones to the front of another. Stops early when `from` runs out.
    fn move_from_draw_end(
        &mut self,
        player: PlayerId,
        from: ZoneKind,
        to: ZoneKind,
        count: usize,
    ) -> Vec<EntityId> {
        let mut moved = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(card) = self.players[player].zone(from).peek() else {
                break;
            };
            self.move_card(card, ZoneRef::new(player, to));
            moved.push(card);
        }
        moved
    }

    /// Draw up to `count` cards from the deck into hand.
    ///
    /// Drawing from an empty deck ends the game: the other player wins and no
    /// further cards are drawn.
    pub fn draw(&mut self, player: PlayerId, count: usize) -> Vec<EntityId> {
        let drawn = self.move_from_draw_end(player, ZoneKind::Deck, ZoneKind::Hand, count);
        if drawn.len() < count {
            info!(%player, "deck out");
            self.end_game(player.opponent());
        }
        debug!(%player, count = drawn.len(), "cards drawn");
        drawn
    }

    /// Draw up to `count` DON!! cards into the cost area.
    ///
    /// An empty DON!! deck just stops the draw.
    pub fn draw_don(&mut self, player: PlayerId, count: usize) -> Vec<EntityId> {
        let drawn = self.move_from_draw_end(player, ZoneKind::DonDeck, ZoneKind::Cost, count);
        debug!(%player, requested = count, count = drawn.len(), "DON!! drawn");
        drawn
    }

    /// Move a card to `player`'s trash.
    ///
    /// Attached DON!! cards go back to their owner's cost area rested, and
    /// the card's rest and summon-sickness flags are cleared.
    pub fn trash(&mut self, player: PlayerId, card: EntityId) {
        self.cards.card_mut(card).reset_status();
        self.move_card(card, ZoneRef::new(player, ZoneKind::Trash));
    }

    /// Play a card from `player`'s hand.
    ///
    /// Characters go to the field summon-sick, events are consumed into the
    /// trash, stages go to the stage. Returns the destination zone kind.
    pub fn play_card(&mut self, player: PlayerId, card: EntityId) -> Result<ZoneKind, EngineError> {
        if !self.players[player].hand().contains(card) {
            warn!(%player, %card, "cannot play a card that is not in hand");
            return Err(EngineError::NotInHand { player, card });
        }

        let card_type = self.cards.card(card).card_type();
        let destination = match card_type {
            CardType::Character => ZoneKind::Field,
            CardType::Event => ZoneKind::Trash,
            CardType::Stage => ZoneKind::Stage,
            _ => {
                warn!(%player, %card, ?card_type, "card type cannot be played");
                return Err(EngineError::UnplayableCardType { card, card_type });
            }
        };

        self.move_card(card, ZoneRef::new(player, destination));
        if destination == ZoneKind::Field {
            self.cards.card_mut(card).set_summon_sick(true);
        }
        debug!(%player, %card, name = self.cards.card(card).name(), to = %destination, "card played");
        Ok(destination)
    }

    /// Shuffle the player's deck with the game RNG.
    pub fn shuffle_deck(&mut self, player: PlayerId) {
        self.players[player].deck_mut().shuffle(&mut self.rng);
        debug!(%player, "deck shuffled");
    }

    /// Return the hand to the deck, shuffle, and draw the same number of cards.
    pub fn mulligan(&mut self, player: PlayerId) -> Vec<EntityId> {
        let returned = self.players[player].hand().to_vec();
        for &card in &returned {
            self.move_card(card, ZoneRef::new(player, ZoneKind::Deck));
        }
        self.shuffle_deck(player);

        let redrawn =
            self.move_from_draw_end(player, ZoneKind::Deck, ZoneKind::Hand, returned.len());
        info!(%player, cards = redrawn.len(), "mulligan");
        redrawn
    }

    // === Status and resources ===

    /// Rest a card. Idempotent.
    pub fn rest(&mut self, card: EntityId) {
        self.cards.card_mut(card).rest();
    }

    /// Activate a card. Idempotent.
    pub fn activate(&mut self, card: EntityId) {
        self.cards.card_mut(card).activate();
    }

    /// Rest `amount` active DON!! cards in the cost area.
    ///
    /// Fails without resting anything if fewer than `amount` are active.
    pub fn pay_cost(&mut self, player: PlayerId, amount: usize) -> Result<Vec<EntityId>, EngineError> {
        let active: Vec<_> = self.players[player]
            .cost()
            .iter()
            .filter(|&don| !self.cards.card(don).is_rested())
            .take(amount)
            .collect();

        if active.len() < amount {
            let available = self.active_don_count(player);
            warn!(%player, required = amount, available, "not enough active DON!!");
            return Err(EngineError::InsufficientDon {
                player,
                required: amount,
                available,
            });
        }

        for &don in &active {
            self.cards.card_mut(don).rest();
        }
        debug!(%player, amount, "cost paid");
        Ok(active)
    }

    /// Give an active DON!! card from the cost area to a leader or field character.
    ///
    /// The token leaves the cost area while attached.
    pub fn attach_token(&mut self, host: EntityId, token: EntityId) -> Result<(), EngineError> {
        let don = self.cards.card(token);
        let owner = don.owner();
        let available = don.is_don()
            && !don.is_attached()
            && !don.is_rested()
            && don.zone() == Some(ZoneRef::new(owner, ZoneKind::Cost));
        if !available {
            let zone = don.zone();
            warn!(%token, ?zone, "DON!! card is not available to attach");
            return Err(EngineError::TokenUnavailable { token, zone });
        }

        let target = self.cards.card(host);
        if target.is_don() {
            warn!(%host, "DON!! cards cannot host attachments");
            return Err(EngineError::DonCannotHost(host));
        }
        let in_play = self.leader(target.controller()) == Some(host)
            || target.zone().is_some_and(|zone| zone.kind == ZoneKind::Field);
        if !in_play || target.controller() != owner {
            warn!(%host, %token, "invalid DON!! attach target");
            return Err(EngineError::InvalidAttachTarget(host));
        }

        self.players[owner]
            .zone_mut(ZoneKind::Cost)
            .remove(token, &mut self.cards);
        self.cards.card_mut(host).attach_token(token)?;
        self.cards.card_mut(token).set_attached(true);
        debug!(%host, %token, power = self.cards.card(host).total_power(), "DON!! attached");
        Ok(())
    }

    /// Detach the most recently attached DON!! card from `host`.
    ///
    /// The token returns to its owner's cost area rested. Returns `None` when
    /// nothing is attached.
    pub fn detach_token(&mut self, host: EntityId) -> Option<EntityId> {
        let token = self.cards.detach_token(host)?;
        let owner = self.cards.card(token).owner();
        self.players[owner]
            .zone_mut(ZoneKind::Cost)
            .push_front(token, &mut self.cards);
        debug!(%host, %token, "DON!! detached");
        Some(token)
    }

    /// Detach every DON!! card from `host`, most recent first.
    pub fn detach_all_tokens(&mut self, host: EntityId) -> Vec<EntityId> {
        let attached = self.cards.card(host).attached_count();
        let mut detached = Vec::with_capacity(attached);
        for _ in 0..attached {
            if let Some(token) = self.detach_token(host) {
                detached.push(token);
            }
        }
        detached
    }

    // === Life ===

    /// Move a card from hand onto the life zone and raise the leader's life.
    pub fn add_life(&mut self, player: PlayerId, card: EntityId) -> Result<(), EngineError> {
        if !self.players[player].hand().contains(card) {
            warn!(%player, %card, "only cards in hand can be added to life");
            return Err(EngineError::NotInHand { player, card });
        }

        self.move_card_to(card, ZoneRef::new(player, ZoneKind::Life), ZonePosition::Back);
        if let Some(leader) = self.leader(player) {
            self.cards.card_mut(leader).gain_life(1);
        }
        debug!(%player, life = self.life_points(player), "life added");
        Ok(())
    }

    /// Take `count` life cards into hand, one at a time.
    ///
    /// Each card lowers the leader's life counter by one. Needing a life card
    /// when the life zone is empty ends the game: the other player wins.
    pub fn remove_life(&mut self, player: PlayerId, count: usize) -> Vec<EntityId> {
        let mut taken = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(card) = self.players[player].life().peek() else {
                info!(%player, "no life left");
                self.end_game(player.opponent());
                break;
            };
            self.move_card(card, ZoneRef::new(player, ZoneKind::Hand));
            if let Some(leader) = self.leader(player) {
                self.cards.card_mut(leader).take_life(1);
            }
            taken.push(card);
        }
        debug!(%player, count = taken.len(), life = self.life_points(player), "life removed");
        taken
    }

    // === Refresh ===

    /// Activate every DON!! card in the cost area.
    pub fn refresh_don(&mut self, player: PlayerId) {
        for don in self.players[player].cost().to_vec() {
            self.cards.card_mut(don).activate();
        }
    }

    /// Refresh every field card: clear summon sickness, then activate it if
    /// rested, otherwise return its DON!! cards to the cost area.
    pub fn refresh_field(&mut self, player: PlayerId) {
        for card in self.players[player].field().to_vec() {
            let instance = self.cards.card_mut(card);
            instance.set_summon_sick(false);
            if instance.is_rested() {
                instance.activate();
            } else {
                self.detach_all_tokens(card);
            }
        }
    }

    /// Activate the leader and return all of its DON!! cards.
    pub fn refresh_leader(&mut self, player: PlayerId) {
        let Some(leader) = self.leader(player) else {
            return;
        };
        self.cards.card_mut(leader).activate();
        self.detach_all_tokens(leader);
    }

    // === Game end ===

    /// End the game. A winner, once set, is kept.
    pub(crate) fn end_game(&mut self, winner: PlayerId) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.winner = Some(winner);
        info!(%winner, name = self.players[winner].name(), "game over");
    }
}
