//! Round engine and table state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, CardCatalog};
use crate::error::{ReshuffleError, SeatError, ShoeError};
use crate::options::GameOptions;
use crate::participant::{Participant, Status};
use crate::shoe::Shoe;
use crate::snapshot::{ParticipantSnapshot, RoundEvent, RoundObserver, Snapshot};

mod deal;
mod dealer;
pub mod state;
mod turn;

pub use state::RoundState;

/// A blackjack table: one dealer, an ordered list of players, spectators and
/// the shoe.
///
/// The session owns every hand and the shoe exclusively. Rounds are played
/// with [`GameSession::play_round`] and cleared with [`GameSession::reset`];
/// the shoe carries over between rounds.
#[derive(Debug, Clone)]
pub struct GameSession {
    options: GameOptions,
    shoe: Shoe,
    dealer: Participant,
    players: Vec<Participant>,
    spectators: Vec<Participant>,
    state: RoundState,
    drawn_this_round: usize,
}

impl GameSession {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{CardCatalog, GameOptions, GameSession};
    ///
    /// let catalog = CardCatalog::new();
    /// let session = GameSession::new(&catalog, GameOptions::default(), "house", 42);
    /// assert_eq!(session.cards_remaining(), 6 * 52);
    /// ```
    #[must_use]
    pub fn new(
        catalog: &CardCatalog,
        options: GameOptions,
        dealer_id: impl Into<String>,
        seed: u64,
    ) -> Self {
        let shoe = Shoe::new(catalog, options.decks, seed);
        Self::with_shoe(options, dealer_id, shoe)
    }

    /// Creates a table around an existing shoe.
    #[must_use]
    pub fn with_shoe(options: GameOptions, dealer_id: impl Into<String>, shoe: Shoe) -> Self {
        Self {
            options,
            shoe,
            dealer: Participant::dealer(dealer_id),
            players: Vec::new(),
            spectators: Vec::new(),
            state: RoundState::NotStarted,
            drawn_this_round: 0,
        }
    }

    fn ensure_seating_open(&self, id: &str) -> Result<(), SeatError> {
        if self.state == RoundState::InProgress {
            return Err(SeatError::RoundInProgress);
        }
        let taken = self.dealer.id() == id
            || self
                .players
                .iter()
                .chain(self.spectators.iter())
                .any(|p| p.id() == id);
        if taken {
            return Err(SeatError::DuplicateId(String::from(id)));
        }
        Ok(())
    }

    /// Seats a player at the end of the turn order.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the id is already seated.
    pub fn add_player(&mut self, id: impl Into<String>) -> Result<(), SeatError> {
        let id = id.into();
        self.ensure_seating_open(&id)?;
        self.players.push(Participant::player(id));
        Ok(())
    }

    /// Adds a spectator.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the id is already seated.
    pub fn add_spectator(&mut self, id: impl Into<String>) -> Result<(), SeatError> {
        let id = id.into();
        self.ensure_seating_open(&id)?;
        self.spectators.push(Participant::spectator(id));
        Ok(())
    }

    /// Removes a player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or no such player is seated.
    pub fn remove_player(&mut self, id: &str) -> Result<(), SeatError> {
        if self.state == RoundState::InProgress {
            return Err(SeatError::RoundInProgress);
        }
        let index = self
            .players
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| SeatError::PlayerNotFound(String::from(id)))?;
        self.players.remove(index);
        Ok(())
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns a player by id.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&Participant> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Returns the spectators.
    #[must_use]
    pub fn spectators(&self) -> &[Participant] {
        &self.spectators
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Captures the dealer and every player.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.state,
            cards_remaining: self.shoe.len(),
            dealer: ParticipantSnapshot::of(&self.dealer),
            players: self.players.iter().map(ParticipantSnapshot::of).collect(),
        }
    }

    /// Clears every hand and returns dealer and players to waiting.
    ///
    /// Use this after a completed round, or to abandon a round that failed.
    /// The shoe is kept as is.
    pub fn reset(&mut self) {
        self.dealer.reset();
        for participant in self.players.iter_mut().chain(self.spectators.iter_mut()) {
            participant.reset();
        }
        self.drawn_this_round = 0;
        self.state = RoundState::NotStarted;
    }

    /// Re-permutes the cards left in the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state == RoundState::InProgress {
            return Err(ReshuffleError::InvalidState);
        }
        log::debug!("reshuffling {} remaining cards", self.shoe.len());
        self.shoe.reshuffle();
        Ok(())
    }

    /// Returns whether the dealt fraction of the shoe has reached the
    /// configured penetration. Always `false` when penetration is 0.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.options.penetration > 0.0 && self.shoe.used_ratio() >= self.options.penetration
    }

    /// Reshuffles if the penetration has been reached.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.shoe.draw()?;
        self.drawn_this_round += 1;
        Ok(card)
    }

    fn statuses(&self) -> Vec<Status> {
        core::iter::once(&self.dealer)
            .chain(self.players.iter())
            .map(Participant::status)
            .collect()
    }

    fn notify<O: RoundObserver + ?Sized>(&self, observer: &mut O, event: &RoundEvent) {
        observer.on_update(event, &self.snapshot());
    }

    /// Notifies `observer` if any status differs from `before`.
    fn notify_if_changed<O: RoundObserver + ?Sized>(&self, observer: &mut O, before: &[Status]) {
        if self.statuses() != before {
            self.notify(observer, &RoundEvent::StatusChanged);
        }
    }
}
