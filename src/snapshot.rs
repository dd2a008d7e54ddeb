//! Consistent views of a round for broadcasting.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::game::RoundState;
use crate::participant::{Participant, Status};

/// A card as held at the table.
///
/// Face-down cards still carry their rank and suit so the engine side can
/// inspect a full snapshot. Anything sent to players should go through
/// [`ParticipantSnapshot::public_hand`] or [`CardView::visible`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardView {
    /// The card's rank.
    pub rank: Rank,
    /// The card's suit.
    pub suit: Suit,
    /// Whether the card is face up.
    pub face_up: bool,
}

impl CardView {
    /// The card if it is face up, `None` while it is face down.
    #[must_use]
    pub const fn visible(&self) -> Option<Card> {
        if self.face_up {
            Some(Card::new(self.rank, self.suit))
        } else {
            None
        }
    }
}

/// One participant's state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantSnapshot {
    /// The participant id.
    pub id: String,
    /// The participant's status.
    pub status: Status,
    /// The hand, in dealing order.
    pub hand: Vec<CardView>,
}

impl ParticipantSnapshot {
    pub(crate) fn of(participant: &Participant) -> Self {
        let hand = participant
            .hand()
            .map(|hand| {
                hand.cards()
                    .iter()
                    .map(|held| CardView {
                        rank: held.card.rank,
                        suit: held.card.suit,
                        face_up: held.face_up,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: String::from(participant.id()),
            status: participant.status(),
            hand,
        }
    }

    /// The hand as other viewers may see it, with face-down cards masked.
    #[must_use]
    pub fn public_hand(&self) -> Vec<Option<Card>> {
        self.hand.iter().map(CardView::visible).collect()
    }
}

/// The whole table at a single point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Where the round is in its lifecycle.
    pub round: RoundState,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// The dealer.
    pub dealer: ParticipantSnapshot,
    /// Players in turn order.
    pub players: Vec<ParticipantSnapshot>,
}

impl Snapshot {
    /// Finds a player by id.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&ParticipantSnapshot> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// What just happened in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundEvent {
    /// Opening cards have been dealt.
    Dealt,
    /// The dealer's hole card was turned face up.
    HoleCardRevealed,
    /// A participant drew a card.
    CardDrawn {
        /// Who drew.
        participant_id: String,
    },
    /// One or more statuses changed.
    StatusChanged,
    /// Every participant is settled.
    Completed,
}

/// Receives a full snapshot after every change a round makes.
pub trait RoundObserver {
    /// Called once the change described by `event` is complete.
    fn on_update(&mut self, event: &RoundEvent, snapshot: &Snapshot);
}

impl RoundObserver for () {
    fn on_update(&mut self, _event: &RoundEvent, _snapshot: &Snapshot) {}
}

impl RoundObserver for Vec<(RoundEvent, Snapshot)> {
    fn on_update(&mut self, event: &RoundEvent, snapshot: &Snapshot) {
        self.push((event.clone(), snapshot.clone()));
    }
}
