//! Error types for catalog, shoe and round operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when resolving a raw card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Rank outside 1..=13.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
    /// Suit outside 0..=3.
    #[error("invalid suit {0}")]
    InvalidSuit(u8),
}

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Exhausted,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No players are seated.
    #[error("no players are seated")]
    NoPlayers,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur when seating participants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Seating is only allowed between rounds.
    #[error("seats can only change between rounds")]
    RoundInProgress,
    /// The id is already taken at this table.
    #[error("participant id `{0}` is already seated")]
    DuplicateId(String),
    /// No player with this id is seated.
    #[error("player `{0}` not found")]
    PlayerNotFound(String),
}

/// Errors that can occur when reshuffling between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid round state for reshuffling.
    #[error("invalid round state for reshuffling")]
    InvalidState,
}

/// Errors reported by a decision source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The pending request was cancelled; the engine treats this as a stay.
    #[error("decision request cancelled")]
    Cancelled,
    /// The reply was neither hit nor stay.
    #[error("unrecognized action `{0}`")]
    Unrecognized(String),
}

/// Errors that abort a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has already been played or is otherwise not playable.
    #[error("invalid round state")]
    InvalidState,
    /// No players are seated.
    #[error("no players are seated")]
    NoPlayers,
    /// The shoe ran out of cards.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
    /// A decision source replied with something other than hit or stay.
    #[error("player `{player_id}` sent unrecognized action `{reply}`")]
    ProtocolViolation {
        /// The player whose decision was requested.
        player_id: String,
        /// The raw reply.
        reply: String,
    },
}

impl From<ShoeError> for RoundError {
    fn from(_: ShoeError) -> Self {
        Self::ShoeExhausted
    }
}

impl From<DealError> for RoundError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::InvalidState => Self::InvalidState,
            DealError::NoPlayers => Self::NoPlayers,
            DealError::NotEnoughCards => Self::ShoeExhausted,
        }
    }
}
