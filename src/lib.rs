//! A multi-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that owns a multi-deck [`Shoe`], a
//! dealer and an ordered list of players, and drives a round from the deal
//! through player turns and the dealer's draw to a won or lost status for
//! every participant. Player moves come from a [`DecisionSource`]; viewers
//! follow along through [`Snapshot`]s handed to a [`RoundObserver`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, CardCatalog, DecisionError, GameOptions, GameSession};
//!
//! let catalog = CardCatalog::new();
//! let mut session = GameSession::new(&catalog, GameOptions::default(), "house", 42);
//! session.add_player("alice").unwrap();
//!
//! let mut always_stay = |_: &str| -> Result<Action, DecisionError> { Ok(Action::Stay) };
//! let summary = session.play_round(&mut always_stay, &mut ()).unwrap();
//! assert_eq!(summary.winners.len() + summary.losers.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, CardCatalog, DECK_SIZE, Rank, RankValue, Suit};
#[cfg(feature = "std")]
pub use decision::{
    ChannelDecisionSource, DecisionHandle, DecisionMessage, DecisionRequest, channel,
};
pub use decision::{Action, DecisionSource};
pub use error::{
    CatalogError, DealError, DecisionError, ReshuffleError, RoundError, SeatError, ShoeError,
};
pub use game::{GameSession, RoundState};
pub use hand::{BLACKJACK, Hand, HandCard, HandTotals};
pub use options::{DealerPolicy, GameOptions};
pub use participant::{Participant, Role, Status};
pub use result::RoundSummary;
pub use shoe::Shoe;
pub use snapshot::{CardView, ParticipantSnapshot, RoundEvent, RoundObserver, Snapshot};
