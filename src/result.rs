//! Round outcome types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::participant::Status;

/// Outcome of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    /// The dealer's final status.
    pub dealer_status: Status,
    /// Players who won, in turn order.
    pub winners: Vec<String>,
    /// Players who lost, in turn order.
    pub losers: Vec<String>,
    /// Cards drawn from the shoe during the round, including the deal.
    pub cards_drawn: usize,
    /// The dealer's highest total not over 21, if any.
    pub dealer_best: Option<u8>,
}

impl RoundSummary {
    /// Whether the house won.
    #[must_use]
    pub fn dealer_won(&self) -> bool {
        self.dealer_status == Status::Won
    }
}
