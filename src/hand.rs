//! Hand representation and soft/hard scoring.

use alloc::vec::Vec;

use crate::card::{Card, RankValue};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// A card held in a hand together with its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandCard {
    /// The card.
    pub card: Card,
    /// Whether the card is dealt face up.
    pub face_up: bool,
}

impl HandCard {
    /// A face-up card.
    #[must_use]
    pub const fn up(card: Card) -> Self {
        Self {
            card,
            face_up: true,
        }
    }

    /// A face-down card.
    #[must_use]
    pub const fn down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }
}

/// Expands a run of cards into every achievable total.
///
/// Aces branch the running totals, so a hand with `n` aces yields `2^n`
/// entries. Duplicates are kept.
fn expand_scores<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<u8> {
    let mut totals = alloc::vec![0u8];

    for card in cards {
        match card.rank.values() {
            RankValue::Single(value) => {
                for total in &mut totals {
                    *total = total.saturating_add(value);
                }
            }
            RankValue::Either(low, high) => {
                let mut high_branch: Vec<u8> =
                    totals.iter().map(|t| t.saturating_add(high)).collect();
                for total in &mut totals {
                    *total = total.saturating_add(low);
                }
                totals.append(&mut high_branch);
            }
        }
    }

    totals
}

/// The outcome-relevant facts about a hand, from a single score expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTotals {
    /// Some total is exactly 21.
    pub has_21: bool,
    /// Every total exceeds 21.
    pub busted: bool,
    /// The highest total not exceeding 21.
    pub best: Option<u8>,
}

/// A participant's ordered cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<HandCard>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    /// Replaces every card in the hand.
    pub fn replace_cards(&mut self, cards: impl IntoIterator<Item = HandCard>) {
        self.cards.clear();
        self.cards.extend(cards);
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: HandCard) {
        self.cards.push(card);
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Flips every card face up.
    pub fn reveal(&mut self) {
        for held in &mut self.cards {
            held.face_up = true;
        }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every achievable total, one entry per way of counting the aces.
    ///
    /// An empty hand scores `[0]`.
    #[must_use]
    pub fn scores(&self) -> Vec<u8> {
        expand_scores(self.cards.iter().map(|held| &held.card))
    }

    /// Distinct totals that do not exceed 21, ascending.
    #[must_use]
    pub fn legal_scores(&self) -> Vec<u8> {
        let mut legal: Vec<u8> = self
            .scores()
            .into_iter()
            .filter(|&total| total <= BLACKJACK)
            .collect();
        legal.sort_unstable();
        legal.dedup();
        legal
    }

    /// The highest total that does not exceed 21.
    #[must_use]
    pub fn best_score(&self) -> Option<u8> {
        self.legal_scores().last().copied()
    }

    /// The lowest achievable total.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.scores().into_iter().min().unwrap_or(0)
    }

    /// Whether any way of counting the hand totals exactly 21.
    #[must_use]
    pub fn has_21(&self) -> bool {
        self.scores().contains(&BLACKJACK)
    }

    /// Whether every way of counting the hand exceeds 21.
    #[must_use]
    pub fn has_busted(&self) -> bool {
        self.min_score() > BLACKJACK
    }

    /// Expands the hand once and reports 21, bust and best total together.
    #[must_use]
    pub fn totals(&self) -> HandTotals {
        let scores = self.scores();
        HandTotals {
            has_21: scores.contains(&BLACKJACK),
            busted: scores.iter().all(|&total| total > BLACKJACK),
            best: scores.into_iter().filter(|&total| total <= BLACKJACK).max(),
        }
    }

    /// Whether any total counts an ace as 11 without busting.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.legal_scores().len() > 1
    }
}

