//! Card types and the canonical card catalog.

use crate::error::CatalogError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

impl TryFrom<u8> for Suit {
    type Error = CatalogError;

    /// Converts a raw suit index (0 = Hearts .. 3 = Spades).
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(CatalogError::InvalidSuit(raw))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in catalog order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the point values this rank can contribute to a hand.
    ///
    /// Every rank has a single value except the Ace, which counts as 1 or 11.
    #[must_use]
    pub const fn values(self) -> RankValue {
        match self {
            Self::Ace => RankValue::Either(1, 11),
            Self::Jack | Self::Queen | Self::King => RankValue::Single(10),
            other => RankValue::Single(other as u8 + 1),
        }
    }

    /// Returns the raw rank number (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for Rank {
    type Error = CatalogError;

    /// Converts a raw rank number (1 = Ace .. 13 = King).
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        raw.checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(CatalogError::InvalidRank(raw))
    }
}

/// Point value(s) a rank contributes to a hand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankValue {
    /// A fixed value.
    Single(u8),
    /// Two alternative values (low, high).
    Either(u8, u8),
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The canonical set of cards, one per (rank, suit) pair.
///
/// Cards are plain values, so two lookups of the same pair always compare
/// equal. Build one catalog and pass it by reference to whatever needs to
/// resolve raw rank/suit input.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    deck: [Card; DECK_SIZE],
}

impl CardCatalog {
    /// Builds the catalog.
    #[must_use]
    pub fn new() -> Self {
        let deck = core::array::from_fn(|index| {
            let suit = Suit::ALL[index / Rank::ALL.len()];
            let rank = Rank::ALL[index % Rank::ALL.len()];
            Card::new(rank, suit)
        });
        Self { deck }
    }

    /// Returns the canonical card for a raw rank (1..=13) and suit (0..=3).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if either value is outside its enumeration.
    pub fn get(&self, rank: u8, suit: u8) -> Result<Card, CatalogError> {
        let rank = Rank::try_from(rank)?;
        let suit = Suit::try_from(suit)?;
        Ok(self.card(rank, suit))
    }

    /// Returns the canonical card for a typed (rank, suit) pair.
    #[must_use]
    pub fn card(&self, rank: Rank, suit: Suit) -> Card {
        self.deck[suit as usize * Rank::ALL.len() + rank as usize]
    }

    /// Returns one of every card, suit-major (Hearts first) and Ace to King
    /// within each suit.
    #[must_use]
    pub const fn deck(&self) -> &[Card; DECK_SIZE] {
        &self.deck
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::new()
    }
}
