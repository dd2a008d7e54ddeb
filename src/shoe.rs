//! The multi-deck shoe.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardCatalog};
use crate::error::ShoeError;

/// A shuffled pool of cards drawn from one or more canonical decks.
///
/// Cards are drawn from the end of the underlying vector. The shoe never
/// grows: the only mutations are [`Shoe::draw`] and [`Shoe::reshuffle`].
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    capacity: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a shoe of `decks` canonical decks and shuffles it with a
    /// generator seeded from `seed`.
    #[must_use]
    pub fn new(catalog: &CardCatalog, decks: u8, seed: u64) -> Self {
        let mut cards = Vec::with_capacity(usize::from(decks) * catalog.deck().len());
        for _ in 0..decks {
            cards.extend_from_slice(catalog.deck());
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);

        Self {
            capacity: cards.len(),
            cards,
            rng,
        }
    }

    /// Builds an unshuffled shoe that deals `draws` in the given order.
    ///
    /// Useful for replaying a known sequence of cards.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();

        Self {
            capacity: cards.len(),
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Exhausted)
    }

    /// Re-permutes the cards that are still in the shoe.
    pub fn reshuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many cards the shoe held when it was built.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the remaining cards, bottom first; the last element is drawn next.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Fraction of the shoe already dealt, in `0.0..=1.0`.
    #[must_use]
    pub fn used_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let ratio = 1.0 - (self.cards.len() as f64 / self.capacity as f64);
        ratio
    }
}
