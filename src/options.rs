//! Table configuration options.

use crate::hand::Hand;

/// When the dealer draws another card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DealerPolicy {
    /// Hit while any achievable total is strictly below the threshold.
    ///
    /// Because the hard total counts every ace as 1, a soft hand keeps
    /// drawing even when its soft total has reached the threshold.
    AnyTotalBelow(u8),
    /// Hit below 17 and stand on every 17, soft or hard.
    StandOnSoft17,
    /// Hit below 17 and on soft 17, stand on hard 17.
    HitSoft17,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::AnyTotalBelow(18)
    }
}

impl DealerPolicy {
    /// Returns whether a dealer holding `hand` should draw.
    #[must_use]
    pub fn should_hit(self, hand: &Hand) -> bool {
        match self {
            Self::AnyTotalBelow(threshold) => hand.scores().iter().any(|&t| t < threshold),
            Self::StandOnSoft17 => hand.best_score().is_some_and(|best| best < 17),
            Self::HitSoft17 => match hand.best_score() {
                Some(best) if best < 17 => true,
                Some(17) => hand.is_soft(),
                _ => false,
            },
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{DealerPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_dealer_policy(DealerPolicy::StandOnSoft17)
///     .with_penetration(0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// When the dealer draws.
    pub dealer_policy: DealerPolicy,
    /// Fraction of the shoe dealt before a reshuffle between rounds.
    /// 0 to disable reshuffling.
    pub penetration: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            dealer_policy: DealerPolicy::AnyTotalBelow(18),
            penetration: 0.0,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the dealer's drawing policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DealerPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_dealer_policy(DealerPolicy::HitSoft17);
    /// assert_eq!(options.dealer_policy, DealerPolicy::HitSoft17);
    /// ```
    #[must_use]
    pub const fn with_dealer_policy(mut self, policy: DealerPolicy) -> Self {
        self.dealer_policy = policy;
        self
    }

    /// Sets the shoe penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
