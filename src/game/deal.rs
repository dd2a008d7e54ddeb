use crate::error::DealError;
use crate::hand::HandCard;

use super::{GameSession, RoundState};

impl GameSession {
    /// Deals the opening cards and starts the round.
    ///
    /// Every player, in turn order, receives two face-up cards. The dealer then
    /// receives a face-down hole card followed by a face-up card. Dealer and
    /// players move from waiting to playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started, no players are
    /// seated, or the shoe cannot cover the deal. Nothing is dealt on error.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::NotStarted {
            return Err(DealError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let cards_needed = (self.players.len() + 1) * 2;
        if self.shoe.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        self.dealer.join_round();
        for player in &mut self.players {
            player.join_round();
        }

        for index in 0..self.players.len() {
            for _ in 0..2 {
                let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
                self.players[index].hand_mut().push(HandCard::up(card));
            }
        }

        let hole = self.draw().map_err(|_| DealError::NotEnoughCards)?;
        self.dealer.hand_mut().push(HandCard::down(hole));
        let up = self.draw().map_err(|_| DealError::NotEnoughCards)?;
        self.dealer.hand_mut().push(HandCard::up(up));

        self.state = RoundState::InProgress;
        log::debug!(
            "dealt {} players, {} cards left",
            self.players.len(),
            self.shoe.len()
        );

        Ok(())
    }
}
