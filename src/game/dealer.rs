use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RoundError;
use crate::hand::{Hand, HandCard};
use crate::participant::{Participant, Status};
use crate::result::RoundSummary;
use crate::snapshot::{RoundEvent, RoundObserver};

use super::{GameSession, RoundState};

impl GameSession {
    /// Settles whatever the current statuses already decide.
    ///
    /// If exactly one player is still standing and the dealer has lost, that
    /// player wins. If every player has lost and the dealer has not, the dealer
    /// wins. Returns `true` once the round is decided.
    fn check_game_over(&mut self) -> bool {
        let standing: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.is_lost())
            .map(|(index, _)| index)
            .collect();

        match standing.as_slice() {
            [last] if self.dealer.is_lost() => {
                self.players[*last].settle(Status::Won);
                return true;
            }
            [] if !self.dealer.is_lost() => {
                self.dealer.settle(Status::Won);
                return true;
            }
            _ => {}
        }

        self.dealer.is_won() || self.players.iter().any(Participant::is_won)
    }

    /// Dealer plays their hand according to the table's [`DealerPolicy`].
    ///
    /// The hole card is revealed first. The dealer then draws one face-up card
    /// at a time while the policy says hit, stopping early if a draw decides
    /// the round. Finally a dealer holding 21 wins outright and every
    /// undecided player loses; a busted dealer loses.
    ///
    /// [`DealerPolicy`]: crate::options::DealerPolicy
    pub(super) fn play_dealer<O: RoundObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<(), RoundError> {
        let before = self.statuses();
        let decided = self.check_game_over();
        self.notify_if_changed(observer, &before);
        if decided {
            return Ok(());
        }

        self.dealer.hand_mut().reveal();
        self.notify(observer, &RoundEvent::HoleCardRevealed);

        let policy = self.options.dealer_policy;
        while self
            .dealer
            .hand()
            .is_some_and(|hand| policy.should_hit(hand))
        {
            let card = self.draw()?;
            self.dealer.hand_mut().push(HandCard::up(card));
            log::debug!("dealer {} draws {:?}", self.dealer.id(), card);
            self.notify(
                observer,
                &RoundEvent::CardDrawn {
                    participant_id: String::from(self.dealer.id()),
                },
            );

            let before = self.statuses();
            let decided = self.check_game_over();
            self.notify_if_changed(observer, &before);
            if decided {
                return Ok(());
            }
        }

        let before = self.statuses();
        let totals = self.dealer.hand().map(Hand::totals);
        if totals.is_some_and(|totals| totals.has_21) {
            self.dealer.settle(Status::Won);
            for player in &mut self.players {
                player.settle(Status::Lost);
            }
        } else if totals.is_some_and(|totals| totals.busted) {
            self.dealer.settle(Status::Lost);
        }
        self.check_game_over();
        self.notify_if_changed(observer, &before);

        Ok(())
    }

    /// Settles every participant still playing so the round ends with each
    /// one won or lost.
    ///
    /// A player who already won takes the round from everyone left. Otherwise
    /// a settled dealer decides the rest, and failing that remaining players
    /// beat the dealer only with a strictly higher total.
    fn settle_remaining(&mut self) {
        if self.players.iter().any(Participant::is_won) {
            self.dealer.settle(Status::Lost);
            for player in &mut self.players {
                player.settle(Status::Lost);
            }
            return;
        }

        if self.dealer.is_won() {
            for player in &mut self.players {
                player.settle(Status::Lost);
            }
            return;
        }

        if self.dealer.is_lost() {
            for player in &mut self.players {
                player.settle(Status::Won);
            }
            return;
        }

        let dealer_best = self.dealer.hand().and_then(Hand::best_score);
        let mut any_player_won = false;
        for player in &mut self.players {
            if !player.is_undecided() {
                continue;
            }
            let player_best = player.hand().and_then(Hand::best_score);
            if player_best > dealer_best {
                player.settle(Status::Won);
                any_player_won = true;
            } else {
                player.settle(Status::Lost);
            }
        }

        self.dealer.settle(if any_player_won {
            Status::Lost
        } else {
            Status::Won
        });
    }

    /// Settles the round, reveals the dealer's hand and reports the outcome.
    pub(super) fn finish<O: RoundObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> RoundSummary {
        let before = self.statuses();
        self.settle_remaining();
        self.notify_if_changed(observer, &before);

        self.dealer.hand_mut().reveal();
        self.state = RoundState::Complete;

        let summary = self.summary();
        log::info!(
            "round complete: dealer {:?}, winners {:?}, {} cards drawn",
            summary.dealer_status,
            summary.winners,
            summary.cards_drawn
        );
        self.notify(observer, &RoundEvent::Completed);

        summary
    }

    /// Builds the outcome of the current round.
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        let ids_with = |status: Status| -> Vec<String> {
            self.players
                .iter()
                .filter(|p| p.status() == status)
                .map(|p| String::from(p.id()))
                .collect()
        };

        RoundSummary {
            dealer_status: self.dealer.status(),
            winners: ids_with(Status::Won),
            losers: ids_with(Status::Lost),
            cards_drawn: self.drawn_this_round,
            dealer_best: self.dealer.hand().and_then(Hand::best_score),
        }
    }
}
