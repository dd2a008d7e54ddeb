use alloc::string::String;

use crate::decision::{Action, DecisionSource};
use crate::error::{DecisionError, RoundError};
use crate::hand::HandCard;
use crate::participant::Status;
use crate::result::RoundSummary;
use crate::snapshot::{RoundEvent, RoundObserver};

use super::state::TurnCheck;
use super::{GameSession, RoundState};

impl GameSession {
    /// Plays a full round: deal, player turns in seat order, dealer turn and
    /// settlement.
    ///
    /// Each player keeps acting until they stay, bust, or the round is decided.
    /// `decisions` is asked for every player move; `observer` receives a
    /// complete snapshot after the deal and after every draw or status change.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `NotStarted` state, no
    /// players are seated, the shoe runs out, or a decision source replies
    /// with something other than hit or stay. On error the round stays
    /// `InProgress` until [`GameSession::reset`] is called.
    pub fn play_round<D, O>(
        &mut self,
        decisions: &mut D,
        observer: &mut O,
    ) -> Result<RoundSummary, RoundError>
    where
        D: DecisionSource + ?Sized,
        O: RoundObserver + ?Sized,
    {
        if self.state != RoundState::NotStarted {
            return Err(RoundError::InvalidState);
        }

        log::info!(
            "round starting: dealer {}, {} players",
            self.dealer.id(),
            self.players.len()
        );

        decisions.round_started();
        self.deal()?;
        self.notify(observer, &RoundEvent::Dealt);

        if !self.play_players(decisions, observer)? {
            self.play_dealer(observer)?;
        }

        Ok(self.finish(observer))
    }

    /// Runs every player's turn. Returns `true` if the round was decided
    /// before the dealer's turn.
    fn play_players<D, O>(
        &mut self,
        decisions: &mut D,
        observer: &mut O,
    ) -> Result<bool, RoundError>
    where
        D: DecisionSource + ?Sized,
        O: RoundObserver + ?Sized,
    {
        for index in 0..self.players.len() {
            if self.players[index].is_lost() {
                continue;
            }

            loop {
                let before = self.statuses();
                let check = self.check_player(index);
                self.notify_if_changed(observer, &before);
                match check {
                    TurnCheck::RoundOver => return Ok(true),
                    TurnCheck::Busted => break,
                    TurnCheck::Continue => {}
                }

                let player_id = String::from(self.players[index].id());
                let action = match decisions.request_action(&player_id) {
                    Ok(action) => action,
                    Err(DecisionError::Cancelled) => {
                        log::warn!("decision for {player_id} cancelled, defaulting to stay");
                        Action::Stay
                    }
                    Err(DecisionError::Unrecognized(reply)) => {
                        return Err(RoundError::ProtocolViolation { player_id, reply });
                    }
                };

                match action {
                    Action::Stay => {
                        log::debug!("{player_id} stays");
                        break;
                    }
                    Action::Hit => {
                        let card = self.draw()?;
                        self.players[index].hand_mut().push(HandCard::up(card));
                        log::debug!("{player_id} hits: {card:?}");
                        self.notify(
                            observer,
                            &RoundEvent::CardDrawn {
                                participant_id: player_id,
                            },
                        );
                    }
                }
            }
        }

        Ok(false)
    }

    /// Applies the early-exit rules for the player at `index`.
    ///
    /// In order: a player holding 21 wins and every other undecided player
    /// loses; a player whose co-players and dealer have all lost wins; a
    /// busted player loses.
    fn check_player(&mut self, index: usize) -> TurnCheck {
        let Some(hand) = self.players[index].hand() else {
            return TurnCheck::Busted;
        };
        let totals = hand.totals();

        if totals.has_21 {
            self.players[index].settle(Status::Won);
            for (other, player) in self.players.iter_mut().enumerate() {
                if other != index {
                    player.settle(Status::Lost);
                }
            }
            log::debug!("{} has 21", self.players[index].id());
            return TurnCheck::RoundOver;
        }

        let others_lost = self
            .players
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .all(|(_, player)| player.is_lost());
        if others_lost && self.dealer.is_lost() {
            self.players[index].settle(Status::Won);
            return TurnCheck::RoundOver;
        }

        if totals.busted {
            self.players[index].settle(Status::Lost);
            log::debug!("{} busts", self.players[index].id());
            return TurnCheck::Busted;
        }

        TurnCheck::Continue
    }
}
