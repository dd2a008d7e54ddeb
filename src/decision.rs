//! Player decisions and the sources that supply them.

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::DecisionError;

/// A player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl FromStr for Action {
    type Err = DecisionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if trimmed.eq_ignore_ascii_case("stay") || trimmed.eq_ignore_ascii_case("stand") {
            Ok(Self::Stay)
        } else {
            Err(DecisionError::Unrecognized(raw.to_string()))
        }
    }
}

/// Supplies player decisions to a round.
///
/// [`request_action`](Self::request_action) is the only point where a round
/// waits on the outside world; it may block for as long as the player takes.
/// Returning [`DecisionError::Cancelled`] makes the round treat the decision
/// as [`Action::Stay`]. Returning [`DecisionError::Unrecognized`] aborts the
/// round.
pub trait DecisionSource {
    /// Asks `player_id` for their next move.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::Cancelled`] if the request was cancelled, or
    /// [`DecisionError::Unrecognized`] if the reply was neither hit nor stay.
    fn request_action(&mut self, player_id: &str) -> Result<Action, DecisionError>;

    /// Called once before a round deals. Sources holding queued input from an
    /// earlier round discard it here.
    fn round_started(&mut self) {}
}

impl<F> DecisionSource for F
where
    F: FnMut(&str) -> Result<Action, DecisionError>,
{
    fn request_action(&mut self, player_id: &str) -> Result<Action, DecisionError> {
        self(player_id)
    }
}

#[cfg(feature = "std")]
pub use channel::{
    ChannelDecisionSource, DecisionHandle, DecisionMessage, DecisionRequest, channel,
};

#[cfg(feature = "std")]
mod channel {
    use alloc::string::String;
    use std::sync::mpsc;

    use super::{Action, DecisionError, DecisionSource};

    /// A pending decision, published to the transport layer.
    ///
    /// Answers must echo the request back through [`DecisionHandle::reply`]
    /// or [`DecisionHandle::cancel`]; anything stamped with another request's
    /// sequence number is discarded.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DecisionRequest {
        /// Increases with every request made by one source, across rounds.
        pub seq: u64,
        /// The player being asked.
        pub player_id: String,
    }

    /// A message relayed from the transport layer to a waiting round.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DecisionMessage {
        /// A raw reply from a player.
        Reply {
            /// The request being answered.
            seq: u64,
            /// The replying player.
            player_id: String,
            /// The unparsed action text.
            action: String,
        },
        /// Abandon the request with this sequence number.
        Cancel {
            /// The request being cancelled.
            seq: u64,
        },
    }

    /// Sending half held by the transport layer.
    #[derive(Debug, Clone)]
    pub struct DecisionHandle {
        tx: mpsc::Sender<DecisionMessage>,
    }

    impl DecisionHandle {
        /// Relays a raw reply from `player_id` to `request`.
        ///
        /// The reply is used only while `request` is still pending and only if
        /// `player_id` is the player it asked. Returns `false` if the round
        /// side has been dropped.
        pub fn reply(
            &self,
            request: &DecisionRequest,
            player_id: impl Into<String>,
            action: impl Into<String>,
        ) -> bool {
            self.tx
                .send(DecisionMessage::Reply {
                    seq: request.seq,
                    player_id: player_id.into(),
                    action: action.into(),
                })
                .is_ok()
        }

        /// Cancels `request`, which then defaults to a stay.
        ///
        /// A cancel only ever applies to the request it names. Once that
        /// request has been answered the cancel is discarded and never
        /// carries over to a later request or round. Returns `false` if the
        /// round side has been dropped.
        pub fn cancel(&self, request: &DecisionRequest) -> bool {
            self.tx
                .send(DecisionMessage::Cancel { seq: request.seq })
                .is_ok()
        }
    }

    /// A [`DecisionSource`] fed through a channel, typically from another
    /// thread that owns the player connections.
    ///
    /// Every request is published on the request channel returned by
    /// [`channel`] before the source blocks waiting for an answer.
    #[derive(Debug)]
    pub struct ChannelDecisionSource {
        rx: mpsc::Receiver<DecisionMessage>,
        requests: mpsc::Sender<DecisionRequest>,
        next_seq: u64,
    }

    /// Creates a connected handle, request feed and decision source.
    #[must_use]
    pub fn channel() -> (
        DecisionHandle,
        mpsc::Receiver<DecisionRequest>,
        ChannelDecisionSource,
    ) {
        let (tx, rx) = mpsc::channel();
        let (requests, pending) = mpsc::channel();
        (
            DecisionHandle { tx },
            pending,
            ChannelDecisionSource {
                rx,
                requests,
                next_seq: 0,
            },
        )
    }

    impl ChannelDecisionSource {
        /// Drops every queued message without using it.
        fn discard_queued(&self) -> usize {
            self.rx.try_iter().count()
        }
    }

    impl DecisionSource for ChannelDecisionSource {
        fn request_action(&mut self, player_id: &str) -> Result<Action, DecisionError> {
            let seq = self.next_seq;
            self.next_seq += 1;

            let request = DecisionRequest {
                seq,
                player_id: String::from(player_id),
            };
            if self.requests.send(request).is_err() {
                log::warn!("no transport listening for requests, cancelling {player_id}");
                return Err(DecisionError::Cancelled);
            }

            loop {
                match self.rx.recv() {
                    Ok(DecisionMessage::Reply {
                        seq: answered,
                        player_id: from,
                        action,
                    }) => {
                        if answered != seq {
                            log::debug!("dropping stale reply from {from} to request {answered}");
                        } else if from != player_id {
                            log::warn!("ignoring reply from {from} while waiting on {player_id}");
                        } else {
                            return action.parse();
                        }
                    }
                    Ok(DecisionMessage::Cancel { seq: cancelled }) => {
                        if cancelled == seq {
                            return Err(DecisionError::Cancelled);
                        }
                        log::debug!("dropping stale cancel for request {cancelled}");
                    }
                    Err(mpsc::RecvError) => {
                        log::warn!("decision channel closed while waiting on {player_id}");
                        return Err(DecisionError::Cancelled);
                    }
                }
            }
        }

        fn round_started(&mut self) {
            let dropped = self.discard_queued();
            if dropped > 0 {
                log::debug!("discarded {dropped} decision messages left from an earlier round");
            }
        }
    }
}
