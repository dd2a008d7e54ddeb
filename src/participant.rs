//! Dealers, players and spectators.

use alloc::string::String;

use crate::hand::Hand;

/// What a participant does at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Deals the round and plays the house hand.
    Dealer,
    /// Plays a hand against the dealer.
    Player,
    /// Watches without holding cards.
    Spectator,
}

/// A participant's round-scoped status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Seated, round not yet dealt.
    Waiting,
    /// Dealt in and still undecided.
    Playing,
    /// Won the round.
    Won,
    /// Lost the round.
    Lost,
    /// Watching; never changes.
    Spectator,
}

impl Status {
    /// Whether the status is final for the round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Someone at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: String,
    role: Role,
    status: Status,
    hand: Hand,
}

impl Participant {
    /// Creates a dealer.
    #[must_use]
    pub fn dealer(id: impl Into<String>) -> Self {
        Self::with_role(id, Role::Dealer)
    }

    /// Creates a player.
    #[must_use]
    pub fn player(id: impl Into<String>) -> Self {
        Self::with_role(id, Role::Player)
    }

    /// Creates a spectator.
    #[must_use]
    pub fn spectator(id: impl Into<String>) -> Self {
        Self::with_role(id, Role::Spectator)
    }

    fn with_role(id: impl Into<String>, role: Role) -> Self {
        let status = match role {
            Role::Spectator => Status::Spectator,
            Role::Dealer | Role::Player => Status::Waiting,
        };
        Self {
            id: id.into(),
            role,
            status,
            hand: Hand::new(),
        }
    }

    /// Returns the participant id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the participant's hand, or `None` for spectators.
    #[must_use]
    pub const fn hand(&self) -> Option<&Hand> {
        match self.role {
            Role::Spectator => None,
            Role::Dealer | Role::Player => Some(&self.hand),
        }
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Whether the participant is still in the round (not Won or Lost).
    #[must_use]
    pub const fn is_undecided(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Whether the participant has lost the round.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == Status::Lost
    }

    /// Whether the participant has won the round.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }

    /// Moves a waiting participant into the round.
    pub(crate) fn join_round(&mut self) {
        if self.status == Status::Waiting {
            self.status = Status::Playing;
        }
    }

    /// Settles a playing participant as won or lost.
    ///
    /// Returns `false` (and changes nothing) if the participant is a spectator
    /// or already settled.
    pub(crate) fn settle(&mut self, status: Status) -> bool {
        debug_assert!(status.is_terminal());
        if self.status != Status::Playing {
            return false;
        }
        log::debug!("{} {:?} -> {:?}", self.id, self.status, status);
        self.status = status;
        true
    }

    /// Clears the hand and puts the participant back to waiting.
    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        if self.role != Role::Spectator {
            self.status = Status::Waiting;
        }
    }
}
