//! Round state types.

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundState {
    /// Seats may change; nothing has been dealt.
    NotStarted,
    /// Cards are dealt and turns are being played.
    InProgress,
    /// Every participant is settled.
    Complete,
}

/// Result of checking the acting player before or after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TurnCheck {
    /// The player may act.
    Continue,
    /// The player busted; play moves to the next player.
    Busted,
    /// The round is decided.
    RoundOver,
}
