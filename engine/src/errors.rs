// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine error taxonomy.
//!
//! Every variant of [`SessionError`] except `Internal` is a recoverable
//! rejection: the session is left untouched, its timer keeps running and
//! the display text of the error is shown to the acting participant.

use gamehub_core::MoveError;
use thiserror::Error;

/// Why an inbound command or UI event was rejected
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session id could not be resolved (expired or evicted)
    #[error("this game no longer exists or has expired")]
    NotFound,

    /// Acting identity is not among the session's participants
    #[error("you are not part of this game")]
    NotParticipant,

    /// Right session and participant, wrong turn
    #[error("it is not your turn")]
    NotYourTurn,

    /// The session already reached a terminal state
    #[error("this game is already over")]
    Finished,

    /// The move itself was rejected by the game rules
    #[error(transparent)]
    InvalidMove(#[from] MoveError),

    /// Unparseable move payload (bad field count, non-numeric coordinate)
    #[error("could not read that move")]
    MalformedInput,

    /// A challenge word failed validation
    #[error("the word must be 3-20 letters (accents are folded)")]
    InvalidWord,

    /// A participant already has a running game in this channel
    #[error("a game involving that player is already running here")]
    AlreadyPlaying,

    /// A pending word-submission handshake timed out
    #[error("that challenge has expired, run the command again")]
    ChallengeExpired,

    /// Unexpected failure inside a handler; logged, shown generically
    #[error("something went wrong, try again")]
    Internal(#[source] anyhow::Error),
}

/// Errors of the interaction router itself
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// Two commands declared the same interaction prefix
    #[error("duplicate interaction prefix: {0}")]
    DuplicatePrefix(String),

    /// Inbound identifier had no usable prefix
    #[error("malformed interaction id")]
    MalformedId,
}
