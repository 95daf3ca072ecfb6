// SPDX-License-Identifier: MIT OR Apache-2.0

//! The session entity: one running (or just-concluded) game.
//!
//! A session is `Active` until exactly one terminal transition happens;
//! afterwards it is immutable and the hub evicts it. Every mutating
//! entry point re-checks the status first, so a move racing a timer
//! expiry can only produce one terminal outcome.

use crate::errors::SessionError;
use crate::{ChannelId, MessageId, PlayerId, SessionId};
use chrono::{DateTime, Utc};
use gamehub_core::connect_four::ConnectFour;
use gamehub_core::hangman::Hangman;
use gamehub_core::tictactoe::TicTacToe;
use gamehub_core::{GameKind, MoveOutcome};
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

/// Lifecycle status; everything but `Active` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    /// Seat index of the winner
    Won { winner: usize },
    Drawn,
    /// Hangman error limit reached
    Lost,
    /// Seat index of the participant who ran out of time
    Forfeited { loser: usize },
    /// Stopped on request, independent of whose turn it was
    Stopped,
}

impl SessionStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

/// A seated player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: PlayerId,
    /// Display name used by the presentation layer
    pub name: String,
}

/// Game-specific state blob, one variant per rule set
#[derive(Debug, Clone)]
pub enum BoardState {
    TicTacToe(TicTacToe),
    ConnectFour(ConnectFour),
    /// Shared by the solo and duel variants
    Hangman(Hangman),
}

/// A validated move request, already parsed from the wire fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Tic-Tac-Toe cell
    Cell { row: usize, col: usize },
    /// Connect Four column drop
    Drop { col: usize },
    /// Hangman letter guess
    Letter(char),
}

/// One game instance.
///
/// Seat order fixes the roles: grid games seat the challenger first and
/// alternate turns; Hangman seats the guesser first (the optional word
/// setter second) and the turn index never moves.
#[derive(Debug)]
pub struct Session {
    pub id: SessionId,
    pub kind: GameKind,
    pub participants: Vec<Participant>,
    /// Seat index of the participant on the clock
    pub turn: usize,
    pub board: BoardState,
    pub status: SessionStatus,
    pub channel: ChannelId,
    /// Handle of the display message, set after the first send
    pub message: Option<MessageId>,
    /// Absolute end of the current turn
    pub deadline: Option<Instant>,
    /// Whether the low-time warning went out for this arming
    pub warned: bool,
    /// Hangman letter keyboard page (0 = A-M, 1 = N-Z)
    pub letter_page: usize,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create an active session with a fresh opaque id
    pub fn new(
        kind: GameKind,
        participants: Vec<Participant>,
        channel: ChannelId,
        board: BoardState,
    ) -> Self {
        debug_assert_eq!(participants.len(), kind.player_count());
        let id = format!("{}-{}", kind.name(), Uuid::new_v4().simple());
        Self {
            id,
            kind,
            participants,
            turn: 0,
            board,
            status: SessionStatus::Active,
            channel,
            message: None,
            deadline: None,
            warned: false,
            letter_page: 0,
            created_at: Utc::now(),
        }
    }

    /// Participant currently on the clock
    pub fn current_player(&self) -> &Participant {
        &self.participants[self.turn]
    }

    /// Seat index of `player`, if seated
    pub fn seat_of(&self, player: &PlayerId) -> Option<usize> {
        self.participants.iter().position(|p| &p.id == player)
    }

    /// Time left on the current turn, zero once past the deadline
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|d| d.checked_duration_since(now).unwrap_or_default())
    }

    /// Apply a move for `player`.
    ///
    /// Preconditions are checked in order (active, participant, turn,
    /// move itself); the first failure wins and nothing is mutated. On
    /// success the board is updated, a terminal outcome fixes the
    /// status, otherwise the turn index follows the rules' next mover.
    pub fn apply_move(
        &mut self,
        player: &PlayerId,
        input: &MoveInput,
    ) -> Result<MoveOutcome, SessionError> {
        if !self.status.is_active() {
            return Err(SessionError::Finished);
        }
        let seat = self.seat_of(player).ok_or(SessionError::NotParticipant)?;
        if seat != self.turn {
            return Err(SessionError::NotYourTurn);
        }

        let mover = self.turn;
        let outcome = match (&mut self.board, input) {
            (BoardState::TicTacToe(game), MoveInput::Cell { row, col }) => {
                game.play(*row, *col)?
            }
            (BoardState::ConnectFour(game), MoveInput::Drop { col }) => {
                game.drop_disc(*col)?.1
            }
            (BoardState::Hangman(game), MoveInput::Letter(letter)) => game.guess(*letter)?,
            _ => return Err(SessionError::MalformedInput),
        };

        match outcome {
            MoveOutcome::Continue => match &self.board {
                BoardState::TicTacToe(game) => self.turn = game.to_move().seat(),
                BoardState::ConnectFour(game) => self.turn = game.to_move().seat(),
                // the guesser stays on the clock
                BoardState::Hangman(_) => {}
            },
            MoveOutcome::Won => self.status = SessionStatus::Won { winner: mover },
            MoveOutcome::Drawn => self.status = SessionStatus::Drawn,
            MoveOutcome::Lost => self.status = SessionStatus::Lost,
        }
        Ok(outcome)
    }

    /// Terminal transition for a missed deadline. Returns false (and
    /// changes nothing) when the session is no longer active.
    pub fn forfeit(&mut self) -> bool {
        if !self.status.is_active() {
            return false;
        }
        self.status = SessionStatus::Forfeited { loser: self.turn };
        true
    }

    /// Terminal transition for an explicit stop. Returns false (and
    /// changes nothing) when the session is no longer active.
    pub fn stop(&mut self) -> bool {
        if !self.status.is_active() {
            return false;
        }
        self.status = SessionStatus::Stopped;
        true
    }
}
