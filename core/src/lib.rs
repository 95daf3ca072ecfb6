// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gamehub Core - Game Rules and Board Logic
//!
//! This crate provides the rules for the games hosted by the session
//! engine:
//! - Tic-Tac-Toe (3x3 grid, three in a row)
//! - Connect Four (6x7 grid with gravity, four in a row)
//! - Hangman (solo word bank or a challenge word set by an opponent)
//!
//! Everything here is synchronous and side-effect free; sessions, timers
//! and presentation live in `gamehub-engine`.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod connect_four;
pub mod grid;
pub mod hangman;
pub mod tictactoe;
pub mod words;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player mark on a two-player board (first or second seat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player (moves first)
    A,
    /// Second player
    B,
}

impl Mark {
    /// Returns the opposing mark
    pub fn opponent(&self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Seat index of this mark in a two-player session (A = 0, B = 1)
    pub fn seat(&self) -> usize {
        match self {
            Mark::A => 0,
            Mark::B => 1,
        }
    }

    /// Mark for a seat index; panics on anything but 0 or 1
    pub fn for_seat(seat: usize) -> Self {
        match seat {
            0 => Mark::A,
            1 => Mark::B,
            _ => panic!("two-player games have seats 0 and 1, got {seat}"),
        }
    }
}

/// Which game a session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// Tic-Tac-Toe, two players
    TicTacToe,
    /// Connect Four, two players
    ConnectFour,
    /// Hangman against the built-in word bank
    Hangman,
    /// Hangman where an opponent sets the word
    HangmanDuel,
}

impl GameKind {
    /// Command name used for registration and logging
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::ConnectFour => "connect4",
            GameKind::Hangman => "hangman",
            GameKind::HangmanDuel => "hangman_duel",
        }
    }

    /// Number of seated participants the game expects
    pub fn player_count(&self) -> usize {
        match self {
            GameKind::TicTacToe | GameKind::ConnectFour | GameKind::HangmanDuel => 2,
            GameKind::Hangman => 1,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues, turn may pass to the opponent
    Continue,
    /// The mover has won
    Won,
    /// The board is full with no winner
    Drawn,
    /// The guesser ran out of errors (Hangman only)
    Lost,
}

impl MoveOutcome {
    /// Whether this outcome ends the game
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Errors raised by game rules when a move is rejected.
///
/// A rejected move never mutates the game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The coordinate is outside the board
    #[error("coordinate is outside the board")]
    OutOfBounds,

    /// The targeted cell already holds a mark
    #[error("cell already played")]
    Occupied,

    /// The targeted column has no free cell left
    #[error("column is full")]
    ColumnFull,

    /// The letter was already guessed (right or wrong)
    #[error("letter already used")]
    AlreadyGuessed,

    /// The guess is not a letter the game accepts
    #[error("not a usable letter")]
    NotALetter,

    /// The game has already reached a terminal outcome
    #[error("game is already over")]
    GameOver,
}
