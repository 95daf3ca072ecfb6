// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hangman rules: guess letters of a hidden word, six errors allowed

use crate::{words, MoveError, MoveOutcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Wrong guesses allowed before the game is lost
pub const MAX_ERRORS: usize = 6;

/// Glyph shown for letters not yet guessed
pub const MASK_GLYPH: char = '﹏';

/// A Hangman game in progress.
///
/// The target word is normalized lowercase without diacritics; guessed
/// letters are folded the same way before lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hangman {
    word: String,
    guessed: BTreeSet<char>,
    wrong: BTreeSet<char>,
    over: bool,
}

impl Hangman {
    /// Start a game against a word from the built-in bank
    pub fn random() -> Self {
        Self::with_word(words::random_word())
    }

    /// Start a game against an already-normalized word
    pub fn with_word(word: String) -> Self {
        debug_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        Self {
            word,
            guessed: BTreeSet::new(),
            wrong: BTreeSet::new(),
            over: false,
        }
    }

    /// The hidden word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Correctly guessed letters in alphabetical order
    pub fn guessed(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Wrong letters in alphabetical order
    pub fn wrong(&self) -> impl Iterator<Item = char> + '_ {
        self.wrong.iter().copied()
    }

    /// Number of wrong guesses so far
    pub fn errors(&self) -> usize {
        self.wrong.len()
    }

    /// Whether `letter` was already tried, right or wrong
    pub fn tried(&self, letter: char) -> bool {
        let l = fold(letter);
        self.guessed.contains(&l) || self.wrong.contains(&l)
    }

    /// The word with unguessed letters masked, letters spaced out
    pub fn masked_word(&self) -> String {
        let mut out = String::new();
        for (i, ch) in self.word.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.guessed.contains(&ch) {
                ch
            } else {
                MASK_GLYPH
            });
        }
        out
    }

    /// Guess a letter.
    ///
    /// `Won` once every distinct letter of the word is covered, `Lost`
    /// when the error limit is reached. A rejected guess changes
    /// nothing; a recorded letter is never removed.
    pub fn guess(&mut self, letter: char) -> Result<MoveOutcome, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        let l = fold(letter);
        if !l.is_ascii_lowercase() {
            return Err(MoveError::NotALetter);
        }
        if self.guessed.contains(&l) || self.wrong.contains(&l) {
            return Err(MoveError::AlreadyGuessed);
        }

        if self.word.contains(l) {
            self.guessed.insert(l);
            if self.word.chars().all(|c| self.guessed.contains(&c)) {
                self.over = true;
                return Ok(MoveOutcome::Won);
            }
        } else {
            self.wrong.insert(l);
            if self.wrong.len() >= MAX_ERRORS {
                self.over = true;
                return Ok(MoveOutcome::Lost);
            }
        }
        Ok(MoveOutcome::Continue)
    }
}

/// Fold a guessed letter the same way the target word was normalized
fn fold(letter: char) -> char {
    words::normalize(&letter.to_string()).chars().next().unwrap_or(letter)
}
