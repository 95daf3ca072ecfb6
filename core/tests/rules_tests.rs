// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-game rule checks against known positions

use gamehub_core::connect_four::ConnectFour;
use gamehub_core::hangman::Hangman;
use gamehub_core::tictactoe::TicTacToe;
use gamehub_core::{Mark, MoveError, MoveOutcome};

#[test]
fn tictactoe_known_winning_position() {
    // X X X
    // _ O _
    // O _ _
    let mut game = TicTacToe::new();
    game.play(0, 0).unwrap(); // X
    game.play(1, 1).unwrap(); // O
    game.play(0, 1).unwrap(); // X
    game.play(2, 0).unwrap(); // O
    assert_eq!(game.play(0, 2), Ok(MoveOutcome::Won));

    // every further move must be rejected, board untouched
    assert_eq!(game.play(2, 2), Err(MoveError::GameOver));
    assert_eq!(game.grid().get(2, 2), None);
    assert_eq!(game.grid().get(0, 0), Some(Mark::A));
}

#[test]
fn connect_four_vertical_column_three() {
    let mut game = ConnectFour::new();
    for filler in [0, 1, 2] {
        game.drop_disc(3).unwrap();
        game.drop_disc(filler).unwrap();
    }
    let (row, outcome) = game.drop_disc(3).unwrap();
    assert_eq!((row, outcome), (2, MoveOutcome::Won));
}

#[test]
fn mid_game_state_survives_serialization() {
    let mut game = ConnectFour::new();
    game.drop_disc(3).unwrap();
    game.drop_disc(3).unwrap();
    game.drop_disc(0).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: ConnectFour = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.grid().get(5, 3), Some(Mark::A));
    assert_eq!(restored.grid().get(4, 3), Some(Mark::B));
    assert_eq!(restored.grid().get(5, 0), Some(Mark::A));
    assert_eq!(restored.to_move(), game.to_move());

    // play continues from the restored position
    let (row, _) = restored.drop_disc(3).unwrap();
    assert_eq!(row, 3);
}

#[test]
fn hangman_masking_round_trip() {
    let mut game = Hangman::with_word("chat".into());
    game.guess('c').unwrap();
    game.guess('a').unwrap();

    let masked = game.masked_word();
    let revealed: Vec<char> = masked.split(' ').map(|s| s.chars().next().unwrap()).collect();
    assert_eq!(revealed[0], 'c');
    assert_eq!(revealed[2], 'a');
    assert_eq!(revealed[1], gamehub_core::hangman::MASK_GLYPH);
    assert_eq!(revealed[3], gamehub_core::hangman::MASK_GLYPH);

    assert_eq!(game.guess('a'), Err(MoveError::AlreadyGuessed));
}
