// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in command modules, one per game plus `/stop`.

pub mod connect_four;
pub mod hangman;
pub mod hangman_duel;
pub mod stop;
pub mod tictactoe;

use crate::command::{Actor, CommandInvocation, GameCommand, InteractionResponse};
use crate::session::Participant;
use gamehub_core::GameKind;
use std::sync::Arc;

/// Every command module, in registration order
pub fn all() -> Vec<Arc<dyn GameCommand>> {
    vec![
        Arc::new(tictactoe::TicTacToeCommand),
        Arc::new(connect_four::ConnectFourCommand),
        Arc::new(hangman::HangmanCommand),
        Arc::new(hangman_duel::HangmanDuelCommand),
        Arc::new(stop::StopCommand),
    ]
}

/// Button-id prefix owned by each game kind
pub(crate) fn prefix_for(kind: GameKind) -> &'static str {
    match kind {
        GameKind::TicTacToe => tictactoe::PREFIX,
        GameKind::ConnectFour => connect_four::PREFIX,
        GameKind::Hangman => hangman::PREFIX,
        GameKind::HangmanDuel => hangman_duel::PREFIX,
    }
}

/// Validate the `opponent` option of a challenge command. A missing,
/// bot or self opponent is answered with a notice instead of an error.
pub(crate) fn check_opponent(
    invocation: &CommandInvocation,
) -> Result<Actor, InteractionResponse> {
    let Some(opponent) = invocation.opponent.clone() else {
        return Err(InteractionResponse::Notice(
            "Pick an opponent to challenge.".into(),
        ));
    };
    if opponent.is_bot {
        return Err(InteractionResponse::Notice(
            "You can't challenge a bot.".into(),
        ));
    }
    if opponent.id == invocation.actor.id {
        return Err(InteractionResponse::Notice(
            "You can't challenge yourself.".into(),
        ));
    }
    Ok(opponent)
}

pub(crate) fn seat(actor: &Actor) -> Participant {
    Participant {
        id: actor.id.clone(),
        name: actor.name.clone(),
    }
}
