// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/tictactoe` and its board-cell buttons.

use super::{check_opponent, seat};
use crate::command::{CommandInvocation, GameCommand, InteractionResponse, UiEvent};
use crate::errors::SessionError;
use crate::hub::GameHub;
use crate::session::{BoardState, MoveInput};
use async_trait::async_trait;
use gamehub_core::tictactoe::TicTacToe;
use gamehub_core::GameKind;

pub(crate) const PREFIX: &str = "ttt";

pub struct TicTacToeCommand;

#[async_trait]
impl GameCommand for TicTacToeCommand {
    fn name(&self) -> &'static str {
        "tictactoe"
    }

    fn button_prefix(&self) -> Option<&'static str> {
        Some(PREFIX)
    }

    async fn invoke(
        &self,
        hub: &GameHub,
        invocation: CommandInvocation,
    ) -> Result<InteractionResponse, SessionError> {
        let opponent = match check_opponent(&invocation) {
            Ok(opponent) => opponent,
            Err(notice) => return Ok(notice),
        };
        hub.start_session(
            GameKind::TicTacToe,
            vec![seat(&invocation.actor), seat(&opponent)],
            invocation.channel,
            BoardState::TicTacToe(TicTacToe::new()),
        )
        .await?;
        Ok(InteractionResponse::None)
    }

    async fn on_button(
        &self,
        hub: &GameHub,
        event: &UiEvent,
        fields: &[String],
    ) -> Result<InteractionResponse, SessionError> {
        let [session, row, col] = fields else {
            return Err(SessionError::MalformedInput);
        };
        let row = row.parse().map_err(|_| SessionError::MalformedInput)?;
        let col = col.parse().map_err(|_| SessionError::MalformedInput)?;
        hub.apply_move(session, &event.actor.id, MoveInput::Cell { row, col })
            .await
    }
}
