// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/connect4` and its column-drop buttons.

use super::{check_opponent, seat};
use crate::command::{CommandInvocation, GameCommand, InteractionResponse, UiEvent};
use crate::errors::SessionError;
use crate::hub::GameHub;
use crate::session::{BoardState, MoveInput};
use async_trait::async_trait;
use gamehub_core::connect_four::ConnectFour;
use gamehub_core::GameKind;

pub(crate) const PREFIX: &str = "c4";

pub struct ConnectFourCommand;

#[async_trait]
impl GameCommand for ConnectFourCommand {
    fn name(&self) -> &'static str {
        "connect4"
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
            GameKind::ConnectFour,
            vec![seat(&invocation.actor), seat(&opponent)],
            invocation.channel,
            BoardState::ConnectFour(ConnectFour::new()),
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
        let [session, col] = fields else {
            return Err(SessionError::MalformedInput);
        };
        let col = col.parse().map_err(|_| SessionError::MalformedInput)?;
        hub.apply_move(session, &event.actor.id, MoveInput::Drop { col })
            .await
    }
}
