// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/stop`: end the caller's game in the current channel.

use crate::command::{CommandInvocation, GameCommand, InteractionResponse};
use crate::errors::SessionError;
use crate::hub::GameHub;
use async_trait::async_trait;

pub struct StopCommand;

#[async_trait]
impl GameCommand for StopCommand {
    fn name(&self) -> &'static str {
        "stop"
    }

    async fn invoke(
        &self,
        hub: &GameHub,
        invocation: CommandInvocation,
    ) -> Result<InteractionResponse, SessionError> {
        match hub
            .stop_in_channel(&invocation.actor.id, &invocation.channel)
            .await
        {
            Ok(()) => Ok(InteractionResponse::Notice("Game stopped.".into())),
            Err(SessionError::NotFound) => Ok(InteractionResponse::Notice(
                "No game of yours is running in this channel.".into(),
            )),
            Err(err) => Err(err),
        }
    }
}
