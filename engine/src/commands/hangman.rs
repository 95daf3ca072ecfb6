// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/hangman` solo play against a word from the built-in bank.
//!
//! The letter keyboard and page switcher are shared with the duel
//! variant; both route through [`handle_keyboard`].

use super::seat;
use crate::command::{CommandInvocation, GameCommand, InteractionResponse, UiEvent};
use crate::errors::SessionError;
use crate::hub::GameHub;
use crate::session::{BoardState, MoveInput};
use async_trait::async_trait;
use gamehub_core::hangman::Hangman;
use gamehub_core::GameKind;

pub(crate) const PREFIX: &str = "hm";

pub struct HangmanCommand;

#[async_trait]
impl GameCommand for HangmanCommand {
    fn name(&self) -> &'static str {
        "hangman"
    }

    fn button_prefix(&self) -> Option<&'static str> {
        Some(PREFIX)
    }

    async fn invoke(
        &self,
        hub: &GameHub,
        invocation: CommandInvocation,
    ) -> Result<InteractionResponse, SessionError> {
        hub.start_session(
            GameKind::Hangman,
            vec![seat(&invocation.actor)],
            invocation.channel,
            BoardState::Hangman(Hangman::random()),
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
        handle_keyboard(hub, event, fields).await
    }
}

/// Letter keyboard actions: `<session>:pick:<letter>` guesses,
/// `<session>:page:<n>` flips the keyboard page without touching the
/// turn clock.
pub(crate) async fn handle_keyboard(
    hub: &GameHub,
    event: &UiEvent,
    fields: &[String],
) -> Result<InteractionResponse, SessionError> {
    let [session, action, value] = fields else {
        return Err(SessionError::MalformedInput);
    };
    match action.as_str() {
        "pick" => {
            let mut chars = value.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                return Err(SessionError::MalformedInput);
            };
            hub.apply_move(
                session,
                &event.actor.id,
                MoveInput::Letter(letter.to_ascii_lowercase()),
            )
            .await
        }
        "page" => {
            let page = value.parse().map_err(|_| SessionError::MalformedInput)?;
            hub.switch_page(session, &event.actor.id, page).await
        }
        _ => Err(SessionError::MalformedInput),
    }
}
