// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/hangman-duel`: one player submits a secret word through a modal,
//! the challenged player guesses it.
//!
//! The invocation does not start a session; it records a pending
//! challenge and opens the word form. The session only exists once the
//! modal comes back with a usable word, so an abandoned form leaks
//! nothing but a token that expires on its own.

use super::{check_opponent, seat};
use crate::command::{CommandInvocation, GameCommand, InteractionResponse, UiEvent};
use crate::errors::SessionError;
use crate::hub::GameHub;
use crate::platform::FormSpec;
use crate::router::CustomId;
use crate::session::BoardState;
use async_trait::async_trait;
use gamehub_core::hangman::Hangman;
use gamehub_core::words::{prepare_secret, MAX_WORD_LEN, MIN_WORD_LEN};
use gamehub_core::GameKind;

pub(crate) const PREFIX: &str = "hmduel";
pub(crate) const MODAL_PREFIX: &str = "hmduelword";

/// Form field holding the secret word
const WORD_FIELD: &str = "word";

pub struct HangmanDuelCommand;

#[async_trait]
impl GameCommand for HangmanDuelCommand {
    fn name(&self) -> &'static str {
        "hangman_duel"
    }

    fn button_prefix(&self) -> Option<&'static str> {
        Some(PREFIX)
    }

    fn modal_prefix(&self) -> Option<&'static str> {
        Some(MODAL_PREFIX)
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
        let token = hub
            .create_challenge(
                seat(&invocation.actor),
                seat(&opponent),
                invocation.channel,
            )
            .await;
        Ok(InteractionResponse::OpenForm(FormSpec {
            custom_id: CustomId::join(MODAL_PREFIX, &[&token]),
            title: format!("Secret word for {}", opponent.name),
            label: "Word to guess".into(),
            min_len: MIN_WORD_LEN,
            max_len: MAX_WORD_LEN,
        }))
    }

    async fn on_button(
        &self,
        hub: &GameHub,
        event: &UiEvent,
        fields: &[String],
    ) -> Result<InteractionResponse, SessionError> {
        super::hangman::handle_keyboard(hub, event, fields).await
    }

    async fn on_modal(
        &self,
        hub: &GameHub,
        event: &UiEvent,
        fields: &[String],
    ) -> Result<InteractionResponse, SessionError> {
        let [token] = fields else {
            return Err(SessionError::MalformedInput);
        };
        let (setter, guesser, channel) = hub.take_challenge(token).await?;
        let raw = event
            .values
            .get(WORD_FIELD)
            .ok_or(SessionError::MalformedInput)?;
        let secret = prepare_secret(raw).ok_or(SessionError::InvalidWord)?;

        // the guesser sits first and holds the turn for the whole game
        hub.start_session(
            GameKind::HangmanDuel,
            vec![guesser, setter],
            channel,
            BoardState::Hangman(Hangman::with_word(secret)),
        )
        .await?;
        Ok(InteractionResponse::None)
    }
}
