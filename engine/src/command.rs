// SPDX-License-Identifier: MIT OR Apache-2.0

//! The command capability surface.
//!
//! Each game module implements [`GameCommand`]: a mandatory `invoke`
//! entry point plus optional button/modal/select handlers. A handler is
//! only reachable when the command declares the matching prefix, so the
//! optional capabilities are explicit (`None` prefix means absent)
//! rather than duck-typed.

use crate::errors::SessionError;
use crate::hub::GameHub;
use crate::platform::{DisplayPayload, FormSpec};
use crate::{ChannelId, PlayerId};
use async_trait::async_trait;
use std::collections::HashMap;

/// Identity acting on an inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: PlayerId,
    pub name: String,
    /// Bots cannot be challenged
    pub is_bot: bool,
}

impl Actor {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_bot: false,
        }
    }
}

/// A resolved slash-command invocation
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub actor: Actor,
    pub channel: ChannelId,
    /// Target of the `opponent` option, when the command takes one
    pub opponent: Option<Actor>,
}

/// An inbound UI event (button press, modal submit, select choice)
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub actor: Actor,
    pub channel: ChannelId,
    /// Raw structured identifier, `<prefix>:<field>:<field>...`
    pub custom_id: String,
    /// Submitted form values, keyed by field id (modal submits only)
    pub values: HashMap<String, String>,
}

/// What the platform adapter should do in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResponse {
    /// Replace the game display with this payload
    Update(DisplayPayload),
    /// Short private note to the acting participant
    Notice(String),
    /// Open a text form (modal)
    OpenForm(FormSpec),
    /// Nothing to show; the hub already posted the display itself
    None,
}

/// One game (or utility) command module
#[async_trait]
pub trait GameCommand: Send + Sync {
    /// Command name used for registration
    fn name(&self) -> &'static str;

    /// Prefix of button custom-ids this command owns
    fn button_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Prefix of modal custom-ids this command owns
    fn modal_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Prefix of select custom-ids this command owns
    fn select_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Slash-command entry point
    async fn invoke(
        &self,
        hub: &GameHub,
        invocation: CommandInvocation,
    ) -> Result<InteractionResponse, SessionError>;

    /// Button press with this command's prefix; `fields` are the
    /// remaining id segments after the prefix.
    async fn on_button(
        &self,
        _hub: &GameHub,
        _event: &UiEvent,
        _fields: &[String],
    ) -> Result<InteractionResponse, SessionError> {
        Err(SessionError::MalformedInput)
    }

    /// Modal submit with this command's prefix
    async fn on_modal(
        &self,
        _hub: &GameHub,
        _event: &UiEvent,
        _fields: &[String],
    ) -> Result<InteractionResponse, SessionError> {
        Err(SessionError::MalformedInput)
    }

    /// Select choice with this command's prefix
    async fn on_select(
        &self,
        _hub: &GameHub,
        _event: &UiEvent,
        _fields: &[String],
    ) -> Result<InteractionResponse, SessionError> {
        Err(SessionError::MalformedInput)
    }
}
