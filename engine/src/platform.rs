// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam to the chat platform.
//!
//! The engine only ever sends a display message, edits it in place or
//! pings a participant; everything else (gateway, OAuth, permissions)
//! belongs to the adapter behind [`ChatPlatform`]. All three calls are
//! network round-trips and may fail; a failed edit never rolls back
//! session state.

use crate::{ChannelId, MessageId, PlayerId};
use anyhow::Result;
use async_trait::async_trait;

/// Visual weight of an interactive control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    /// Emphasized (column pickers, page switchers)
    Primary,
    /// Plain (board cells, letter keys)
    Secondary,
}

/// One pressable control inside the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Structured identifier, `<prefix>:<session>:<...>`
    pub id: String,
    /// Visible label (cell glyph, column number, letter)
    pub label: String,
    pub style: ControlStyle,
    pub disabled: bool,
}

/// Everything needed to draw one game message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPayload {
    pub title: String,
    /// Board text or masked word plus status lines
    pub body: String,
    /// Rows of controls, top to bottom
    pub controls: Vec<Vec<Control>>,
}

/// A text form opened to collect one value (the challenge word)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// Structured identifier routed back on submit
    pub custom_id: String,
    pub title: String,
    /// Label of the single text field, submitted under the key `word`
    pub label: String,
    pub min_len: usize,
    pub max_len: usize,
}

/// Outbound side of the chat platform adapter
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Post a new display message, returning its handle for later edits
    async fn send_display(
        &self,
        channel: &ChannelId,
        payload: DisplayPayload,
    ) -> Result<MessageId>;

    /// Edit an existing display message in place
    async fn edit_display(
        &self,
        channel: &ChannelId,
        message: &MessageId,
        payload: DisplayPayload,
    ) -> Result<()>;

    /// Ping one participant in the channel (turn warning)
    async fn send_notice(
        &self,
        channel: &ChannelId,
        player: &PlayerId,
        text: &str,
    ) -> Result<()>;
}
