// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal implementation of the chat platform seam.
//!
//! Displays are printed to stdout with the enabled controls numbered;
//! the input loop maps a typed number back to the control's custom id.

use async_trait::async_trait;
use gamehub_engine::{ChannelId, ChatPlatform, DisplayPayload, MessageId, PlayerId};
use std::sync::Mutex;

#[derive(Default)]
pub struct TerminalPlatform {
    /// Custom ids of the currently enabled controls, by printed number
    controls: Mutex<Vec<String>>,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a payload and renumber the control table
    pub fn show(&self, payload: &DisplayPayload) {
        let mut table = Vec::new();
        println!("\n=== {} ===", payload.title);
        println!("{}", payload.body);
        for row in &payload.controls {
            let mut line = String::new();
            for control in row {
                if control.disabled {
                    line.push_str(&format!("  [ ] {}", control.label));
                } else {
                    table.push(control.id.clone());
                    line.push_str(&format!("  [{}] {}", table.len(), control.label));
                }
            }
            println!("{line}");
        }
        *self.controls.lock().unwrap_or_else(|e| e.into_inner()) = table;
    }

    /// Custom id behind a printed control number (1-based)
    pub fn control_id(&self, number: usize) -> Option<String> {
        let table = self.controls.lock().unwrap_or_else(|e| e.into_inner());
        number
            .checked_sub(1)
            .and_then(|i| table.get(i))
            .cloned()
    }
}

#[async_trait]
impl ChatPlatform for TerminalPlatform {
    async fn send_display(
        &self,
        _channel: &ChannelId,
        payload: DisplayPayload,
    ) -> anyhow::Result<MessageId> {
        self.show(&payload);
        Ok("console".into())
    }

    async fn edit_display(
        &self,
        _channel: &ChannelId,
        _message: &MessageId,
        payload: DisplayPayload,
    ) -> anyhow::Result<()> {
        self.show(&payload);
        Ok(())
    }

    async fn send_notice(
        &self,
        _channel: &ChannelId,
        player: &PlayerId,
        text: &str,
    ) -> anyhow::Result<()> {
        println!("(to {player}) {text}");
        Ok(())
    }
}
