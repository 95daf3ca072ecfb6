// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test double recording every outbound platform call.

use async_trait::async_trait;
use gamehub_engine::{ChannelId, ChatPlatform, DisplayPayload, MessageId, PlayerId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingPlatform {
    pub sends: Mutex<Vec<(ChannelId, DisplayPayload)>>,
    pub edits: Mutex<Vec<(ChannelId, MessageId, DisplayPayload)>>,
    pub notices: Mutex<Vec<(ChannelId, PlayerId, String)>>,
    counter: AtomicUsize,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest display payload, sent or edited
    pub fn last_display(&self) -> DisplayPayload {
        if let Some((_, _, payload)) = self.edits.lock().unwrap().last() {
            return payload.clone();
        }
        self.sends
            .lock()
            .unwrap()
            .last()
            .map(|(_, payload)| payload.clone())
            .expect("no display was ever sent")
    }

    pub fn notice_count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn send_display(
        &self,
        channel: &ChannelId,
        payload: DisplayPayload,
    ) -> anyhow::Result<MessageId> {
        let message = format!("msg-{}", self.counter.fetch_add(1, Ordering::SeqCst));
        self.sends
            .lock()
            .unwrap()
            .push((channel.clone(), payload));
        Ok(message)
    }

    async fn edit_display(
        &self,
        channel: &ChannelId,
        message: &MessageId,
        payload: DisplayPayload,
    ) -> anyhow::Result<()> {
        self.edits
            .lock()
            .unwrap()
            .push((channel.clone(), message.clone(), payload));
        Ok(())
    }

    async fn send_notice(
        &self,
        channel: &ChannelId,
        player: &PlayerId,
        text: &str,
    ) -> anyhow::Result<()> {
        self.notices
            .lock()
            .unwrap()
            .push((channel.clone(), player.clone(), text.to_string()));
        Ok(())
    }
}

/// Session id embedded in the first control of a freshly sent display
pub fn session_id_of(payload: &DisplayPayload) -> String {
    let control = payload
        .controls
        .first()
        .and_then(|row| row.first())
        .expect("display has no controls");
    let mut parts = control.id.split(':');
    parts.next().expect("control id has a prefix");
    parts.next().expect("control id has a session field").to_string()
}
