// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide index of live sessions.
//!
//! The registry stores non-owning summaries plus a stop callback per
//! session; it exists so `/stop` can find a game by participant and
//! channel without reaching into session internals. Mutation of the
//! session itself always goes through the callback, never through the
//! registry.

use crate::{ChannelId, PlayerId, SessionId};
use gamehub_core::GameKind;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Future returned by a stop callback
pub type StopFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
/// Callback triggering the owning session's stop transition
pub type StopCallback = Arc<dyn Fn() -> StopFuture + Send + Sync>;

/// Non-owning view of a live session
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub id: SessionId,
    pub kind: GameKind,
    pub channel: ChannelId,
    pub participants: Vec<PlayerId>,
}

struct Entry {
    summary: SessionSummary,
    stop: StopCallback,
}

/// Lookup table of live sessions, keyed by session id
#[derive(Default)]
pub struct SessionRegistry {
    entries: RwLock<HashMap<SessionId, Entry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a summary and its stop callback unless one of its
    /// participants already has a live session in its channel. The
    /// overlap check and the insert happen under one write lock, so two
    /// concurrent creations for the same pair cannot both succeed.
    pub async fn try_register(&self, summary: SessionSummary, stop: StopCallback) -> bool {
        let mut entries = self.entries.write().await;
        let taken = entries.values().any(|e| {
            e.summary.channel == summary.channel
                && e.summary
                    .participants
                    .iter()
                    .any(|p| summary.participants.contains(p))
        });
        if taken {
            return false;
        }
        tracing::debug!(session = %summary.id, kind = %summary.kind, "registering session");
        entries.insert(summary.id.clone(), Entry { summary, stop });
        true
    }

    /// Idempotent removal
    pub async fn unregister(&self, id: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(id).is_some() {
            tracing::debug!(session = %id, "unregistered session");
        }
    }

    /// At most one session in `channel` that seats `player`; first
    /// match wins should duplicates ever exist.
    pub async fn find_by_participant_and_location(
        &self,
        player: &PlayerId,
        channel: &ChannelId,
    ) -> Option<SessionSummary> {
        let entries = self.entries.read().await;
        entries
            .values()
            .find(|e| e.summary.channel == *channel && e.summary.participants.contains(player))
            .map(|e| e.summary.clone())
    }

    /// Invoke the stop callback of `id`. Returns false when the id is
    /// not registered (already evicted).
    pub async fn stop(&self, id: &str) -> bool {
        let callback = {
            let entries = self.entries.read().await;
            entries.get(id).map(|e| e.stop.clone())
        };
        match callback {
            Some(stop) => {
                stop().await;
                true
            }
            None => false,
        }
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no session is registered
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
