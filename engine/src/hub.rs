// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hub owns every live session and wires the components together:
//! registry, timers, platform adapter and configuration. It is built
//! once at startup and passed to commands explicitly instead of living
//! in module-level statics.

use crate::command::InteractionResponse;
use crate::config::EngineConfig;
use crate::errors::SessionError;
use crate::platform::ChatPlatform;
use crate::registry::{SessionRegistry, SessionSummary, StopCallback};
use crate::render;
use crate::session::{BoardState, MoveInput, Participant, Session};
use crate::timer;
use crate::{ChannelId, PlayerId, SessionId};
use chrono::Utc;
use gamehub_core::GameKind;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// A session plus its timer slot
pub(crate) struct SessionHandle {
    pub(crate) session: tokio::sync::RwLock<Session>,
    /// Running countdown task for the current arming, if any
    pub(crate) timer: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

/// Context captured between a duel invocation and its modal submit
pub(crate) struct PendingChallenge {
    pub(crate) setter: Participant,
    pub(crate) guesser: Participant,
    pub(crate) channel: ChannelId,
    pub(crate) expires_at: Instant,
}

pub(crate) struct HubInner {
    pub(crate) platform: Arc<dyn ChatPlatform>,
    pub(crate) registry: SessionRegistry,
    pub(crate) sessions: tokio::sync::RwLock<HashMap<SessionId, Arc<SessionHandle>>>,
    pub(crate) pending: tokio::sync::RwLock<HashMap<String, PendingChallenge>>,
    pub(crate) config: EngineConfig,
}

/// Shared engine context; cheap to clone
#[derive(Clone)]
pub struct GameHub {
    pub(crate) inner: Arc<HubInner>,
}

impl GameHub {
    pub fn new(platform: Arc<dyn ChatPlatform>, config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(HubInner {
                platform,
                registry: SessionRegistry::new(),
                sessions: tokio::sync::RwLock::new(HashMap::new()),
                pending: tokio::sync::RwLock::new(HashMap::new()),
                config,
            }),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.inner.registry
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.inner.sessions.read().await.len()
    }

    /// Create a session, post its display and arm the first turn.
    ///
    /// Creation is rejected when any participant already has a live
    /// session in the channel, keeping `/stop` unambiguous. The pair is
    /// reserved atomically at registration, before any platform I/O, so
    /// two concurrent invocations cannot both pass the check; a failed
    /// first send releases the reservation again.
    pub async fn start_session(
        &self,
        kind: GameKind,
        participants: Vec<Participant>,
        channel: ChannelId,
        board: BoardState,
    ) -> Result<SessionId, SessionError> {
        let mut session = Session::new(kind, participants, channel.clone(), board);
        session.deadline = Some(Instant::now() + self.inner.config.turn_timeout());
        let payload = render::render(&session);

        let id = session.id.clone();
        let summary = SessionSummary {
            id: id.clone(),
            kind,
            channel: channel.clone(),
            participants: session.participants.iter().map(|p| p.id.clone()).collect(),
        };
        let handle = Arc::new(SessionHandle {
            session: tokio::sync::RwLock::new(session),
            timer: tokio::sync::Mutex::new(None),
        });

        if !self
            .inner
            .registry
            .try_register(summary, self.stop_callback(&id))
            .await
        {
            return Err(SessionError::AlreadyPlaying);
        }
        self.inner
            .sessions
            .write()
            .await
            .insert(id.clone(), handle.clone());

        match self.inner.platform.send_display(&channel, payload).await {
            Ok(message) => handle.session.write().await.message = Some(message),
            Err(err) => {
                self.evict(&id).await;
                return Err(SessionError::Internal(err));
            }
        }

        timer::arm(&self.inner, &handle).await;
        tracing::info!(session = %id, kind = %kind, "session started");
        Ok(id)
    }

    /// Apply a validated move for `player` and produce the next display.
    ///
    /// A rejected move leaves the session and its timer untouched; an
    /// accepted one cancels the countdown inside the same critical
    /// section, so a racing expiry can no longer forfeit this turn.
    pub async fn apply_move(
        &self,
        id: &str,
        player: &PlayerId,
        input: MoveInput,
    ) -> Result<InteractionResponse, SessionError> {
        let handle = self.handle(id).await.ok_or(SessionError::NotFound)?;

        let terminal = {
            let mut session = handle.session.write().await;
            let outcome = session.apply_move(player, &input)?;
            timer::cancel(&handle).await;
            outcome.is_terminal()
        };

        if terminal {
            let age = Utc::now() - handle.session.read().await.created_at;
            self.evict(id).await;
            tracing::info!(session = %id, age_secs = age.num_seconds(), "session finished");
        } else {
            timer::arm(&self.inner, &handle).await;
        }

        let payload = render::render(&*handle.session.read().await);
        Ok(InteractionResponse::Update(payload))
    }

    /// Flip the Hangman letter keyboard page. Not a move: the turn
    /// clock keeps running untouched.
    pub async fn switch_page(
        &self,
        id: &str,
        player: &PlayerId,
        page: usize,
    ) -> Result<InteractionResponse, SessionError> {
        if page >= render::LETTER_PAGES.len() {
            return Err(SessionError::MalformedInput);
        }
        let handle = self.handle(id).await.ok_or(SessionError::NotFound)?;
        let mut session = handle.session.write().await;
        if !session.status.is_active() {
            return Err(SessionError::Finished);
        }
        let seat = session.seat_of(player).ok_or(SessionError::NotParticipant)?;
        if seat != session.turn {
            return Err(SessionError::NotYourTurn);
        }
        session.letter_page = page;
        Ok(InteractionResponse::Update(render::render(&session)))
    }

    /// Stop the session `player` is part of in `channel`, through the
    /// registry's stop callback.
    pub async fn stop_in_channel(
        &self,
        player: &PlayerId,
        channel: &ChannelId,
    ) -> Result<(), SessionError> {
        let summary = self
            .inner
            .registry
            .find_by_participant_and_location(player, channel)
            .await
            .ok_or(SessionError::NotFound)?;
        self.inner.registry.stop(&summary.id).await;
        Ok(())
    }

    /// Record a duel handshake; the returned token expires after the
    /// configured TTL.
    pub async fn create_challenge(
        &self,
        setter: Participant,
        guesser: Participant,
        channel: ChannelId,
    ) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let ttl = self.inner.config.challenge_ttl();
        self.inner.pending.write().await.insert(
            token.clone(),
            PendingChallenge {
                setter,
                guesser,
                channel,
                expires_at: Instant::now() + ttl,
            },
        );

        // sweep the entry once the TTL elapses
        let inner = self.inner.clone();
        let swept = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if inner.pending.write().await.remove(&swept).is_some() {
                tracing::debug!(token = %swept, "expired pending challenge");
            }
        });
        token
    }

    /// Consume a duel handshake token
    pub async fn take_challenge(
        &self,
        token: &str,
    ) -> Result<(Participant, Participant, ChannelId), SessionError> {
        let challenge = self
            .inner
            .pending
            .write()
            .await
            .remove(token)
            .ok_or(SessionError::ChallengeExpired)?;
        if Instant::now() >= challenge.expires_at {
            return Err(SessionError::ChallengeExpired);
        }
        Ok((challenge.setter, challenge.guesser, challenge.channel))
    }

    pub(crate) async fn handle(&self, id: &str) -> Option<Arc<SessionHandle>> {
        self.inner.sessions.read().await.get(id).cloned()
    }

    async fn evict(&self, id: &str) {
        self.inner.registry.unregister(id).await;
        self.inner.sessions.write().await.remove(id);
    }

    /// Build the stop callback handed to the registry
    fn stop_callback(&self, id: &SessionId) -> StopCallback {
        let inner = self.inner.clone();
        let id = id.clone();
        Arc::new(move || {
            let inner = inner.clone();
            let id = id.clone();
            Box::pin(async move {
                stop_session(inner, id).await;
            })
        })
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        use crate::platform::DisplayPayload;
        use crate::{MessageId, PlayerId};
        use anyhow::Result;
        use async_trait::async_trait;

        struct NullPlatform;

        #[async_trait]
        impl ChatPlatform for NullPlatform {
            async fn send_display(
                &self,
                _channel: &ChannelId,
                _payload: DisplayPayload,
            ) -> Result<MessageId> {
                Ok("message-1".into())
            }
            async fn edit_display(
                &self,
                _channel: &ChannelId,
                _message: &MessageId,
                _payload: DisplayPayload,
            ) -> Result<()> {
                Ok(())
            }
            async fn send_notice(
                &self,
                _channel: &ChannelId,
                _player: &PlayerId,
                _text: &str,
            ) -> Result<()> {
                Ok(())
            }
        }

        Self::new(Arc::new(NullPlatform), EngineConfig::default())
    }
}

/// Terminal stop transition: flip status, cancel the countdown, push
/// the final display and evict. A no-op when the session already
/// reached another terminal state.
async fn stop_session(inner: Arc<HubInner>, id: SessionId) {
    let Some(handle) = inner.sessions.read().await.get(&id).cloned() else {
        return;
    };

    let (payload, channel, message, age) = {
        let mut session = handle.session.write().await;
        if !session.stop() {
            return;
        }
        timer::cancel(&handle).await;
        (
            render::render(&session),
            session.channel.clone(),
            session.message.clone(),
            Utc::now() - session.created_at,
        )
    };

    inner.registry.unregister(&id).await;
    inner.sessions.write().await.remove(&id);

    if let Some(message) = message {
        if let Err(err) = inner.platform.edit_display(&channel, &message, payload).await {
            tracing::warn!(session = %id, error = %err, "failed to render stopped session");
        }
    }
    tracing::info!(session = %id, age_secs = age.num_seconds(), "session stopped");
}
