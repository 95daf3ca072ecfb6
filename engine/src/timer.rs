// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-turn countdown.
//!
//! Arming resets the deadline and spawns one countdown task per turn.
//! The task refreshes the display on a fixed cadence, pings the player
//! on the clock once when little time is left, and forfeits the session
//! at the deadline. An accepted move cancels the task while the session
//! write lock is still held; since the task's first await on either
//! path is that same lock, a cancelled countdown can never observe the
//! moved session, so move and expiry race to exactly one terminal
//! transition.

use crate::hub::{HubInner, SessionHandle};
use crate::render;
use std::sync::Arc;
use tokio::time::{Instant, MissedTickBehavior};

/// Reset the turn clock and start the countdown for the current turn,
/// replacing any previous arming.
pub(crate) async fn arm(inner: &Arc<HubInner>, handle: &Arc<SessionHandle>) {
    let deadline = {
        let mut session = handle.session.write().await;
        session.warned = false;
        let deadline = Instant::now() + inner.config.turn_timeout();
        session.deadline = Some(deadline);
        deadline
    };
    let task = tokio::spawn(run_countdown(inner.clone(), handle.clone(), deadline));
    if let Some(previous) = handle.timer.lock().await.replace(task) {
        previous.abort();
    }
}

/// Abort the running countdown, if any
pub(crate) async fn cancel(handle: &SessionHandle) {
    if let Some(task) = handle.timer.lock().await.take() {
        task.abort();
    }
}

async fn run_countdown(inner: Arc<HubInner>, handle: Arc<SessionHandle>, deadline: Instant) {
    let mut ticker = tokio::time::interval(inner.config.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // the first tick completes immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            biased;
            _ = tokio::time::sleep_until(deadline) => {
                expire(&inner, &handle).await;
                return;
            }
            _ = ticker.tick() => {
                if !refresh(&inner, &handle, deadline).await {
                    return;
                }
            }
        }
    }
}

/// One display refresh. Returns false when the session is no longer
/// active and the countdown should end.
async fn refresh(inner: &Arc<HubInner>, handle: &SessionHandle, deadline: Instant) -> bool {
    let mut session = handle.session.write().await;
    if !session.status.is_active() {
        return false;
    }

    let remaining = deadline.saturating_duration_since(Instant::now());
    let warn_now =
        !session.warned && !remaining.is_zero() && remaining <= inner.config.warning_threshold();
    if warn_now {
        session.warned = true;
    }

    let payload = render::render(&session);
    let channel = session.channel.clone();
    let message = session.message.clone();
    let player = session.current_player().id.clone();
    let id = session.id.clone();

    // platform calls stay inside the critical section so a move
    // accepted right after cannot be overdrawn by this refresh
    if let Some(message) = &message {
        if let Err(err) = inner.platform.edit_display(&channel, message, payload).await {
            tracing::warn!(session = %id, error = %err, "countdown refresh failed");
        }
    }
    if warn_now {
        let text = format!(
            "⏳ Only **{}** left to play!",
            render::fmt_remaining(remaining)
        );
        if let Err(err) = inner.platform.send_notice(&channel, &player, &text).await {
            tracing::warn!(session = %id, error = %err, "low-time warning failed");
        }
    }
    true
}

/// Deadline hit: forfeit the seat on the clock, publish the final
/// display and evict the session.
async fn expire(inner: &Arc<HubInner>, handle: &SessionHandle) {
    let (payload, channel, message, id) = {
        let mut session = handle.session.write().await;
        if !session.forfeit() {
            return;
        }
        (
            render::render(&session),
            session.channel.clone(),
            session.message.clone(),
            session.id.clone(),
        )
    };

    inner.registry.unregister(&id).await;
    inner.sessions.write().await.remove(&id);

    if let Some(message) = message {
        if let Err(err) = inner.platform.edit_display(&channel, &message, payload).await {
            tracing::warn!(session = %id, error = %err, "failed to render forfeited session");
        }
    }
    tracing::info!(session = %id, "turn expired, session forfeited");
}
