// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn clock behavior under a paused tokio clock: warning ping,
//! forfeit on expiry, and the move/expiry race.

mod common;

use common::{session_id_of, RecordingPlatform};
use gamehub_engine::commands;
use gamehub_engine::{
    Actor, CommandInvocation, EngineConfig, GameHub, InteractionResponse, InteractionRouter,
    UiEvent,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

fn setup() -> (Arc<RecordingPlatform>, GameHub, InteractionRouter) {
    let platform = Arc::new(RecordingPlatform::new());
    let hub = GameHub::new(platform.clone(), EngineConfig::default());
    let router = InteractionRouter::new(commands::all()).expect("router builds");
    (platform, hub, router)
}

fn button(actor: Actor, custom_id: String) -> UiEvent {
    UiEvent {
        actor,
        channel: "general".into(),
        custom_id,
        values: HashMap::new(),
    }
}

async fn start_tictactoe(hub: &GameHub, router: &InteractionRouter) {
    let invocation = CommandInvocation {
        actor: Actor::new("alice", "Alice"),
        channel: "general".into(),
        opponent: Some(Actor::new("bob", "Bob")),
    };
    let response = router.dispatch_command(hub, "tictactoe", invocation).await;
    assert_eq!(response, InteractionResponse::None);
}

/// Let spawned countdown tasks run after a clock jump
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn expiry_forfeits_the_seat_on_the_clock() {
    let (platform, hub, router) = setup();
    start_tictactoe(&hub, &router).await;
    let sid = session_id_of(&platform.last_display());

    tokio::time::advance(Duration::from_secs(121)).await;
    settle().await;

    assert_eq!(hub.session_count().await, 0);
    let payload = platform.last_display();
    assert!(payload.title.contains("Time's up"));
    assert!(payload.body.contains("**Alice** ran out of time"));
    assert!(payload.body.contains("**Bob** wins by forfeit"));
    assert!(payload.controls.iter().flatten().all(|c| c.disabled));

    // the id no longer resolves
    let response = router
        .dispatch_button(
            &hub,
            button(Actor::new("alice", "Alice"), format!("ttt:{sid}:0:0")),
        )
        .await;
    assert_eq!(
        response,
        InteractionResponse::Notice("this game no longer exists or has expired".into())
    );
}

#[tokio::test(start_paused = true)]
async fn low_time_warning_fires_exactly_once_per_turn() {
    let (platform, hub, router) = setup();
    start_tictactoe(&hub, &router).await;

    // step through the refresh cadence; a single big jump would leave
    // the pending tick undelivered until the next advance
    for _ in 0..20 {
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
    }
    // 20s remain, still above the warning threshold
    assert_eq!(platform.notice_count(), 0);

    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(platform.notice_count(), 1);
    {
        let notices = platform.notices.lock().unwrap();
        let (_, player, text) = &notices[0];
        assert_eq!(player, "alice");
        assert!(text.contains("00:15"));
    }

    // later refreshes stay quiet
    for _ in 0..2 {
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
    }
    assert_eq!(platform.notice_count(), 1);
    assert_eq!(hub.session_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn a_move_just_before_the_deadline_resets_the_clock() {
    let (platform, hub, router) = setup();
    start_tictactoe(&hub, &router).await;
    let sid = session_id_of(&platform.last_display());

    tokio::time::advance(Duration::from_secs(119)).await;
    settle().await;

    let response = router
        .dispatch_button(
            &hub,
            button(Actor::new("alice", "Alice"), format!("ttt:{sid}:0:0")),
        )
        .await;
    assert!(matches!(response, InteractionResponse::Update(_)));

    // the old deadline passes harmlessly; Bob has a fresh budget
    tokio::time::advance(Duration::from_secs(3)).await;
    settle().await;
    assert_eq!(hub.session_count().await, 1);

    // warning again for the new turn, then Bob times out
    tokio::time::advance(Duration::from_secs(121)).await;
    settle().await;
    assert_eq!(hub.session_count().await, 0);
    let payload = platform.last_display();
    assert!(payload.body.contains("**Bob** ran out of time"));
    assert!(payload.body.contains("**Alice** wins by forfeit"));
}

#[tokio::test(start_paused = true)]
async fn moving_after_expiry_finds_no_session() {
    let (platform, hub, router) = setup();
    start_tictactoe(&hub, &router).await;
    let sid = session_id_of(&platform.last_display());

    tokio::time::advance(Duration::from_secs(121)).await;
    settle().await;

    let response = router
        .dispatch_button(
            &hub,
            button(Actor::new("alice", "Alice"), format!("ttt:{sid}:0:0")),
        )
        .await;
    assert_eq!(
        response,
        InteractionResponse::Notice("this game no longer exists or has expired".into())
    );
    // exactly one terminal outcome: the forfeit display, never a move
    assert!(platform.last_display().title.contains("Time's up"));
}

#[tokio::test(start_paused = true)]
async fn switching_the_letter_page_keeps_the_clock_running() {
    let (platform, hub, router) = setup();
    let invocation = CommandInvocation {
        actor: Actor::new("alice", "Alice"),
        channel: "general".into(),
        opponent: None,
    };
    router.dispatch_command(&hub, "hangman", invocation).await;
    let sid = session_id_of(&platform.last_display());

    tokio::time::advance(Duration::from_secs(100)).await;
    settle().await;

    let response = router
        .dispatch_button(
            &hub,
            button(Actor::new("alice", "Alice"), format!("hm:{sid}:page:1")),
        )
        .await;
    let InteractionResponse::Update(payload) = response else {
        panic!("expected a display update");
    };
    assert!(payload.controls[0].iter().any(|c| c.label == "N"));

    // no reset happened: the original deadline still applies
    tokio::time::advance(Duration::from_secs(21)).await;
    settle().await;
    assert_eq!(hub.session_count().await, 0);
    assert!(platform.last_display().title.contains("Time's up"));
}
