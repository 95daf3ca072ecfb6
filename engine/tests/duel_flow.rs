// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hangman duel handshake: modal word submission, validation, expiry.

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

fn alice() -> Actor {
    Actor::new("alice", "Alice")
}

fn bob() -> Actor {
    Actor::new("bob", "Bob")
}

fn duel_invocation() -> CommandInvocation {
    CommandInvocation {
        actor: alice(),
        channel: "general".into(),
        opponent: Some(bob()),
    }
}

/// Open the duel form and return the challenge token from its id
async fn open_form(hub: &GameHub, router: &InteractionRouter) -> String {
    let response = router
        .dispatch_command(hub, "hangman_duel", duel_invocation())
        .await;
    let InteractionResponse::OpenForm(form) = response else {
        panic!("expected the word form, got {response:?}");
    };
    let (prefix, token) = form
        .custom_id
        .split_once(':')
        .expect("form id has a token field");
    assert_eq!(prefix, "hmduelword");
    assert_eq!(form.min_len, 3);
    assert_eq!(form.max_len, 20);
    token.to_string()
}

fn submit(token: &str, word: &str) -> UiEvent {
    UiEvent {
        actor: alice(),
        channel: "general".into(),
        custom_id: format!("hmduelword:{token}"),
        values: HashMap::from([("word".to_string(), word.to_string())]),
    }
}

fn press(actor: Actor, custom_id: String) -> UiEvent {
    UiEvent {
        actor,
        channel: "general".into(),
        custom_id,
        values: HashMap::new(),
    }
}

#[tokio::test]
async fn duel_starts_only_after_a_usable_word_comes_back() {
    let (platform, hub, router) = setup();
    let token = open_form(&hub, &router).await;

    // the form alone starts nothing
    assert_eq!(hub.session_count().await, 0);

    let response = router.dispatch_modal(&hub, submit(&token, "Château")).await;
    assert_eq!(response, InteractionResponse::None);
    assert_eq!(hub.session_count().await, 1);

    // accents folded: 7 masked letters, none revealed
    let payload = platform.last_display();
    assert!(payload.title.contains("Hangman Duel"));
    assert_eq!(payload.body.matches('﹏').count(), 7);
    assert!(payload.body.contains("**Guesser:** Bob"));
    assert!(payload.body.contains("word set by **Alice**"));
}

#[tokio::test]
async fn the_guesser_plays_and_the_setter_may_not() {
    let (platform, hub, router) = setup();
    let token = open_form(&hub, &router).await;
    router.dispatch_modal(&hub, submit(&token, "chateau")).await;
    let sid = session_id_of(&platform.last_display());

    // the word setter cannot guess their own word
    let response = router
        .dispatch_button(&hub, press(alice(), format!("hmduel:{sid}:pick:A")))
        .await;
    assert_eq!(
        response,
        InteractionResponse::Notice("it is not your turn".into())
    );

    let response = router
        .dispatch_button(&hub, press(bob(), format!("hmduel:{sid}:pick:A")))
        .await;
    let InteractionResponse::Update(payload) = response else {
        panic!("expected a display update");
    };
    assert!(payload.body.contains("a"));
    assert_eq!(payload.body.matches('﹏').count(), 5);

    // repeated guess is rejected
    let response = router
        .dispatch_button(&hub, press(bob(), format!("hmduel:{sid}:pick:A")))
        .await;
    assert!(matches!(response, InteractionResponse::Notice(_)));
}

#[tokio::test]
async fn guessing_every_letter_wins_the_duel() {
    let (platform, hub, router) = setup();
    let token = open_form(&hub, &router).await;
    router.dispatch_modal(&hub, submit(&token, "robot")).await;
    let sid = session_id_of(&platform.last_display());

    let mut last = InteractionResponse::None;
    for letter in ["R", "O", "B", "T"] {
        last = router
            .dispatch_button(&hub, press(bob(), format!("hmduel:{sid}:pick:{letter}")))
            .await;
    }
    let InteractionResponse::Update(payload) = last else {
        panic!("expected a display update");
    };
    assert!(payload.title.contains("Victory"));
    assert!(payload.body.contains("🏆 **Bob** found the word!"));
    assert_eq!(hub.session_count().await, 0);
}

#[tokio::test]
async fn six_wrong_guesses_lose_and_reveal_the_word() {
    let (platform, hub, router) = setup();
    let token = open_form(&hub, &router).await;
    router.dispatch_modal(&hub, submit(&token, "robot")).await;
    let sid = session_id_of(&platform.last_display());

    let mut last = InteractionResponse::None;
    for letter in ["A", "C", "D", "E", "F", "G"] {
        last = router
            .dispatch_button(&hub, press(bob(), format!("hmduel:{sid}:pick:{letter}")))
            .await;
    }
    let InteractionResponse::Update(payload) = last else {
        panic!("expected a display update");
    };
    assert!(payload.title.contains("Lost"));
    assert!(payload.body.contains("(6/6)"));
    assert!(payload.body.contains("The word was **robot**"));
    assert!(payload.body.contains("(set by **Alice**)"));
    assert_eq!(hub.session_count().await, 0);
}

#[tokio::test]
async fn unusable_words_are_refused_and_the_challenge_is_spent() {
    let (_, hub, router) = setup();
    let token = open_form(&hub, &router).await;

    let response = router.dispatch_modal(&hub, submit(&token, "x!")).await;
    assert_eq!(
        response,
        InteractionResponse::Notice("the word must be 3-20 letters (accents are folded)".into())
    );
    assert_eq!(hub.session_count().await, 0);

    // the token was consumed by the failed submit
    let response = router.dispatch_modal(&hub, submit(&token, "chateau")).await;
    assert_eq!(
        response,
        InteractionResponse::Notice("that challenge has expired, run the command again".into())
    );
}

#[tokio::test(start_paused = true)]
async fn a_stale_challenge_token_expires() {
    let (_, hub, router) = setup();
    let token = open_form(&hub, &router).await;

    tokio::time::advance(Duration::from_secs(301)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    let response = router.dispatch_modal(&hub, submit(&token, "chateau")).await;
    assert_eq!(
        response,
        InteractionResponse::Notice("that challenge has expired, run the command again".into())
    );
}
