// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gamehub CLI - hot-seat terminal frontend
//!
//! Runs the full engine (sessions, turn timers, interaction routing)
//! against a terminal platform adapter instead of a chat service. Both
//! seats type into the same terminal: `1 4` presses control 4 as
//! player 1, `stop 2` stops the game as player 2.

mod platform;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gamehub_engine::commands;
use gamehub_engine::{
    config, Actor, CommandInvocation, GameHub, InteractionResponse, InteractionRouter, UiEvent,
};
use platform::TerminalPlatform;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const CHANNEL: &str = "terminal";

#[derive(Parser, Debug)]
#[clap(name = "gamehub-cli", about = "Hot-seat gamehub games in the terminal", version)]
struct Args {
    /// Which game to start
    #[clap(value_enum)]
    game: Game,

    /// Display name of player 1 (the challenger)
    #[clap(long, default_value = "Player 1")]
    player_one: String,

    /// Display name of player 2
    #[clap(long, default_value = "Player 2")]
    player_two: String,

    /// Override the per-turn budget in milliseconds
    #[clap(long)]
    turn_timeout_ms: Option<u64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Game {
    Tictactoe,
    Connect4,
    Hangman,
    HangmanDuel,
}

impl Game {
    fn command(self) -> &'static str {
        match self {
            Game::Tictactoe => "tictactoe",
            Game::Connect4 => "connect4",
            Game::Hangman => "hangman",
            Game::HangmanDuel => "hangman_duel",
        }
    }

    fn two_player(self) -> bool {
        !matches!(self, Game::Hangman)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut engine_config = config::load_config().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default config");
        gamehub_engine::EngineConfig::default().apply_env()
    });
    if let Some(ms) = args.turn_timeout_ms {
        engine_config.turn_timeout_ms = ms;
    }

    let terminal = Arc::new(TerminalPlatform::new());
    let hub = GameHub::new(terminal.clone(), engine_config);
    let router = InteractionRouter::new(commands::all()).context("building the router")?;

    let player_one = Actor::new("p1", args.player_one.clone());
    let player_two = Actor::new("p2", args.player_two.clone());

    let invocation = CommandInvocation {
        actor: player_one.clone(),
        channel: CHANNEL.into(),
        opponent: args.game.two_player().then(|| player_two.clone()),
    };

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let response = router
        .dispatch_command(&hub, args.game.command(), invocation)
        .await;
    handle_response(&terminal, &hub, &router, &player_one, response, &mut input).await?;

    while hub.session_count().await > 0 {
        let Some(line) = input.next_line().await? else {
            break;
        };
        let Some((actor, action)) = parse_line(&line, &player_one, &player_two) else {
            println!("! type `<1|2> <control>` or `stop <1|2>`");
            continue;
        };
        let response = match action {
            Action::Stop => {
                let invocation = CommandInvocation {
                    actor: actor.clone(),
                    channel: CHANNEL.into(),
                    opponent: None,
                };
                router.dispatch_command(&hub, "stop", invocation).await
            }
            Action::Press(number) => {
                let Some(custom_id) = terminal.control_id(number) else {
                    println!("! no such control: {number}");
                    continue;
                };
                let event = UiEvent {
                    actor: actor.clone(),
                    channel: CHANNEL.into(),
                    custom_id,
                    values: HashMap::new(),
                };
                router.dispatch_button(&hub, event).await
            }
        };
        handle_response(&terminal, &hub, &router, &actor, response, &mut input).await?;
    }

    println!("\nbye");
    Ok(())
}

enum Action {
    Press(usize),
    Stop,
}

fn parse_line(line: &str, player_one: &Actor, player_two: &Actor) -> Option<(Actor, Action)> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let second = words.next()?;
    if words.next().is_some() {
        return None;
    }
    let seat = |word: &str| match word {
        "1" => Some(player_one.clone()),
        "2" => Some(player_two.clone()),
        _ => None,
    };
    if first == "stop" {
        return Some((seat(second)?, Action::Stop));
    }
    Some((seat(first)?, Action::Press(second.parse().ok()?)))
}

/// Show the router's answer; a form is filled straight from stdin
async fn handle_response(
    terminal: &TerminalPlatform,
    hub: &GameHub,
    router: &InteractionRouter,
    actor: &Actor,
    response: InteractionResponse,
    input: &mut tokio::io::Lines<BufReader<tokio::io::Stdin>>,
) -> Result<()> {
    match response {
        InteractionResponse::None => {}
        InteractionResponse::Update(payload) => terminal.show(&payload),
        InteractionResponse::Notice(text) => println!("! {text}"),
        InteractionResponse::OpenForm(form) => {
            println!("\n=== {} ===", form.title);
            println!(
                "{} ({}-{} letters):",
                form.label, form.min_len, form.max_len
            );
            let word = input
                .next_line()
                .await?
                .context("input closed while waiting for the word")?;
            let event = UiEvent {
                actor: actor.clone(),
                channel: CHANNEL.into(),
                custom_id: form.custom_id,
                values: HashMap::from([("word".to_string(), word.trim().to_string())]),
            };
            let next = router.dispatch_modal(hub, event).await;
            // a form never opens another form
            match next {
                InteractionResponse::None => {}
                InteractionResponse::Update(payload) => terminal.show(&payload),
                InteractionResponse::Notice(text) => println!("! {text}"),
                InteractionResponse::OpenForm(_) => {}
            }
        }
    }
    Ok(())
}
