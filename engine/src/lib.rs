// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gamehub Engine - session, timer and interaction routing layer
//!
//! This crate turns the rules in `gamehub-core` into live chat games:
//! - Sessions with a single terminal transition (win, draw, loss,
//!   forfeit or stop)
//! - A process-wide registry so `/stop` can find a game by player and
//!   channel
//! - Per-session turn timers (countdown refresh, one warning ping,
//!   forfeit on expiry)
//! - Colon-delimited custom-id routing of buttons, modals and selects
//!   to the owning command
//! - A pure presentation layer producing display payloads for the
//!   chat platform adapter
//!
//! The chat platform itself (Discord or a test double) sits behind the
//! [`platform::ChatPlatform`] trait; nothing here talks to the network
//! directly.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod command;
pub mod commands;
pub mod config;
pub mod errors;
pub mod hub;
pub mod platform;
pub mod registry;
pub mod render;
pub mod router;
pub mod session;
mod timer;

/// Opaque session token
pub type SessionId = String;
/// Chat platform user id
pub type PlayerId = String;
/// Chat platform channel (location) id
pub type ChannelId = String;
/// Handle of an editable display message
pub type MessageId = String;

pub use command::{Actor, CommandInvocation, GameCommand, InteractionResponse, UiEvent};
pub use config::EngineConfig;
pub use errors::{RouterError, SessionError};
pub use hub::GameHub;
pub use platform::{ChatPlatform, Control, ControlStyle, DisplayPayload, FormSpec};
pub use registry::{SessionRegistry, SessionSummary};
pub use router::InteractionRouter;
pub use session::{BoardState, MoveInput, Participant, Session, SessionStatus};
