// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prefix routing of inbound UI events.
//!
//! Custom ids follow the grammar `<prefix>:<field>:<field>...`; the
//! router splits on the separator, looks up the command owning the
//! prefix and hands it the remaining fields. The dispatch tables are
//! built once at startup from every command's declared prefixes, and a
//! prefix collision is a hard error rather than silent shadowing.
//!
//! Dispatch is also the recovery boundary of the engine: rejections
//! come back as a short notice to the acting participant and internal
//! failures are logged and converted into a generic message, so no
//! handler error ever propagates further.

use crate::command::{CommandInvocation, GameCommand, InteractionResponse, UiEvent};
use crate::errors::{RouterError, SessionError};
use crate::hub::GameHub;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::Instrument;

/// Separator of the structured identifier grammar
pub const ID_SEPARATOR: char = ':';

/// Message shown when no handler matches an event
const UNKNOWN_INTERACTION: &str = "unrecognized interaction";
/// Message shown when a handler failed unexpectedly
const GENERIC_FAILURE: &str = "something went wrong, try again";

#[derive(Clone, Copy)]
enum HandlerKind {
    Button,
    Modal,
    Select,
}

/// A parsed custom id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomId {
    pub prefix: String,
    pub fields: Vec<String>,
}

impl CustomId {
    /// Split a raw identifier into prefix and fields
    pub fn parse(raw: &str) -> Result<Self, RouterError> {
        let mut parts = raw.split(ID_SEPARATOR);
        let prefix = match parts.next() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => return Err(RouterError::MalformedId),
        };
        Ok(Self {
            prefix,
            fields: parts.map(str::to_string).collect(),
        })
    }

    /// Build an identifier from a prefix and fields
    pub fn join(prefix: &str, fields: &[&str]) -> String {
        let mut out = String::from(prefix);
        for field in fields {
            out.push(ID_SEPARATOR);
            out.push_str(field);
        }
        out
    }
}

/// Dispatch tables keyed by command name and declared prefixes
pub struct InteractionRouter {
    commands: HashMap<&'static str, Arc<dyn GameCommand>>,
    buttons: HashMap<&'static str, Arc<dyn GameCommand>>,
    modals: HashMap<&'static str, Arc<dyn GameCommand>>,
    selects: HashMap<&'static str, Arc<dyn GameCommand>>,
}

impl InteractionRouter {
    /// Build the tables; every declared prefix must be unique
    /// process-wide across all three kinds.
    pub fn new(modules: Vec<Arc<dyn GameCommand>>) -> Result<Self, RouterError> {
        let mut commands = HashMap::new();
        let mut buttons: HashMap<&'static str, Arc<dyn GameCommand>> = HashMap::new();
        let mut modals: HashMap<&'static str, Arc<dyn GameCommand>> = HashMap::new();
        let mut selects: HashMap<&'static str, Arc<dyn GameCommand>> = HashMap::new();
        let mut seen: Vec<&'static str> = Vec::new();

        for module in modules {
            commands.insert(module.name(), module.clone());
            for (prefix, table) in [
                (module.button_prefix(), &mut buttons),
                (module.modal_prefix(), &mut modals),
                (module.select_prefix(), &mut selects),
            ] {
                if let Some(prefix) = prefix {
                    if seen.contains(&prefix) {
                        return Err(RouterError::DuplicatePrefix(prefix.to_string()));
                    }
                    seen.push(prefix);
                    table.insert(prefix, module.clone());
                }
            }
        }

        tracing::info!(
            commands = commands.len(),
            prefixes = seen.len(),
            "interaction router ready"
        );
        Ok(Self {
            commands,
            buttons,
            modals,
            selects,
        })
    }

    /// Look up a command by name
    pub fn command(&self, name: &str) -> Option<Arc<dyn GameCommand>> {
        self.commands.get(name).cloned()
    }

    /// Run a slash-command invocation through the recovery boundary
    pub async fn dispatch_command(
        &self,
        hub: &GameHub,
        name: &str,
        invocation: CommandInvocation,
    ) -> InteractionResponse {
        let Some(command) = self.commands.get(name) else {
            return InteractionResponse::Notice(UNKNOWN_INTERACTION.into());
        };
        let span = tracing::info_span!("command", name, actor = %invocation.actor.id);
        Self::recover(command.invoke(hub, invocation).instrument(span).await)
    }

    /// Route a button press to the command owning its prefix
    pub async fn dispatch_button(&self, hub: &GameHub, event: UiEvent) -> InteractionResponse {
        self.dispatch(hub, event, HandlerKind::Button).await
    }

    /// Route a modal submit to the command owning its prefix
    pub async fn dispatch_modal(&self, hub: &GameHub, event: UiEvent) -> InteractionResponse {
        self.dispatch(hub, event, HandlerKind::Modal).await
    }

    /// Route a select choice to the command owning its prefix
    pub async fn dispatch_select(&self, hub: &GameHub, event: UiEvent) -> InteractionResponse {
        self.dispatch(hub, event, HandlerKind::Select).await
    }

    async fn dispatch(
        &self,
        hub: &GameHub,
        event: UiEvent,
        kind: HandlerKind,
    ) -> InteractionResponse {
        let parsed = match CustomId::parse(&event.custom_id) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(custom_id = %event.custom_id, %err, "rejected interaction id");
                return InteractionResponse::Notice(UNKNOWN_INTERACTION.into());
            }
        };
        let table = match kind {
            HandlerKind::Button => &self.buttons,
            HandlerKind::Modal => &self.modals,
            HandlerKind::Select => &self.selects,
        };
        let Some(command) = table.get(parsed.prefix.as_str()) else {
            tracing::debug!(prefix = %parsed.prefix, "no handler for prefix");
            return InteractionResponse::Notice(UNKNOWN_INTERACTION.into());
        };
        let span =
            tracing::info_span!("interaction", prefix = %parsed.prefix, actor = %event.actor.id);
        let result = async {
            match kind {
                HandlerKind::Button => command.on_button(hub, &event, &parsed.fields).await,
                HandlerKind::Modal => command.on_modal(hub, &event, &parsed.fields).await,
                HandlerKind::Select => command.on_select(hub, &event, &parsed.fields).await,
            }
        }
        .instrument(span)
        .await;
        Self::recover(result)
    }

    /// Translate handler results into a response, logging internal
    /// failures instead of propagating them.
    fn recover(result: Result<InteractionResponse, SessionError>) -> InteractionResponse {
        match result {
            Ok(response) => response,
            Err(SessionError::Internal(err)) => {
                tracing::error!(error = %err, "handler failed");
                InteractionResponse::Notice(GENERIC_FAILURE.into())
            }
            Err(err) => InteractionResponse::Notice(err.to_string()),
        }
    }
}
