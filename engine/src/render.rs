// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation of a session snapshot.
//!
//! `render` is a pure function of the session: identical state yields
//! an identical payload, so the hub and the timer can call it freely.
//! Terminal sessions render with every control disabled and the
//! outcome line exactly once; remaining time only shows while active.

use crate::commands::prefix_for;
use crate::platform::{Control, ControlStyle, DisplayPayload};
use crate::router::CustomId;
use crate::session::{BoardState, Session, SessionStatus};
use gamehub_core::connect_four::ConnectFour;
use gamehub_core::grid::Grid;
use gamehub_core::hangman::{Hangman, MAX_ERRORS};
use gamehub_core::tictactoe::TicTacToe;
use gamehub_core::{GameKind, Mark};
use std::time::Duration;
use tokio::time::Instant;

/// Letters of each Hangman keyboard page
pub const LETTER_PAGES: [&str; 2] = ["ABCDEFGHIJKLM", "NOPQRSTUVWXYZ"];
/// Controls per row, the common chat platform limit
const ROW_WIDTH: usize = 5;

/// Produce the full display for a session
pub fn render(session: &Session) -> DisplayPayload {
    match &session.board {
        BoardState::TicTacToe(game) => render_tictactoe(session, game),
        BoardState::ConnectFour(game) => render_connect_four(session, game),
        BoardState::Hangman(game) => render_hangman(session, game),
    }
}

/// Format a remaining duration as `MM:SS`, seconds rounded up
pub fn fmt_remaining(remaining: Duration) -> String {
    let secs = remaining.as_millis().div_ceil(1000);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn render_tictactoe(session: &Session, game: &TicTacToe) -> DisplayPayload {
    let glyphs = ["⬜", "❌", "⭕"];
    let mut body = grid_text(game.grid(), &glyphs);
    body.push_str(&grid_status_lines(session, &glyphs));

    let terminal = session.status.is_terminal();
    let prefix = prefix_for(session.kind);
    let mut controls = Vec::with_capacity(3);
    for row in 0..3 {
        let mut buttons = Vec::with_capacity(3);
        for col in 0..3 {
            let cell = game.grid().get(row, col);
            buttons.push(Control {
                id: CustomId::join(
                    prefix,
                    &[&session.id, &row.to_string(), &col.to_string()],
                ),
                label: cell_glyph(cell, &glyphs).to_string(),
                style: ControlStyle::Secondary,
                disabled: cell.is_some() || terminal,
            });
        }
        controls.push(buttons);
    }

    DisplayPayload {
        title: title_for(session, "Tic-Tac-Toe"),
        body,
        controls,
    }
}

fn render_connect_four(session: &Session, game: &ConnectFour) -> DisplayPayload {
    let glyphs = ["⚪", "🔴", "🟡"];
    let mut body = grid_text(game.grid(), &glyphs);
    body.push_str(&grid_status_lines(session, &glyphs));

    let terminal = session.status.is_terminal();
    let prefix = prefix_for(session.kind);
    let buttons: Vec<Control> = (0..game.grid().cols())
        .map(|col| Control {
            id: CustomId::join(prefix, &[&session.id, &col.to_string()]),
            label: (col + 1).to_string(),
            style: ControlStyle::Primary,
            disabled: !game.column_open(col) || terminal,
        })
        .collect();

    DisplayPayload {
        title: title_for(session, "Connect Four"),
        body,
        controls: chunk_rows(buttons),
    }
}

fn render_hangman(session: &Session, game: &Hangman) -> DisplayPayload {
    let duel = session.kind == GameKind::HangmanDuel;
    let base_title = if duel { "Hangman Duel" } else { "Hangman" };

    let mut body = format!("**Word:** {}\n{}\n", game.masked_word(), error_bar(game));
    let wrong: Vec<String> = game.wrong().map(|l| l.to_uppercase().to_string()).collect();
    if !wrong.is_empty() {
        body.push_str(&format!("\n**Wrong letters:** {}\n", wrong.join(" ")));
    }

    match session.status {
        SessionStatus::Active => {
            if duel {
                body.push_str(&format!(
                    "\n**Guesser:** {} • word set by **{}**",
                    session.participants[0].name, session.participants[1].name
                ));
            } else {
                body.push_str(&format!("\n**Turn:** {}", session.participants[0].name));
            }
            body.push_str(&format!(
                "\n⏱ Time left: **{}**",
                fmt_remaining(session.remaining(Instant::now()).unwrap_or_default())
            ));
        }
        SessionStatus::Won { .. } => {
            body.push_str(&format!(
                "\n🏆 **{}** found the word!",
                session.participants[0].name
            ));
        }
        SessionStatus::Lost => {
            body.push_str(&format!("\nThe word was **{}**.", game.word()));
            if duel {
                body.push_str(&format!(
                    " (set by **{}**)",
                    session.participants[1].name
                ));
            }
        }
        SessionStatus::Forfeited { .. } => {
            body.push_str(&format!(
                "\n⏰ Time ran out.\nThe word was **{}**.",
                game.word()
            ));
        }
        SessionStatus::Stopped | SessionStatus::Drawn => {}
    }

    DisplayPayload {
        title: title_for(session, base_title),
        body,
        controls: hangman_controls(session, game),
    }
}

fn hangman_controls(session: &Session, game: &Hangman) -> Vec<Vec<Control>> {
    let terminal = session.status.is_terminal();
    let prefix = prefix_for(session.kind);
    let page = session.letter_page.min(LETTER_PAGES.len() - 1);

    let letters: Vec<Control> = LETTER_PAGES[page]
        .chars()
        .map(|letter| {
            let lower = letter.to_ascii_lowercase();
            Control {
                id: CustomId::join(prefix, &[&session.id, "pick", &letter.to_string()]),
                label: letter.to_string(),
                style: ControlStyle::Secondary,
                disabled: game.tried(lower) || terminal,
            }
        })
        .collect();

    let mut rows = chunk_rows(letters);
    rows.push(vec![
        Control {
            id: CustomId::join(prefix, &[&session.id, "page", "0"]),
            label: "A–M".into(),
            style: ControlStyle::Primary,
            disabled: page == 0 || terminal,
        },
        Control {
            id: CustomId::join(prefix, &[&session.id, "page", "1"]),
            label: "N–Z".into(),
            style: ControlStyle::Primary,
            disabled: page == 1 || terminal,
        },
    ]);
    rows
}

/// Board cells as emoji lines, top row first
fn grid_text(grid: &Grid, glyphs: &[&str; 3]) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..grid.cols() {
            out.push_str(cell_glyph(grid.get(row, col), glyphs));
        }
    }
    out
}

/// Status block of the two-player grid games
fn grid_status_lines(session: &Session, glyphs: &[&str; 3]) -> String {
    match session.status {
        SessionStatus::Active => {
            let current = session.current_player();
            let glyph = cell_glyph(Some(Mark::for_seat(session.turn)), glyphs);
            format!(
                "\n\nTurn of **{}** ({})\n⏱ Time left: **{}**",
                current.name,
                glyph,
                fmt_remaining(session.remaining(Instant::now()).unwrap_or_default())
            )
        }
        SessionStatus::Won { winner } => {
            format!("\n\n🏆 **{}** wins!", session.participants[winner].name)
        }
        SessionStatus::Drawn => "\n\nNo winner this time.".to_string(),
        SessionStatus::Forfeited { loser } => {
            let winner = 1 - loser;
            format!(
                "\n\n⏰ **{}** ran out of time.\n🏆 **{}** wins by forfeit.",
                session.participants[loser].name, session.participants[winner].name
            )
        }
        SessionStatus::Lost | SessionStatus::Stopped => String::new(),
    }
}

fn title_for(session: &Session, base: &str) -> String {
    let suffix = match session.status {
        SessionStatus::Active => return format!("🎮 {base}"),
        SessionStatus::Won { .. } => "✅ Victory",
        SessionStatus::Drawn => "🤝 Draw",
        SessionStatus::Lost => "❌ Lost",
        SessionStatus::Forfeited { .. } => "⏱ Time's up",
        SessionStatus::Stopped => "🛑 Game stopped",
    };
    format!("🎮 {base} — {suffix}")
}

fn error_bar(game: &Hangman) -> String {
    let errors = game.errors();
    format!(
        "Errors: {}{} ({errors}/{MAX_ERRORS})",
        "🟥".repeat(errors),
        "⬛".repeat(MAX_ERRORS - errors)
    )
}

fn cell_glyph<'a>(cell: Option<Mark>, glyphs: &'a [&'a str; 3]) -> &'a str {
    match cell {
        None => glyphs[0],
        Some(Mark::A) => glyphs[1],
        Some(Mark::B) => glyphs[2],
    }
}

fn chunk_rows(buttons: Vec<Control>) -> Vec<Vec<Control>> {
    let mut rows = Vec::new();
    let mut buttons = buttons.into_iter().peekable();
    while buttons.peek().is_some() {
        rows.push(buttons.by_ref().take(ROW_WIDTH).collect());
    }
    rows
}
