//! Server-rendered HTML page for the current game.

use crate::game::{Cell, GameMode, GameOutcome, GameState, Player, Variant};

use super::session::GameSession;

/// Render the full page: header, status, board, controls.
pub fn render(session: &GameSession, asset_prefix: &str) -> String {
    let state = session.state();
    let mut page = String::with_capacity(8 * 1024);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Connect-N</title>\n");
    page.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}/style.css\">\n",
        escape(asset_prefix.trim_end_matches('/'))
    ));
    page.push_str("</head>\n<body>\n<main>\n<h1>Connect-N</h1>\n");

    page.push_str(&format!(
        "<p class=\"status\">{}</p>\n",
        escape(&status_line(state))
    ));
    if let Some(message) = session.message() {
        page.push_str(&format!("<p class=\"message\">{}</p>\n", escape(message)));
    }

    if state.is_started() {
        render_board(&mut page, state);
        page.push_str(
            "<div class=\"actions\">\
             <form method=\"post\" action=\"/reset\"><button type=\"submit\">Reset</button></form>\
             <form method=\"post\" action=\"/quit\"><button type=\"submit\">Quit</button></form>\
             </div>\n",
        );
    }

    render_start_forms(&mut page, state.variant());
    page.push_str("</main>\n</body>\n</html>\n");
    page
}

fn status_line(state: &GameState) -> String {
    if !state.is_started() {
        return "Choose a board and a mode to begin.".to_string();
    }
    let mode = match state.mode() {
        GameMode::Bot => "vs bot",
        _ => "two players",
    };
    let variant = state.variant();
    let summary = format!(
        "{} in a row, {}×{}, {}",
        variant.connect_n(),
        variant.rows(),
        variant.cols(),
        mode
    );

    match state.outcome() {
        Some(GameOutcome::Winner(player)) => format!("{summary}: {} won", player.name()),
        Some(GameOutcome::Draw) => format!("{summary}: draw"),
        None => match (state.mode(), state.current_player()) {
            (GameMode::Bot, Player::One) => format!("{summary}: your turn"),
            (_, player) => format!("{summary}: {} to play", player.name()),
        },
    }
}

fn render_board(page: &mut String, state: &GameState) {
    let board = state.board();
    let last = state.last_move().map(|m| (m.row, m.col));
    let playable = state.accepts_moves();

    page.push_str("<form method=\"post\" action=\"/play\" class=\"board\">\n<table>\n");

    page.push_str("<tr class=\"drop-row\">");
    for col in 0..board.cols() {
        let disabled = if playable && !board.is_column_full(col) {
            ""
        } else {
            " disabled"
        };
        page.push_str(&format!(
            "<th><button type=\"submit\" name=\"column\" value=\"{n}\"{disabled}>{n}</button></th>",
            n = col + 1
        ));
    }
    page.push_str("</tr>\n");

    for row in 0..board.rows() {
        page.push_str("<tr>");
        for col in 0..board.cols() {
            let class = match board.get(row, col) {
                Cell::Empty => "cell empty",
                Cell::One => "cell p1",
                Cell::Two => "cell p2",
            };
            let marker = if last == Some((row, col)) { " last" } else { "" };
            page.push_str(&format!("<td class=\"{class}{marker}\"></td>"));
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</table>\n</form>\n");
}

fn render_start_forms(page: &mut String, current: Variant) {
    let options = [(Variant::Standard, "4"), (Variant::Large, "5")]
        .iter()
        .map(|&(variant, value)| {
            let selected = if variant == current { " selected" } else { "" };
            format!(
                "<option value=\"{value}\"{selected}>{} in a row ({}×{})</option>",
                variant.connect_n(),
                variant.rows(),
                variant.cols()
            )
        })
        .collect::<String>();

    for (action, label) in [("/start", "Two players"), ("/start-bot", "Play the bot")] {
        page.push_str(&format!(
            "<form method=\"post\" action=\"{action}\" class=\"start\">\
             <select name=\"variant\">{options}</select>\
             <button type=\"submit\">{label}</button></form>\n"
        ));
    }
}

/// Minimal HTML escaping for text and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
