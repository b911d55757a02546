//! `banter history` command: print the conversation log.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use banter_types::turn::Turn;

use crate::state::AppState;

const PREVIEW_CHARS: usize = 60;

/// Order and cap the log for display.
pub fn select_turns(mut turns: Vec<Turn>, newest_first: bool, limit: Option<usize>) -> Vec<Turn> {
    if newest_first {
        turns.reverse();
        if let Some(limit) = limit {
            turns.truncate(limit);
        }
    } else if let Some(limit) = limit {
        // Oldest-first with a limit keeps the most recent turns.
        let skip = turns.len().saturating_sub(limit);
        turns.drain(..skip);
    }
    turns
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

/// Print the log as a table, or as `{"chat_history": [...]}` with `--json`.
///
/// # Examples
///
/// ```bash
/// banter history --newest-first --limit 5
/// banter history --json
/// ```
pub async fn show_history(
    state: &AppState,
    newest_first: bool,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let turns = select_turns(state.chat_service.history().await, newest_first, limit);
    println!(
        "{}",
        render_history(&turns, &state.chat_service.settings().bot_name, json)?
    );
    Ok(())
}

/// Render already-selected turns for display.
pub fn render_history(turns: &[Turn], bot_name: &str, json: bool) -> Result<String> {
    if json {
        let body = serde_json::json!({ "chat_history": turns });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    if turns.is_empty() {
        return Ok(format!(
            "\n  {} No conversation yet. Start one with: {}\n",
            style("i").blue().bold(),
            style("banter ask \"Hello\"").yellow()
        ));
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("You").fg(Color::White),
        Cell::new(bot_name).fg(Color::White),
    ]);

    for turn in turns {
        table.add_row(vec![
            Cell::new(turn.formatted_timestamp()).fg(Color::DarkGrey),
            Cell::new(preview(&turn.user_input)).fg(Color::Cyan),
            Cell::new(preview(&turn.bot_response)).fg(Color::White),
        ]);
    }

    Ok(format!(
        "\n{table}\n\n  {} turn{}\n",
        style(turns.len()).bold(),
        if turns.len() == 1 { "" } else { "s" }
    ))
}
