//! One-shot `banter ask` command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Submit `message` through the chat service and print the reply.
///
/// The turn is recorded exactly as it would be over HTTP.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    println!("{}", render_ask(state, message, json).await?);
    Ok(())
}

/// Submit `message` and render the reply as `{"response": ...}` or styled text.
pub async fn render_ask(state: &AppState, message: &str, json: bool) -> Result<String> {
    let response = state.chat_service.submit(Some(message)).await?;

    if json {
        return Ok(serde_json::json!({ "response": response }).to_string());
    }

    Ok(format!(
        "\n  {} {}\n",
        style(format!("{}:", state.chat_service.settings().bot_name)).cyan().bold(),
        response
    ))
}
