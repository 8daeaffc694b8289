//! Rendering responses for the chat widget and the JSON API

use crate::command::interpreter::InterpreterResponse;
use crate::core::error::Result;

/// Chat text: the reply followed by a summary of the actions to execute
pub fn chat_reply(response: &InterpreterResponse) -> String {
    let mut out = response.message.clone();

    if response.has_actions() {
        out.push_str("\n\n🤖 **Actions to execute:**\n");
        for action in &response.actions {
            out.push_str(&format!(
                "• {}: {}\n",
                action.action_type(),
                action.title().unwrap_or("N/A")
            ));
        }
    }

    out
}

/// JSON body for the API endpoint
///
/// A failed evaluation is reported as `{"message": "Error: ...", "actions": []}`.
pub fn api_json(result: Result<InterpreterResponse>) -> Result<String> {
    let response = result.unwrap_or_else(|e| InterpreterResponse::reply(format!("Error: {}", e)));
    Ok(serde_json::to_string(&response)?)
}
