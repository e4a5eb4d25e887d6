//! Chat service: conversation plus document text in, one provider reply out.
//!
//! DESIGN
//! ======
//! Stateless per request. The fixed system instruction is always the first
//! provider turn. When document text accompanies the request it is spliced,
//! once, into the most recent user turn as a delimited block ahead of the
//! user's own words.

use tracing::{info, warn};

use protocol::{ChatReply, ChatRequest, ChatTurn, Role};

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message, SamplingParams};

pub const DOCUMENT_START: &str = "[DOCUMENT CONTENT START]";
pub const DOCUMENT_END: &str = "[DOCUMENT CONTENT END]";
pub const NO_RESPONSE: &str = "No response generated.";

const SYSTEM_PROMPT: &str = "\
You are an intelligent AI assistant. You help users with:
- Answering questions clearly and accurately
- Analyzing documents and extracting information
- Summarizing content
- Writing and editing text
- Code assistance
- General conversation

If the user has uploaded a file, analyze it thoroughly and provide helpful insights.
Be concise but comprehensive. Use bullet points for lists.
Always be helpful, accurate, and professional.";

/// The fixed instruction prepended to every completion request.
#[must_use]
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Wrap document text in the delimiters and place it ahead of `typed`.
#[must_use]
pub fn document_block(file_content: &str, typed: &str) -> String {
    format!("{DOCUMENT_START}\n{file_content}\n{DOCUMENT_END}\n\n{typed}")
}

/// Convert wire turns to provider messages, splicing `file_content` into the
/// last user turn. Returns the turns unchanged when there is no document or
/// no user turn to carry it.
#[must_use]
pub fn splice_document(turns: &[ChatTurn], file_content: Option<&str>) -> Vec<Message> {
    let target = file_content
        .filter(|text| !text.is_empty())
        .and_then(|text| {
            turns
                .iter()
                .rposition(|t| t.role == Role::User)
                .map(|idx| (idx, text))
        });

    turns
        .iter()
        .enumerate()
        .map(|(idx, turn)| {
            let content = match target {
                Some((target_idx, text)) if target_idx == idx => document_block(text, &turn.content),
                _ => turn.content.clone(),
            };
            Message { role: turn.role.as_str().to_owned(), content }
        })
        .collect()
}

/// Full provider message list: system instruction followed by the spliced turns.
#[must_use]
pub fn build_messages(request: &ChatRequest) -> Vec<Message> {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    messages.push(Message::system(system_prompt()));
    messages.extend(splice_document(&request.messages, request.file_content.as_deref()));
    messages
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Forward one conversation to the provider and shape the reply.
///
/// # Errors
///
/// Propagates the provider's [`LlmError`]; mapping to HTTP status happens in
/// the route layer.
pub async fn handle_chat(
    llm: &dyn LlmChat,
    params: &SamplingParams,
    request: &ChatRequest,
) -> Result<ChatReply, LlmError> {
    let file_len = request.file_content.as_deref().map_or(0, str::len);
    info!(turns = request.messages.len(), file_len, "chat: request received");

    let messages = build_messages(request);
    let response = llm.chat(params, &messages).await.inspect_err(|e| {
        warn!(error = %e, code = e.error_code(), status = ?e.status(), "chat: provider call failed");
    })?;

    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        prompt_tokens = response.usage.prompt_tokens,
        completion_tokens = response.usage.completion_tokens,
        "chat: reply received"
    );

    Ok(ChatReply {
        success: true,
        message: response.content.unwrap_or_else(|| NO_RESPONSE.to_owned()),
        usage: Some(response.usage),
    })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
