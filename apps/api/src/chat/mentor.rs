//! Mentor Responder — profile + context + question → completion text.

use crate::chat::prompts::{MENTOR_MAX_TOKENS, MENTOR_PROMPT, MENTOR_SYSTEM, MENTOR_TEMPERATURE};
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::models::profile::Profile;
use crate::session::context::SessionContext;

pub fn build_mentor_request(
    profile: &Profile,
    context: &SessionContext,
    question: &str,
) -> CompletionRequest {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let context_json = serde_json::to_string(context).unwrap_or_default();

    CompletionRequest {
        system: MENTOR_SYSTEM.to_string(),
        user: MENTOR_PROMPT
            .replace("{profile}", &profile_json)
            .replace("{context}", &context_json)
            .replace("{question}", question),
        max_tokens: MENTOR_MAX_TOKENS,
        temperature: MENTOR_TEMPERATURE,
    }
}

/// Returns the completion text verbatim.
pub async fn get_mentor_response(
    llm: &dyn CompletionService,
    profile: &Profile,
    context: &SessionContext,
    question: &str,
) -> Result<String, LlmError> {
    let request = build_mentor_request(profile, context, question);
    llm.complete(&request).await
}

/// The assistant turn stored when the completion call fails.
pub fn error_reply(error: &LlmError) -> String {
    format!("Sorry, there was an error: {error}")
}
