//! Axum route handlers for the Mentorship Chatbot view.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::chat::commands::{apply_directives, CommandOutcome};
use crate::chat::mentor::{error_reply, get_mentor_response};
use crate::errors::{AppError, AppJson};
use crate::models::chat::ChatTurn;
use crate::models::profile::Profile;
use crate::session::context::SessionContext;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReplyResponse {
    pub reply: String,
    pub directive: bool,
    pub context: SessionContext,
    pub history_len: usize,
}

enum Turn {
    Answered(String, SessionContext, usize),
    ForMentor(Profile, SessionContext),
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub history: Vec<ChatTurn>,
    pub context: SessionContext,
}

/// GET /api/v1/sessions/:id/chat
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let response = state
        .sessions
        .read(session_id, |s| {
            s.profile()?;
            Ok::<_, AppError>(ChatHistoryResponse {
                history: s.chat_history.clone(),
                context: s.context.clone(),
            })
        })
        .await??;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/chat
///
/// Directives are answered locally. Anything else goes to the mentor; a mentor
/// failure becomes the assistant reply instead of an HTTP error.
pub async fn handle_post_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatReplyResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    let question = request.message;

    // The question is on the transcript before the mentor is consulted.
    let outcome = state
        .sessions
        .write(session_id, |s| {
            let profile = s.profile()?.clone();
            Ok::<_, AppError>(match apply_directives(&question, &mut s.context) {
                CommandOutcome::Handled(reply) => {
                    s.record_exchange(&question, reply.clone());
                    Turn::Answered(reply, s.context.clone(), s.chat_history.len())
                }
                CommandOutcome::Unhandled => {
                    s.record_question(&question);
                    Turn::ForMentor(profile, s.context.clone())
                }
            })
        })
        .await??;

    let (profile, context) = match outcome {
        Turn::Answered(reply, context, history_len) => {
            return Ok(Json(ChatReplyResponse {
                reply,
                directive: true,
                context,
                history_len,
            }));
        }
        Turn::ForMentor(profile, context) => (profile, context),
    };

    let reply = match get_mentor_response(state.llm.as_ref(), &profile, &context, &question).await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(session_id = %session_id, "Mentor response failed: {e}");
            error_reply(&e)
        }
    };

    let history_len = state
        .sessions
        .write(session_id, |s| {
            s.record_reply(reply.clone());
            s.chat_history.len()
        })
        .await?;

    Ok(Json(ChatReplyResponse {
        reply,
        directive: false,
        context,
        history_len,
    }))
}
