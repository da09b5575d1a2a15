//! Axum route handlers for session lifecycle, navigation, and profile intake.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::models::profile::{Industry, Profession, Profile, ProfileForm, MAX_EXPERIENCE_YEARS};
use crate::state::AppState;

/// The four views reachable once a profile exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Dashboard,
    #[serde(rename = "Skills & Courses")]
    SkillsAndCourses,
    #[serde(rename = "Mentorship Chatbot")]
    MentorshipChatbot,
    #[serde(rename = "Industry News")]
    IndustryNews,
}

impl View {
    pub const MENU: [View; 4] = [
        View::Dashboard,
        View::SkillsAndCourses,
        View::MentorshipChatbot,
        View::IndustryNews,
    ];
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub profile_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    /// Empty until a profile is saved.
    pub views: Vec<View>,
}

#[derive(Debug, Serialize)]
pub struct ProfileSavedResponse {
    pub profile: Profile,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileOptionsResponse {
    pub professions: Vec<&'static str>,
    pub industries: Vec<&'static str>,
    pub max_experience_years: u8,
}

/// GET /api/v1/profile/options
///
/// Choices for the intake form.
pub async fn handle_profile_options() -> Json<ProfileOptionsResponse> {
    Json(ProfileOptionsResponse {
        professions: Profession::ALL.iter().map(|p| p.label()).collect(),
        industries: Industry::ALL.iter().map(|i| i.label()).collect(),
        max_experience_years: MAX_EXPERIENCE_YEARS,
    })
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse { session_id }),
    )
}

/// DELETE /api/v1/sessions/:id
///
/// Ends the session; its profile, ratings and transcript are discarded.
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id
///
/// Until a profile is saved, intake is the only reachable view.
pub async fn handle_navigation(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NavigationResponse>, AppError> {
    let response = state
        .sessions
        .read(session_id, |s| {
            let profile = s.profile.as_ref();
            NavigationResponse {
                session_id: s.id,
                created_at: s.created_at,
                profile_required: profile.is_none(),
                greeting: profile.map(|p| format!("Hello, {}! Navigate:", p.name)),
                views: if profile.is_some() {
                    View::MENU.to_vec()
                } else {
                    Vec::new()
                },
            }
        })
        .await?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(form): AppJson<ProfileForm>,
) -> Result<(StatusCode, Json<ProfileSavedResponse>), AppError> {
    let profile = form
        .into_profile()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let saved = profile.clone();
    state
        .sessions
        .write(session_id, move |s| s.set_profile(profile))
        .await??;

    info!(session_id = %session_id, profession = saved.profession.label(), "Profile saved");

    Ok((
        StatusCode::CREATED,
        Json(ProfileSavedResponse {
            profile: saved,
            message: "Profile saved! Use the sidebar to navigate.".to_string(),
        }),
    ))
}

/// GET /api/v1/sessions/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.sessions.require_profile(session_id).await?))
}
