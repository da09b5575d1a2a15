//! Axum route handlers for the Skills & Courses and Dashboard views.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::llm_client::CompletionRequest;
use crate::models::profile::{Industry, Profession, Profile};
use crate::skills::aggregator::aggregate_skills;
use crate::skills::gap::{compute_gaps, widest_gaps, GapRow, SkillLevel};
use crate::skills::prompts::{
    COURSE_RECOMMEND_MAX_TOKENS, COURSE_RECOMMEND_PROMPT, COURSE_RECOMMEND_SYSTEM,
    COURSE_RECOMMEND_TEMPERATURE,
};
use crate::state::AppState;

pub const RECOMMENDATION_FOCUS_LIMIT: usize = 5;
pub const NO_SKILLS_MESSAGE: &str =
    "Please personalize your skills first in 'Skills & Courses'.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RatedSkill {
    pub skill: String,
    pub current: u8,
    pub target: u8,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<RatedSkill>,
    pub ai_suggested: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RatingInput {
    pub current: u8,
    /// Defaults to `current` when omitted.
    pub target: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct RateSkillsRequest {
    pub ratings: BTreeMap<String, RatingInput>,
}

#[derive(Debug, Serialize)]
pub struct RateSkillsResponse {
    pub personal_skills: Vec<RatedSkill>,
    pub gaps: Vec<GapRow>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub focus_skills: Vec<String>,
    /// Markdown as returned by the model.
    pub recommendations: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub name: String,
    pub profession: Profession,
    pub experience_years: u8,
    pub career_goals: String,
    pub career_interests: Vec<Industry>,
    pub gaps: Vec<GapRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn rated(levels: &BTreeMap<String, SkillLevel>) -> Vec<RatedSkill> {
    levels
        .iter()
        .map(|(skill, level)| RatedSkill {
            skill: skill.clone(),
            current: level.current,
            target: level.target,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:id/skills
///
/// Aggregates the profile's skills and attaches any saved levels; unrated skills
/// start at 0/0.
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SkillListResponse>, AppError> {
    let profile = state.sessions.require_profile(session_id).await?;
    let suggestions = aggregate_skills(&profile, state.llm.as_ref()).await;

    let saved = state
        .sessions
        .read(session_id, |s| s.personal_skills.clone())
        .await?;

    let skills = suggestions
        .skills
        .into_iter()
        .map(|skill| {
            let level = saved.get(&skill).copied().unwrap_or_default();
            RatedSkill {
                skill,
                current: level.current,
                target: level.target,
            }
        })
        .collect();

    Ok(Json(SkillListResponse {
        skills,
        ai_suggested: suggestions.ai_suggested,
        ai_error: suggestions.ai_error,
    }))
}

/// PUT /api/v1/sessions/:id/skills
///
/// Validates every rating before writing any; then upserts per skill.
pub async fn handle_rate_skills(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(request): AppJson<RateSkillsRequest>,
) -> Result<Json<RateSkillsResponse>, AppError> {
    let mut levels = Vec::with_capacity(request.ratings.len());
    for (skill, input) in request.ratings {
        let skill = skill.trim().to_string();
        if skill.is_empty() {
            return Err(AppError::Validation("skill name cannot be empty".to_string()));
        }
        let level = SkillLevel::new(input.current, input.target.unwrap_or(input.current))
            .map_err(|e| AppError::Validation(format!("{skill}: {e}")))?;
        levels.push((skill, level));
    }

    let submitted = levels.len();
    let personal_skills = state
        .sessions
        .write(session_id, move |s| {
            s.profile()?;
            s.upsert_skill_levels(levels);
            Ok::<_, AppError>(s.personal_skills.clone())
        })
        .await??;

    info!(session_id = %session_id, submitted, total = personal_skills.len(), "Skill levels saved");

    Ok(Json(RateSkillsResponse {
        personal_skills: rated(&personal_skills),
        gaps: compute_gaps(&personal_skills),
    }))
}

/// GET /api/v1/sessions/:id/skills/recommendations
///
/// Course recommendations aimed at the widest gaps. Unlike the skill list, a
/// completion failure here is an error response: there is nothing to fall back to.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let (profile, levels) = state
        .sessions
        .read(session_id, |s| {
            s.profile().map(|p| (p.clone(), s.personal_skills.clone()))
        })
        .await??;

    let rows = compute_gaps(&levels);
    let focus_skills: Vec<String> = widest_gaps(&rows, RECOMMENDATION_FOCUS_LIMIT)
        .into_iter()
        .map(|r| r.skill.clone())
        .collect();

    let request = recommendation_request(&profile, &rows, &focus_skills);
    let recommendations = state
        .llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Course recommendations failed: {e}")))?;

    Ok(Json(RecommendationsResponse {
        focus_skills,
        recommendations,
    }))
}

fn recommendation_request(
    profile: &Profile,
    rows: &[GapRow],
    focus_skills: &[String],
) -> CompletionRequest {
    let gaps = if focus_skills.is_empty() {
        "none rated yet; recommend foundations for the profession".to_string()
    } else {
        rows.iter()
            .filter(|r| focus_skills.contains(&r.skill))
            .map(|r| format!("{} ({} -> {})", r.skill, r.current, r.target))
            .collect::<Vec<_>>()
            .join(", ")
    };

    CompletionRequest {
        system: COURSE_RECOMMEND_SYSTEM.to_string(),
        user: COURSE_RECOMMEND_PROMPT
            .replace("{profile}", &serde_json::to_string(profile).unwrap_or_default())
            .replace("{gaps}", &gaps),
        max_tokens: COURSE_RECOMMEND_MAX_TOKENS,
        temperature: COURSE_RECOMMEND_TEMPERATURE,
    }
}

/// GET /api/v1/sessions/:id/dashboard
///
/// Gap rows are recomputed on every call.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let response = state
        .sessions
        .read(session_id, |s| {
            let profile = s.profile()?;
            let gaps = compute_gaps(&s.personal_skills);
            let message = gaps.is_empty().then(|| NO_SKILLS_MESSAGE.to_string());
            Ok::<_, AppError>(DashboardResponse {
                name: profile.name.clone(),
                profession: profile.profession,
                experience_years: profile.experience_years,
                career_goals: profile.career_goals.clone(),
                career_interests: profile.career_interests.clone(),
                gaps,
                message,
            })
        })
        .await??;
    Ok(Json(response))
}
