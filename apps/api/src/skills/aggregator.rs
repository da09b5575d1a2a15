//! Skill Aggregator — profession table ∪ industry tables ∪ AI suggestions.
//!
//! Dedup is exact and case-sensitive after trimming: "Python" from two tables
//! collapses, "python" and "Python" do not. Output keeps first-seen order.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::line_list_instruction;
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::models::profile::Profile;
use crate::skills::parser::{parse_item_list, SkillParseError};
use crate::skills::prompts::{
    SKILL_SUGGEST_MAX_TOKENS, SKILL_SUGGEST_PROMPT, SKILL_SUGGEST_SYSTEM,
    SKILL_SUGGEST_TEMPERATURE,
};
use crate::skills::tables::{industry_skills, profession_skills};

pub const AI_SUGGESTION_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("skill suggestion request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("skill suggestion output was malformed: {0}")]
    Parse(#[from] SkillParseError),
}

/// Result of aggregating a profile's skills.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSuggestions {
    /// Deduplicated union of all sources.
    pub skills: Vec<String>,
    pub ai_suggested: Vec<String>,
    /// Set when the AI source failed and `skills` holds the static union only.
    pub ai_error: Option<String>,
}

/// Unions skill names, dropping blanks and exact duplicates.
pub fn union_skills<'a>(sources: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for skill in sources {
        let skill = skill.trim();
        if !skill.is_empty() && seen.insert(skill) {
            out.push(skill.to_string());
        }
    }
    out
}

/// Profession skills followed by each selected industry's skills, deduplicated.
pub fn static_skills(profile: &Profile) -> Vec<String> {
    let profession = profession_skills(profile.profession).iter().copied();
    let industries = profile
        .career_interests
        .iter()
        .flat_map(|industry| industry_skills(*industry).iter().copied());
    union_skills(profession.chain(industries))
}

/// Asks the completion service for `AI_SUGGESTION_COUNT` trending skills.
pub async fn fetch_dynamic_skills(
    profile: &Profile,
    llm: &dyn CompletionService,
) -> Result<Vec<String>, SuggestionError> {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let request = CompletionRequest {
        system: SKILL_SUGGEST_SYSTEM.to_string(),
        user: SKILL_SUGGEST_PROMPT
            .replace("{profile}", &profile_json)
            .replace("{count}", &AI_SUGGESTION_COUNT.to_string())
            .replace(
                "{list_instruction}",
                &line_list_instruction(AI_SUGGESTION_COUNT),
            ),
        max_tokens: SKILL_SUGGEST_MAX_TOKENS,
        temperature: SKILL_SUGGEST_TEMPERATURE,
    };

    let text = llm.complete(&request).await?;
    Ok(parse_item_list(&text, AI_SUGGESTION_COUNT)?)
}

/// Full aggregation. An AI failure degrades to the static union and is reported
/// in `ai_error` rather than failing the request.
pub async fn aggregate_skills(profile: &Profile, llm: &dyn CompletionService) -> SkillSuggestions {
    let static_part = static_skills(profile);

    match fetch_dynamic_skills(profile, llm).await {
        Ok(ai_suggested) => {
            let skills = union_skills(
                static_part
                    .iter()
                    .chain(ai_suggested.iter())
                    .map(String::as_str),
            );
            info!(
                "Aggregated {} skills ({} static, {} AI-suggested)",
                skills.len(),
                static_part.len(),
                ai_suggested.len()
            );
            SkillSuggestions {
                skills,
                ai_suggested,
                ai_error: None,
            }
        }
        Err(e) => {
            warn!("Falling back to static skills: {e}");
            SkillSuggestions {
                skills: static_part,
                ai_suggested: Vec::new(),
                ai_error: Some(e.to_string()),
            }
        }
    }
}
