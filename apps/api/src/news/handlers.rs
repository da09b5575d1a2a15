//! Axum route handlers for the Industry News view.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::news::client::NewsItem;
use crate::state::AppState;

pub const DEFAULT_INDUSTRY: &str = "Data Science";
pub const NO_NEWS_MESSAGE: &str = "No news found or unable to fetch.";

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub industry: String,
    pub items: Vec<NewsItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/v1/sessions/:id/news?industry=
pub async fn handle_get_news(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, AppError> {
    state.sessions.require_profile(session_id).await?;

    let industry = match query.industry {
        Some(industry) if industry.trim().is_empty() => {
            return Err(AppError::Validation("industry cannot be empty".to_string()));
        }
        Some(industry) => industry.trim().to_string(),
        None => DEFAULT_INDUSTRY.to_string(),
    };

    let items = state.news.fetch_industry_news(&industry).await;
    let message = items.is_empty().then(|| NO_NEWS_MESSAGE.to_string());

    Ok(Json(NewsResponse {
        industry,
        items,
        message,
    }))
}
