pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::news::handlers as news;
use crate::session::handlers as session;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle & profile intake
        .route(
            "/api/v1/profile/options",
            get(session::handle_profile_options),
        )
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_navigation).delete(session::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            get(session::handle_get_profile).post(session::handle_save_profile),
        )
        // Dashboard
        .route(
            "/api/v1/sessions/:id/dashboard",
            get(skills::handle_dashboard),
        )
        // Skills & Courses
        .route(
            "/api/v1/sessions/:id/skills",
            get(skills::handle_get_skills).put(skills::handle_rate_skills),
        )
        .route(
            "/api/v1/sessions/:id/skills/recommendations",
            get(skills::handle_recommendations),
        )
        // Mentorship Chatbot
        .route(
            "/api/v1/sessions/:id/chat",
            get(chat::handle_get_chat).post(chat::handle_post_chat),
        )
        // Industry News
        .route("/api/v1/sessions/:id/news", get(news::handle_get_news))
        .with_state(state)
}
