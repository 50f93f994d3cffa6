//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    auth, events, health, history, matching, notifications, profile, reports, skills, users,
};
use crate::state::AppState;

/// API router without health routes, which get their own middleware
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(event_routes())
        .merge(skill_routes())
        .merge(matching_routes())
        .merge(history_routes())
        .merge(profile_routes())
        .merge(notification_routes())
        .route("/reports", get(reports::volunteer_report))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:id", delete(users::delete_user))
        .route("/volunteers", get(users::list_volunteers))
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
}

fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(skills::list_skills).post(skills::create_skill))
        .route("/skills/:id", delete(skills::delete_skill))
}

fn matching_routes() -> Router<AppState> {
    Router::new()
        .route("/match-volunteer", post(matching::match_volunteers))
        .route(
            "/unmatch-volunteer/:event_id/:user_id",
            delete(matching::unmatch_volunteer),
        )
        .route(
            "/matches/:event_id/:user_id/status",
            put(matching::update_match_status),
        )
}

fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/history", post(history::join_event))
        .route("/history/:user_id", get(history::get_history))
        .route("/history/:user_id/:event_id", delete(history::leave_event))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(profile::save_profile))
        .route("/profile/:user_id", get(profile::get_profile))
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:id/notifications",
            get(notifications::list_notifications).delete(notifications::dismiss_all),
        )
        .route("/notifications/:id", delete(notifications::dismiss))
}
