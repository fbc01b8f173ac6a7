//! HTTP surface for form submissions and the static promotional data.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::compat::ApiJson;
use crate::fixtures;
use crate::store::{NewNomination, NewStory, NewSubscription, RecordStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    // The duplicate email is client-correctable, so it maps to 409 rather
    // than the generic 500.
    #[error("This email address is already subscribed")]
    Conflict,
    #[error("Something went wrong")]
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => ApiError::Conflict,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/programs/training", get(training_programs))
        .route("/api/programs/beyond", get(beyond_programs))
        .route("/api/champions", get(champions))
        .route("/api/sponsors", get(sponsors))
        .route("/api/stories/featured", get(featured_story))
        .route("/api/stories", post(submit_story))
        .route("/api/newsletter/subscribe", post(subscribe))
        .route("/api/nominations", post(submit_nomination))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn training_programs() -> Json<Vec<fixtures::TrainingProgram>> {
    Json(fixtures::training_programs())
}

async fn beyond_programs() -> Json<Vec<fixtures::BeyondProgram>> {
    Json(fixtures::beyond_programs())
}

async fn champions() -> Json<Vec<fixtures::Champion>> {
    Json(fixtures::champions())
}

async fn sponsors() -> Json<Vec<fixtures::Sponsor>> {
    Json(fixtures::sponsors())
}

async fn featured_story() -> Json<fixtures::FeaturedStory> {
    Json(fixtures::featured_story())
}

async fn submit_story(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewStory>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let story = state.store.create_story(new);
    tracing::info!(id = story.id, "story submitted");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "story": story })),
    ))
}

async fn subscribe(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewSubscription>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let subscription = state.store.create_subscription(new)?;
    tracing::info!(id = subscription.id, "newsletter subscription created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "subscription": subscription })),
    ))
}

async fn submit_nomination(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewNomination>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let nomination = state.store.create_nomination(new);
    tracing::info!(id = nomination.id, "champion nomination submitted");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "nomination": nomination })),
    ))
}
