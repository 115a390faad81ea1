use axum::Json;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::models::plan::{PreviewDay, Weekday};
use crate::models::profile::{InjuryArea, PREVIEW_READY_PERCENT, Profile};
use crate::services::nutrition_rules::nutrition_from_profile;
use crate::services::preview::generate_deterministic_preview;
use crate::services::training_rules;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error("profile is {completion}% complete; preview generation requires {required}%")]
    ProfileIncomplete { completion: u8, required: u8 },
    #[error("patch requests must include at least one plan day")]
    EmptyPlan,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::ProfileIncomplete { .. } | ApiError::EmptyPlan => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<(), ApiError> {
    let auth_header = match headers.get(AUTHORIZATION) {
        Some(header) => header,
        None => return Err(ApiError::Unauthorized),
    };

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => return Err(ApiError::Unauthorized),
    };

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized);
    }

    let token = &auth_str[7..];

    if token != state.config.api_token {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

fn require_days(days: &[PreviewDay]) -> Result<(), ApiError> {
    if days.is_empty() {
        return Err(ApiError::EmptyPlan);
    }
    Ok(())
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub user_id: String,
    pub profile: Profile,
}

pub async fn preview_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PreviewRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }

    let completion = payload.profile.completion_percent();
    if completion < PREVIEW_READY_PERCENT {
        tracing::info!(
            user_id = %payload.user_id,
            completion,
            "preview.profile_incomplete"
        );
        return ApiError::ProfileIncomplete {
            completion,
            required: PREVIEW_READY_PERCENT,
        }
        .into_response();
    }

    let preview = generate_deterministic_preview(&payload.user_id, &payload.profile);

    tracing::info!(
        user_id = %payload.user_id,
        content_hash = %preview.content_hash,
        "preview.generated"
    );

    Json(preview).into_response()
}

#[derive(Deserialize)]
pub struct FrequencyRequest {
    pub days: Vec<PreviewDay>,
    pub days_per_week: u8,
}

pub async fn frequency_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FrequencyRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }
    if let Err(e) = require_days(&payload.days) {
        return e.into_response();
    }

    let patch = training_rules::patch_set_days_per_week(&payload.days, payload.days_per_week);

    tracing::info!(days_per_week = payload.days_per_week, "patch.frequency");
    Json(patch).into_response()
}

#[derive(Deserialize)]
pub struct SwapRequest {
    pub days: Vec<PreviewDay>,
    pub day: Weekday,
    pub from_exercise: String,
    pub to_exercise: String,
}

pub async fn swap_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SwapRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }
    if let Err(e) = require_days(&payload.days) {
        return e.into_response();
    }

    let patch = training_rules::patch_swap_exercise(
        &payload.days,
        payload.day,
        &payload.from_exercise,
        &payload.to_exercise,
    );

    tracing::info!(
        from = %payload.from_exercise,
        to = %payload.to_exercise,
        "patch.swap"
    );
    Json(patch).into_response()
}

#[derive(Deserialize)]
pub struct PlanDaysRequest {
    pub days: Vec<PreviewDay>,
}

pub async fn progression_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PlanDaysRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }
    if let Err(e) = require_days(&payload.days) {
        return e.into_response();
    }

    let patch = training_rules::patch_progression(&payload.days);

    tracing::info!(proposed = patch.is_some(), "patch.progression");
    Json(patch).into_response()
}

pub async fn deload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PlanDaysRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }
    if let Err(e) = require_days(&payload.days) {
        return e.into_response();
    }

    let patch = training_rules::patch_deload(&payload.days);

    tracing::info!(proposed = patch.is_some(), "patch.deload");
    Json(patch).into_response()
}

#[derive(Deserialize)]
pub struct InjuriesRequest {
    pub days: Vec<PreviewDay>,
    pub injuries: Vec<InjuryArea>,
}

pub async fn injuries_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<InjuriesRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }
    if let Err(e) = require_days(&payload.days) {
        return e.into_response();
    }

    let patch = training_rules::apply_injury_substitutions(&payload.days, &payload.injuries);

    tracing::info!(
        injury_count = payload.injuries.len(),
        proposed = patch.is_some(),
        "patch.injuries"
    );
    Json(patch).into_response()
}

#[derive(Deserialize)]
pub struct NutritionRequest {
    pub profile: Profile,
}

pub async fn nutrition_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NutritionRequest>,
) -> Response {
    if let Err(e) = authenticate_request(&headers, &state) {
        return e.into_response();
    }

    let patch = nutrition_from_profile(&payload.profile);

    tracing::info!(kcal = ?patch.kcal, "patch.nutrition");
    Json(patch).into_response()
}
