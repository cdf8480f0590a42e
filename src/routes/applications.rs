use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::application_dto::{
        ApplicationStatsResponse, ApplyJobPayload, MyApplicationsResponse,
        ReceivedApplicationsResponse,
    },
    dto::course_dto::RegisterCoursePayload,
    error::Result,
    middleware::auth::{user_id, Claims},
    AppState,
};

#[axum::debug_handler]
pub async fn apply_for_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(job_id): Path<Uuid>,
    Json(payload): Json<ApplyJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state
        .application_service
        .apply(user_id(&claims)?, job_id, payload)?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[axum::debug_handler]
pub async fn register_for_course(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<RegisterCoursePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let registration = state
        .application_service
        .register_for_course(user_id(&claims)?, payload)?;
    Ok((StatusCode::CREATED, Json(registration)))
}

#[axum::debug_handler]
pub async fn my_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let (items, registrations) = state
        .application_service
        .list_for_applicant(user_id(&claims)?);
    Ok(Json(MyApplicationsResponse {
        items,
        registrations,
    }))
}

#[axum::debug_handler]
pub async fn employer_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let items = state
        .application_service
        .inbox_for_employer(user_id(&claims)?);
    Ok(Json(ReceivedApplicationsResponse { items }))
}

#[axum::debug_handler]
pub async fn employer_stats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let items = state
        .application_service
        .stats_for_employer(user_id(&claims)?);
    Ok(Json(ApplicationStatsResponse { items }))
}
