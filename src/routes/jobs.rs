use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{JobListResponse, PublishJobPayload},
    error::Result,
    middleware::auth::{user_id, Claims},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "All job offers, newest first", body = Json<JobListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.job_service.list();
    Ok(Json(JobListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job offer ID")
    ),
    responses(
        (status = 200, description = "Job offer found"),
        (status = 404, description = "Job offer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id)?;
    Ok(Json(job))
}

#[axum::debug_handler]
pub async fn publish_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<PublishJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state.account_service.get(user_id(&claims)?)?;
    let job = state.job_service.publish(&employer, payload)?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[axum::debug_handler]
pub async fn my_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let items = state.job_service.list_by_employer(user_id(&claims)?);
    Ok(Json(JobListResponse { items }))
}
