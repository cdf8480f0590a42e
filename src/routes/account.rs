use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::account_dto::{
        AuthResponse, CandidateSignupPayload, EmployerSignupPayload, LoginPayload,
        UpdateProfilePayload, UserResponse,
    },
    error::Result,
    middleware::auth::{user_id, Claims},
    utils::token::issue_token,
    AppState,
};

#[axum::debug_handler]
pub async fn signup_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CandidateSignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.account_service.register_candidate(payload)?;
    let token = issue_token(&user)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[axum::debug_handler]
pub async fn signup_employer(
    State(state): State<AppState>,
    Json(payload): Json<EmployerSignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.account_service.register_employer(payload)?;
    let token = issue_token(&user)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.account_service.login(payload)?;
    let token = issue_token(&user)?;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user = state.account_service.get(user_id(&claims)?)?;
    Ok(Json(UserResponse::from(user)))
}

#[axum::debug_handler]
pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .account_service
        .update_profile(user_id(&claims)?, payload)?;
    Ok(Json(UserResponse::from(user)))
}
