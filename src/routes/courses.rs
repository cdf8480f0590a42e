use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::course_dto::CourseListResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All available courses", body = Json<CourseListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.course_service.list();
    Ok(Json(CourseListResponse { items }))
}
