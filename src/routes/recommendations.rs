use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::recommendation_dto::{RecommendationQuery, RecommendationResponse},
    error::{Error, Result},
    services::recommendation_service::RecommendationRequest,
    AppState,
};

const EMPTY_QUERY_MESSAGE: &str =
    "Veuillez saisir une demande pour obtenir des recommandations.";
const NO_MATCH_MESSAGE: &str = "Nous n'avons pas trouvé de recommandations spécifiques pour votre demande. Veuillez essayer de la reformuler.";
const INVOCATION_FAILED_MESSAGE: &str =
    "Une erreur de l'IA est survenue. Veuillez réessayer plus tard.";

#[utoipa::path(
    post,
    path = "/api/recommendations",
    request_body = RecommendationQuery,
    responses(
        (status = 200, description = "Extracted keywords with up to 3 job and 3 course recommendations, or a user-facing message", body = Json<RecommendationResponse>),
        (status = 400, description = "Blank query")
    )
)]
#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationQuery>,
) -> Result<impl IntoResponse> {
    if payload.query.trim().is_empty() {
        return Err(Error::BadRequest(EMPTY_QUERY_MESSAGE.to_string()));
    }

    let request = RecommendationRequest {
        query: payload.query,
        available_jobs: state.job_service.list(),
        available_courses: state.course_service.list(),
    };

    match state.recommendation_service.recommend(request).await {
        Ok(result) if result.is_empty() => Ok(Json(RecommendationResponse::message(
            NO_MATCH_MESSAGE,
        ))),
        Ok(result) => Ok(Json(RecommendationResponse::from(result))),
        Err(e) => {
            tracing::error!(error = ?e, "Recommendation invocation failed");
            Ok(Json(RecommendationResponse::message(
                INVOCATION_FAILED_MESSAGE,
            )))
        }
    }
}
