use serde::{Deserialize, Serialize};

use crate::models::course::CourseListing;
use crate::models::job::JobListing;
use crate::services::recommendation_service::RecommendationResult;

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationQuery {
    pub query: String,
}

/// The envelope the recommendation UI consumes: either recommendations
/// or a single user-facing message, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub keywords: Vec<String>,
    pub job_recommendations: Vec<JobListing>,
    pub course_recommendations: Vec<CourseListing>,
}

impl RecommendationResponse {
    pub fn message(text: &str) -> Self {
        Self {
            error: Some(text.to_string()),
            keywords: vec![],
            job_recommendations: vec![],
            course_recommendations: vec![],
        }
    }
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(value: RecommendationResult) -> Self {
        Self {
            error: None,
            keywords: value.keywords,
            job_recommendations: value.job_recommendations,
            course_recommendations: value.course_recommendations,
        }
    }
}
