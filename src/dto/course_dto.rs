use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::course::CourseListing;

#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<CourseListing>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterCoursePayload {
    #[validate(length(min = 1))]
    pub course_title: String,
    #[validate(length(min = 1))]
    pub provider: String,
    #[validate(length(
        min = 10,
        message = "Votre message de motivation doit contenir au moins 10 caractères."
    ))]
    pub motivation: Option<String>,
}
