use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub cover_letter: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseRegistration {
    pub id: Uuid,
    pub course_title: String,
    pub provider: String,
    pub applicant_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    pub registered_at: DateTime<Utc>,
}
