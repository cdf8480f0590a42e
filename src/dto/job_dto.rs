use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::JobListing;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PublishJobPayload {
    #[validate(length(min = 5, message = "Le titre doit contenir au moins 5 caractères."))]
    pub title: String,
    #[validate(length(min = 2, message = "La catégorie est requise."))]
    pub category: String,
    #[validate(length(min = 2, message = "Le lieu est requis."))]
    pub location: String,
    #[serde(rename = "type")]
    #[validate(length(min = 2, message = "Le type de contrat est requis."))]
    pub job_type: String,
    #[validate(length(min = 10, message = "La description doit contenir au moins 10 caractères."))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListResponse {
    pub items: Vec<JobListing>,
}
