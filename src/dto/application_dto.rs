use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::application::{CourseRegistration, JobApplication};
use crate::models::job::JobListing;
use crate::models::user::{CandidateProfile, Profile, User};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplyJobPayload {
    #[validate(length(
        min = 10,
        message = "Votre lettre de motivation doit contenir au moins 10 caractères."
    ))]
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub application: JobApplication,
    pub job: JobListing,
}

/// Applicant details shown to employers. The email is withheld for
/// confidentiality; contact goes through the platform.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantSummary {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub bio: String,
}

impl ApplicantSummary {
    pub fn from_user(user: &User) -> Option<Self> {
        match &user.profile {
            Profile::Candidate(CandidateProfile {
                first_name,
                last_name,
                specialty,
                bio,
                ..
            }) => Some(Self {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                specialty: specialty.clone(),
                bio: bio.clone(),
            }),
            Profile::Employer(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivedApplication {
    pub application: JobApplication,
    pub job: JobListing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<ApplicantSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivedApplicationsResponse {
    pub items: Vec<ReceivedApplication>,
}

/// One bar of the employer dashboard chart; keys match what the chart
/// consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStat {
    pub job_title: String,
    pub applications: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatsResponse {
    pub items: Vec<ApplicationStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyApplicationsResponse {
    pub items: Vec<ApplicationResponse>,
    pub registrations: Vec<CourseRegistration>,
}
