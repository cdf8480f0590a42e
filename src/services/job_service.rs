use uuid::Uuid;

use crate::dto::job_dto::PublishJobPayload;
use crate::error::{Error, Result};
use crate::models::job::JobListing;
use crate::models::user::{Profile, User};
use crate::store::ListingStore;

#[derive(Clone)]
pub struct JobService {
    store: ListingStore,
}

impl JobService {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<JobListing> {
        self.store.list_jobs()
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<JobListing> {
        self.store
            .get_job(id)
            .ok_or_else(|| Error::NotFound("Job offer not found".to_string()))
    }

    pub fn list_by_employer(&self, employer_id: Uuid) -> Vec<JobListing> {
        self.store.jobs_by_employer(employer_id)
    }

    /// Publishes a new offer under the employer's company name. Offers
    /// are immutable once listed; there is no update or delete.
    pub fn publish(&self, employer: &User, payload: PublishJobPayload) -> Result<JobListing> {
        let Profile::Employer(profile) = &employer.profile else {
            return Err(Error::Forbidden(
                "Only employers can publish job offers".to_string(),
            ));
        };

        let job = JobListing {
            id: Uuid::new_v4(),
            employer_id: employer.id,
            title: payload.title,
            category: payload.category,
            location: payload.location,
            job_type: payload.job_type,
            company: profile.company_name.clone(),
            image_url: "/logo.png".to_string(),
            image_hint: Some("new job".to_string()),
            description: Some(payload.description),
        };

        self.store.insert_job(job.clone());
        tracing::info!(job_id = %job.id, employer_id = %employer.id, "Job offer published");
        Ok(job)
    }
}
