use chrono::Utc;
use uuid::Uuid;

use crate::dto::application_dto::{
    ApplicantSummary, ApplicationResponse, ApplicationStat, ApplyJobPayload, ReceivedApplication,
};
use crate::dto::course_dto::RegisterCoursePayload;
use crate::error::{Error, Result};
use crate::models::application::{CourseRegistration, JobApplication};
use crate::store::ListingStore;

#[derive(Clone)]
pub struct ApplicationService {
    store: ListingStore,
}

impl ApplicationService {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }

    pub fn apply(
        &self,
        applicant_id: Uuid,
        job_id: Uuid,
        payload: ApplyJobPayload,
    ) -> Result<JobApplication> {
        let job = self
            .store
            .get_job(job_id)
            .ok_or_else(|| Error::NotFound("Job offer not found".to_string()))?;

        if self.store.has_applied(applicant_id, job.id) {
            return Err(Error::Conflict(
                "Vous avez déjà postulé à cette offre.".to_string(),
            ));
        }

        let application = JobApplication {
            id: Uuid::new_v4(),
            job_id: job.id,
            applicant_id,
            cover_letter: payload.cover_letter,
            applied_at: Utc::now(),
        };
        self.store.insert_application(application.clone());
        tracing::info!(job_id = %job.id, applicant_id = %applicant_id, "Application submitted");
        Ok(application)
    }

    pub fn register_for_course(
        &self,
        applicant_id: Uuid,
        payload: RegisterCoursePayload,
    ) -> Result<CourseRegistration> {
        let course = self
            .store
            .find_course(&payload.course_title, &payload.provider)
            .ok_or_else(|| Error::NotFound("Course not found".to_string()))?;

        if self
            .store
            .is_registered(applicant_id, &course.title, &course.provider)
        {
            return Err(Error::Conflict(
                "Vous êtes déjà inscrit à cette formation.".to_string(),
            ));
        }

        let registration = CourseRegistration {
            id: Uuid::new_v4(),
            course_title: course.title,
            provider: course.provider,
            applicant_id,
            motivation: payload.motivation,
            registered_at: Utc::now(),
        };
        self.store.insert_registration(registration.clone());
        Ok(registration)
    }

    pub fn list_for_applicant(
        &self,
        applicant_id: Uuid,
    ) -> (Vec<ApplicationResponse>, Vec<CourseRegistration>) {
        let applications = self
            .store
            .applications_by_applicant(applicant_id)
            .into_iter()
            .filter_map(|application| {
                let job = self.store.get_job(application.job_id)?;
                Some(ApplicationResponse { application, job })
            })
            .collect();

        let registrations = self
            .store
            .registrations_by_applicant(applicant_id);

        (applications, registrations)
    }

    /// Applications received across the employer's offers, newest
    /// first, with the applicant's profile embedded.
    pub fn inbox_for_employer(&self, employer_id: Uuid) -> Vec<ReceivedApplication> {
        let jobs = self.store.jobs_by_employer(employer_id);
        let job_ids: Vec<Uuid> = jobs.iter().map(|j| j.id).collect();

        self.store
            .applications_for_jobs(&job_ids)
            .into_iter()
            .filter_map(|application| {
                let job = jobs.iter().find(|j| j.id == application.job_id)?.clone();
                let applicant = self
                    .store
                    .get_user(application.applicant_id)
                    .as_ref()
                    .and_then(ApplicantSummary::from_user);
                Some(ReceivedApplication {
                    application,
                    job,
                    applicant,
                })
            })
            .collect()
    }

    pub fn stats_for_employer(&self, employer_id: Uuid) -> Vec<ApplicationStat> {
        self.store
            .jobs_by_employer(employer_id)
            .into_iter()
            .map(|job| ApplicationStat {
                applications: self.store.count_applications_for_job(job.id),
                job_title: job.title,
            })
            .collect()
    }
}
