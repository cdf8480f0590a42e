use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::application::{CourseRegistration, JobApplication};
use crate::models::course::CourseListing;
use crate::models::job::JobListing;
use crate::models::user::{Profile, User};

pub mod seed;

#[derive(Default)]
struct StoreInner {
    users: Vec<User>,
    jobs: Vec<JobListing>,
    courses: Vec<CourseListing>,
    applications: Vec<JobApplication>,
    registrations: Vec<CourseRegistration>,
}

/// In-process listing store standing in for a real database. Every read
/// and write goes through the operations below; services receive a
/// clone of the handle.
#[derive(Clone, Default)]
pub struct ListingStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().expect("listing store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().expect("listing store lock poisoned")
    }

    pub fn insert_user(&self, user: User) {
        self.write().users.push(user);
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.read()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn get_user(&self, id: Uuid) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn update_profile(&self, id: Uuid, profile: Profile) -> Option<User> {
        let mut guard = self.write();
        let user = guard.users.iter_mut().find(|u| u.id == id)?;
        user.profile = profile;
        Some(user.clone())
    }

    pub fn insert_job(&self, job: JobListing) {
        self.write().jobs.push(job);
    }

    /// Jobs in reverse insertion order, most recently published first.
    pub fn list_jobs(&self) -> Vec<JobListing> {
        self.read().jobs.iter().rev().cloned().collect()
    }

    pub fn get_job(&self, id: Uuid) -> Option<JobListing> {
        self.read().jobs.iter().find(|j| j.id == id).cloned()
    }

    pub fn jobs_by_employer(&self, employer_id: Uuid) -> Vec<JobListing> {
        self.read()
            .jobs
            .iter()
            .rev()
            .filter(|j| j.employer_id == employer_id)
            .cloned()
            .collect()
    }

    pub fn insert_course(&self, course: CourseListing) {
        self.write().courses.push(course);
    }

    pub fn list_courses(&self) -> Vec<CourseListing> {
        self.read().courses.clone()
    }

    pub fn find_course(&self, title: &str, provider: &str) -> Option<CourseListing> {
        self.read()
            .courses
            .iter()
            .find(|c| c.same_course(title, provider))
            .cloned()
    }

    pub fn insert_application(&self, application: JobApplication) {
        self.write().applications.push(application);
    }

    pub fn has_applied(&self, applicant_id: Uuid, job_id: Uuid) -> bool {
        self.read()
            .applications
            .iter()
            .any(|a| a.applicant_id == applicant_id && a.job_id == job_id)
    }

    pub fn applications_by_applicant(&self, applicant_id: Uuid) -> Vec<JobApplication> {
        self.read()
            .applications
            .iter()
            .rev()
            .filter(|a| a.applicant_id == applicant_id)
            .cloned()
            .collect()
    }

    pub fn applications_for_jobs(&self, job_ids: &[Uuid]) -> Vec<JobApplication> {
        self.read()
            .applications
            .iter()
            .rev()
            .filter(|a| job_ids.contains(&a.job_id))
            .cloned()
            .collect()
    }

    pub fn count_applications_for_job(&self, job_id: Uuid) -> usize {
        self.read()
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .count()
    }

    pub fn insert_registration(&self, registration: CourseRegistration) {
        self.write().registrations.push(registration);
    }

    pub fn registrations_by_applicant(&self, applicant_id: Uuid) -> Vec<CourseRegistration> {
        self.read()
            .registrations
            .iter()
            .rev()
            .filter(|r| r.applicant_id == applicant_id)
            .cloned()
            .collect()
    }

    pub fn is_registered(&self, applicant_id: Uuid, title: &str, provider: &str) -> bool {
        self.read()
            .registrations
            .iter()
            .any(|r| r.applicant_id == applicant_id && r.course_title == title && r.provider == provider)
    }
}
