pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::{
    account_service::AccountService, application_service::ApplicationService,
    course_service::CourseService, job_service::JobService,
    recommendation_service::RecommendationService,
};
use crate::store::ListingStore;
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub store: ListingStore,
    pub account_service: AccountService,
    pub job_service: JobService,
    pub course_service: CourseService,
    pub application_service: ApplicationService,
    pub recommendation_service: RecommendationService,
}

impl AppState {
    pub fn new(store: ListingStore) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let account_service = AccountService::new(store.clone());
        let job_service = JobService::new(store.clone());
        let course_service = CourseService::new(store.clone());
        let application_service = ApplicationService::new(store.clone());
        let recommendation_service = RecommendationService::new(
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
            http_client,
        );

        Self {
            store,
            account_service,
            job_service,
            course_service,
            application_service,
            recommendation_service,
        }
    }
}
