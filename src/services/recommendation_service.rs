use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::error::Result;
use crate::models::course::CourseListing;
use crate::models::job::JobListing;

const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub query: String,
    pub available_jobs: Vec<JobListing>,
    pub available_courses: Vec<CourseListing>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub keywords: Vec<String>,
    pub job_recommendations: Vec<JobListing>,
    pub course_recommendations: Vec<CourseListing>,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.job_recommendations.is_empty()
            && self.course_recommendations.is_empty()
    }
}

#[derive(Clone)]
pub struct RecommendationService {
    client: Client,
    api_key: String,
    api_url: String,
}

impl RecommendationService {
    pub fn new(api_key: String, api_url: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }

    /// Extracts keywords from the query and selects up to 3 matching
    /// jobs and courses from the candidate sets. Selection is delegated
    /// to the model; repeated identical requests may pick differently.
    pub async fn recommend(&self, request: RecommendationRequest) -> Result<RecommendationResult> {
        if request.available_jobs.is_empty() && request.available_courses.is_empty() {
            tracing::info!("No listings available, skipping model invocation");
            return Ok(RecommendationResult::default());
        }

        let payload = build_payload(&request)?;
        let raw = self.chat_completion(payload).await?;
        let parsed: RecommendationResult = serde_json::from_value(raw)
            .map_err(|e| anyhow::anyhow!("Model returned malformed recommendations: {}", e))?;

        Ok(sanitize_result(parsed, &request))
    }

    async fn chat_completion(&self, payload: JsonValue) -> Result<JsonValue> {
        let res = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Model API error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;

        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .and_then(|s| serde_json::from_str(s).ok())
            .ok_or_else(|| anyhow::anyhow!("Invalid model response format").into())
    }
}

fn build_payload(request: &RecommendationRequest) -> Result<JsonValue> {
    let system_prompt = r#"You are a career advisor for artisans in Guinea. Your goal is to provide personalized job and course recommendations based on a user's query and the lists of available opportunities.

1. Analyze the user's query and extract keywords related to job skills, trades, locations, and training courses.
2. From 'availableJobs', select up to 3 jobs that best match the extracted keywords.
3. From 'availableCourses', select up to 3 courses that best match the extracted keywords.

Rules:
- Recommendations MUST be objects copied verbatim from the provided lists. Never invent or modify entries.
- At most 3 entries per category; empty arrays are acceptable when nothing matches.
- Respond with a single valid JSON object: {"keywords": [...], "jobRecommendations": [...], "courseRecommendations": [...]}.
"#;

    let user_content = serde_json::json!({
        "query": request.query,
        "availableJobs": request.available_jobs,
        "availableCourses": request.available_courses,
    });

    Ok(serde_json::json!({
        "model": "gpt-4o",
        "messages": [
            {"role": "system", "content": system_prompt},
            {"role": "user", "content": serde_json::to_string(&user_content)?}
        ],
        "response_format": { "type": "json_object" },
        "temperature": 0.4
    }))
}

/// Enforces the contract the model is merely asked to honor: every
/// recommendation must come from the candidate set (jobs matched by id,
/// courses by title + provider), without duplicates, at most 3 per
/// category. Fabricated entries are dropped, not fatal.
fn sanitize_result(
    raw: RecommendationResult,
    request: &RecommendationRequest,
) -> RecommendationResult {
    let mut job_ids = Vec::new();
    let mut jobs = Vec::new();
    for rec in raw.job_recommendations {
        if jobs.len() == MAX_RECOMMENDATIONS {
            break;
        }
        if job_ids.contains(&rec.id) {
            continue;
        }
        match request.available_jobs.iter().find(|c| c.id == rec.id) {
            Some(candidate) => {
                job_ids.push(rec.id);
                jobs.push(candidate.clone());
            }
            None => {
                tracing::warn!(job_id = %rec.id, "Dropping job recommendation outside the candidate set");
            }
        }
    }

    let mut course_keys: Vec<(String, String)> = Vec::new();
    let mut courses = Vec::new();
    for rec in raw.course_recommendations {
        if courses.len() == MAX_RECOMMENDATIONS {
            break;
        }
        let key = (rec.title.clone(), rec.provider.clone());
        if course_keys.contains(&key) {
            continue;
        }
        match request
            .available_courses
            .iter()
            .find(|c| c.same_course(&rec.title, &rec.provider))
        {
            Some(candidate) => {
                course_keys.push(key);
                courses.push(candidate.clone());
            }
            None => {
                tracing::warn!(course = %rec.title, "Dropping course recommendation outside the candidate set");
            }
        }
    }

    RecommendationResult {
        keywords: raw.keywords,
        job_recommendations: jobs,
        course_recommendations: courses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn job(title: &str, category: &str, location: &str) -> JobListing {
        JobListing {
            id: Uuid::new_v4(),
            employer_id: Uuid::new_v4(),
            title: title.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            job_type: "Temps plein".to_string(),
            company: "Conakry Constructions Co.".to_string(),
            image_url: "/logo.png".to_string(),
            image_hint: None,
            description: None,
        }
    }

    fn course(title: &str, provider: &str) -> CourseListing {
        CourseListing {
            title: title.to_string(),
            category: "Électricité".to_string(),
            duration: "6 semaines".to_string(),
            has_certification: true,
            provider: provider.to_string(),
            image_url: "/logo.png".to_string(),
            image_hint: None,
        }
    }

    fn sample_request() -> RecommendationRequest {
        RecommendationRequest {
            query: "électricien Conakry".to_string(),
            available_jobs: vec![
                job(
                    "Électricien Agréé pour Projets Résidentiels",
                    "Électricité",
                    "Conakry, Guinée",
                ),
                job("Technicien en Plomberie", "Plomberie", "Kindia, Guinée"),
                job("Spécialiste en Installation de CVC", "CVC", "Labé, Guinée"),
                job(
                    "Menuisier pour la Fabrication de Meubles",
                    "Menuiserie",
                    "Nzérékoré, Guinée",
                ),
                job(
                    "Maçon pour Fondations de Bâtiments",
                    "Maçonnerie",
                    "Kankan, Guinée",
                ),
                job("Mécanicien Automobile", "Mécanique", "Boké, Guinée"),
            ],
            available_courses: vec![
                course("Câblage Électrique Avancé", "Institut Technique de Conakry"),
                course(
                    "Techniques Modernes de Plomberie",
                    "École Professionnelle de Kindia",
                ),
            ],
        }
    }

    #[test]
    fn payload_serializes_full_candidate_set() {
        let request = sample_request();
        let payload = build_payload(&request).unwrap();

        assert_eq!(payload["response_format"]["type"], "json_object");
        let user_content = payload["messages"][1]["content"].as_str().unwrap();
        assert!(user_content.contains("électricien Conakry"));
        assert!(user_content.contains("Électricien Agréé pour Projets Résidentiels"));
        assert!(user_content.contains("Mécanicien Automobile"));
        assert!(user_content.contains("Câblage Électrique Avancé"));
    }

    #[test]
    fn sanitize_drops_fabricated_entries_and_truncates() {
        let request = sample_request();

        let mut fabricated = job("Offre Inventée", "Électricité", "Conakry, Guinée");
        fabricated.id = Uuid::new_v4();

        let raw = RecommendationResult {
            keywords: vec!["électricien".to_string(), "Conakry".to_string()],
            job_recommendations: vec![
                fabricated,
                request.available_jobs[0].clone(),
                request.available_jobs[1].clone(),
                request.available_jobs[1].clone(),
                request.available_jobs[2].clone(),
                request.available_jobs[3].clone(),
            ],
            course_recommendations: vec![
                request.available_courses[0].clone(),
                course("Formation Inventée", "Nulle Part"),
            ],
        };

        let clean = sanitize_result(raw, &request);

        assert_eq!(clean.job_recommendations.len(), 3);
        for rec in &clean.job_recommendations {
            assert!(request.available_jobs.iter().any(|c| c.id == rec.id));
        }
        assert_eq!(clean.course_recommendations.len(), 1);
        assert_eq!(clean.course_recommendations[0].title, "Câblage Électrique Avancé");
        assert_eq!(clean.keywords.len(), 2);
    }

    #[tokio::test]
    async fn empty_candidate_sets_short_circuit_without_model_call() {
        // Nothing listens on this address; any attempted call would error.
        let service = RecommendationService::new(
            "sk-test".to_string(),
            "http://127.0.0.1:1/v1/chat/completions".to_string(),
            Client::new(),
        );

        let result = service
            .recommend(RecommendationRequest {
                query: "électricien Conakry".to_string(),
                available_jobs: vec![],
                available_courses: vec![],
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}
