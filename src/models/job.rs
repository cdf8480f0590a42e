use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published job offer. This is also the wire shape fed to the
/// recommendation model as part of the candidate set, so field names
/// follow the published camelCase contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub category: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub company: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
