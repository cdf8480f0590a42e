use serde::{Deserialize, Serialize};

/// A training course. Courses are seeded statically and have no
/// lifecycle operations; a course is identified by title + provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListing {
    pub title: String,
    pub category: String,
    pub duration: String,
    pub has_certification: bool,
    pub provider: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

impl CourseListing {
    pub fn same_course(&self, title: &str, provider: &str) -> bool {
        self.title == title && self.provider == provider
    }
}
