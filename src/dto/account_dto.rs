use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{Profile, Role, User};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CandidateSignupPayload {
    #[validate(length(min = 2, message = "Le prénom doit contenir au moins 2 caractères."))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Le nom doit contenir au moins 2 caractères."))]
    pub last_name: String,
    #[validate(email(message = "Veuillez entrer une adresse email valide."))]
    pub email: String,
    #[validate(length(min = 6, message = "Le mot de passe doit contenir au moins 6 caractères."))]
    pub password: String,
    #[validate(length(min = 2, message = "La spécialité doit contenir au moins 2 caractères."))]
    pub specialty: String,
    #[validate(length(min = 10, message = "La biographie doit contenir au moins 10 caractères."))]
    pub bio: String,
    #[validate(url(message = "Veuillez entrer une URL valide."))]
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployerSignupPayload {
    #[validate(length(min = 2, message = "Le nom de l'entreprise est requis."))]
    pub company_name: String,
    #[validate(email(message = "Veuillez entrer une adresse email valide."))]
    pub email: String,
    #[validate(length(min = 6, message = "Le mot de passe doit contenir au moins 6 caractères."))]
    pub password: String,
    pub sector: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Veuillez entrer une URL valide."))]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProfilePayload {
    #[validate(length(min = 2))]
    pub first_name: Option<String>,
    #[validate(length(min = 2))]
    pub last_name: Option<String>,
    #[validate(length(min = 2))]
    pub specialty: Option<String>,
    #[validate(length(min = 10))]
    pub bio: Option<String>,
    #[validate(url)]
    pub portfolio_url: Option<String>,
    #[validate(length(min = 2))]
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub role: Role,
    pub email: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            role: value.role,
            email: value.email,
            profile: value.profile,
        }
    }
}
