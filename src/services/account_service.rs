use chrono::Utc;
use uuid::Uuid;

use crate::dto::account_dto::{
    CandidateSignupPayload, EmployerSignupPayload, LoginPayload, UpdateProfilePayload,
};
use crate::error::{Error, Result};
use crate::models::user::{CandidateProfile, EmployerProfile, Profile, Role, User};
use crate::store::ListingStore;
use crate::utils::crypto::{hash_password, verify_password};

#[derive(Clone)]
pub struct AccountService {
    store: ListingStore,
}

impl AccountService {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }

    pub fn get(&self, id: Uuid) -> Result<User> {
        self.store
            .get_user(id)
            .ok_or_else(|| Error::NotFound("Account not found".to_string()))
    }

    pub fn register_candidate(&self, payload: CandidateSignupPayload) -> Result<User> {
        self.ensure_email_free(&payload.email)?;

        let user = User {
            id: Uuid::new_v4(),
            role: Role::Candidate,
            email: payload.email,
            password_hash: hash_password(&payload.password)?,
            profile: Profile::Candidate(CandidateProfile {
                first_name: payload.first_name,
                last_name: payload.last_name,
                specialty: payload.specialty,
                bio: payload.bio,
                portfolio_url: payload.portfolio_url.filter(|url| !url.is_empty()),
            }),
            created_at: Utc::now(),
        };

        self.store.insert_user(user.clone());
        tracing::info!(user_id = %user.id, "Candidate account created");
        Ok(user)
    }

    pub fn register_employer(&self, payload: EmployerSignupPayload) -> Result<User> {
        self.ensure_email_free(&payload.email)?;

        let user = User {
            id: Uuid::new_v4(),
            role: Role::Employer,
            email: payload.email,
            password_hash: hash_password(&payload.password)?,
            profile: Profile::Employer(EmployerProfile {
                company_name: payload.company_name,
                sector: payload.sector,
                description: payload.description,
                website: payload.website.filter(|url| !url.is_empty()),
            }),
            created_at: Utc::now(),
        };

        self.store.insert_user(user.clone());
        tracing::info!(user_id = %user.id, "Employer account created");
        Ok(user)
    }

    pub fn login(&self, payload: LoginPayload) -> Result<User> {
        let user = self
            .store
            .find_user_by_email(&payload.email)
            .ok_or_else(|| Error::Unauthorized("Email ou mot de passe incorrect.".to_string()))?;

        if !verify_password(&payload.password, &user.password_hash) {
            return Err(Error::Unauthorized(
                "Email ou mot de passe incorrect.".to_string(),
            ));
        }

        Ok(user)
    }

    pub fn update_profile(&self, id: Uuid, payload: UpdateProfilePayload) -> Result<User> {
        let user = self.get(id)?;

        let profile = match user.profile {
            Profile::Candidate(current) => Profile::Candidate(CandidateProfile {
                first_name: payload.first_name.unwrap_or(current.first_name),
                last_name: payload.last_name.unwrap_or(current.last_name),
                specialty: payload.specialty.unwrap_or(current.specialty),
                bio: payload.bio.unwrap_or(current.bio),
                portfolio_url: payload.portfolio_url.or(current.portfolio_url),
            }),
            Profile::Employer(current) => Profile::Employer(EmployerProfile {
                company_name: payload.company_name.unwrap_or(current.company_name),
                sector: payload.sector.or(current.sector),
                description: payload.description.or(current.description),
                website: payload.website.or(current.website),
            }),
        };

        self.store
            .update_profile(id, profile)
            .ok_or_else(|| Error::NotFound("Account not found".to_string()))
    }

    fn ensure_email_free(&self, email: &str) -> Result<()> {
        if self.store.find_user_by_email(email).is_some() {
            return Err(Error::Conflict(
                "Un compte avec cette adresse email existe déjà.".to_string(),
            ));
        }
        Ok(())
    }
}
