use jsonwebtoken::{encode, EncodingKey, Header};

use crate::config::get_config;
use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::User;

const TOKEN_LIFETIME_HOURS: i64 = 24;

pub fn issue_token(user: &User) -> Result<String> {
    let exp = (chrono::Utc::now() + chrono::Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp()
        as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        exp,
        role: Some(user.role.as_str().to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_config().jwt_secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}
