use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;
use crate::database::models::User;

const ISSUER: &str = "sitebook-crm";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("{0}")]
    InvalidToken(String),

    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: &User, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iss: ISSUER.to_string(),
            exp,
            iat: now.timestamp(),
        }
    }

    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken("Token subject is not a user id".to_string()))
    }
}

pub fn generate_jwt(security: &SecurityConfig, user: &User) -> Result<String, AuthError> {
    if security.jwt_secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let claims = Claims::new(user, security.jwt_expiry_hours);
    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key).map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

pub fn validate_jwt(security: &SecurityConfig, token: &str) -> Result<Claims, AuthError> {
    if security.jwt_secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let mut validation = Validation::default();
    validation.set_issuer(&[ISSUER]);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| AuthError::InvalidToken(format!("Invalid bearer token: {}", e)))?;

    Ok(token_data.claims)
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hashed).map_err(|e| AuthError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn user() -> User {
        User {
            id: 42,
            email: "estimator@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            team_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_round_trip_yields_user_id() {
        let security = AppConfig::development().security;
        let token = generate_jwt(&security, &user()).unwrap();
        let claims = validate_jwt(&security, &token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.email, "estimator@example.com");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let security = AppConfig::development().security;
        let token = generate_jwt(&security, &user()).unwrap();

        let mut other = security.clone();
        other.jwt_secret = "another-secret".to_string();
        assert!(matches!(validate_jwt(&other, &token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        let security = AppConfig::production().security;
        assert!(matches!(generate_jwt(&security, &user()), Err(AuthError::InvalidSecret)));
    }

    #[test]
    fn password_hash_verifies() {
        let hashed = hash_password("password123", 4).unwrap();
        assert_ne!(hashed, "password123");
        assert!(verify_password("password123", &hashed).unwrap());
        assert!(!verify_password("wrongpassword", &hashed).unwrap());
    }
}
