use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};

use crate::api::AppState;
use crate::auth::validate_jwt;
use crate::config::SecurityConfig;
use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity for procedures that record or filter by the acting user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = resolve_current_user(&parts.headers, &state.config.security)?;
        tracing::debug!("Resolved current user {}", user.id);
        Ok(user)
    }
}

/// Bearer token first; the bare user-id header only when enabled
pub fn resolve_current_user(headers: &HeaderMap, security: &SecurityConfig) -> Result<CurrentUser, ApiError> {
    if let Some(token) = extract_bearer_token(headers)? {
        let claims = validate_jwt(security, &token)?;
        return Ok(CurrentUser { id: claims.user_id()? });
    }

    if security.allow_user_id_header {
        if let Some(raw) = headers.get(USER_ID_HEADER) {
            let id = raw
                .to_str()
                .ok()
                .and_then(|s| s.trim().parse::<i32>().ok())
                .filter(|id| *id > 0)
                .ok_or_else(|| ApiError::unauthorized(format!("Invalid {} header", USER_ID_HEADER)))?;
            return Ok(CurrentUser { id });
        }
    }

    Err(ApiError::unauthorized("Authentication required"))
}

/// Extract JWT token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim().to_string())),
        Some(_) => Err(ApiError::unauthorized("Empty bearer token")),
        None => Err(ApiError::unauthorized("Authorization header must use Bearer token format")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::generate_jwt;
    use crate::config::AppConfig;
    use crate::database::models::User;
    use axum::http::HeaderValue;
    use chrono::Utc;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    fn token_for(id: i32, security: &SecurityConfig) -> String {
        let user = User {
            id,
            email: "pm@example.com".into(),
            first_name: "P".into(),
            last_name: "M".into(),
            team_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        generate_jwt(security, &user).unwrap()
    }

    #[test]
    fn bearer_token_resolves_user() {
        let security = AppConfig::development().security;
        let bearer = format!("Bearer {}", token_for(12, &security));
        let user = resolve_current_user(&headers(&[("authorization", bearer.as_str())]), &security).unwrap();
        assert_eq!(user.id, 12);
    }

    #[test]
    fn user_id_header_respects_config() {
        let mut security = AppConfig::development().security;
        let h = headers(&[("x-user-id", "7")]);
        assert_eq!(resolve_current_user(&h, &security).unwrap().id, 7);

        security.allow_user_id_header = false;
        assert!(resolve_current_user(&h, &security).is_err());
    }

    #[test]
    fn malformed_identity_is_rejected() {
        let security = AppConfig::development().security;
        assert!(resolve_current_user(&headers(&[("x-user-id", "abc")]), &security).is_err());
        assert!(resolve_current_user(&headers(&[("x-user-id", "-3")]), &security).is_err());
        assert!(resolve_current_user(&headers(&[("authorization", "Basic Zm9v")]), &security).is_err());
        assert!(resolve_current_user(&headers(&[("authorization", "Bearer not.a.jwt")]), &security).is_err());
        assert!(resolve_current_user(&HeaderMap::new(), &security).is_err());
    }
}
