/**
 * Session Extractor
 *
 * Extracts and verifies the bearer session token from the Authorization
 * header, yielding the caller's identity for handlers that require it.
 * Rejections are 401 responses with a JSON error body.
 */

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use uuid::Uuid;

/// Authenticated caller identity from the session token
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

fn unauthorized() -> BackendError {
    BackendError::handler(StatusCode::UNAUTHORIZED, "authentication required")
}

/// Extract and verify the session from request headers
pub fn session_from_headers(headers: &HeaderMap) -> Result<SessionUser, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        unauthorized()
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid session token: {}", e);
        unauthorized()
    })?;

    let id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in session token: {}", e);
        unauthorized()
    })?;

    Ok(SessionUser {
        id,
        name: claims.name,
        email: claims.email,
        image: claims.picture,
    })
}

impl<S> axum::extract::FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        session_from_headers(&parts.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::create_token;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_from_headers() {
        std::env::set_var("SUPABASE_JWT_SECRET", "test-secret");

        let user_id = Uuid::new_v4();
        let token = create_token(user_id, Some("Ada".to_string()), None, None).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let session = session_from_headers(&headers).unwrap();
        assert_eq!(session.id, user_id);
        assert_eq!(session.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let headers = HeaderMap::new();
        let error = session_from_headers(&headers).unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_malformed_header_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));
        let error = session_from_headers(&headers).unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }
}
