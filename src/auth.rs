// ABOUTME: JWT-based session verification for dashboard and API requests
// ABOUTME: Issues and validates HS256 session tokens and extracts them from headers or cookies
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Authentication and Session Management
//!
//! The identity provider contract used by the dashboard is "give me the current user
//! or nothing". Tokens are read from `Authorization: Bearer <jwt>` first and then from
//! the `auth_token` cookie. Any failure to find or verify a token yields `None`; callers
//! treat that as a control-flow branch, not an error.

use crate::constants::auth::SESSION_COOKIE;
use crate::errors::{AppError, AppResult};
use chrono::{Duration, Utc};
use http::{header, HeaderMap};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Audience claim stamped on every session token
const TOKEN_AUDIENCE: &str = "fitlink";

/// `JWT` validation error with detailed information
#[derive(Debug, Error)]
pub enum JwtValidationError {
    /// Token has expired
    #[error("JWT token has expired")]
    TokenExpired,
    /// Token signature or claims are invalid
    #[error("JWT token is invalid: {reason}")]
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is not a well-formed JWT
    #[error("JWT token is malformed: {details}")]
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl From<jsonwebtoken::errors::Error> for JwtValidationError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                Self::TokenMalformed {
                    details: e.to_string(),
                }
            }
            _ => Self::TokenInvalid {
                reason: e.to_string(),
            },
        }
    }
}

/// `JWT` claims for user sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience (who the token is intended for)
    pub aud: String,
}

/// The signed-in user resolved from a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User identifier
    pub user_id: Uuid,
    /// Email, when the token carries one
    pub email: Option<String>,
}

/// Issues and verifies session tokens
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new auth manager from an HS256 secret
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Generate a session token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails
    pub fn generate_token(&self, user_id: Uuid, email: Option<&str>) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.map(str::to_owned),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours)).timestamp(),
            aud: TOKEN_AUDIENCE.to_owned(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, expired, or signed with another key
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_audience(&[TOKEN_AUDIENCE]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }

    /// Resolve the current user from request headers
    ///
    /// Returns `None` when no token is present or the token does not verify.
    #[must_use]
    pub fn current_user(&self, headers: &HeaderMap) -> Option<AuthenticatedUser> {
        let token = extract_session_token(headers)?;

        let claims = match self.validate_token(&token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("Rejected session token: {e}");
                return None;
            }
        };

        match Uuid::parse_str(&claims.sub) {
            Ok(user_id) => Some(AuthenticatedUser {
                user_id,
                email: claims.email,
            }),
            Err(e) => {
                debug!("Session token subject is not a UUID: {e}");
                None
            }
        }
    }
}

/// Extract a session token from the `Authorization` header or the session cookie
#[must_use]
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_owned());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn manager() -> AuthManager {
        AuthManager::new(b"unit-test-secret", 1)
    }

    #[test]
    fn test_token_round_trip_resolves_user() {
        let auth = manager();
        let user_id = Uuid::new_v4();
        let token = auth.generate_token(user_id, Some("runner@example.com")).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let user = auth.current_user(&headers).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email.as_deref(), Some("runner@example.com"));
    }

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; auth_token=abc.def.ghi"),
        );
        assert_eq!(
            extract_session_token(&headers).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = AuthManager::new(b"someone-else", 1);
        let token = other.generate_token(Uuid::new_v4(), None).unwrap();
        assert!(manager().validate_token(&token).is_err());
    }

    #[test]
    fn test_missing_token_is_none() {
        assert!(manager().current_user(&HeaderMap::new()).is_none());
    }
}
