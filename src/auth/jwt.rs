use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use cookie::Cookie;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, PortalSession, SessionResolver};

/// Claims of a signed portal session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub session: PortalSession,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    pub fn new(session: PortalSession, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            session,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Sign session claims with an HS256 secret
pub fn sign_session(claims: &SessionClaims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(|e| AuthError::Signing(e.to_string()))
}

/// Resolves portal sessions from an HS256 token carried in the session
/// cookie or, failing that, a Bearer authorization header.
pub struct JwtSessionResolver {
    decoding_key: DecodingKey,
    validation: Validation,
    cookie_name: String,
}

impl JwtSessionResolver {
    pub fn new(secret: &str, cookie_name: impl Into<String>) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            cookie_name: cookie_name.into(),
        })
    }

    fn decode_session(&self, token: &str) -> Option<PortalSession> {
        match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.session),
            Err(e) => {
                // Expired or forged tokens count as no session
                tracing::debug!("Rejected portal session token: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    async fn get_portal_session(&self, headers: &HeaderMap) -> Result<Option<PortalSession>, AuthError> {
        Ok(extract_session_token(headers, &self.cookie_name).and_then(|token| self.decode_session(&token)))
    }
}

/// Find the session token, preferring the named cookie over a Bearer header
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    cookie_token(headers, cookie_name).or_else(|| bearer_token(headers))
}

fn cookie_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse(raw))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == cookie_name && !cookie.value_trimmed().is_empty())
        .map(|cookie| cookie.value_trimmed().to_string())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
