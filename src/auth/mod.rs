use async_trait::async_trait;
use axum::http::HeaderMap;

pub mod error;
pub mod jwt;
pub mod session;

pub use error::AuthError;
pub use jwt::{JwtSessionResolver, SessionClaims};
pub use session::{PortalAgent, PortalRole, PortalSession, PortalUser};

/// Resolves the ambient session credential of a request.
///
/// Handlers receive an implementation through router state rather than
/// reading request-scoped globals, so tests can swap in a fixed session.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolve the session, or `Ok(None)` when the request carries none
    async fn get_portal_session(&self, headers: &HeaderMap) -> Result<Option<PortalSession>, AuthError>;

    async fn require_portal_session(&self, headers: &HeaderMap) -> Result<PortalSession, AuthError> {
        self.get_portal_session(headers)
            .await?
            .ok_or(AuthError::Unauthorized)
    }

    /// Require a session whose acting user holds one of `roles`
    async fn require_portal_role(
        &self,
        headers: &HeaderMap,
        roles: &[PortalRole],
    ) -> Result<PortalSession, AuthError> {
        let session = self.require_portal_session(headers).await?;

        if !session.has_any_role(roles) {
            tracing::warn!(
                "Portal role check failed: user {} has role '{}'",
                session.user.id,
                session.user.role
            );
            return Err(AuthError::Forbidden);
        }

        Ok(session)
    }
}
