use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::auth::{PortalAgent, PortalSession, PortalUser, SessionResolver};
use crate::database::models::OfficeSummary;
use crate::error::ApiResult;
use crate::state::AppState;

/// Body of GET /api/portal/auth/me. Absent optionals render as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user: PortalUser,
    pub agent: Option<PortalAgent>,
    pub offices: Option<Vec<OfficeSummary>>,
    pub is_impersonating: bool,
    pub original_user: Option<PortalUser>,
}

impl From<PortalSession> for CurrentUserResponse {
    fn from(session: PortalSession) -> Self {
        Self {
            user: session.user,
            agent: session.agent,
            offices: session.offices,
            is_impersonating: session.is_impersonating,
            original_user: session.original_user,
        }
    }
}

/// GET /api/portal/auth/me - The current portal user and impersonation state
pub async fn me_get(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<CurrentUserResponse>> {
    let session = state.sessions.require_portal_session(&headers).await?;
    Ok(Json(session.into()))
}
