use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::auth::{PortalRole, SessionResolver};
use crate::database::models::OfficeSummary;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OfficesResponse {
    pub offices: Vec<OfficeSummary>,
}

/// GET /api/portal/offices - Office directory, super admins only
///
/// The role check happens before the store is queried.
pub async fn offices_get(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<OfficesResponse>> {
    let session = state
        .sessions
        .require_portal_role(&headers, &[PortalRole::SuperAdmin])
        .await?;

    let offices = state.store.list_offices().await?;
    tracing::debug!("Listed {} offices for user {}", offices.len(), session.user.id);

    Ok(Json(OfficesResponse { offices }))
}
