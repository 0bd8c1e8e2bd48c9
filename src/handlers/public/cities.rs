use axum::{extract::State, Json};

use crate::database::models::CityWithCount;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub const CITIES_FAILURE_MESSAGE: &str = "Failed to fetch cities";

/// GET /api/cities - Cities with their listing counts
///
/// Returns the store's rows unchanged:
/// ```json
/// [{ "id": 1, "name": "Austin", "count": 42 }]
/// ```
/// Any store failure becomes a 500 with a fixed message.
pub async fn cities_get(State(state): State<AppState>) -> ApiResult<Json<Vec<CityWithCount>>> {
    let cities = state.store.cities_with_counts().await.map_err(|e| {
        tracing::error!("Error fetching cities: {}", e);
        ApiError::internal_server_error(CITIES_FAILURE_MESSAGE)
    })?;

    Ok(Json(cities))
}
