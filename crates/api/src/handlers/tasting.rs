//! Handlers for the tasting record CRUD endpoints.
//!
//! The list and single-record endpoints return raw rows (snake_case);
//! mutations return a `{message}` body. Each handler is a stateless unit of
//! work: one request, one row, no coordination beyond the database's own
//! single-row atomicity.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use vinoteca_core::error::CoreError;
use vinoteca_core::types::RecordId;
use vinoteca_db::models::tasting::TastingInput;
use vinoteca_db::repositories::TastingRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/tasting
///
/// Full ordered list, newest tasting date first. No pagination.
pub async fn list_tastings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = TastingRepo::list_all(&state.pool).await?;

    Ok(Json(records))
}

/// POST /api/tasting
///
/// Create a record from a camelCase payload. `wineName` is required;
/// `vintage` and `tastingDate` coerce to null when absent or invalid.
pub async fn create_tasting(
    State(state): State<AppState>,
    Json(input): Json<TastingInput>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_validated()?;
    let record = TastingRepo::create(&state.pool, &new).await?;

    tracing::info!(id = %record.id, wine_name = %record.wine_name, "Tasting record created");

    Ok(Json(MessageResponse::new("tasting record created")))
}

/// GET /api/tasting/{id}
pub async fn get_tasting(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let record = TastingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TastingRecord",
            id,
        }))?;

    Ok(Json(record))
}

/// PUT /api/tasting/{id}
///
/// Full-field replace with the same mapping and validation as create.
/// `id` and `created_at` are immutable.
pub async fn update_tasting(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(input): Json<TastingInput>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_validated()?;
    TastingRepo::update(&state.pool, id, &new)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TastingRecord",
            id,
        }))?;

    tracing::info!(%id, "Tasting record updated");

    Ok(Json(MessageResponse::new("tasting record updated")))
}

/// DELETE /api/tasting/{id}
pub async fn delete_tasting(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TastingRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TastingRecord",
            id,
        }));
    }

    tracing::info!(%id, "Tasting record deleted");

    Ok(Json(MessageResponse::new("tasting record deleted")))
}
