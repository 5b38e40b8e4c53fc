//! Route definitions for tasting records, mounted at `/api`.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasting;
use crate::state::AppState;

/// Tasting record routes.
///
/// ```text
/// GET    /tasting        -> list_tastings
/// POST   /tasting        -> create_tasting
/// GET    /tasting/{id}   -> get_tasting
/// PUT    /tasting/{id}   -> update_tasting
/// DELETE /tasting/{id}   -> delete_tasting
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/tasting",
            get(tasting::list_tastings).post(tasting::create_tasting),
        )
        .route(
            "/tasting/{id}",
            get(tasting::get_tasting)
                .put(tasting::update_tasting)
                .delete(tasting::delete_tasting),
        )
}
