pub mod health;
pub mod tasting;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /tasting          GET list, POST create
/// /tasting/{id}     GET one, PUT replace, DELETE remove
/// ```
///
/// Any other method on either path answers 405 with an `Allow` header
/// listing that path's methods.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(tasting::router())
}
