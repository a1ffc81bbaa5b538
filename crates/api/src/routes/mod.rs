pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /products/{id}/combinations                      split-rule combinations (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", product::router())
}
