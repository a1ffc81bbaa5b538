//! Route definitions for product-scoped endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET    /{id}/combinations  -> list_combinations
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/combinations", get(product::list_combinations))
}
