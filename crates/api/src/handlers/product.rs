//! Handlers for product split-rule combinations.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use splitrule_core::store::generate_combinations;
use splitrule_db::store::PgSplitRuleStore;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/products/{id}/combinations
///
/// Every combination of field values declared by the product's split rules,
/// as a bare JSON array. Unknown products yield `[]`.
pub async fn list_combinations(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = PgSplitRuleStore::new(&state.pool);
    let combinations = generate_combinations(&store, &product_id).await?;

    tracing::debug!(
        product_id = %product_id,
        count = combinations.len(),
        "Generated split combinations",
    );

    Ok(Json(combinations))
}
