//! Rule data source and the per-request combination pipeline.

use std::future::Future;

use crate::combination::{assemble, group_rows, Combination, FieldValueRow};

/// Source of split-rule field values for a product.
///
/// Rows must come back ordered by rule id, then field label, then field
/// value, ascending in byte order. An unknown product, or one without rules,
/// yields an empty list rather than an error.
pub trait SplitRuleStore: Send + Sync {
    /// Failure reaching or querying the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every (rule, field, value) row referenced by the product's rules.
    fn load_field_values(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Vec<FieldValueRow>, Self::Error>> + Send;
}

/// Load, group and expand all split-rule combinations of a product.
///
/// Store errors are returned unchanged and no partial result is produced.
pub async fn generate_combinations<S>(
    store: &S,
    product_id: &str,
) -> Result<Vec<Combination>, S::Error>
where
    S: SplitRuleStore,
{
    let rows = store.load_field_values(product_id).await?;
    let groups = group_rows(rows);
    Ok(assemble(&groups))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
