//! sqlx-backed [`SplitRuleStore`].

use splitrule_core::combination::FieldValueRow;
use splitrule_core::store::SplitRuleStore;

use crate::repositories::SplitRuleRepo;
use crate::DbPool;

/// Loads split-rule rows from PostgreSQL through [`SplitRuleRepo`].
#[derive(Clone, Copy)]
pub struct PgSplitRuleStore<'a> {
    pool: &'a DbPool,
}

impl<'a> PgSplitRuleStore<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl SplitRuleStore for PgSplitRuleStore<'_> {
    type Error = sqlx::Error;

    async fn load_field_values(
        &self,
        product_id: &str,
    ) -> Result<Vec<FieldValueRow>, sqlx::Error> {
        let rows = SplitRuleRepo::list_field_values(self.pool, product_id).await?;
        tracing::debug!(
            product_id,
            rows = rows.len(),
            "Loaded split rule field values"
        );
        Ok(rows.into_iter().map(FieldValueRow::from).collect())
    }
}
