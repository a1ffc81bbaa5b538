//! Repository for split-rule field values.
//!
//! Reads `product_split_rules`, `product_fields` and `fields`. The schema is
//! owned elsewhere; this crate only queries it.

use sqlx::PgPool;

use crate::models::split_rule::RuleFieldValue;

/// Expands each rule's `split_by_field` id array into one row per referenced
/// field, then attaches the field label and the product's stored value.
///
/// Ordering uses the "C" collation so labels and values sort by bytes
/// regardless of the database locale.
const FIELD_VALUES_QUERY: &str = "\
    SELECT \
        psr.id AS rule_id, \
        psr.product_id, \
        f.id AS field_id, \
        f.label AS field_name, \
        pf.value AS field_value \
    FROM product_split_rules psr \
    CROSS JOIN LATERAL jsonb_array_elements_text(psr.split_by_field) AS je(field_id) \
    JOIN product_fields pf \
        ON pf.product_id = psr.product_id \
        AND pf.field_id = je.field_id \
    JOIN fields f \
        ON f.id = pf.field_id \
    WHERE psr.product_id = $1 \
    ORDER BY psr.id COLLATE \"C\", f.label COLLATE \"C\", pf.value COLLATE \"C\"";

/// Provides read access to split-rule configuration.
pub struct SplitRuleRepo;

impl SplitRuleRepo {
    /// List every (rule, field, value) row for a product's split rules,
    /// sorted by rule id, field label, then value.
    ///
    /// Returns an empty list when the product has no rules or none of the
    /// referenced fields carry a value.
    pub async fn list_field_values(
        pool: &PgPool,
        product_id: &str,
    ) -> Result<Vec<RuleFieldValue>, sqlx::Error> {
        sqlx::query_as::<_, RuleFieldValue>(FIELD_VALUES_QUERY)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
