//! Split-rule field value rows.

use splitrule_core::combination::FieldValueRow;
use sqlx::FromRow;

/// One row of the split-rule join: a field referenced by a rule, with its
/// label and the value stored for the rule's product.
#[derive(Debug, Clone, FromRow)]
pub struct RuleFieldValue {
    pub rule_id: String,
    pub product_id: String,
    pub field_id: String,
    pub field_name: String,
    pub field_value: String,
}

impl From<RuleFieldValue> for FieldValueRow {
    fn from(row: RuleFieldValue) -> Self {
        Self {
            rule_id: row.rule_id,
            product_id: row.product_id,
            field_id: row.field_id,
            field_name: row.field_name,
            field_value: row.field_value,
        }
    }
}
