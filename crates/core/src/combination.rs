//! Split-rule row grouping and combination generation.
//!
//! Rows arrive sorted by rule, field label and value. [`group_rows`] folds
//! them into one [`RuleGroup`] per rule, and [`assemble`] expands every group
//! into its cartesian product, numbering the results with a single counter
//! shared across all groups of the request.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::types::{Ordinal, RecordId};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One (rule, field, value) triple produced by the rule data query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValueRow {
    pub rule_id: RecordId,
    pub product_id: RecordId,
    pub field_id: RecordId,
    /// Display label of the field. Combinations are keyed by this label.
    pub field_name: String,
    pub field_value: String,
}

/// The field values referenced by a single split rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    pub rule_id: RecordId,
    pub product_id: RecordId,
    /// Field label to values. Both levels keep first-seen order.
    pub fields: IndexMap<String, Vec<String>>,
}

/// One fully-specified assignment of a value to every field of a rule.
///
/// Serializes as
/// `{"id": "1", "productId": .., "productSplitRuleId": .., "combination": {..}}`
/// with `combination` keys in field processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    /// Display ordinal, unique only within one response.
    #[serde(serialize_with = "serialize_ordinal")]
    pub id: Ordinal,
    pub product_id: RecordId,
    pub product_split_rule_id: RecordId,
    pub combination: IndexMap<String, String>,
}

fn serialize_ordinal<S>(id: &Ordinal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(id)
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

impl RuleGroup {
    pub fn new(rule_id: RecordId, product_id: RecordId) -> Self {
        Self {
            rule_id,
            product_id,
            fields: IndexMap::new(),
        }
    }

    /// Append a value to a field, registering the field on first encounter.
    ///
    /// Values are not deduplicated: a repeated (field, value) pair appears
    /// twice and doubles the combinations it takes part in.
    pub fn push(&mut self, field_name: String, field_value: String) {
        self.fields.entry(field_name).or_default().push(field_value);
    }

    /// Number of combinations [`expand`](Self::expand) will produce.
    ///
    /// Zero for a rule without fields. Saturates instead of overflowing.
    pub fn combination_count(&self) -> usize {
        if self.fields.is_empty() {
            return 0;
        }
        self.fields
            .values()
            .map(Vec::len)
            .fold(1, usize::saturating_mul)
    }

    /// Cartesian product of the field value lists.
    ///
    /// The first field is the slowest-changing position and the last field
    /// the fastest, like the digits of an odometer. No upper bound is
    /// applied to the output size.
    pub fn expand(&self) -> Vec<IndexMap<String, String>> {
        if self.fields.is_empty() {
            return Vec::new();
        }

        let mut partials: Vec<IndexMap<String, String>> = vec![IndexMap::new()];
        for (field_name, values) in &self.fields {
            let mut extended = Vec::with_capacity(partials.len().saturating_mul(values.len()));
            for partial in &partials {
                for value in values {
                    let mut next = partial.clone();
                    next.insert(field_name.clone(), value.clone());
                    extended.push(next);
                }
            }
            partials = extended;
        }
        partials
    }
}

/// Fold sorted rows into one [`RuleGroup`] per rule id.
///
/// Groups come back in the order their rule id first appears. The product
/// id of a group is taken from its first row.
pub fn group_rows<I>(rows: I) -> Vec<RuleGroup>
where
    I: IntoIterator<Item = FieldValueRow>,
{
    let mut groups: IndexMap<RecordId, RuleGroup> = IndexMap::new();
    for row in rows {
        groups
            .entry(row.rule_id.clone())
            .or_insert_with(|| RuleGroup::new(row.rule_id.clone(), row.product_id.clone()))
            .push(row.field_name, row.field_value);
    }
    groups.into_values().collect()
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Expand every group in order into numbered [`Combination`] records.
///
/// Ids start at 1 and keep counting across group boundaries.
pub fn assemble(groups: &[RuleGroup]) -> Vec<Combination> {
    let total = groups
        .iter()
        .map(RuleGroup::combination_count)
        .fold(0, usize::saturating_add);

    let mut combinations = Vec::with_capacity(total);
    let mut next_id: Ordinal = 1;
    for group in groups {
        for combination in group.expand() {
            combinations.push(Combination {
                id: next_id,
                product_id: group.product_id.clone(),
                product_split_rule_id: group.rule_id.clone(),
                combination,
            });
            next_id += 1;
        }
    }
    combinations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
