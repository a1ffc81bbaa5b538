/// Record identifiers (products, rules, fields) are opaque text keys.
pub type RecordId = String;

/// Request-scoped ordinal assigned to each emitted combination.
pub type Ordinal = u64;
