//! Row structs returned by repository queries.

pub mod split_rule;
