//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod split_rule_repo;

pub use split_rule_repo::SplitRuleRepo;
