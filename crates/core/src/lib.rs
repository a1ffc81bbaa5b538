//! Domain logic for product split-rule combinations.
//!
//! Pure, synchronous building blocks (row grouping and cartesian expansion)
//! plus the [`store::SplitRuleStore`] seam the database crate implements.

pub mod combination;
pub mod store;
pub mod types;
