//! Request handlers.
//!
//! Handlers delegate to `splitrule_core` / `splitrule_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod product;
