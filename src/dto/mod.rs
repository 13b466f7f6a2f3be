//! DTO modules that bridge services with the HTTP API.

pub mod api;
pub mod sales_reps;
