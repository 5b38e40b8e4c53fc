//! Shared domain types and error taxonomy for the vinoteca workspace.

pub mod error;
pub mod types;
