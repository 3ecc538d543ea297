//! Shared types, errors and validation rules for the Kortex service.
//!
//! Has no database or HTTP dependencies so both the repository layer and the
//! API layer can build on it.

pub mod error;
pub mod pagination;
pub mod types;
pub mod workflow;
