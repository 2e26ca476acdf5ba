//! Shared types for the IAM model layer
//!
//! This crate holds what every model module needs: the closed enum types for
//! service-defined value sets, the validation error type, the reusable
//! constraint checkers, and the pagination contract. The model structs
//! themselves live in `iam-model`.

pub mod constraint;
pub mod enums;
pub mod error;
pub mod pagination;

pub use constraint::Validate;
pub use enums::*;
pub use error::{ValidationError, ValidationResult};
pub use pagination::Paginated;
