//! Data model for the IAM Query API
//!
//! Mirrors the service's request, result, and entity shapes as plain
//! serde structs. Every wire field is optional; construct values with
//! struct literals and `..Default::default()`, and serialize with the
//! exact field names the service uses.
//!
//! Requests that carry documented constraints implement
//! [`iam_types::Validate`]. Validation is opt-in: deserializing a
//! response never rejects a value the service could legally return.
//!
//! ```
//! use iam_model::operations::CreateUserRequest;
//! use iam_types::Validate;
//!
//! let request = CreateUserRequest {
//!     user_name: Some("alice".to_string()),
//!     path: Some("/engineering/".to_string()),
//!     ..Default::default()
//! };
//! assert!(request.validate().is_ok());
//! ```

pub mod entities;
pub mod operations;
