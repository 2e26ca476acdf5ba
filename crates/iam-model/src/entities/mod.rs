//! Entity and nested value objects returned by the service
//!
//! These are the shapes the service composes into results: identities,
//! credentials, policies, certificates, and the detail objects of the
//! reporting operations. All fields are optional; a deserialized value
//! stores exactly what was on the wire.

pub mod access_advisor;
pub mod account;
pub mod certificates;
pub mod credentials;
pub mod group;
pub mod identity_provider;
pub mod instance_profile;
pub mod mfa;
pub mod policy;
pub mod role;
pub mod simulation;
pub mod tag;
pub mod user;

pub use access_advisor::*;
pub use account::*;
pub use certificates::*;
pub use credentials::*;
pub use group::*;
pub use identity_provider::*;
pub use instance_profile::*;
pub use mfa::*;
pub use policy::*;
pub use role::*;
pub use simulation::*;
pub use tag::*;
pub use user::*;
