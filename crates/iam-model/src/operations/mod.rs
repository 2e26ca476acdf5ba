//! Request and result shapes, one pair per service operation
//!
//! Operations without a response body define only a request type. Every
//! request implements [`iam_types::Validate`] with the constraints the
//! service publishes for its members; truncatable results implement
//! [`iam_types::Paginated`].

/// Implements [`iam_types::Paginated`] for result types carrying the
/// conventional `is_truncated`/`marker` pair.
macro_rules! impl_paginated {
    ($($ty:ty),+ $(,)?) => {$(
        impl iam_types::Paginated for $ty {
            fn is_truncated(&self) -> bool {
                self.is_truncated.unwrap_or(false)
            }

            fn marker(&self) -> Option<&str> {
                self.marker.as_deref()
            }
        }
    )+};
}

pub(crate) use impl_paginated;

pub mod access_advisor;
pub mod access_keys;
pub mod account;
pub mod attached_policies;
pub mod authorization_details;
pub mod groups;
pub mod identity_providers;
pub mod inline_policies;
pub mod instance_profiles;
pub mod login_profiles;
pub mod mfa;
pub mod permissions_boundaries;
pub mod policies;
pub mod roles;
pub mod server_certificates;
pub mod service_credentials;
pub mod service_linked_roles;
pub mod signing_certificates;
pub mod simulation;
pub mod ssh_public_keys;
pub mod tags;
pub mod users;

pub use access_advisor::*;
pub use access_keys::*;
pub use account::*;
pub use attached_policies::*;
pub use authorization_details::*;
pub use groups::*;
pub use identity_providers::*;
pub use inline_policies::*;
pub use instance_profiles::*;
pub use login_profiles::*;
pub use mfa::*;
pub use permissions_boundaries::*;
pub use policies::*;
pub use roles::*;
pub use server_certificates::*;
pub use service_credentials::*;
pub use service_linked_roles::*;
pub use signing_certificates::*;
pub use simulation::*;
pub use ssh_public_keys::*;
pub use tags::*;
pub use users::*;
