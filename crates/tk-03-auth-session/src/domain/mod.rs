//! Domain layer for officer authentication.

pub mod errors;
pub mod policy;

pub use errors::CredentialStoreError;
pub use policy::plaintext_matches;
