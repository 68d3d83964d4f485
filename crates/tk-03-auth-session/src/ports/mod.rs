//! Ports for officer authentication.

pub mod inbound;
pub mod outbound;

pub use inbound::Authenticator;
pub use outbound::CredentialStore;
