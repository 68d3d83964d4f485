//! Inbound (Driving) port: what callers ask of the auth subsystem.

use async_trait::async_trait;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// True iff the credentials match a registered officer.
    ///
    /// Fails closed: any lookup or store problem yields `false`.
    async fn authenticate(&self, service_number: &str, password: &str) -> bool;

    /// True iff `service_number` belongs to a registered officer.
    ///
    /// Used to check the issuer of a ticket. Fails closed.
    async fn is_registered(&self, service_number: &str) -> bool;
}
