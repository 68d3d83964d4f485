//! Cross-subsystem scenarios.

#[cfg(test)]
pub(crate) mod fixtures;

mod client_session;
mod issuance;
mod over_http;
mod over_line;
