//! # Auth Session Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Verifies officer credentials (`serviceNumber` + `password`) against a
//! credential store.
//!
//! ## Fail-Closed Rules
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Password matches | `true` |
//! | Wrong password | `false` |
//! | Unknown service number | `false` |
//! | Store error | `false` (logged at `error`) |
//! | Store timeout | `false` (logged at `warn`) |
//!
//! Store errors are never distinguishable from wrong credentials by the
//! caller. Empty inputs are rejected by the calling layer before this
//! subsystem is reached.
//!
//! ## Password Policy
//!
//! Passwords are stored and compared as plaintext (a known weakness kept for
//! compatibility with existing credential data). The comparison is isolated
//! in `domain::policy` and behind the `Authenticator` port so a hashing
//! scheme can replace it without touching callers.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryCredentialStore;
pub use domain::{plaintext_matches, CredentialStoreError};
pub use ports::{Authenticator, CredentialStore};
pub use service::{AuthSession, DEFAULT_STORE_TIMEOUT};
