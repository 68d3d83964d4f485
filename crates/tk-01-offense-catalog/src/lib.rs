//! # Offense Catalog Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Holds the offense definitions (name, penalty-point range, fine range,
//! recidivism flag) against which every ticket is validated.
//!
//! ## Lifecycle
//!
//! ```text
//! [EMPTY] ──load(source)──→ [LOADED] ──session end──→ dropped
//!              │
//!              └── unreachable / unparsable / duplicate names ──→ CatalogError::Unavailable
//! ```
//!
//! A catalog is built in one step from a complete offense list. There is no
//! partially loaded state and no refresh: a new session loads a new catalog.
//! Once built it is read-only and shared as `Arc<OffenseCatalog>`.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! | Layer | Module | Contents |
//! |-------|--------|----------|
//! | Inner | `domain/` | `OffenseCatalog`, `CatalogError` |
//! | Middle | `ports/outbound.rs` | `OffenseSource` |
//! | Outer | `adapters/` | `StaticOffenseSource`, `JsonFileOffenseSource` |
//! | Service | `service.rs` | `CatalogLoader` (bounded-time load) |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{JsonFileOffenseSource, StaticOffenseSource};
pub use domain::{CatalogError, OffenseCatalog};
pub use ports::OffenseSource;
pub use service::{CatalogLoader, DEFAULT_LOAD_TIMEOUT};
