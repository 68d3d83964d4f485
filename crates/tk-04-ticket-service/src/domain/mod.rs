//! Domain layer for ticket issuance.

pub mod errors;
pub mod pipeline;

pub use errors::{IssuanceStage, IssueError, TicketStoreError};
pub use pipeline::prepare;
