//! Domain layer for ticket validation.

pub mod messages;
pub mod rules;
