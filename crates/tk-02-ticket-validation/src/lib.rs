//! # Ticket Validation Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Pure checks applied to a candidate ticket against its catalog `Offense`,
//! plus the final fine computation. No I/O, no clock, no shared state: the
//! same functions run on the officer client (early feedback) and on the
//! server (authoritative).
//!
//! ## Rules
//!
//! | Function | Accepts |
//! |----------|---------|
//! | `validate_personal_id` | exactly 11 characters (length only) |
//! | `validate_fine_range` | `fine_min <= fine <= fine_max` |
//! | `validate_penalty_range` | `penalty_points_min <= points <= penalty_points_max` |
//! | `compute_final_fine` | doubles iff driver and offense are both recidivist |
//!
//! Fine validation always uses the amount the officer entered. Doubling is
//! applied afterwards, so a doubled fine may exceed `fine_max`.

pub mod domain;

pub use domain::messages::{describe_range, fine_range_message, penalty_range_message};
pub use domain::rules::{
    compute_final_fine, is_digit_only, validate_fine_range, validate_penalty_range,
    validate_personal_id, PERSONAL_ID_LENGTH,
};
