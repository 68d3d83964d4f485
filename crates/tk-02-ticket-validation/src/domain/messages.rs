//! Corrective messages shown to the officer when a range check fails.

use shared_types::{Bounds, Offense};

/// `"<subject> must equal exactly N"` for a single-value range,
/// `"<subject> must be between N and M"` otherwise.
pub fn describe_range(subject: &str, bounds: Bounds) -> String {
    if bounds.is_exact() {
        format!("{subject} must equal exactly {}", bounds.min())
    } else {
        format!(
            "{subject} must be between {} and {}",
            bounds.min(),
            bounds.max()
        )
    }
}

pub fn fine_range_message(offense: &Offense) -> String {
    describe_range("Fine", offense.fine())
}

pub fn penalty_range_message(offense: &Offense) -> String {
    describe_range("Penalty points", offense.penalty_points())
}
