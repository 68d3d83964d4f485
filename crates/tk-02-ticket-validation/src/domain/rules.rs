//! Validation predicates and the final fine computation.

use shared_types::{Amount, Offense, Points};

/// Required length of a PESEL, in characters.
pub const PERSONAL_ID_LENGTH: usize = 11;

/// True iff `id` is exactly [`PERSONAL_ID_LENGTH`] characters long.
///
/// Only the length is checked. Digit-only enforcement is left to input
/// layers (see [`is_digit_only`]), so `"abcdefghijk"` passes here.
pub fn validate_personal_id(id: &str) -> bool {
    id.chars().count() == PERSONAL_ID_LENGTH
}

/// True iff `offense.fine_min() <= fine <= offense.fine_max()`.
pub fn validate_fine_range(fine: Amount, offense: &Offense) -> bool {
    offense.fine().contains(fine)
}

/// True iff `offense.penalty_points_min() <= points <= offense.penalty_points_max()`.
pub fn validate_penalty_range(points: Points, offense: &Offense) -> bool {
    offense.penalty_points().contains(points)
}

/// Fine to persist: `fine * 2` when both the driver and the offense are
/// flagged recidivist, `fine` otherwise.
///
/// Call only after [`validate_fine_range`] has passed on the entered fine.
pub fn compute_final_fine(fine: Amount, offense: &Offense, is_recidivist: bool) -> Amount {
    if is_recidivist && offense.recidivist() {
        fine.saturating_mul(2)
    } else {
        fine
    }
}

/// True iff `value` is non-empty and made only of ASCII digits.
pub fn is_digit_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
