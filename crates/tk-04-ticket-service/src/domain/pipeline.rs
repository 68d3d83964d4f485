//! Collect → Resolve → Validate → Adjust, as one pure function.

use chrono::{DateTime, Utc};
use shared_types::{NewTicket, TicketDraft};
use tk_01_offense_catalog::OffenseCatalog;
use tk_02_ticket_validation::{
    compute_final_fine, validate_fine_range, validate_penalty_range, validate_personal_id,
};

use super::errors::IssueError;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Run every pre-persistence step on `draft`.
///
/// Returns the ticket to persist, or the first error hit. Range checks use
/// the fine the officer entered; doubling is applied only once every check
/// has passed.
pub fn prepare(
    draft: &TicketDraft,
    catalog: &OffenseCatalog,
    issued_at: DateTime<Utc>,
) -> Result<NewTicket, IssueError> {
    // Collect
    let (Some(fine), Some(points)) = (draft.fine_amount, draft.penalty_points) else {
        return Err(IssueError::IncompleteInput);
    };
    if is_blank(&draft.driver_description)
        || is_blank(&draft.personal_id)
        || is_blank(&draft.offense_name)
    {
        return Err(IssueError::IncompleteInput);
    }

    // Resolve
    let offense = catalog
        .lookup(&draft.offense_name)
        .map_err(|_| IssueError::UnknownOffense(draft.offense_name.clone()))?;

    // Validate
    if !validate_personal_id(&draft.personal_id) {
        return Err(IssueError::InvalidPersonalId);
    }
    if !validate_fine_range(fine, offense) {
        return Err(IssueError::FineOutOfRange {
            bounds: offense.fine(),
        });
    }
    if !validate_penalty_range(points, offense) {
        return Err(IssueError::PenaltyOutOfRange {
            bounds: offense.penalty_points(),
        });
    }

    // Adjust
    let fine_amount = compute_final_fine(fine, offense, draft.is_recidivist);

    Ok(NewTicket {
        driver_description: draft.driver_description.clone(),
        personal_id: draft.personal_id.clone(),
        offense_name: offense.name().to_string(),
        fine_amount,
        penalty_points: points,
        is_recidivist: draft.is_recidivist,
        issuer_id: draft.issuer_id.clone(),
        issued_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Bounds, Offense};

    const SPEEDING: &str = "Przekroczenie prędkości o 31-40";
    const PARKING: &str = "Nieprawidłowe parkowanie";

    fn catalog() -> OffenseCatalog {
        OffenseCatalog::from_offenses(vec![
            Offense::new(SPEEDING, 9, 9, 800, 800, true).unwrap(),
            Offense::new(PARKING, 0, 1, 100, 1200, false).unwrap(),
        ])
        .unwrap()
    }

    fn draft(offense: &str, fine: i64, points: i64, recidivist: bool) -> TicketDraft {
        TicketDraft {
            driver_description: "Jan Kowalski, Toyota Corolla WA 12345".into(),
            personal_id: "12345678901".into(),
            offense_name: offense.into(),
            fine_amount: Some(fine),
            penalty_points: Some(points),
            is_recidivist: recidivist,
            issuer_id: "1001".into(),
        }
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_recidivist_fine_doubled() {
        let ticket = prepare(&draft(SPEEDING, 800, 9, true), &catalog(), Utc::now()).unwrap();
        assert_eq!(ticket.fine_amount, 1600);
        assert_eq!(ticket.penalty_points, 9);
        assert!(ticket.is_recidivist);
    }

    #[test]
    fn test_first_offense_fine_unchanged() {
        let ticket = prepare(&draft(SPEEDING, 800, 9, false), &catalog(), Utc::now()).unwrap();
        assert_eq!(ticket.fine_amount, 800);
    }

    #[test]
    fn test_non_recidivist_offense_never_doubles() {
        let ticket = prepare(&draft(PARKING, 500, 1, true), &catalog(), Utc::now()).unwrap();
        assert_eq!(ticket.fine_amount, 500);
    }

    #[test]
    fn test_issue_time_and_issuer_carried() {
        let now = Utc::now();
        let ticket = prepare(&draft(PARKING, 100, 0, false), &catalog(), now).unwrap();
        assert_eq!(ticket.issued_at, now);
        assert_eq!(ticket.issuer_id, "1001");
    }

    // =========================================================================
    // COLLECT
    // =========================================================================

    #[test]
    fn test_missing_fine_is_incomplete() {
        let mut d = draft(PARKING, 100, 0, false);
        d.fine_amount = None;
        assert_eq!(
            prepare(&d, &catalog(), Utc::now()),
            Err(IssueError::IncompleteInput)
        );
    }

    #[test]
    fn test_blank_driver_is_incomplete() {
        let mut d = draft(PARKING, 100, 0, false);
        d.driver_description = "   ".into();
        assert_eq!(
            prepare(&d, &catalog(), Utc::now()),
            Err(IssueError::IncompleteInput)
        );
    }

    #[test]
    fn test_incomplete_wins_over_unknown_offense() {
        let mut d = draft("no such offense", 100, 0, false);
        d.personal_id.clear();
        assert_eq!(
            prepare(&d, &catalog(), Utc::now()),
            Err(IssueError::IncompleteInput)
        );
    }

    // =========================================================================
    // RESOLVE / VALIDATE
    // =========================================================================

    #[test]
    fn test_unknown_offense() {
        assert_eq!(
            prepare(&draft("Jazda bez pasów", 100, 0, false), &catalog(), Utc::now()),
            Err(IssueError::UnknownOffense("Jazda bez pasów".into()))
        );
    }

    #[test]
    fn test_short_personal_id() {
        let mut d = draft(PARKING, 100, 0, false);
        d.personal_id = "1234567890".into();
        assert_eq!(
            prepare(&d, &catalog(), Utc::now()),
            Err(IssueError::InvalidPersonalId)
        );
    }

    #[test]
    fn test_fine_below_range() {
        let err = prepare(&draft(PARKING, 50, 0, false), &catalog(), Utc::now()).unwrap_err();
        assert_eq!(
            err,
            IssueError::FineOutOfRange {
                bounds: Bounds::new("fine", 100, 1200).unwrap()
            }
        );
        assert_eq!(err.to_string(), "Fine must be between 100 and 1200");
    }

    #[test]
    fn test_exact_fine_mismatch_message() {
        let err = prepare(&draft(SPEEDING, 799, 9, false), &catalog(), Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Fine must equal exactly 800");
    }

    #[test]
    fn test_penalty_out_of_range() {
        let err = prepare(&draft(SPEEDING, 800, 10, false), &catalog(), Utc::now()).unwrap_err();
        assert!(matches!(err, IssueError::PenaltyOutOfRange { .. }));
    }

    #[test]
    fn test_personal_id_checked_before_fine() {
        let mut d = draft(PARKING, 50, 7, false);
        d.personal_id = "123".into();
        assert_eq!(
            prepare(&d, &catalog(), Utc::now()),
            Err(IssueError::InvalidPersonalId)
        );
    }

    #[test]
    fn test_fine_checked_before_penalty() {
        let err = prepare(&draft(PARKING, 50, 7, false), &catalog(), Utc::now()).unwrap_err();
        assert!(matches!(err, IssueError::FineOutOfRange { .. }));
    }

    #[test]
    fn test_validation_uses_entered_fine_not_doubled() {
        // 800 doubled would be 1600 > 800, but validation sees 800.
        assert!(prepare(&draft(SPEEDING, 800, 9, true), &catalog(), Utc::now()).is_ok());
        // 400 doubled would be 800, but 400 itself is out of range.
        assert!(prepare(&draft(SPEEDING, 400, 9, true), &catalog(), Utc::now()).is_err());
    }
}
