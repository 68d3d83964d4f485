//! # Officer Client Scenarios
//!
//! `OfficerSession` from the client crate against a live server.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_types::FailureKind;
    use ticket_client::{OfficerSession, SessionError, TicketApiClient, TicketForm};

    use crate::integration::fixtures::{
        envelope_url, start_server, OFFICER, PARKING, PASSWORD, PESEL, SPEEDING,
    };

    fn form(offense: &str, fine: &str, points: &str, recidivist: bool) -> TicketForm {
        TicketForm {
            driver: "Jan Kowalski, Toyota Corolla WA 12345".into(),
            pesel: PESEL.into(),
            offense: offense.into(),
            fine: fine.into(),
            penalty_points: points.into(),
            recidivist,
        }
    }

    #[tokio::test]
    async fn test_login_issue_cancel() {
        let (_server, handle) = start_server().await;
        let client = Arc::new(TicketApiClient::new(envelope_url(&handle)).unwrap());

        let session = OfficerSession::login(client, OFFICER, PASSWORD)
            .await
            .unwrap();
        assert!(session.catalog().contains(SPEEDING));

        let issued = session.issue(&form(SPEEDING, "800", "9", true)).await.unwrap();
        assert!(issued.ticket_id > 0);
        assert_eq!(issued.fine_amount, 1600);

        let tickets = session.driver_tickets(PESEL).await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].fine_amount, 1600);

        assert!(session.cancel(issued.ticket_id).await.unwrap());
        assert!(!session.cancel(issued.ticket_id).await.unwrap());

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_bad_password() {
        let (_server, handle) = start_server().await;
        let client = Arc::new(TicketApiClient::new(envelope_url(&handle)).unwrap());

        let err = OfficerSession::login(client, OFFICER, "zle")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, SessionError::AuthenticationFailed(_)));

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_local_validation_reports_range() {
        let (_server, handle) = start_server().await;
        let client = Arc::new(TicketApiClient::new(envelope_url(&handle)).unwrap());
        let session = OfficerSession::login(client, OFFICER, PASSWORD)
            .await
            .unwrap();

        let err = session
            .issue(&form(PARKING, "50", "0", false))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::FineOutOfRange);
        assert_eq!(err.to_string(), "Fine must be between 100 and 1200");

        let mut bad_pesel = form(PARKING, "500", "1", false);
        bad_pesel.pesel = "1234567890X".into();
        let err = session.issue(&bad_pesel).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidPersonalId);

        // Nothing reached the store.
        assert!(session.driver_tickets(PESEL).await.unwrap().is_empty());

        handle.shutdown().await;
    }
}
