//! # In-Process Issuance Scenarios
//!
//! Auth session, offense catalog and ticket service wired through the
//! request handler, without a network in between.

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use shared_types::{
        AuthRequest, CancelTicketRequest, DriverTicketsRequest, FailureKind, Request, Response,
    };
    use ticket_server::container::seed::builtin_offenses;
    use tk_01_offense_catalog::OffenseCatalog;
    use tk_03_auth_session::AuthSession;
    use tk_04_ticket_service::{InMemoryTicketStore, SystemTimeSource, TicketService};
    use tk_05_api_gateway::RequestHandler;

    use crate::integration::fixtures::{
        ticket_request, CountingCredentialStore, OFFICER, PARKING, PASSWORD, PESEL, SPEEDING,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn handler_with_counter() -> (RequestHandler, Arc<std::sync::atomic::AtomicUsize>) {
        let (store, lookups) = CountingCredentialStore::new();
        let catalog = OffenseCatalog::from_offenses(builtin_offenses().unwrap()).unwrap();
        let handler = RequestHandler::new(
            Arc::new(AuthSession::new(store)),
            Arc::new(TicketService::new(
                InMemoryTicketStore::new(),
                SystemTimeSource,
            )),
            Arc::new(catalog),
        );
        (handler, lookups)
    }

    fn handler() -> RequestHandler {
        handler_with_counter().0
    }

    // =========================================================================
    // AUTHENTICATION
    // =========================================================================

    #[tokio::test]
    async fn test_empty_credentials_never_reach_store() {
        let (handler, lookups) = handler_with_counter();

        for (sn, pw) in [("", PASSWORD), (OFFICER, ""), ("", "")] {
            let status = handler
                .authenticate(AuthRequest {
                    service_number: sn.into(),
                    password: pw.into(),
                })
                .await;
            assert!(!status.success);
            assert_eq!(status.error, Some(FailureKind::IncompleteInput));
        }
        assert_eq!(lookups.load(Ordering::SeqCst), 0);

        let status = handler
            .authenticate(AuthRequest {
                service_number: OFFICER.into(),
                password: PASSWORD.into(),
            })
            .await;
        assert!(status.success);
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let status = handler()
            .authenticate(AuthRequest {
                service_number: OFFICER.into(),
                password: "haslo124".into(),
            })
            .await;
        assert_eq!(status.error, Some(FailureKind::AuthenticationFailed));
    }

    // =========================================================================
    // ISSUANCE
    // =========================================================================

    #[tokio::test]
    async fn test_recidivist_speeding_fine_doubled() {
        let response = handler()
            .create_ticket(ticket_request(SPEEDING, 800, 9, true))
            .await;
        assert!(response.success);
        assert!(response.ticket_id.unwrap() > 0);
        assert_eq!(response.fine_amount, Some(1600));
    }

    #[tokio::test]
    async fn test_first_offense_speeding_fine_unchanged() {
        let response = handler()
            .create_ticket(ticket_request(SPEEDING, 800, 9, false))
            .await;
        assert!(response.success);
        assert_eq!(response.fine_amount, Some(800));
    }

    #[tokio::test]
    async fn test_parking_fine_below_range() {
        let response = handler()
            .create_ticket(ticket_request(PARKING, 50, 0, false))
            .await;
        assert!(!response.success);
        assert_eq!(response.error, Some(FailureKind::FineOutOfRange));
        assert_eq!(
            response.message.as_deref(),
            Some("Fine must be between 100 and 1200")
        );
    }

    #[tokio::test]
    async fn test_exact_fine_offense_rejects_other_values() {
        let response = handler()
            .create_ticket(ticket_request(SPEEDING, 799, 9, false))
            .await;
        assert_eq!(response.error, Some(FailureKind::FineOutOfRange));
        assert_eq!(
            response.message.as_deref(),
            Some("Fine must equal exactly 800")
        );
    }

    #[tokio::test]
    async fn test_recidivist_flag_ignored_for_non_recidivist_offense() {
        let response = handler()
            .create_ticket(ticket_request(PARKING, 500, 1, true))
            .await;
        assert_eq!(response.fine_amount, Some(500));
    }

    #[tokio::test]
    async fn test_first_failure_wins() {
        // Short PESEL and an out-of-range fine: PESEL is checked first.
        let mut request = ticket_request(PARKING, 50, 0, false);
        request.pesel = "123".into();
        let response = handler().create_ticket(request).await;
        assert_eq!(response.error, Some(FailureKind::InvalidPersonalId));
    }

    #[tokio::test]
    async fn test_unknown_offense() {
        let response = handler()
            .create_ticket(ticket_request("Jazda bokiem", 100, 1, false))
            .await;
        assert_eq!(response.error, Some(FailureKind::UnknownOffense));
    }

    #[tokio::test]
    async fn test_unknown_issuer_rejected() {
        let mut request = ticket_request(PARKING, 500, 1, false);
        request.service_number = "9999".into();
        let response = handler().create_ticket(request).await;
        assert_eq!(response.error, Some(FailureKind::AuthenticationFailed));
    }

    // =========================================================================
    // CANCEL AND LOOKUP
    // =========================================================================

    #[tokio::test]
    async fn test_cancel_twice() {
        let handler = handler();
        let issued = handler
            .create_ticket(ticket_request(SPEEDING, 800, 9, true))
            .await;
        let ticket_id = issued.ticket_id.unwrap();

        let first = handler.cancel_ticket(CancelTicketRequest { ticket_id }).await;
        assert!(first.success);

        let second = handler.cancel_ticket(CancelTicketRequest { ticket_id }).await;
        assert!(!second.success);
        assert_eq!(second.error, Some(FailureKind::NotFound));
    }

    #[tokio::test]
    async fn test_driver_tickets_in_issue_order() {
        let handler = handler();
        let first = handler
            .create_ticket(ticket_request(SPEEDING, 800, 9, false))
            .await
            .ticket_id
            .unwrap();
        let second = handler
            .create_ticket(ticket_request(PARKING, 300, 1, false))
            .await
            .ticket_id
            .unwrap();

        let list = handler
            .driver_tickets(DriverTicketsRequest {
                pesel: PESEL.into(),
            })
            .await
            .unwrap();
        let ids: Vec<_> = list.tickets.iter().map(|t| t.ticket_id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(list.tickets[1].offense, PARKING);

        let other = handler
            .driver_tickets(DriverTicketsRequest {
                pesel: "98765432109".into(),
            })
            .await
            .unwrap();
        assert!(other.tickets.is_empty());
    }

    #[tokio::test]
    async fn test_envelope_dispatch() {
        let response = handler().handle(Request::Offenses).await;
        let Response::Offenses(list) = response else {
            panic!("expected offense list");
        };
        assert!(list.offences.iter().any(|o| o.name() == SPEEDING));
    }
}
