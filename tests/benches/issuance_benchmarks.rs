//! # Ticket Issuance Benchmarks
//!
//! | Target | Work measured |
//! |--------|---------------|
//! | `prepare` | Collect → Resolve → Validate → Adjust on one draft |
//! | envelope decode | JSON line → `Request` |
//! | handler | full `create_ticket` through the in-memory store |

use std::sync::Arc;

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shared_types::{CreateTicketRequest, Request, TicketDraft};
use ticket_server::container::seed::builtin_offenses;
use tk_01_offense_catalog::OffenseCatalog;
use tk_03_auth_session::{AuthSession, InMemoryCredentialStore};
use tk_04_ticket_service::{prepare, InMemoryTicketStore, SystemTimeSource, TicketService};
use tk_05_api_gateway::RequestHandler;

const SPEEDING: &str = "Przekroczenie prędkości o 31-40";

fn catalog() -> OffenseCatalog {
    OffenseCatalog::from_offenses(builtin_offenses().unwrap()).unwrap()
}

fn bench_prepare(c: &mut Criterion) {
    let catalog = catalog();
    let draft = TicketDraft {
        driver_description: "Jan Kowalski".into(),
        personal_id: "12345678901".into(),
        offense_name: SPEEDING.into(),
        fine_amount: Some(800),
        penalty_points: Some(9),
        is_recidivist: true,
        issuer_id: "1001".into(),
    };
    let now = Utc::now();

    c.bench_function("prepare_valid_draft", |b| {
        b.iter(|| black_box(prepare(&draft, &catalog, now).is_ok()))
    });
}

fn bench_envelope_decode(c: &mut Criterion) {
    let line = format!(
        r#"{{"kind":"ticket","payload":{{"driver":"Jan Kowalski","pesel":"12345678901","offense":"{SPEEDING}","fine":"800","penaltyPoints":"9","serviceNumber":"1001","recidivist":true}}}}"#
    );
    c.bench_function("decode_ticket_envelope", |b| {
        b.iter(|| black_box(serde_json::from_str::<Request>(&line).is_ok()))
    });
}

fn bench_handler_create(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let handler = RequestHandler::new(
        Arc::new(AuthSession::new(InMemoryCredentialStore::from_pairs([(
            "1001", "haslo123",
        )]))),
        Arc::new(TicketService::new(InMemoryTicketStore::new(), SystemTimeSource)),
        Arc::new(catalog()),
    );
    let request = CreateTicketRequest {
        driver: "Jan Kowalski".into(),
        pesel: "12345678901".into(),
        offense: SPEEDING.into(),
        fine: Some(800),
        penalty_points: Some(9),
        service_number: "1001".into(),
        recidivist: false,
    };

    c.bench_function("handler_create_ticket", |b| {
        b.iter(|| {
            runtime.block_on(async { black_box(handler.create_ticket(request.clone()).await) })
        })
    });
}

criterion_group!(
    benches,
    bench_prepare,
    bench_envelope_decode,
    bench_handler_create
);
criterion_main!(benches);
