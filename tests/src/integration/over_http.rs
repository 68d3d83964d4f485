//! # HTTP Binding Scenarios
//!
//! A real server on an ephemeral port, driven with `reqwest`.

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use crate::integration::fixtures::{
        envelope_url, start_server, OFFICER, PARKING, PASSWORD, PESEL, SPEEDING,
    };

    async fn post(url: &str, body: Value) -> (StatusCode, Value) {
        let response = reqwest::Client::new()
            .post(url)
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_envelope_session_over_http() {
        let (_server, handle) = start_server().await;
        let url = envelope_url(&handle);

        let (status, auth) = post(
            &url,
            json!({"kind": "auth", "payload": {"serviceNumber": OFFICER, "password": PASSWORD}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(auth["kind"], "auth");
        assert_eq!(auth["payload"]["success"], true);

        let (_, offenses) = post(&url, json!({"kind": "offenses"})).await;
        let names: Vec<&str> = offenses["payload"]["offences"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&SPEEDING));
        assert!(names.contains(&PARKING));

        let (_, issued) = post(
            &url,
            json!({"kind": "ticket", "payload": {
                "driver": "Jan Kowalski", "pesel": PESEL, "offense": SPEEDING,
                "fine": 800, "penaltyPoints": 9, "serviceNumber": OFFICER, "recidivist": true
            }}),
        )
        .await;
        assert_eq!(issued["payload"]["success"], true);
        assert_eq!(issued["payload"]["fineAmount"], 1600);
        let ticket_id = issued["payload"]["ticketId"].as_i64().unwrap();
        assert!(ticket_id > 0);

        let (_, tickets) = post(&url, json!({"kind": "tickets", "payload": {"pesel": PESEL}})).await;
        assert_eq!(tickets["payload"]["tickets"][0]["ticketId"], ticket_id);

        let cancel = json!({"kind": "cancel", "payload": {"ticketId": ticket_id}});
        let (_, first) = post(&url, cancel.clone()).await;
        assert_eq!(first["payload"]["success"], true);
        let (_, second) = post(&url, cancel).await;
        assert_eq!(second["payload"]["success"], false);
        assert_eq!(second["payload"]["error"], "notFound");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_operation_routes() {
        let (_server, handle) = start_server().await;
        let base = format!("http://{}/api", handle.http_addr().unwrap());

        let (status, login) = post(
            &format!("{base}/login"),
            json!({"serviceNumber": OFFICER, "password": ""}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(login["error"], "incompleteInput");

        let (status, rejected) = post(
            &format!("{base}/createTicket"),
            json!({
                "driver": "Jan Kowalski", "pesel": PESEL, "offense": PARKING,
                "fine": "50", "penaltyPoints": "0", "serviceNumber": OFFICER
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rejected["success"], false);
        assert_eq!(rejected["error"], "fineOutOfRange");
        assert_eq!(rejected["message"], "Fine must be between 100 and 1200");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_bad_request() {
        let (_server, handle) = start_server().await;
        let response = reqwest::Client::new()
            .post(envelope_url(&handle))
            .header("content-type", "application/json")
            .body("{\"kind\":\"launch\"}")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["kind"], "failure");
        assert_eq!(body["payload"]["error"], "malformedRequest");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_health() {
        let (_server, handle) = start_server().await;
        let body: Value = reqwest::get(format!("http://{}/health", handle.http_addr().unwrap()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        handle.shutdown().await;
    }
}
