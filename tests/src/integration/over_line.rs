//! # Line Binding Scenarios
//!
//! One JSON envelope per line over a plain TCP connection.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
    use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
    use tokio::net::TcpStream;

    use crate::integration::fixtures::{start_server, OFFICER, PARKING, PASSWORD, PESEL};

    struct LineConnection {
        lines: Lines<BufReader<OwnedReadHalf>>,
        writer: OwnedWriteHalf,
    }

    impl LineConnection {
        async fn open(addr: std::net::SocketAddr) -> Self {
            let (reader, writer) = TcpStream::connect(addr).await.unwrap().into_split();
            Self {
                lines: BufReader::new(reader).lines(),
                writer,
            }
        }

        async fn send_raw(&mut self, line: &str) -> Option<Value> {
            self.writer.write_all(line.as_bytes()).await.unwrap();
            self.writer.write_all(b"\n").await.unwrap();
            self.lines
                .next_line()
                .await
                .unwrap()
                .map(|l| serde_json::from_str(&l).unwrap())
        }

        async fn send(&mut self, request: Value) -> Value {
            self.send_raw(&request.to_string()).await.unwrap()
        }
    }

    #[tokio::test]
    async fn test_session_on_one_connection() {
        let (_server, handle) = start_server().await;
        let mut conn = LineConnection::open(handle.line_addr().unwrap()).await;

        let auth = conn
            .send(json!({"kind": "auth", "payload": {"serviceNumber": OFFICER, "password": PASSWORD}}))
            .await;
        assert_eq!(auth["payload"]["success"], true);

        let issued = conn
            .send(json!({"kind": "ticket", "payload": {
                "driver": "Anna Nowak", "pesel": PESEL, "offense": PARKING,
                "fine": "300", "penaltyPoints": "1", "serviceNumber": OFFICER
            }}))
            .await;
        assert_eq!(issued["kind"], "ticket");
        assert_eq!(issued["payload"]["fineAmount"], 300);
        let ticket_id = issued["payload"]["ticketId"].as_i64().unwrap();

        // Ticket ids may arrive as strings.
        let cancelled = conn
            .send(json!({"kind": "cancel", "payload": {"ticketId": ticket_id.to_string()}}))
            .await;
        assert_eq!(cancelled["payload"]["success"], true);

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_malformed_line_keeps_connection_open() {
        let (_server, handle) = start_server().await;
        let mut conn = LineConnection::open(handle.line_addr().unwrap()).await;

        let failure = conn.send_raw("not json").await.unwrap();
        assert_eq!(failure["kind"], "failure");
        assert_eq!(failure["payload"]["error"], "malformedRequest");

        let offenses = conn.send(json!({"kind": "offenses"})).await;
        assert_eq!(offenses["kind"], "offenses");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_incomplete_ticket_over_line() {
        let (_server, handle) = start_server().await;
        let mut conn = LineConnection::open(handle.line_addr().unwrap()).await;

        let rejected = conn
            .send(json!({"kind": "ticket", "payload": {
                "driver": "Anna Nowak", "pesel": PESEL, "offense": PARKING,
                "fine": "", "penaltyPoints": "1", "serviceNumber": OFFICER
            }}))
            .await;
        assert_eq!(rejected["payload"]["success"], false);
        assert_eq!(rejected["payload"]["error"], "incompleteInput");
        assert_eq!(rejected["payload"]["message"], "Fields must not be empty");

        handle.shutdown().await;
    }
}
