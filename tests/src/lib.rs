//! # Ticket Desk Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs        # Servers on ephemeral ports, counting stores
//!     ├── issuance.rs        # In-process: auth, catalog, ticket service, handler
//!     ├── over_http.rs       # HTTP/JSON binding via reqwest
//!     ├── over_line.rs       # Line-delimited JSON over TcpStream
//!     └── client_session.rs  # Officer client against a live server
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tk-tests
//! cargo test -p tk-tests integration::over_http::
//! cargo bench -p tk-tests
//! ```

pub mod integration;
