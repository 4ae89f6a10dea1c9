//! Common test data and constants

use std::net::TcpListener;
use uuid::Uuid;

/// Generate a random connection ID for testing
pub fn random_connection_id() -> String {
    Uuid::new_v4().to_string()
}

/// Admin URL on a local port that was just released, so connections to it
/// are refused
pub fn unreachable_admin_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener.local_addr().expect("Probe port has no address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Common test agent names
pub mod agents {
    pub const ALICE: &str = "alice";
    pub const BOB: &str = "bob";
}

/// Common test connection IDs
pub mod connections {
    pub const CONN_1: &str = "conn-1";
    pub const CONN_2: &str = "conn-2";
}
