//! Central repository for timeouts, display defaults and admin API paths

use std::time::Duration;

/// HTTP client constants
pub mod http {
    use super::Duration;

    /// Default timeout for admin API requests when the config does not set one
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Console output constants
pub mod display {
    /// Width the label prefix is padded to before the ` |` separator
    pub const PREFIX_WIDTH: usize = 10;

    /// `source` value that marks a line as error output
    pub const STDERR_SOURCE: &str = "stderr";

    /// Color used when the agent config does not set one
    pub const DEFAULT_COLOR: &str = "blue";

    /// Color used for error output
    pub const ERROR_COLOR: &str = "red";
}

/// Admin API paths used by the messaging controller
pub mod paths {
    pub fn send_message(connection_id: &str) -> String {
        format!("/connections/{}/send-message", connection_id)
    }

    pub fn send_ping(connection_id: &str) -> String {
        format!("/connections/{}/send-ping", connection_id)
    }
}

/// Tracing targets
pub mod targets {
    /// Request/response traffic with the agent
    pub const EVENT: &str = "event";

    /// Incoming messaging payloads
    pub const MESSAGING: &str = "messaging";
}
