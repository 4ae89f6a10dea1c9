//! Basic messaging calls on an agent connection

use serde_json::{json, Value};
use tracing::debug;

use crate::constants::{paths, targets::MESSAGING};
use crate::errors::AdminError;
use crate::http::{AdminClient, AdminResponse};

pub struct MessagingController {
    admin: AdminClient,
}

impl MessagingController {
    pub fn new(admin: AdminClient) -> Self {
        Self { admin }
    }

    pub fn admin(&self) -> &AdminClient {
        &self.admin
    }

    /// Handler for messages delivered to the controller
    pub fn default_handler(&self, payload: &Value) {
        debug!(target: MESSAGING, "Message received: {}", payload);
    }

    pub async fn send_message(&self, connection_id: &str, msg: &str) -> Result<AdminResponse, AdminError> {
        self.admin
            .post(&paths::send_message(connection_id), Some(&json!({"content": msg})), false, None)
            .await
    }

    pub async fn trust_ping(&self, connection_id: &str, msg: &str) -> Result<AdminResponse, AdminError> {
        self.admin
            .post(&paths::send_ping(connection_id), Some(&json!({"content": msg})), false, None)
            .await
    }
}
