use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::response::{AdminResponse, PrettyJson};
use crate::config::{AgentConfig, Config};
use crate::constants::http::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::constants::targets::EVENT;
use crate::errors::{AdminError, ControllerError};
use crate::output::Console;

/// Query parameters for an admin call. Entries without a value are dropped
/// before the request is sent.
pub type QueryParams = BTreeMap<String, Option<String>>;

/// Handle to one agent's admin API.
///
/// Cloning is cheap: clones share the underlying connection pool and console.
#[derive(Debug, Clone)]
pub struct AdminClient {
    admin_url: String,
    client: Client,
    console: Console,
}

impl AdminClient {
    pub fn new(admin_url: impl Into<String>, client: Client, console: Console) -> Self {
        Self {
            admin_url: admin_url.into(),
            client,
            console,
        }
    }

    /// Build a client for a configured agent, with its own connection pool
    /// using the configured request timeout.
    pub fn from_agent_config(
        agent: &AgentConfig,
        config: &Config,
        console: Console,
    ) -> Result<Self, ControllerError> {
        let timeout = config
            .request_timeout_seconds
            .map(std::time::Duration::from_secs)
            .unwrap_or(REQUEST_TIMEOUT);

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ControllerError::Other(format!("Failed to create HTTP client: {}", e)))?;

        let mut console = console
            .with_color_enabled(config.color_enabled)
            .with_prefix(agent.prefix.clone().unwrap_or_default());
        if let Some(color) = &agent.color {
            console = console.with_color(color)?;
        }

        Ok(Self::new(agent.admin_url.clone(), client, console))
    }

    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn log(&self, message: impl std::fmt::Display) {
        self.console.log(message);
    }

    /// Issue a single admin call and classify the result.
    ///
    /// `path` is appended to the admin URL as given. With `text` set the body
    /// is returned raw; otherwise an empty body yields `NoContent` and any
    /// other body must be valid JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        text: bool,
        params: Option<&QueryParams>,
    ) -> Result<AdminResponse, AdminError> {
        let url = format!("{}{}", self.admin_url, path);
        let query = filter_params(params);

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let transport = |source| AdminError::Transport {
            method: method.clone(),
            path: path.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdminError::HttpStatus {
                method: method.clone(),
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        // Consumes the response; the connection goes back to the pool here
        // whether or not decoding succeeds.
        let resp_text = response.text().await.map_err(transport)?;

        decode_body(path, resp_text, text)
    }

    pub async fn get(
        &self,
        path: &str,
        text: bool,
        params: Option<&QueryParams>,
    ) -> Result<AdminResponse, AdminError> {
        debug!(target: EVENT, "Controller GET {} request to Agent", path);

        let response = self
            .request(Method::GET, path, None, text, params)
            .await
            .map_err(|e| self.report_transport_error(e))?;

        debug!(target: EVENT, "Response from GET {} received: \n{}", path, response);
        Ok(response)
    }

    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        text: bool,
        params: Option<&QueryParams>,
    ) -> Result<AdminResponse, AdminError> {
        let data = match body {
            Some(body) if has_data(body) => format!(" with data: \n{}", PrettyJson(body)),
            _ => String::new(),
        };
        debug!(target: EVENT, "Controller POST {} request to Agent{}", path, data);

        let response = self
            .request(Method::POST, path, body, text, params)
            .await
            .map_err(|e| self.report_transport_error(e))?;

        debug!(target: EVENT, "Response from POST {} received: \n{}", path, response);
        Ok(response)
    }

    fn report_transport_error(&self, err: AdminError) -> AdminError {
        if let AdminError::Transport {
            method,
            path,
            source,
        } = &err
        {
            self.console
                .log(format!("Error during {} {}: {}", method, path, source));
        }
        err
    }
}

/// Query pairs with `None` values removed
pub fn filter_params(params: Option<&QueryParams>) -> Vec<(&str, &str)> {
    params
        .into_iter()
        .flatten()
        .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
        .collect()
}

/// Whether a request body is worth showing in the log: null, `false`, zero and
/// empty strings, arrays or objects are not.
fn has_data(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn decode_body(path: &str, body: String, text: bool) -> Result<AdminResponse, AdminError> {
    if text {
        return Ok(AdminResponse::Text(body));
    }
    if body.is_empty() {
        return Ok(AdminResponse::NoContent);
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(AdminResponse::Json(value)),
        Err(e) => Err(AdminError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
            text: body,
        }),
    }
}
