use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fmt;

/// Result of a successful admin API call
#[derive(Debug, Clone, PartialEq)]
pub enum AdminResponse {
    /// Body decoded as JSON
    Json(Value),
    /// Raw body, returned when text mode was requested
    Text(String),
    /// The call succeeded but the agent sent no body
    NoContent,
}

impl AdminResponse {
    pub fn is_no_content(&self) -> bool {
        matches!(self, AdminResponse::NoContent)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            AdminResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            AdminResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AdminResponse::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for AdminResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminResponse::Json(value) => write!(f, "{}", PrettyJson(value)),
            AdminResponse::Text(text) => f.write_str(text),
            AdminResponse::NoContent => f.write_str("null"),
        }
    }
}

/// Log rendering of a JSON value: strings print raw, everything else as JSON
/// indented by four spaces.
pub struct PrettyJson<'a>(pub &'a Value);

impl fmt::Display for PrettyJson<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Value::String(s) = self.0 {
            return f.write_str(s);
        }

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.0.serialize(&mut ser).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
