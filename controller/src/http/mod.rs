//! HTTP communication with an agent's admin API
//!
//! Every call is a single request/response exchange:
//!
//! ```text
//! Controller → HTTP Request → Agent admin API
//!      ↓                          ↓
//!  AdminResponse ← decode ← status + body
//! ```
//!
//! Failures surface as [`AdminError`](crate::errors::AdminError): transport
//! problems (logged once on the console), non-2xx statuses, and bodies that
//! are not valid JSON when JSON was asked for. Nothing is retried.

pub mod admin_client;
pub mod response;

pub use admin_client::{filter_params, AdminClient, QueryParams};
pub use response::{AdminResponse, PrettyJson};
