pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
pub mod messaging;
pub mod output;

// Re-export commonly used types
pub use config::{AgentConfig, Config, ConfigManager};
pub use errors::{AdminError, ConfigError, ControllerError};
pub use http::{AdminClient, AdminResponse, QueryParams};
pub use messaging::MessagingController;
pub use output::Console;
