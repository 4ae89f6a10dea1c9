pub mod manager;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
pub use manager::ConfigManager;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub request_timeout_seconds: Option<u64>,
    pub log_level: Option<String>,
    pub default_agent: Option<String>,
    #[serde(default = "default_color_enabled")]
    pub color_enabled: bool,
    // Populated from individual agent config files
    #[serde(skip)]
    pub agents: HashMap<String, AgentConfig>,
}

fn default_color_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfigFile {
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub admin_url: String,
    pub color: Option<String>,
    pub prefix: Option<String>,
}

impl Config {
    /// Resolve which agent to talk to: the named one, else `default_agent`,
    /// else the only configured agent.
    pub fn agent(&self, name: Option<&str>) -> Result<(&str, &AgentConfig), ConfigError> {
        let name = match name.or(self.default_agent.as_deref()) {
            Some(name) => name,
            None if self.agents.len() == 1 => self.agents.keys().next().map(String::as_str).unwrap_or_default(),
            None => {
                return Err(ConfigError::MissingRequired {
                    field: "default_agent".to_string(),
                })
            }
        };

        self.agents
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "agent".to_string(),
                reason: format!("agent '{}' is not configured", name),
            })
    }
}
