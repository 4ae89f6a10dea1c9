use super::{AgentConfigFile, Config};
use glob::glob;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::output::parse_color;

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self, ConfigError> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<Config, ConfigError> {
        let main_config_path = format!("{}/main.toml", config_dir);
        let main_config_content = fs::read_to_string(&main_config_path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: main_config_path.clone(),
                reason: e.to_string(),
            })?;

        let mut config: Config =
            toml::from_str(&main_config_content).map_err(|e| ConfigError::ParseError {
                path: main_config_path.clone(),
                reason: e.to_string(),
            })?;

        // Every other TOML file in the directory describes one agent
        let pattern = format!("{}/*.toml", config_dir);
        let mut agents = HashMap::new();

        let entries = glob(&pattern).map_err(|e| ConfigError::LoadFailed {
            path: pattern.clone(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            let path = entry.map_err(|e| ConfigError::LoadFailed {
                path: pattern.clone(),
                reason: e.to_string(),
            })?;
            let display_path = path.display().to_string();

            let agent_name = path
                .file_stem()
                .and_then(|name| name.to_str())
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: "filename".to_string(),
                    reason: format!("invalid agent config filename: {}", display_path),
                })?;

            // Skip main.toml as it's already loaded
            if agent_name == "main" {
                continue;
            }

            debug!("Loading agent config: {}", display_path);

            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| ConfigError::LoadFailed {
                    path: display_path.clone(),
                    reason: e.to_string(),
                })?;

            let agent_file: AgentConfigFile =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: display_path.clone(),
                    reason: e.to_string(),
                })?;

            let mut agent = agent_file.agent;
            validate_admin_url(agent_name, &agent.admin_url)?;
            agent.admin_url = agent.admin_url.trim_end_matches('/').to_string();

            if let Some(color) = &agent.color {
                if parse_color(color).is_none() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("{}.agent.color", agent_name),
                        reason: format!("unknown color '{}'", color),
                    });
                }
            }

            agents.insert(agent_name.to_string(), agent);
        }

        if let Some(default_agent) = &config.default_agent {
            if !agents.contains_key(default_agent) {
                return Err(ConfigError::InvalidValue {
                    field: "default_agent".to_string(),
                    reason: format!("no config file for agent '{}'", default_agent),
                });
            }
        }

        config.agents = agents;

        info!("Loaded {} agents from {}", config.agents.len(), config_dir);

        Ok(config)
    }
}

fn validate_admin_url(agent_name: &str, admin_url: &str) -> Result<(), ConfigError> {
    let field = format!("{}.agent.admin_url", agent_name);
    if admin_url.trim().is_empty() {
        return Err(ConfigError::MissingRequired { field });
    }
    if !(admin_url.starts_with("http://") || admin_url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{}' must start with http:// or https://", admin_url),
        });
    }
    Ok(())
}
