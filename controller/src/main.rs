use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use controller::{AdminClient, ConfigManager, Console, MessagingController, QueryParams};

#[derive(Parser)]
#[command(name = "controller", about = "Issue calls against an agent's admin API")]
struct Cli {
    /// Directory holding main.toml and one <agent>.toml per agent
    #[arg(long, default_value = "config")]
    config: String,

    /// Agent to talk to; defaults to `default_agent` from main.toml
    #[arg(long)]
    agent: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a basic message over a connection
    SendMessage { connection_id: String, text: String },

    /// Send a trust ping over a connection
    Ping { connection_id: String, text: String },

    /// GET an arbitrary admin path
    Get {
        path: String,
        /// Return the body as raw text instead of decoding JSON
        #[arg(long)]
        text: bool,
        /// Query parameter as key=value; a bare key is dropped
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, Option<String>)>,
    },

    /// POST to an arbitrary admin path
    Post {
        path: String,
        /// JSON request body
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        text: bool,
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, Option<String>)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, Option<String>), String> {
    match raw.split_once('=') {
        Some(("", _)) => Err(format!("empty parameter name in '{}'", raw)),
        Some((key, value)) => Ok((key.to_string(), Some(value.to_string()))),
        None => Ok((raw.to_string(), None)),
    }
}

/// `log_level` from main.toml applies to the admin traffic and messaging
/// targets; everything else keeps fixed levels.
fn build_env_filter(level: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("controller=info".parse()?)
        .add_directive(format!("event={}", level).parse()?)
        .add_directive(format!("messaging={}", level).parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_manager = ConfigManager::new(cli.config.clone())
        .await
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;
    let config = config_manager.get_current_config();

    let env_filter = build_env_filter(config.log_level.as_deref().unwrap_or("info"))?;
    fmt().with_env_filter(env_filter).init();

    let (agent_name, agent_config) = config.agent(cli.agent.as_deref())?;
    let admin = AdminClient::from_agent_config(agent_config, &config, Console::stdout())?;
    info!("Using agent {} at {}", agent_name, admin.admin_url());

    let response = match cli.command {
        Command::SendMessage { connection_id, text } => {
            MessagingController::new(admin.clone())
                .send_message(&connection_id, &text)
                .await?
        }
        Command::Ping { connection_id, text } => {
            MessagingController::new(admin.clone())
                .trust_ping(&connection_id, &text)
                .await?
        }
        Command::Get { path, text, params } => {
            let params: QueryParams = params.into_iter().collect();
            admin.get(&path, text, Some(&params)).await?
        }
        Command::Post {
            path,
            data,
            text,
            params,
        } => {
            let body = data
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()
                .context("--data is not valid JSON")?;
            let params: QueryParams = params.into_iter().collect();
            admin.post(&path, body.as_ref(), text, Some(&params)).await?
        }
    };

    admin.log(response);

    Ok(())
}
