//! slack-mcp - Slack MCP server over stdio.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slack_mcp::config::{BASE_URL_VAR, TOKEN_VAR};
use slack_mcp::options::SLACK_API_BASE;
use slack_mcp::{catalog, ClientOptions, Config, SlackMcpServer};

/// Slack MCP server
#[derive(Parser)]
#[command(name = "slack-mcp")]
#[command(about = "Model Context Protocol server for the Slack Web API")]
#[command(version)]
struct Args {
    /// Bot token used for every call. When unset, each call must carry one.
    #[arg(long, env = TOKEN_VAR, hide_env_values = true)]
    token: Option<String>,

    /// Web API base URL
    #[arg(long, env = BASE_URL_VAR, default_value = SLACK_API_BASE)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// HTTP proxy for Web API calls
    #[arg(long)]
    proxy: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        let mut options = ClientOptions::new().with_base_url(&self.base_url);
        if let Some(secs) = self.timeout_secs {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        if let Some(proxy) = &self.proxy {
            options = options.with_proxy(proxy);
        }

        let config = Config::new().with_client_options(options);
        match &self.token {
            Some(token) => config.with_bot_token(token),
            None => config,
        }
    }
}

// stdout carries the protocol, so logs go to stderr.
fn setup_logging(verbose: bool) {
    let level = if verbose { "slack_mcp=debug" } else { "slack_mcp=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.config();
    if !config.has_bot_token() {
        info!("no {TOKEN_VAR} configured, expecting a token with each call");
    }

    let server = SlackMcpServer::new(config);
    info!(tools = catalog::TOOLS.len(), "starting slack-mcp on stdio");

    let service = match server.serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            error!("failed to start MCP service: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = service.waiting().await {
        error!("MCP service stopped with error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
