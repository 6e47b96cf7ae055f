use anyhow::Result;
use clap::Parser;
use gcls_classroom::OauthConfig;
use std::path::PathBuf;

mod api;
mod config;

use config::{AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "gcls")]
#[command(about = "GCLS MCP - role-gated Google Classroom tool gateway", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "gcls.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// OAuth client ID
    #[arg(long, env = "GCLS_CLIENT_ID", hide_env_values = true)]
    client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, env = "GCLS_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// Long-lived access token minted by the one-time auth flow
    #[arg(long, env = "GCLS_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Refresh token minted by the one-time auth flow
    #[arg(long, env = "GCLS_REFRESH_TOKEN", hide_env_values = true)]
    refresh_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gcls=info,tower_http=debug".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = ServerConfig::load(&args.config)?;

    // Credentials are read once here and immutable for the process lifetime
    let oauth = OauthConfig {
        client_id: args.client_id.unwrap_or_default(),
        client_secret: args.client_secret.unwrap_or_default(),
        redirect_uri: format!("http://{}:{}/oauth2callback", args.host, args.port),
        access_token: args.access_token,
        refresh_token: args.refresh_token,
    };

    let state = AppState::new(&config, oauth)?;

    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("GCLS MCP server running at http://{}", addr);
    tracing::info!("One-time auth at http://{}/auth", addr);

    api::serve(&addr, state).await?;

    Ok(())
}
