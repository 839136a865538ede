use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::Password;
use tokio::{net::TcpListener, signal};
use tracing::info;
use weather_core::{
    Config, OpenWeatherProvider, WeatherRequest, fetch_summary, provider_from_config,
};
use weather_relay::{AppState, create_router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-relay", version, about = "OpenWeather relay server")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP relay.
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Look up one coordinate and print the summary as JSON.
    Show {
        lat: String,
        lon: String,

        /// OpenWeather API key; falls back to the configured one.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Store an OpenWeather API key for `show`.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let mut config = Config::load_from(&config_path)?;

        match self.command {
            Command::Serve { host, port } => {
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                serve(config).await
            },
            Command::Show { lat, lon, api_key } => {
                let api_key = api_key
                    .or_else(|| config.api_key().map(str::to_owned))
                    .ok_or_else(|| {
                        anyhow!(
                            "No API key given.\n\
                             Hint: pass `--api-key` or run `weather-relay configure` first."
                        )
                    })?;

                let provider = OpenWeatherProvider::with_base_url(config.openweather.base_url);
                let request = WeatherRequest::new(lat, lon, api_key);
                let summary = fetch_summary(&provider, &request).await?;

                let json = serde_json::to_string_pretty(&summary)
                    .context("Failed to serialize weather summary")?;
                println!("{json}");
                Ok(())
            },
            Command::Configure => {
                let api_key = Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(api_key.trim().to_string());
                config.save_to(&config_path)?;

                println!("Saved configuration to {}", config_path.display());
                Ok(())
            },
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(provider_from_config(&config))
        .with_error_details(config.server.expose_error_details);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, upstream = %config.openweather.base_url, "Weather relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
