use anyhow::Result;
use ddnsgw::Config;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config = Arc::new(Config::try_from_env()?);
    let dns = config.dns_provider()?;
    if config.dry_run {
        tracing::warn!("dry-run mode: updates will be logged, not sent to the DNS provider");
    }

    tracing::info!("API listening on {}", &config.api_bind_addr);
    let api_server = ddnsgw::api::new(config, dns);
    let api_handle = tokio::spawn(api_server);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        Ok(api_res) = api_handle => {
            if let Err(err) = api_res {
                return Err(err.into())
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ddnsgw=info".into()),
        )
        .init();
}
