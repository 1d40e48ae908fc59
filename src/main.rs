use base62_shortener::config::{self, Config};
use base62_shortener::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("Startup aborted: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Installs the global subscriber using `RUST_LOG` and `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
