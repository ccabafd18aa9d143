use anyhow::Context;
use clap::Parser;
use cups_catalog::core::ConfigProvider;
use cups_catalog::utils::{logger, validation::Validate};
use cups_catalog::{adapters, server, AppState, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
        ),
        None => None,
    };

    // 初始化日誌
    match &toml {
        Some(toml) => logger::init_logger(cli.verbose, toml.log_level(), toml.json_logs() || cli.json_logs),
        None => logger::init_logger(cli.verbose, None, cli.json_logs),
    }

    tracing::info!("Starting cups-catalog {}", env!("CARGO_PKG_VERSION"));

    let config: Box<dyn ConfigProvider> = match toml {
        Some(toml) => {
            toml.validate().context("invalid configuration file")?;
            Box::new(toml)
        }
        None => {
            cli.validate().context("invalid command line configuration")?;
            Box::new(cli)
        }
    };

    let location = config.catalog_location();
    let source = adapters::source_for(&location, config.request_timeout())?;
    let state = AppState::new(source);

    if config.eager_load() {
        let records = state
            .loader
            .warm()
            .await
            .with_context(|| format!("loading catalog from {}", location))?;
        tracing::info!("📚 Catalog ready with {} records", records);
    } else {
        tracing::info!("Catalog {} will be loaded on first request", location);
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;
    tracing::info!("🚀 Listening on http://{}", address);

    server::serve(listener, state).await?;
    tracing::info!("Server stopped");
    Ok(())
}
