use telemetry_console::app;
use telemetry_console::config::ConsoleCfg;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = ConsoleCfg::load(std::env::args().nth(1))?;
    cfg.validate()?;
    tracing::info!(api_base = %cfg.api.base_url, "telemetry console starting");

    app::run(cfg).map_err(|e| anyhow::anyhow!("{e}"))
}
