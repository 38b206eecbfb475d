use anyhow::Context;
use clap::Parser;

use shopfront::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let config = cli
        .load_config()
        .with_context(|| format!("loading {}", config_path.display()))?;

    let log_path = shopfront::logging::init_tracing(&config.logging, cli.log_level.as_deref())?;
    tracing::info!(
        config = %config_path.display(),
        log = ?log_path,
        layout = ?config.layout.mode,
        "starting shopfront"
    );

    shopfront::ui::run(&config).context("running catalog browser")?;
    Ok(())
}
