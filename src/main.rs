// src/main.rs
use anyhow::Context;
use assetto::cli::commands::{Cli, Command};
use assetto::infrastructure::logs::system_log_adapter;
use assetto::{setup, Settings};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    system_log_adapter::init(&settings.logging).context("Failed to initialize logging")?;

    match cli.command() {
        Command::Serve(args) => {
            args.apply(&mut settings);
            tracing::info!(address = %settings.server.address(), "starting assetto");
            setup::setup_and_run(settings).await?;
        }
        Command::Migrate => setup::migrate(&settings).await?,
    }

    Ok(())
}
