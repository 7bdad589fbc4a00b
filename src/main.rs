use anyhow::Result;
use piles::{config::Config, logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
