use clap::Parser;

use devdesk_api::{config::Config, run_server, tracing_config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let config = Config::parse();

    tracing_config::configure()?;

    let server = run_server(config).await?;
    server.server.await?;

    Ok(())
}
