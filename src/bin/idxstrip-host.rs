//! idxstrip-host - long-running application host
//!
//! Loads [`HostConfig`] from the environment, reports it, and stays up until
//! interrupted. Database registration is disabled, so no connection is opened.
//! Shares nothing with the `idxstrip` rewriter.

#![deny(missing_docs, unsafe_code)]

use idxstrip::config::HostConfig;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HostConfig::from_env();
    info!(
        "Using connection from {}: {}",
        config.source,
        config.masked_connection_string()
    );

    println!("Application configured.");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, stopping host");
    Ok(())
}
