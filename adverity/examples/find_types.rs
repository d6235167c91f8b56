//! Look up catalog type ids by search term.
//!
//! Reads `ADVERITY_INSTANCE_URL` and `ADVERITY_AUTH_TOKEN`, e.g.
//! `cargo run --example find_types -- google`

use adverity::{Client, ClientConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let search = std::env::args().nth(1).unwrap_or_default();
    let config = ClientConfig::from_env()?;
    info!("Config: {:?}", config);

    let client = Client::with_config(config)?;

    for connection_type in client.query_all_connection_types(&search).await? {
        info!(
            "connection type {}: {} ({})",
            connection_type.id, connection_type.name, connection_type.slug
        );
    }
    for datastream_type in client.query_all_datastream_types(&search).await? {
        info!(
            "datastream type {}: {} ({})",
            datastream_type.id, datastream_type.name, datastream_type.slug
        );
    }
    for destination_type in client.query_all_destination_types(&search).await? {
        info!(
            "destination type {}: {} ({})",
            destination_type.id, destination_type.name, destination_type.slug
        );
    }

    Ok(())
}
