use std::sync::Arc;

use placeshare::config::Config;
use placeshare::db::{MemoryStore, PgStore};
use placeshare::engine::{DynStore, Engine};
use placeshare::external::google_maps::GoogleMaps;
use placeshare::server::serve;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let store: DynStore = match &config.database {
        Some(database) => Arc::new(PgStore::new(&database.url, database.max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL is not set, places will only be kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let geocoder = Arc::new(GoogleMaps::new(
        &config.google_maps.api_base,
        config.google_maps.api_key,
    ));

    let engine = Engine::new(store, geocoder, config.place_image_url);

    serve(engine, config.listen_addr).await?;

    Ok(())
}
