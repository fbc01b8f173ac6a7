use std::sync::Arc;

use microsite::{api, config, store::RecordStore, wordpress::WpClient};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config: config::Config =
        toml::from_str(&std::fs::read_to_string(std::env::args().nth(1).unwrap()).unwrap())
            .unwrap();

    tracing::debug!(?config, "loaded config");

    // Startup sanity check only; page content is fetched by the front end.
    match WpClient::new(config.content.api_base.clone()) {
        Ok(client) => {
            let categories = client.fetch_categories().await;
            tracing::info!(count = categories.len(), "content API categories visible");
        }
        Err(err) => tracing::warn!(%err, "content API base unusable"),
    }

    let state = api::AppState {
        store: Arc::new(RecordStore::new()),
    };

    let listener = tokio::net::TcpListener::bind(config.net.bind).await.unwrap();
    tracing::info!(addr = %config.net.bind, "listening");
    axum::serve(listener, api::router(state)).await.unwrap();
}
