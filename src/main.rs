use axum::ServiceExt;
use clap::Parser;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::EnvFilter;

mod blog;
mod config;
mod render;
mod routes;
mod state;
mod store;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jsonblog=info,tower_http=info")),
        )
        .init();

    let config = config::Config::parse();
    let store = store::PostStore::new(&config.store);
    tracing::info!("Keeping posts in {:?}", store.path());
    let state = std::sync::Arc::new(state::State::new(store));

    let app = NormalizePathLayer::trim_trailing_slash().layer(routes::app(state));

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .expect("should be able to bind listen address");
    tracing::info!("Serving blog on http://{}", config.socket_addr());

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .expect("Error serving app")
}
