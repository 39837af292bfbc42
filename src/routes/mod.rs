use crate::state::State;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod page;

pub fn app(state: Arc<State>) -> axum::Router {
    axum::Router::new()
        .merge(page::route())
        .nest("/api", api::route())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
