use crate::state::NestedRouter;
use axum::routing::get;

mod post;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/posts", get(post::list))
        .route("/posts/:id", get(post::get))
}
