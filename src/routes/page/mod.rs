use crate::state::NestedRouter;
use axum::routing::get;

mod add;
mod delete;
mod index;
mod like;
mod update;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(index::get))
        .route("/add", get(add::get).post(add::post))
        .route("/update/:id", get(update::get).post(update::post))
        .route("/delete/:id", get(delete::get))
        .route("/like/:id", get(like::get))
}
