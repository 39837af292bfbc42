use crate::blog::PostFields;
use crate::state::SharedState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::Form;

pub(super) async fn get() -> Html<String> {
    Html(crate::render::add_form())
}

pub(super) async fn post(
    State(state): SharedState,
    Form(fields): Form<PostFields>,
) -> Result<Redirect, StatusCode> {
    match state.store.create(fields).await {
        Ok(post) => tracing::info!(id = post.id, "added post"),
        Err(err) => {
            tracing::error!("Error adding post: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    Ok(Redirect::to("/"))
}
