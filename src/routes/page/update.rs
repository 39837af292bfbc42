use crate::blog::{PostFields, PostID};
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Post not found").into_response()
}

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Response, StatusCode> {
    match state.store.get(post_id).await {
        Ok(Some(post)) => Ok(Html(crate::render::update_form(&post)).into_response()),
        Ok(None) => Ok(not_found()),
        Err(err) => {
            tracing::error!("Error loading post {post_id} to edit: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(super) async fn post(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
    Form(fields): Form<PostFields>,
) -> Result<Response, StatusCode> {
    match state.store.update(post_id, fields).await {
        Ok(Some(_)) => Ok(Redirect::to("/").into_response()),
        Ok(None) => Ok(not_found()),
        Err(err) => {
            tracing::error!("Error updating post {post_id}: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
