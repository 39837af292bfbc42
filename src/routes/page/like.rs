use crate::blog::PostID;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Redirect, StatusCode> {
    if let Err(err) = state.store.like(post_id).await {
        tracing::error!("Error liking post {post_id}: {err}");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    Ok(Redirect::to("/"))
}
