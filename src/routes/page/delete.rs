use crate::blog::PostID;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;

// deleting a post that doesn't exist still lands back on the index
pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Redirect, StatusCode> {
    match state.store.delete(post_id).await {
        Ok(true) => tracing::info!(id = post_id, "deleted post"),
        Ok(false) => tracing::debug!(id = post_id, "no post to delete"),
        Err(err) => {
            tracing::error!("Error deleting post {post_id}: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    Ok(Redirect::to("/"))
}
