use crate::blog::{Post, PostID};
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// Same order as the index page, newest id first.
pub(super) async fn list(State(state): SharedState) -> Result<Json<Vec<Post>>, StatusCode> {
    match state.store.list().await {
        Ok(posts) => Ok(Json(posts)),
        Err(err) => {
            tracing::error!("Error listing posts: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Json<Post>, StatusCode> {
    match state.store.get(post_id).await {
        Ok(Some(post)) => Ok(Json(post)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            tracing::error!("Error loading post {post_id}: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
