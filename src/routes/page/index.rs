use crate::state::SharedState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

pub(super) async fn get(State(state): SharedState) -> Result<Html<String>, StatusCode> {
    let posts = match state.store.list().await {
        Ok(it) => it,
        Err(err) => {
            tracing::error!("Error listing posts: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Html(crate::render::index(&posts)))
}
