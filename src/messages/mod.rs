mod index;
mod item;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(index::list_messages).post(index::create_message))
        .route(
            "/messages/{id}",
            get(item::get_message)
                .put(item::update_message)
                .delete(item::delete_message),
        )
}
