use std::sync::Arc;

use axum::{debug_handler, extract::State};

use crate::{
    db::{Message, NewMessage},
    envelope::{Created, Data},
    extract::AppJson,
    store::MessageRepository,
    AppResult,
};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn list_messages(
    State(messages): State<Arc<dyn MessageRepository>>,
) -> AppResult<Data<Vec<Message>>> {
    Ok(Data::new(messages.find_all().await?))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn create_message(
    State(messages): State<Arc<dyn MessageRepository>>,
    AppJson(new): AppJson<NewMessage>,
) -> AppResult<Created<Message>> {
    let msg = messages.create(new).await?;
    tracing::info!(id = %msg.id, author = ?msg.author, "created message");

    Ok(Created(msg))
}
